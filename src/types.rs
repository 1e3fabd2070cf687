//! Core types: Price, Money, Quantity, Symbol, Timestamp

use std::fmt;
use std::ops::{Add, Sub};

/// Per-share price in the smallest currency unit (cents/paise).
///
/// `Price(380000)` represents 3800.00. Fixed-point keeps every buy, sell and
/// valuation exact; only the random tick touches floating point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Price(pub i64);

impl Price {
    pub const ZERO: Price = Price(0);

    /// Convert a price in major units (e.g. `3800.5`) to cents, rounding to
    /// the nearest cent.
    pub fn from_major(value: f64) -> Self {
        Price((value * 100.0).round() as i64)
    }

    /// Total for `quantity` shares at this price, or `None` on overflow.
    #[inline]
    pub fn checked_total(self, quantity: Quantity) -> Option<Money> {
        let qty = i64::try_from(quantity).ok()?;
        self.0.checked_mul(qty).map(Money)
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_cents(self.0, f)
    }
}

/// A cash amount in the smallest currency unit: balances, costs, proceeds
/// and valuations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Money(pub i64);

impl Money {
    pub const ZERO: Money = Money(0);
    pub const MAX: Money = Money(i64::MAX);

    /// Convert an amount in major units (e.g. `50000.0`) to cents.
    pub fn from_major(value: f64) -> Self {
        Money((value * 100.0).round() as i64)
    }

    #[inline]
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    #[inline]
    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.0.checked_sub(rhs.0).map(Money)
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }
}

/// Saturates at the `i64` bounds instead of wrapping.
impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

/// Saturates at the `i64` bounds instead of wrapping.
impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_cents(self.0, f)
    }
}

/// Writes `cents` as `units.cc`, honouring width/alignment flags.
fn fmt_cents(cents: i64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let text = format!("{sign}{}.{:02}", abs / 100, abs % 100);
    f.pad(&text)
}

/// Number of shares. Unsigned, so holdings can never go negative.
pub type Quantity = u64;

/// Wall-clock time a transaction was executed.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

const SYMBOL_CAPACITY: usize = 8;

/// Ticker symbol, stored inline in canonical upper case.
///
/// Parsing upper-cases the input, so `Symbol::parse("tcs")` and
/// `Symbol::parse("TCS")` compare equal. This is what makes registry lookups
/// case-insensitive.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Symbol {
    bytes: [u8; SYMBOL_CAPACITY],
    len: u8,
}

impl Symbol {
    /// Longest accepted symbol, in bytes.
    pub const MAX_LEN: usize = SYMBOL_CAPACITY;

    /// Parse a symbol: 1 to 8 printable ASCII characters, no whitespace.
    /// Lower-case letters are folded to upper case.
    pub fn parse(s: &str) -> Option<Self> {
        let raw = s.as_bytes();
        if raw.is_empty() || raw.len() > Self::MAX_LEN {
            return None;
        }
        if !raw.iter().all(u8::is_ascii_graphic) {
            return None;
        }
        let mut bytes = [0u8; Self::MAX_LEN];
        for (dst, src) in bytes.iter_mut().zip(raw) {
            *dst = src.to_ascii_uppercase();
        }
        Some(Self {
            bytes,
            len: raw.len() as u8,
        })
    }

    /// Like [`Symbol::parse`] for literals known to be valid.
    ///
    /// # Panics
    ///
    /// Panics if `s` is not a valid symbol.
    pub fn new(s: &str) -> Self {
        match Self::parse(s) {
            Some(symbol) => symbol,
            None => panic!("invalid symbol: {s:?}"),
        }
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII bytes are ever stored.
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap_or_default()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.as_str())
    }
}

impl TryFrom<String> for Symbol {
    type Error = crate::RegistryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Symbol::parse(&value).ok_or(crate::RegistryError::InvalidSymbol(value))
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> String {
        symbol.as_str().to_string()
    }
}
