//! Stock registry: the fixed, ordered list of tradable instruments.

use crate::error::{RegistryError, TradeError};
use crate::instrument::Instrument;
use crate::types::{Price, Symbol};
use rustc_hash::FxHashMap;

/// Seed instruments listed by [`Registry::with_default_instruments`].
pub const DEFAULT_INSTRUMENTS: [(&str, &str, Price); 5] = [
    ("TCS", "Tata Consultancy Services", Price(3800_00)),
    ("INFY", "Infosys", Price(1600_00)),
    ("RELI", "Reliance Industries", Price(2900_00)),
    ("HDFC", "HDFC Bank", Price(1650_00)),
    ("ITC", "ITC Ltd.", Price(480_00)),
];

/// The tradable instruments, in listing order, with a symbol index.
///
/// Instruments are fixed at construction: none are added or removed later,
/// only their prices move. Lookups are case-insensitive because symbols are
/// canonicalised to upper case.
///
/// ```
/// use papertrade::{Price, Registry};
///
/// let registry = Registry::with_default_instruments();
/// let tcs = registry.find_by_symbol("tcs").unwrap();
/// assert_eq!(tcs.price(), Price(3800_00));
/// assert!(registry.find_by_symbol("NOPE").is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Registry {
    instruments: Vec<Instrument>,
    index: FxHashMap<Symbol, usize>,
}

impl Registry {
    /// Build a registry from instruments in listing order.
    ///
    /// Rejects an empty list and duplicate symbols.
    pub fn new(instruments: impl IntoIterator<Item = Instrument>) -> Result<Self, RegistryError> {
        let instruments: Vec<Instrument> = instruments.into_iter().collect();
        if instruments.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut index = FxHashMap::default();
        index.reserve(instruments.len());
        for (pos, inst) in instruments.iter().enumerate() {
            if index.insert(inst.symbol(), pos).is_some() {
                return Err(RegistryError::DuplicateSymbol(inst.symbol()));
            }
        }

        Ok(Self { instruments, index })
    }

    /// The five seed stocks of the default market.
    pub fn with_default_instruments() -> Self {
        let instruments = DEFAULT_INSTRUMENTS
            .iter()
            .map(|&(symbol, name, price)| Instrument::new(symbol, name, price))
            .collect::<Result<Vec<_>, _>>()
            .and_then(|list| Self::new(list));
        match instruments {
            Ok(registry) => registry,
            Err(e) => unreachable!("default instruments are valid: {e}"),
        }
    }

    /// All instruments in listing order.
    pub fn list_all(&self) -> &[Instrument] {
        &self.instruments
    }

    /// Look up an instrument from user text, ignoring case.
    ///
    /// Text that cannot be a symbol at all is reported as unknown too.
    pub fn find_by_symbol(&self, symbol: &str) -> Result<&Instrument, TradeError> {
        let text = symbol.trim();
        Symbol::parse(text)
            .and_then(|sym| self.get(&sym))
            .ok_or_else(|| TradeError::UnknownSymbol(text.to_string()))
    }

    /// Look up an instrument by canonical symbol.
    pub fn get(&self, symbol: &Symbol) -> Option<&Instrument> {
        self.index.get(symbol).map(|&pos| &self.instruments[pos])
    }

    /// Listing position of a symbol.
    pub fn index_of(&self, symbol: &Symbol) -> Option<usize> {
        self.index.get(symbol).copied()
    }

    /// Iterator over all listed symbols, in listing order.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.instruments.iter().map(Instrument::symbol)
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    /// Always false for a constructed registry.
    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    /// Mutable access for price updates. Order and membership cannot change
    /// through a slice.
    pub(crate) fn instruments_mut(&mut self) -> &mut [Instrument] {
        &mut self.instruments
    }
}
