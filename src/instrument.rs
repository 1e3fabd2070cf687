//! A tradable stock entry.

use crate::error::RegistryError;
use crate::types::{Price, Symbol};

/// One listed stock: symbol, display name and current price.
///
/// The symbol and name never change after construction. The price is only
/// written by the [`PriceUpdater`](crate::PriceUpdater).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instrument {
    symbol: Symbol,
    name: String,
    price: Price,
}

impl Instrument {
    /// Create an instrument with a seed price.
    ///
    /// Fails if `symbol` is not a valid ticker or `price` is not positive.
    pub fn new(symbol: &str, name: impl Into<String>, price: Price) -> Result<Self, RegistryError> {
        let symbol =
            Symbol::parse(symbol).ok_or_else(|| RegistryError::InvalidSymbol(symbol.to_string()))?;
        if !price.is_positive() {
            return Err(RegistryError::NonPositivePrice(symbol));
        }
        Ok(Self {
            symbol,
            name: name.into(),
            price,
        })
    }

    #[inline]
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current price.
    #[inline]
    pub fn price(&self) -> Price {
        self.price
    }

    #[inline]
    pub(crate) fn set_price(&mut self, price: Price) {
        self.price = price;
    }
}
