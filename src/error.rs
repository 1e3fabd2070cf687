//! Errors for trading operations and registry construction.

use crate::types::{Money, Quantity, Symbol};

/// Why a buy or sell was rejected.
///
/// Every variant is raised before any state changes, so a rejected
/// operation leaves cash, holdings and history exactly as they were.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TradeError {
    /// No instrument is listed under this symbol.
    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),

    /// Quantity must be greater than zero.
    #[error("quantity must be greater than zero")]
    InvalidQuantity,

    /// The purchase costs more than the available cash.
    #[error("insufficient funds to buy {symbol}: need {required}, have {available}")]
    InsufficientFunds {
        symbol: Symbol,
        required: Money,
        available: Money,
    },

    /// The sale is larger than the current holding.
    #[error("insufficient shares of {symbol}: requested {requested}, held {held}")]
    InsufficientShares {
        symbol: Symbol,
        requested: Quantity,
        held: Quantity,
    },

    /// Proceeds or balance would overflow the cash representation.
    #[error("amount overflows the cash balance")]
    AmountOverflow,
}

/// Why a [`Registry`](crate::Registry) or [`Instrument`](crate::Instrument)
/// could not be built.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("registry must list at least one instrument")]
    Empty,

    #[error("duplicate symbol: {0}")]
    DuplicateSymbol(Symbol),

    #[error("invalid symbol {0:?}: expected 1-8 printable ASCII characters")]
    InvalidSymbol(String),

    #[error("price for {0} must be greater than zero")]
    NonPositivePrice(Symbol),
}
