//! Transaction records: the immutable log of executed buys and sells.

use crate::side::Side;
use crate::types::{Money, Price, Quantity, Symbol, Timestamp};
use std::fmt;

/// One executed buy or sell.
///
/// Fields are read-only once created. `total` is computed from
/// `quantity * unit_price` at construction and stored as-is.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransactionRecord {
    side: Side,
    symbol: Symbol,
    quantity: Quantity,
    unit_price: Price,
    total: Money,
    timestamp: Timestamp,
}

impl TransactionRecord {
    /// Build a record, or `None` if the total overflows.
    pub(crate) fn new(
        side: Side,
        symbol: Symbol,
        quantity: Quantity,
        unit_price: Price,
        timestamp: Timestamp,
    ) -> Option<Self> {
        let total = unit_price.checked_total(quantity)?;
        Some(Self {
            side,
            symbol,
            quantity,
            unit_price,
            total,
            timestamp,
        })
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    #[inline]
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Price per share at execution.
    #[inline]
    pub fn unit_price(&self) -> Price {
        self.unit_price
    }

    /// Cost of a buy, proceeds of a sell.
    #[inline]
    pub fn total(&self) -> Money {
        self.total
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}

impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {}x {} @ {} (Total {})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.side,
            self.quantity,
            self.symbol,
            self.unit_price,
            self.total
        )
    }
}
