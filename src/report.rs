//! Reporting: portfolio valuation and transaction history views.
//!
//! These are read-only projections of a [`Ledger`] priced against a
//! [`Registry`]. Text rendering is left to the caller.

use crate::ledger::Ledger;
use crate::registry::Registry;
use crate::transaction::TransactionRecord;
use crate::types::{Money, Price, Quantity, Symbol};

/// One held instrument, priced at its current market price.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HoldingLine {
    pub symbol: Symbol,
    pub quantity: Quantity,
    pub price: Price,
    /// `quantity * price`
    pub value: Money,
}

/// A point-in-time valuation of the portfolio.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Valuation {
    /// Non-zero holdings, in registry listing order
    pub lines: Vec<HoldingLine>,
    /// Cash balance
    pub cash: Money,
    /// Cash plus the value of every line
    pub total: Money,
}

impl Valuation {
    /// Market value of all holdings, excluding cash. Saturates at
    /// [`Money::MAX`] like [`total`](Valuation::total).
    pub fn holdings_value(&self) -> Money {
        saturating_sum(self.lines.iter().map(|line| line.value))
    }

    /// Gain (positive) or loss (negative) against `starting_cash`.
    pub fn profit_loss(&self, starting_cash: Money) -> Money {
        self.total - starting_cash
    }

    /// True when nothing is held.
    pub fn is_all_cash(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Value the ledger's holdings at current registry prices.
///
/// Zero holdings are left out. Every held symbol was bought through the
/// registry and the registry never drops instruments, so a held symbol is
/// always listed.
pub fn valuation(ledger: &Ledger, registry: &Registry) -> Valuation {
    let mut lines: Vec<(usize, HoldingLine)> = ledger
        .holdings()
        .filter_map(|(symbol, quantity)| {
            let (Some(pos), Some(inst)) = (registry.index_of(&symbol), registry.get(&symbol)) else {
                debug_assert!(false, "held symbol {symbol} is not listed");
                return None;
            };
            let price = inst.price();
            // Saturate rather than wrap if a runaway price overflows.
            let value = price.checked_total(quantity).unwrap_or(Money::MAX);
            Some((
                pos,
                HoldingLine {
                    symbol,
                    quantity,
                    price,
                    value,
                },
            ))
        })
        .collect();
    lines.sort_unstable_by_key(|&(pos, _)| pos);

    let lines: Vec<HoldingLine> = lines.into_iter().map(|(_, line)| line).collect();
    let holdings_value = saturating_sum(lines.iter().map(|line| line.value));
    let cash = ledger.cash();

    Valuation {
        lines,
        cash,
        total: cash.checked_add(holdings_value).unwrap_or(Money::MAX),
    }
}

fn saturating_sum(values: impl Iterator<Item = Money>) -> Money {
    values.fold(Money::ZERO, |acc, value| acc.checked_add(value).unwrap_or(Money::MAX))
}

/// The ledger's transactions, oldest first.
#[derive(Clone, Copy, Debug)]
pub struct History<'a> {
    records: &'a [TransactionRecord],
}

impl<'a> History<'a> {
    pub fn records(&self) -> &'a [TransactionRecord] {
        self.records
    }

    /// "No transactions yet" is a normal state, not an error.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'a, TransactionRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for History<'a> {
    type Item = &'a TransactionRecord;
    type IntoIter = std::slice::Iter<'a, TransactionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Transaction history in insertion order, unmodified.
pub fn transaction_history(ledger: &Ledger) -> History<'_> {
    History {
        records: ledger.history(),
    }
}
