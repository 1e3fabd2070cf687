//! Portfolio ledger: cash, holdings and transaction history.
//!
//! Buys and sells are validate-then-commit. Every check runs before any
//! field is written, so a rejected operation leaves the ledger untouched.

use crate::error::TradeError;
use crate::registry::Registry;
use crate::side::Side;
use crate::transaction::TransactionRecord;
use crate::types::{Money, Quantity, Symbol};
use chrono::Utc;
use log::{debug, warn};
use rustc_hash::FxHashMap;

/// Virtual cash a new session starts with: 50,000.00.
pub const STARTING_CASH: Money = Money(50_000_00);

/// Cash balance, per-symbol holdings and the ordered transaction history of
/// a single user.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ledger {
    cash: Money,
    starting_cash: Money,
    holdings: FxHashMap<Symbol, Quantity>,
    history: Vec<TransactionRecord>,
}

impl Ledger {
    /// Create a ledger with `starting_cash` and nothing held.
    ///
    /// Negative starting cash is clamped to zero so the balance can never
    /// start below zero.
    pub fn new(starting_cash: Money) -> Self {
        let starting_cash = if starting_cash.is_negative() {
            warn!("negative starting cash {starting_cash} clamped to zero");
            Money::ZERO
        } else {
            starting_cash
        };
        Self {
            cash: starting_cash,
            starting_cash,
            holdings: FxHashMap::default(),
            history: Vec::new(),
        }
    }

    // === Queries ===

    /// Current cash balance.
    #[inline]
    pub fn cash(&self) -> Money {
        self.cash
    }

    /// Cash the ledger was opened with.
    #[inline]
    pub fn starting_cash(&self) -> Money {
        self.starting_cash
    }

    /// Shares held of `symbol`; zero when never bought or fully sold.
    pub fn holding(&self, symbol: &Symbol) -> Quantity {
        self.holdings.get(symbol).copied().unwrap_or(0)
    }

    /// Iterator over non-zero holdings, in no particular order.
    pub fn holdings(&self) -> impl Iterator<Item = (Symbol, Quantity)> + '_ {
        self.holdings
            .iter()
            .filter(|&(_, &qty)| qty > 0)
            .map(|(&sym, &qty)| (sym, qty))
    }

    /// Executed transactions, oldest first.
    pub fn history(&self) -> &[TransactionRecord] {
        &self.history
    }

    // === Execution ===

    /// Buy `quantity` shares of `symbol` at its current price.
    ///
    /// Checks, in order: quantity is non-zero, the symbol is listed, the cost
    /// fits in the cash balance.
    pub fn buy(
        &mut self,
        registry: &Registry,
        symbol: &str,
        quantity: Quantity,
    ) -> Result<&TransactionRecord, TradeError> {
        if quantity == 0 {
            return Err(TradeError::InvalidQuantity);
        }
        let inst = registry.find_by_symbol(symbol)?;
        let price = inst.price();

        let record = TransactionRecord::new(Side::Buy, inst.symbol(), quantity, price, Utc::now())
            .filter(|rec| rec.total() <= self.cash)
            .ok_or_else(|| TradeError::InsufficientFunds {
                symbol: inst.symbol(),
                required: price.checked_total(quantity).unwrap_or(Money::MAX),
                available: self.cash,
            })?;

        // Commit
        self.cash = self.cash - record.total();
        *self.holdings.entry(record.symbol()).or_insert(0) += quantity;
        Ok(self.append(record))
    }

    /// Sell `quantity` shares of `symbol` at its current price.
    ///
    /// Checks, in order: quantity is non-zero, the symbol is listed, enough
    /// shares are held.
    pub fn sell(
        &mut self,
        registry: &Registry,
        symbol: &str,
        quantity: Quantity,
    ) -> Result<&TransactionRecord, TradeError> {
        if quantity == 0 {
            return Err(TradeError::InvalidQuantity);
        }
        let inst = registry.find_by_symbol(symbol)?;
        let held = self.holding(&inst.symbol());
        if quantity > held {
            return Err(TradeError::InsufficientShares {
                symbol: inst.symbol(),
                requested: quantity,
                held,
            });
        }

        let record =
            TransactionRecord::new(Side::Sell, inst.symbol(), quantity, inst.price(), Utc::now())
                .ok_or(TradeError::AmountOverflow)?;
        let cash = self
            .cash
            .checked_add(record.total())
            .ok_or(TradeError::AmountOverflow)?;

        // Commit
        self.cash = cash;
        self.holdings.insert(record.symbol(), held - quantity);
        Ok(self.append(record))
    }

    fn append(&mut self, record: TransactionRecord) -> &TransactionRecord {
        debug!(
            "{} {}x {} @ {} = {}, cash now {}",
            record.side(),
            record.quantity(),
            record.symbol(),
            record.unit_price(),
            record.total(),
            self.cash
        );
        let idx = self.history.len();
        self.history.push(record);
        &self.history[idx]
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(STARTING_CASH)
    }
}
