//! A trading session: the market, the user's ledger and the price updater,
//! owned together and driven one command at a time.

use crate::error::TradeError;
use crate::instrument::Instrument;
use crate::ledger::{Ledger, STARTING_CASH};
use crate::registry::Registry;
use crate::report::{self, History, Valuation};
use crate::transaction::TransactionRecord;
use crate::types::{Money, Quantity};
use crate::updater::{DeltaSource, PriceUpdater};

/// Owns all mutable state of one user's session.
///
/// The command loop calls [`tick`](Session::tick) once per command, then one
/// trading or reporting operation.
///
/// ```
/// use papertrade::{Money, ScriptedDeltas, Session};
///
/// let mut session = Session::with_defaults(ScriptedDeltas::flat());
/// session.tick();
/// session.buy("TCS", 5).unwrap();
///
/// assert_eq!(session.ledger().cash(), Money(31_000_00));
/// assert_eq!(session.valuation().total, Money(50_000_00));
/// ```
#[derive(Clone, Debug)]
pub struct Session<S> {
    registry: Registry,
    ledger: Ledger,
    updater: PriceUpdater<S>,
}

impl<S: DeltaSource> Session<S> {
    pub fn new(registry: Registry, starting_cash: Money, updater: PriceUpdater<S>) -> Self {
        Self {
            registry,
            ledger: Ledger::new(starting_cash),
            updater,
        }
    }

    /// The default market with 50,000.00 of cash and default price bounds.
    pub fn with_defaults(source: S) -> Self {
        Self::new(
            Registry::with_default_instruments(),
            STARTING_CASH,
            PriceUpdater::new(source),
        )
    }

    /// Move every price once.
    pub fn tick(&mut self) {
        self.updater.tick(&mut self.registry);
    }

    /// Listed instruments at current prices.
    pub fn market(&self) -> &[Instrument] {
        self.registry.list_all()
    }

    pub fn buy(&mut self, symbol: &str, quantity: Quantity) -> Result<&TransactionRecord, TradeError> {
        self.ledger.buy(&self.registry, symbol, quantity)
    }

    pub fn sell(&mut self, symbol: &str, quantity: Quantity) -> Result<&TransactionRecord, TradeError> {
        self.ledger.sell(&self.registry, symbol, quantity)
    }

    pub fn valuation(&self) -> Valuation {
        report::valuation(&self.ledger, &self.registry)
    }

    pub fn history(&self) -> History<'_> {
        report::transaction_history(&self.ledger)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn updater(&self) -> &PriceUpdater<S> {
        &self.updater
    }
}
