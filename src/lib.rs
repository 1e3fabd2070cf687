// Allow our units.cents digit grouping convention (e.g., 3800_00 = 3800.00)
#![allow(clippy::inconsistent_digit_grouping)]

//! # papertrade
//!
//! In-memory paper trading: a fixed market of stocks whose prices drift
//! randomly, and a single user's cash ledger that buys and sells against it.
//!
//! ## Features
//!
//! - **Stock registry**: ordered instruments with case-insensitive lookup
//! - **Price ticks**: bounded random moves with a floor, from an injectable source
//! - **Ledger**: validate-then-commit market buys and sells, append-only history
//! - **Reporting**: valuation at current prices and an ordered history view
//! - **Fixed-point money**: prices and balances are integer cents
//!
//! ## Quick Start
//!
//! ```
//! use papertrade::{Money, Registry, Ledger, TradeError, valuation};
//!
//! let registry = Registry::with_default_instruments();
//! let mut ledger = Ledger::default(); // 50,000.00 cash
//!
//! // TCS lists at 3800.00
//! let record = ledger.buy(&registry, "TCS", 5).unwrap();
//! assert_eq!(record.total(), Money(19_000_00));
//! assert_eq!(ledger.cash(), Money(31_000_00));
//!
//! // Rejected operations change nothing
//! let err = ledger.sell(&registry, "TCS", 10).unwrap_err();
//! assert!(matches!(err, TradeError::InsufficientShares { held: 5, .. }));
//!
//! let report = valuation(&ledger, &registry);
//! assert_eq!(report.total, Money(50_000_00));
//! ```
//!
//! ## Money Representation
//!
//! Prices and cash are stored as [`i64`] in the smallest unit:
//!
//! ```
//! use papertrade::{Money, Price};
//!
//! assert_eq!(format!("{}", Price(480_50)), "480.50");
//! assert_eq!(Price(3800_00).checked_total(5), Some(Money(19_000_00)));
//! ```
//!
//! ## Price Ticks
//!
//! ```
//! use papertrade::{Price, PriceUpdater, Registry, ScriptedDeltas};
//!
//! let mut registry = Registry::with_default_instruments();
//! let mut updater = PriceUpdater::new(ScriptedDeltas::new([-0.05]));
//! updater.tick(&mut registry);
//!
//! // ITC 480.00 moved down 5%
//! assert_eq!(registry.find_by_symbol("itc").unwrap().price(), Price(456_00));
//! ```
//!
//! Use [`RandomDeltas`] for a live market, seeded for a reproducible one.

mod error;
mod instrument;
mod ledger;
mod registry;
pub mod report;
mod session;
mod side;
mod transaction;
mod types;
pub mod updater;

// Re-export public API
pub use error::{RegistryError, TradeError};
pub use instrument::Instrument;
pub use ledger::{Ledger, STARTING_CASH};
pub use registry::{DEFAULT_INSTRUMENTS, Registry};
pub use report::{HoldingLine, History, Valuation, transaction_history, valuation};
pub use session::Session;
pub use side::Side;
pub use transaction::TransactionRecord;
pub use types::{Money, Price, Quantity, Symbol, Timestamp};
pub use updater::{DEFAULT_FLOOR, DEFAULT_VOLATILITY, DeltaSource, PriceUpdater, RandomDeltas, ScriptedDeltas};
