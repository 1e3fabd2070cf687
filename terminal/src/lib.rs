// Allow our units.cents digit grouping convention (e.g., 3800_00 = 3800.00)
#![allow(clippy::inconsistent_digit_grouping)]

//! papertrade-terminal: menu-driven stock trading terminal.
//!
//! Reads menu choices from a line-based input, ticks the market once per
//! command, and prints market data, trade confirmations, the portfolio and
//! the transaction history.

pub mod app;
pub mod config;
pub mod error;
pub mod menu;
pub mod render;
