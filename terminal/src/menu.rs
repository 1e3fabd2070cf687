//! Main menu choices.

use std::fmt;
use std::str::FromStr;

use crate::error::MenuError;

/// One entry of the main menu, selected by its number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewMarket,
    Buy,
    Sell,
    ViewPortfolio,
    ViewHistory,
    Exit,
}

impl MenuChoice {
    /// All entries, in menu order.
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::ViewMarket,
        MenuChoice::Buy,
        MenuChoice::Sell,
        MenuChoice::ViewPortfolio,
        MenuChoice::ViewHistory,
        MenuChoice::Exit,
    ];

    /// Menu number (1-6).
    pub fn number(self) -> u8 {
        match self {
            MenuChoice::ViewMarket => 1,
            MenuChoice::Buy => 2,
            MenuChoice::Sell => 3,
            MenuChoice::ViewPortfolio => 4,
            MenuChoice::ViewHistory => 5,
            MenuChoice::Exit => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::ViewMarket => "View Market Prices",
            MenuChoice::Buy => "Buy Stock",
            MenuChoice::Sell => "Sell Stock",
            MenuChoice::ViewPortfolio => "View Portfolio",
            MenuChoice::ViewHistory => "View Transaction History",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

impl FromStr for MenuChoice {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        text.parse::<u8>()
            .ok()
            .and_then(|n| MenuChoice::ALL.into_iter().find(|c| c.number() == n))
            .ok_or_else(|| MenuError::InvalidSelection(text.to_string()))
    }
}
