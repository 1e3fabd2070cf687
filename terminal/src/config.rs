//! TOML configuration loading and validation.

use std::path::Path;

use log::info;
use papertrade::{
    DEFAULT_INSTRUMENTS, Instrument, Money, Price, PriceUpdater, RandomDeltas, Registry, Session,
};
use serde::Deserialize;

use crate::error::{Error, Result};

/// Top-level configuration. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub account: AccountConfig,
    #[serde(default)]
    pub market: MarketConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountConfig {
    #[serde(default = "default_balance")]
    pub starting_balance: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_balance() -> f64 {
    50_000.0
}
fn default_currency() -> String {
    "₹".into()
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            starting_balance: default_balance(),
            currency: default_currency(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarketConfig {
    #[serde(default = "default_volatility")]
    pub volatility: f64,
    #[serde(default = "default_floor")]
    pub floor_price: f64,
    /// Fixed RNG seed for a reproducible market
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_instruments")]
    pub instruments: Vec<InstrumentConfig>,
}

fn default_volatility() -> f64 {
    papertrade::DEFAULT_VOLATILITY
}
fn default_floor() -> f64 {
    papertrade::DEFAULT_FLOOR.0 as f64 / 100.0
}
fn default_instruments() -> Vec<InstrumentConfig> {
    DEFAULT_INSTRUMENTS
        .iter()
        .map(|&(symbol, name, price)| InstrumentConfig {
            symbol: symbol.into(),
            name: name.into(),
            price: price.0 as f64 / 100.0,
        })
        .collect()
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            volatility: default_volatility(),
            floor_price: default_floor(),
            seed: None,
            instruments: default_instruments(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InstrumentConfig {
    pub symbol: String,
    pub name: String,
    /// Seed price in major units
    pub price: f64,
}

impl Config {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, seed: Option<u64>, balance: Option<f64>) -> Self {
        if seed.is_some() {
            self.market.seed = seed;
        }
        if let Some(balance) = balance {
            self.account.starting_balance = balance;
        }
        self
    }

    /// Validate config invariants.
    pub fn validate(&self) -> Result<()> {
        let balance = self.account.starting_balance;
        if !balance.is_finite() || balance < 0.0 {
            return Err(Error::Config("starting_balance must be >= 0".into()));
        }
        if !(0.0..1.0).contains(&self.market.volatility) {
            return Err(Error::Config("volatility must be in [0.0, 1.0)".into()));
        }
        if self.floor_price() <= Price::ZERO {
            return Err(Error::Config("floor_price must be at least 0.01".into()));
        }
        // Cent rounding swallows any move smaller than half a cent, so a
        // floor this low would freeze prices sitting at it.
        let volatility = self.market.volatility;
        if volatility > 0.0 && (self.floor_price().0 as f64) * volatility < 1.0 {
            return Err(Error::Config(format!(
                "floor_price {} is too low for volatility {volatility}: \
                 the largest move at the floor must be at least 0.01",
                self.floor_price()
            )));
        }
        for inst in &self.market.instruments {
            if !inst.price.is_finite() {
                return Err(Error::Config(format!("price for {} must be finite", inst.symbol)));
            }
        }
        self.build_registry()?;
        Ok(())
    }

    pub fn starting_cash(&self) -> Money {
        Money::from_major(self.account.starting_balance)
    }

    pub fn floor_price(&self) -> Price {
        Price::from_major(self.market.floor_price)
    }

    /// Build the market from the configured instruments.
    pub fn build_registry(&self) -> Result<Registry> {
        let instruments = self
            .market
            .instruments
            .iter()
            .map(|inst| Instrument::new(&inst.symbol, inst.name.clone(), Price::from_major(inst.price)))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Registry::new(instruments)?)
    }

    /// Validate, then assemble a session with a seeded or entropy-backed
    /// price source.
    pub fn build_session(&self) -> Result<Session<RandomDeltas>> {
        self.validate()?;
        let source = match self.market.seed {
            Some(seed) => RandomDeltas::seeded(seed),
            None => RandomDeltas::from_entropy(),
        };
        let updater = PriceUpdater::with_bounds(source, self.market.volatility, self.floor_price());
        let registry = self.build_registry()?;
        info!(
            "market of {} instruments, volatility {}, floor {}, seed {:?}",
            registry.len(),
            self.market.volatility,
            self.floor_price(),
            self.market.seed
        );
        Ok(Session::new(registry, self.starting_cash(), updater))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use papertrade::Symbol;

    fn example_toml() -> &'static str {
        r#"
[account]
starting_balance = 25000.0
currency = "$"

[market]
volatility = 0.02
floor_price = 0.5
seed = 42

[[market.instruments]]
symbol = "AAPL"
name = "Apple Inc."
price = 190.25

[[market.instruments]]
symbol = "msft"
name = "Microsoft"
price = 410.0
"#
    }

    #[test]
    fn parse_example_config() {
        let config: Config = toml::from_str(example_toml()).unwrap();
        assert_eq!(config.account.starting_balance, 25_000.0);
        assert_eq!(config.account.currency, "$");
        assert_eq!(config.market.volatility, 0.02);
        assert_eq!(config.market.seed, Some(42));
        assert_eq!(config.market.instruments.len(), 2);
        assert_eq!(config.starting_cash(), Money(25_000_00));
        assert_eq!(config.floor_price(), Price(50));
    }

    #[test]
    fn empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.starting_cash(), Money(50_000_00));
        assert_eq!(config.account.currency, "₹");
        assert_eq!(config.market.volatility, 0.05);
        assert_eq!(config.floor_price(), Price(1_00));
        assert_eq!(config.market.seed, None);
        assert_eq!(config.market.instruments, default_instruments());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn registry_from_config() {
        let config: Config = toml::from_str(example_toml()).unwrap();
        let registry = config.build_registry().unwrap();
        let msft = registry.get(&Symbol::new("MSFT")).unwrap();
        assert_eq!(msft.price(), Price(410_00));
        assert_eq!(registry.list_all()[0].name(), "Apple Inc.");
    }

    #[test]
    fn validate_catches_bad_volatility() {
        let mut config = Config::default();
        config.market.volatility = 1.0;
        assert!(config.validate().is_err());
        config.market.volatility = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_catches_bad_balance_and_floor() {
        let mut config = Config::default();
        config.account.starting_balance = -1.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.market.floor_price = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_floor_that_freezes_prices() {
        let mut config = Config::default();
        config.market.floor_price = 0.01;
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        config.market.floor_price = 0.10;
        assert!(config.validate().is_err());

        config.market.floor_price = 0.20;
        assert!(config.validate().is_ok());

        // A static market never moves, so any positive floor works.
        config.market.floor_price = 0.01;
        config.market.volatility = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_catches_duplicate_symbols() {
        let mut config = Config::default();
        config.market.instruments.push(InstrumentConfig {
            symbol: "tcs".into(),
            name: "Again".into(),
            price: 1.0,
        });
        assert!(matches!(config.validate(), Err(Error::Market(_))));
    }

    #[test]
    fn validate_catches_empty_market() {
        let mut config = Config::default();
        config.market.instruments.clear();
        assert!(matches!(config.validate(), Err(Error::Market(_))));
    }

    #[test]
    fn overrides_replace_values() {
        let config = Config::default().with_overrides(Some(9), Some(1_000.0));
        assert_eq!(config.market.seed, Some(9));
        assert_eq!(config.starting_cash(), Money(1_000_00));

        let config = config.with_overrides(None, None);
        assert_eq!(config.market.seed, Some(9));
    }

    #[test]
    fn seeded_sessions_are_reproducible() {
        let config = Config::default().with_overrides(Some(123), None);
        let mut a = config.build_session().unwrap();
        let mut b = config.build_session().unwrap();
        for _ in 0..5 {
            a.tick();
            b.tick();
        }
        let prices = |s: &Session<RandomDeltas>| s.market().iter().map(|i| i.price()).collect::<Vec<_>>();
        assert_eq!(prices(&a), prices(&b));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Config::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
    }
}
