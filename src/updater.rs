//! Price updater: one bounded random move per instrument per tick.
//!
//! Each tick applies `new = price + price * delta` to every listed
//! instrument, with `delta` drawn from `[-volatility, volatility)`. The
//! result is rounded to the nearest cent and clamped to a floor price.
//!
//! Randomness comes from a [`DeltaSource`], so tests can script the exact
//! sequence of moves:
//!
//! ```
//! use papertrade::{Price, PriceUpdater, Registry, ScriptedDeltas};
//!
//! let mut registry = Registry::with_default_instruments();
//! let mut updater = PriceUpdater::new(ScriptedDeltas::new([0.05]));
//! updater.tick(&mut registry);
//!
//! // TCS seeded at 3800.00, moved up 5%
//! assert_eq!(registry.find_by_symbol("TCS").unwrap().price(), Price(3990_00));
//! ```

use crate::registry::Registry;
use crate::types::Price;
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Largest fractional move per tick (5%).
pub const DEFAULT_VOLATILITY: f64 = 0.05;

/// Prices never fall below 1.00.
pub const DEFAULT_FLOOR: Price = Price(1_00);

/// Supplies the fractional price move for each instrument on each tick.
pub trait DeltaSource {
    /// Next move, at most `bound` in magnitude. `bound` is never negative.
    fn next_delta(&mut self, bound: f64) -> f64;
}

/// Uniform random moves from a [`rand::Rng`], in `[-bound, bound)`.
#[derive(Clone, Debug)]
pub struct RandomDeltas<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomDeltas<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomDeltas<StdRng> {
    /// Seeded from OS entropy: a different market every run.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Reproducible sequence of moves for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> DeltaSource for RandomDeltas<R> {
    fn next_delta(&mut self, bound: f64) -> f64 {
        if bound <= 0.0 {
            return 0.0;
        }
        self.rng.gen_range(-bound..bound)
    }
}

/// Replays a fixed list of moves, cycling when exhausted.
///
/// Moves outside the updater's bound are clamped into the closed range
/// `[-bound, bound]`, so a script can hit `+bound` exactly where a random
/// source stops just short of it. An empty script always yields zero.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDeltas {
    deltas: Vec<f64>,
    next: usize,
}

impl ScriptedDeltas {
    pub fn new(deltas: impl IntoIterator<Item = f64>) -> Self {
        Self {
            deltas: deltas.into_iter().collect(),
            next: 0,
        }
    }

    /// A script of zero moves: prices never change.
    pub fn flat() -> Self {
        Self::default()
    }
}

impl DeltaSource for ScriptedDeltas {
    fn next_delta(&mut self, bound: f64) -> f64 {
        if self.deltas.is_empty() {
            return 0.0;
        }
        let delta = self.deltas[self.next % self.deltas.len()];
        self.next = self.next.wrapping_add(1);
        delta.clamp(-bound, bound)
    }
}

/// Applies one random move to every instrument on each tick.
#[derive(Clone, Debug)]
pub struct PriceUpdater<S> {
    source: S,
    volatility: f64,
    floor: Price,
    ticks: u64,
}

impl<S: DeltaSource> PriceUpdater<S> {
    /// Updater with a 5% bound and a 1.00 floor.
    pub fn new(source: S) -> Self {
        Self::with_bounds(source, DEFAULT_VOLATILITY, DEFAULT_FLOOR)
    }

    /// Updater with custom bounds.
    ///
    /// # Panics
    ///
    /// Panics unless `0 <= volatility < 1` and `floor` is positive.
    pub fn with_bounds(source: S, volatility: f64, floor: Price) -> Self {
        assert!(
            (0.0..1.0).contains(&volatility),
            "volatility must be in [0, 1), got {volatility}"
        );
        assert!(floor.is_positive(), "floor price must be positive, got {floor}");
        Self {
            source,
            volatility,
            floor,
            ticks: 0,
        }
    }

    /// Move every instrument's price once.
    pub fn tick(&mut self, registry: &mut Registry) {
        for inst in registry.instruments_mut() {
            let old = inst.price();
            let delta = self.source.next_delta(self.volatility);
            let new = self.apply(old, delta);
            trace!("{}: {old} -> {new} ({:+.4})", inst.symbol(), delta);
            inst.set_price(new);
        }
        self.ticks += 1;
        debug!("tick {} moved {} instruments", self.ticks, registry.len());
    }

    /// `price + price * delta`, rounded to the cent and floored.
    fn apply(&self, price: Price, delta: f64) -> Price {
        let cents = price.0 as f64;
        // `as` saturates, so an absurd move cannot wrap around.
        let moved = (cents + cents * delta).round() as i64;
        Price(moved.max(self.floor.0))
    }

    /// Number of ticks applied so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    pub fn floor(&self) -> Price {
        self.floor
    }
}
