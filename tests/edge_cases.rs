// Allow our units.cents digit grouping convention (e.g., 3800_00 = 3800.00)
#![allow(clippy::inconsistent_digit_grouping)]

//! Edge-case tests: adversarial inputs to every public API.

use papertrade::{
    Instrument, Ledger, Money, Price, PriceUpdater, Registry, RegistryError, ScriptedDeltas,
    Session, Symbol, TradeError, valuation,
};

// ============================================================================
// Symbol input
// ============================================================================

#[test]
fn symbol_lookup_ignores_case_and_padding() {
    let mut ledger = Ledger::default();
    let registry = Registry::with_default_instruments();
    ledger.buy(&registry, " hdfc\n", 1).unwrap();
    ledger.sell(&registry, "Hdfc", 1).unwrap();
    assert_eq!(ledger.history().len(), 2);
}

#[test]
fn garbage_symbols_are_unknown() {
    let mut ledger = Ledger::default();
    let registry = Registry::with_default_instruments();
    for text in ["", "   ", "T C S", "VERYLONGSYMBOL", "₹TCS"] {
        let err = ledger.buy(&registry, text, 1).unwrap_err();
        assert!(matches!(err, TradeError::UnknownSymbol(_)), "{text:?}: {err:?}");
    }
    assert_eq!(ledger.cash(), Money(50_000_00));
}

// ============================================================================
// Quantity edge cases
// ============================================================================

#[test]
fn zero_quantity_rejected_everywhere() {
    let mut session = Session::with_defaults(ScriptedDeltas::flat());
    assert_eq!(session.buy("TCS", 0).unwrap_err(), TradeError::InvalidQuantity);
    assert_eq!(session.sell("TCS", 0).unwrap_err(), TradeError::InvalidQuantity);
    assert!(session.history().is_empty());
}

#[test]
fn huge_quantity_does_not_overflow() {
    let mut ledger = Ledger::default();
    let registry = Registry::with_default_instruments();
    let err = ledger.buy(&registry, "ITC", u64::MAX).unwrap_err();
    assert!(matches!(err, TradeError::InsufficientFunds { .. }));
    let err = ledger.buy(&registry, "ITC", i64::MAX as u64).unwrap_err();
    assert!(matches!(err, TradeError::InsufficientFunds { .. }));
}

// ============================================================================
// Cash edge cases
// ============================================================================

#[test]
fn zero_cash_ledger_cannot_buy() {
    let mut ledger = Ledger::new(Money::ZERO);
    let registry = Registry::with_default_instruments();
    assert!(ledger.buy(&registry, "ITC", 1).is_err());
    assert_eq!(valuation(&ledger, &registry).total, Money::ZERO);
}

#[test]
fn one_cent_short_is_rejected() {
    let registry = Registry::with_default_instruments();
    let mut ledger = Ledger::new(Money(480_00 - 1));
    assert!(ledger.buy(&registry, "ITC", 1).is_err());

    let mut ledger = Ledger::new(Money(480_00));
    assert!(ledger.buy(&registry, "ITC", 1).is_ok());
    assert_eq!(ledger.cash(), Money::ZERO);
}

// ============================================================================
// Price edge cases
// ============================================================================

#[test]
fn prices_pinned_at_floor_stay_tradeable() {
    let registry = Registry::new([Instrument::new("PENNY", "Penny Stock", Price(1_00)).unwrap()]);
    let mut registry = registry.unwrap();
    let mut updater = PriceUpdater::new(ScriptedDeltas::new([-0.05]));
    for _ in 0..50 {
        updater.tick(&mut registry);
    }
    assert_eq!(registry.find_by_symbol("penny").unwrap().price(), Price(1_00));

    let mut ledger = Ledger::new(Money(10_00));
    ledger.buy(&registry, "PENNY", 10).unwrap();
    assert_eq!(ledger.cash(), Money::ZERO);
}

#[test]
fn zero_volatility_freezes_prices() {
    let mut session = Session::new(
        Registry::with_default_instruments(),
        Money(50_000_00),
        PriceUpdater::with_bounds(ScriptedDeltas::new([0.05]), 0.0, Price(1_00)),
    );
    for _ in 0..10 {
        session.tick();
    }
    assert_eq!(session.registry().get(&Symbol::new("TCS")).unwrap().price(), Price(3800_00));
}

// ============================================================================
// Registry construction
// ============================================================================

#[test]
fn registry_construction_errors() {
    assert_eq!(Registry::new(Vec::new()).unwrap_err(), RegistryError::Empty);
    assert_eq!(
        Instrument::new("TCS", "Tata", Price(0)).unwrap_err(),
        RegistryError::NonPositivePrice(Symbol::new("TCS"))
    );
    assert!(matches!(
        Instrument::new("BAD SYM", "x", Price(1)),
        Err(RegistryError::InvalidSymbol(_))
    ));
}
