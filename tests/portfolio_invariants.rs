//! Portfolio scenarios: the worked TCS examples, valuation identity, history order.

#![allow(clippy::inconsistent_digit_grouping)]

use papertrade::{
    Instrument, Ledger, Money, Price, PriceUpdater, Registry, ScriptedDeltas, Session, Side,
    Symbol, TradeError, transaction_history, valuation,
};

fn tcs() -> Symbol {
    Symbol::new("TCS")
}

fn tcs_market(price: i64) -> Registry {
    Registry::new([Instrument::new("TCS", "Tata Consultancy Services", Price(price)).unwrap()])
        .unwrap()
}

// === Worked scenario ===

#[test]
fn tcs_round_trip_scenario() {
    let mut ledger = Ledger::default();

    // buy(TCS, 5) at 3800 from 50000
    let rec = ledger.buy(&tcs_market(3800_00), "TCS", 5).unwrap();
    assert_eq!(rec.total(), Money(19_000_00));
    assert_eq!(ledger.cash(), Money(31_000_00));
    assert_eq!(ledger.holding(&tcs()), 5);

    // buy(TCS, 100) costs 380000 with 31000 left
    let err = ledger.buy(&tcs_market(3800_00), "TCS", 100).unwrap_err();
    assert!(matches!(err, TradeError::InsufficientFunds { .. }));
    assert_eq!(ledger.cash(), Money(31_000_00));

    // sell(TCS, 10) with only 5 held
    let err = ledger.sell(&tcs_market(3800_00), "TCS", 10).unwrap_err();
    assert!(matches!(err, TradeError::InsufficientShares { requested: 10, held: 5, .. }));
    assert_eq!(ledger.holding(&tcs()), 5);

    // sell(TCS, 5) after the price rose to 4000
    let market = tcs_market(4000_00);
    let rec = ledger.sell(&market, "TCS", 5).unwrap();
    assert_eq!(rec.total(), Money(20_000_00));
    assert_eq!(ledger.holding(&tcs()), 0);
    assert_eq!(ledger.cash(), Money(51_000_00));

    let report = valuation(&ledger, &market);
    assert!(report.lines.is_empty());
    assert_eq!(report.total, Money(51_000_00));
    assert_eq!(report.profit_loss(ledger.starting_cash()), Money(1_000_00));
}

// === Valuation identity ===

#[test]
fn total_is_cash_plus_marked_holdings_across_ticks() {
    let mut session = Session::new(
        Registry::with_default_instruments(),
        Money(50_000_00),
        PriceUpdater::new(ScriptedDeltas::new([0.03, -0.02, 0.05, -0.05, 0.01, 0.0, -0.04])),
    );

    let script = [
        ("TCS", Side::Buy, 3),
        ("ITC", Side::Buy, 20),
        ("INFY", Side::Buy, 4),
        ("TCS", Side::Sell, 1),
        ("ITC", Side::Sell, 20),
        ("HDFC", Side::Buy, 2),
    ];

    for (symbol, side, qty) in script {
        session.tick();
        match side {
            Side::Buy => session.buy(symbol, qty).map(|_| ()).unwrap(),
            Side::Sell => session.sell(symbol, qty).map(|_| ()).unwrap(),
        }

        let report = session.valuation();
        let marked: Money = session
            .ledger()
            .holdings()
            .map(|(sym, qty)| {
                let price = session.registry().get(&sym).unwrap().price();
                price.checked_total(qty).unwrap()
            })
            .sum();
        assert_eq!(report.total, session.ledger().cash() + marked);
        assert_eq!(report.holdings_value(), marked);
    }
}

// === History ordering ===

#[test]
fn history_matches_operation_order() {
    let registry = Registry::with_default_instruments();
    let mut ledger = Ledger::default();

    let ops = [
        (Side::Buy, "RELI", 2),
        (Side::Buy, "HDFC", 3),
        (Side::Sell, "RELI", 1),
        (Side::Buy, "RELI", 4),
        (Side::Sell, "HDFC", 3),
    ];
    for (side, symbol, qty) in ops {
        let res = match side {
            Side::Buy => ledger.buy(&registry, symbol, qty),
            Side::Sell => ledger.sell(&registry, symbol, qty),
        };
        res.unwrap();
        // A rejected call in between must not show up
        assert!(ledger.sell(&registry, "ITC", 1).is_err());
    }

    let history = transaction_history(&ledger);
    assert_eq!(history.len(), ops.len());
    for (rec, (side, symbol, qty)) in history.iter().zip(ops) {
        let price = registry.get(&Symbol::new(symbol)).unwrap().price();
        assert_eq!(rec.side(), side);
        assert_eq!(rec.symbol(), Symbol::new(symbol));
        assert_eq!(rec.quantity(), qty);
        assert_eq!(rec.unit_price(), price);
        assert_eq!(rec.total(), price.checked_total(qty).unwrap());
    }

    let stamps: Vec<_> = history.iter().map(|r| r.timestamp()).collect();
    assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn records_keep_their_execution_price() {
    let mut session = Session::with_defaults(ScriptedDeltas::new([0.05]));
    session.buy("TCS", 1).unwrap();
    session.tick();
    session.tick();

    let rec = &session.history().records()[0];
    assert_eq!(rec.unit_price(), Price(3800_00));
    assert_eq!(rec.total(), Money(3800_00));
    assert_ne!(session.registry().get(&tcs()).unwrap().price(), Price(3800_00));
}
