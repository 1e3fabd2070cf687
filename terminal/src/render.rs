//! Text rendering of menus, market data, portfolio and history.

use std::io::{self, Write};

use papertrade::{History, Instrument, Money, Side, TradeError, TransactionRecord, Valuation};

use crate::menu::MenuChoice;

/// Main menu followed by the selection prompt (no newline).
pub fn menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "===== STOCK TRADING PLATFORM =====")?;
    for choice in MenuChoice::ALL {
        writeln!(out, "{choice}")?;
    }
    prompt(out, "Choose an option: ")
}

/// Print `text` without a newline and flush so it shows before input.
pub fn prompt<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    write!(out, "{text}")?;
    out.flush()
}

pub fn market<W: Write>(out: &mut W, instruments: &[Instrument], currency: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "===== MARKET DATA =====")?;
    for inst in instruments {
        writeln!(
            out,
            "{} ({}) : {currency}{}",
            inst.symbol(),
            inst.name(),
            inst.price()
        )?;
    }
    Ok(())
}

pub fn portfolio<W: Write>(
    out: &mut W,
    valuation: &Valuation,
    starting_cash: Money,
    currency: &str,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "===== YOUR PORTFOLIO =====")?;
    if valuation.is_all_cash() {
        writeln!(out, "No holdings.")?;
    }
    for line in &valuation.lines {
        writeln!(
            out,
            "{} - {} shares @ {currency}{} = {currency}{}",
            line.symbol, line.quantity, line.price, line.value
        )?;
    }
    writeln!(out, "Balance: {currency}{}", valuation.cash)?;
    writeln!(out, "Total Portfolio Value: {currency}{}", valuation.total)?;

    let pnl = valuation.profit_loss(starting_cash);
    let sign = if pnl.is_negative() { "-" } else { "+" };
    let magnitude = Money(pnl.0.saturating_abs());
    writeln!(out, "Profit/Loss: {sign}{currency}{magnitude}")
}

pub fn history<W: Write>(out: &mut W, history: History<'_>, currency: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "===== TRANSACTION HISTORY =====")?;
    if history.is_empty() {
        return writeln!(out, "No transactions yet.");
    }
    for record in history {
        writeln!(out, "{}", transaction_line(record, currency))?;
    }
    Ok(())
}

/// `[2026-10-16 09:30:00 UTC] BUY 5x TCS @ ₹3800.00 (Total ₹19000.00)`
pub fn transaction_line(record: &TransactionRecord, currency: &str) -> String {
    format!(
        "[{}] {} {}x {} @ {currency}{} (Total {currency}{})",
        record.timestamp().format("%Y-%m-%d %H:%M:%S UTC"),
        record.side(),
        record.quantity(),
        record.symbol(),
        record.unit_price(),
        record.total()
    )
}

/// Confirmation for an executed trade.
pub fn confirmation(record: &TransactionRecord, currency: &str) -> String {
    format!(
        "{} {} shares of {} @ {currency}{} (Total {currency}{})",
        record.side().past_tense(),
        record.quantity(),
        record.symbol(),
        record.unit_price(),
        record.total()
    )
}

/// User-facing message for a rejected trade.
pub fn rejection(side: Side, err: &TradeError, currency: &str) -> String {
    match err {
        TradeError::UnknownSymbol(_) => "Invalid symbol!".to_string(),
        TradeError::InvalidQuantity => "Quantity must be greater than zero.".to_string(),
        TradeError::InsufficientFunds {
            symbol,
            required,
            available,
        } => format!(
            "Not enough balance to buy {symbol} (need {currency}{required}, have {currency}{available})"
        ),
        TradeError::InsufficientShares {
            symbol,
            requested,
            held,
        } => format!(
            "You don't have enough shares to sell {symbol} (requested {requested}, held {held})"
        ),
        TradeError::AmountOverflow => format!("Cannot {}: {err}", side.to_string().to_lowercase()),
    }
}
