//! The menu-driven command loop.
//!
//! Each iteration prints the menu, reads a choice, ticks every price, then
//! runs the chosen action. Trade and menu errors are printed and the loop
//! continues; only I/O failures end it early.

use std::io::{BufRead, Write};

use log::{info, warn};
use papertrade::{DeltaSource, Quantity, Session, Side};

use crate::error::Result;
use crate::menu::MenuChoice;
use crate::render;

/// Whether the loop should keep running after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// A trading session wired to a line-based input and a text output.
pub struct Terminal<R, W, S> {
    session: Session<S>,
    input: R,
    output: W,
    currency: String,
}

impl<R: BufRead, W: Write, S: DeltaSource> Terminal<R, W, S> {
    pub fn new(session: Session<S>, input: R, output: W, currency: impl Into<String>) -> Self {
        Self {
            session,
            input,
            output,
            currency: currency.into(),
        }
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        info!("terminal started with {} cash", self.session.ledger().cash());
        while self.step()? == Flow::Continue {}

        let valuation = self.session.valuation();
        info!(
            "session closed: {} transactions, final value {}",
            self.session.history().len(),
            valuation.total
        );
        Ok(())
    }

    /// One menu round trip.
    pub fn step(&mut self) -> Result<Flow> {
        render::menu(&mut self.output)?;
        let Some(line) = self.read_line()? else {
            writeln!(self.output)?;
            writeln!(self.output, "Exiting platform. Goodbye!")?;
            return Ok(Flow::Exit);
        };

        self.session.tick();

        match line.parse::<MenuChoice>() {
            Ok(MenuChoice::ViewMarket) => {
                render::market(&mut self.output, self.session.market(), &self.currency)?;
            }
            Ok(MenuChoice::Buy) => self.trade(Side::Buy)?,
            Ok(MenuChoice::Sell) => self.trade(Side::Sell)?,
            Ok(MenuChoice::ViewPortfolio) => {
                let valuation = self.session.valuation();
                let starting_cash = self.session.ledger().starting_cash();
                render::portfolio(&mut self.output, &valuation, starting_cash, &self.currency)?;
            }
            Ok(MenuChoice::ViewHistory) => {
                render::history(&mut self.output, self.session.history(), &self.currency)?;
            }
            Ok(MenuChoice::Exit) => {
                writeln!(self.output, "Exiting platform. Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Err(e) => {
                warn!("{e}");
                writeln!(self.output, "Invalid option. Try again!")?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Prompt for a symbol and quantity, then execute.
    fn trade(&mut self, side: Side) -> Result<()> {
        render::prompt(&mut self.output, &format!("Enter stock symbol to {side}: "))?;
        let Some(symbol) = self.read_line()? else {
            return Ok(());
        };
        if let Err(e) = self.session.registry().find_by_symbol(&symbol) {
            warn!("{side} rejected: {e}");
            writeln!(self.output, "Invalid symbol!")?;
            return Ok(());
        }

        render::prompt(&mut self.output, "Enter quantity: ")?;
        let Some(text) = self.read_line()? else {
            return Ok(());
        };
        let quantity: Quantity = match text.trim().parse() {
            Ok(q) => q,
            Err(_) => {
                warn!("{side} rejected: unparsable quantity {text:?}");
                writeln!(self.output, "Invalid quantity: '{}'", text.trim())?;
                return Ok(());
            }
        };

        let result = match side {
            Side::Buy => self.session.buy(&symbol, quantity),
            Side::Sell => self.session.sell(&symbol, quantity),
        };
        let message = match result {
            Ok(record) => render::confirmation(record, &self.currency),
            Err(e) => {
                warn!("{side} rejected: {e}");
                render::rejection(side, &e, &self.currency)
            }
        };
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Next input line without its line ending, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    /// Consume the terminal and hand back its output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}
