//! CLI entry point for the papertrade terminal.
//!
//! Usage:
//!   cargo run -p papertrade-terminal
//!   papertrade --seed 42 --balance 100000

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use papertrade_terminal::app::Terminal;
use papertrade_terminal::config::Config;

#[derive(Parser)]
#[command(name = "papertrade")]
#[command(about = "Simulated stock trading terminal with a virtual cash balance")]
#[command(version)]
struct Cli {
    /// Path to a config.toml (defaults apply when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed the price generator for a reproducible market
    #[arg(long)]
    seed: Option<u64>,

    /// Starting cash balance, in major units
    #[arg(long)]
    balance: Option<f64>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match Config::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config: {e}");
                process::exit(1);
            }
        },
        None => Config::default(),
    };
    let config = config.with_overrides(cli.seed, cli.balance);

    let session = match config.build_session() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut terminal = Terminal::new(
        session,
        stdin.lock(),
        stdout.lock(),
        config.account.currency.clone(),
    );

    if let Err(e) = terminal.run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
