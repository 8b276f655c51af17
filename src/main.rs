use anyhow::Result;
use clap::Parser;

use spendlog::cli::{handle_ledger_command, LedgerCommands};
use spendlog::config::{paths::SpendlogPaths, settings::Settings};
use spendlog::storage::LedgerStore;

#[derive(Parser)]
#[command(
    name = "spendlog",
    version,
    about = "Terminal-based flat-file expense ledger",
    long_about = "spendlog is a small expense tracker backed by one plain text \
                  file. It records date, category, and amount per line and \
                  supports listing, filtering, statistics, removal, and \
                  category enumeration over that file."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<LedgerCommands>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = SpendlogPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // The store owns the backing ledger file for the duration of each call
    let store = LedgerStore::new(paths.ledger_file());

    match cli.command {
        Some(cmd) => {
            handle_ledger_command(&store, &paths, &settings, cmd)?;
        }
        None => {
            println!("spendlog - Terminal-based flat-file expense ledger");
            println!();
            println!("Run 'spendlog --help' for usage information.");
            println!("Run 'spendlog add <category> <amount>' to record an expense.");
        }
    }

    Ok(())
}
