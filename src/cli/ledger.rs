//! Ledger CLI commands
//!
//! Implements the expense ledger subcommands, bridging clap argument
//! parsing with the ledger store and the display layer.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::{Settings, SpendlogPaths};
use crate::display::ledger::{
    format_added, format_categories, format_entry_list, format_filtered, format_removed,
    format_stats,
};
use crate::error::LedgerResult;
use crate::storage::LedgerStore;

/// Ledger subcommands
#[derive(Subcommand)]
pub enum LedgerCommands {
    /// Add a new expense
    Add {
        /// Expense category (e.g. "Food")
        category: String,
        /// Expense amount (non-negative)
        amount: f64,
        /// Expense date (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// List all recorded expenses in insertion order
    List,

    /// List expenses in one category (case-insensitive match)
    Filter {
        /// Category to filter by
        category: String,
    },

    /// Show total and average over all expenses
    Stats,

    /// Remove entries matching a date and category
    ///
    /// Matching is loose by design: an entry is removed when its line starts
    /// with the given date and contains the category text anywhere.
    Remove {
        /// Date the entries were recorded on (YYYY-MM-DD)
        date: String,
        /// Category text (case-sensitive)
        category: String,
    },

    /// List the distinct categories used so far
    Categories,

    /// Show current configuration and paths
    Config,
}

/// Handle a ledger command
pub fn handle_ledger_command(
    store: &LedgerStore,
    paths: &SpendlogPaths,
    settings: &Settings,
    cmd: LedgerCommands,
) -> LedgerResult<()> {
    match cmd {
        LedgerCommands::Add {
            category,
            amount,
            date,
        } => {
            let record = store.append(&category, amount, date)?;
            print!("{}", format_added(&record, &settings.currency_symbol));
        }

        LedgerCommands::List => {
            let lines = store.view_all()?;
            print!("{}", format_entry_list(&lines));
        }

        LedgerCommands::Filter { category } => {
            let result = store.filter_by_category(&category)?;
            print!("{}", format_filtered(&category, &result));
        }

        LedgerCommands::Stats => {
            let stats = store.compute_stats()?;
            print!("{}", format_stats(&stats, &settings.currency_symbol));
        }

        LedgerCommands::Remove { date, category } => {
            match store.remove_matching(&date, &category) {
                Ok(removed) => print!("{}", format_removed(removed, &date, &category)),
                Err(e) if e.is_not_found() => {
                    println!("No expense ledger exists yet; nothing to remove.");
                }
                Err(e) => return Err(e),
            }
        }

        LedgerCommands::Categories => {
            let result = store.list_categories()?;
            print!("{}", format_categories(&result));
        }

        LedgerCommands::Config => {
            println!("spendlog Configuration");
            println!("======================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Ledger file:      {}", store.path().display());
            println!();
            let source = if paths.is_initialized() {
                "from config.json"
            } else {
                "defaults"
            };
            println!("Settings ({}):", source);
            println!("  Currency symbol: {}", settings.currency_symbol);
        }
    }

    Ok(())
}
