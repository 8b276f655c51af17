//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger store.

pub mod ledger;

pub use ledger::{handle_ledger_command, LedgerCommands};
