//! spendlog - Terminal-based flat-file expense ledger
//!
//! This library provides the core functionality for the spendlog expense
//! tracker: a persistent, append-biased record store over one delimited
//! text file, with filtered retrieval, aggregate statistics, conditional
//! deletion, and distinct-category enumeration.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: The expense record and its line codec
//! - `storage`: Flat-file ledger storage layer
//! - `display`: Terminal output formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use spendlog::config::paths::SpendlogPaths;
//! use spendlog::storage::LedgerStore;
//!
//! let paths = SpendlogPaths::new()?;
//! let store = LedgerStore::new(paths.ledger_file());
//! store.append("Food", 12.50, None)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod storage;

pub use error::LedgerError;
