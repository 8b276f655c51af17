//! Display formatting for terminal output
//!
//! Pure string rendering over query results; no I/O happens here.

pub mod ledger;
