//! Storage layer for spendlog
//!
//! Provides line-oriented flat-file storage with lazy scans, size-independent
//! appends, and atomic full-file rewrites. The ledger store is the only thing
//! callers talk to; swapping the backing medium later means reimplementing
//! this module, not its callers.

pub mod file_io;
pub mod ledger;

pub use file_io::{append_line, scan_lines, write_lines_atomic, ScanLines};
pub use ledger::{CategorySet, FilteredRecords, LedgerStats, LedgerStore};
