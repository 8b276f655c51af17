//! The ledger store: scan-based queries over one delimited text file
//!
//! All operations are synchronous and open the backing file only for the
//! duration of a single call. There is no cache between calls; the file is
//! the sole source of truth. Concurrent writers are not serialized and can
//! corrupt the file (lost updates, interleaved partial lines) - this store
//! supports exactly one process at a time.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{category_field, Record};

use super::file_io::{append_line, scan_lines, write_lines_atomic, ScanLines};

/// Result of a category filter: matching raw lines in insertion order,
/// plus the number of malformed lines skipped along the way
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredRecords {
    pub lines: Vec<String>,
    pub skipped: usize,
}

/// Aggregate statistics over every well-formed record
///
/// `average` is defined as zero when `count` is zero. Malformed records are
/// skipped and counted, never silently absorbed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerStats {
    pub total: f64,
    pub average: f64,
    pub count: usize,
    pub skipped: usize,
}

/// Distinct category values, lower-cased and deduplicated
///
/// The underlying representation is a set; callers must not depend on
/// ordering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorySet {
    pub categories: HashSet<String>,
    pub skipped: usize,
}

/// Durable, line-oriented record storage with scan-based query support
///
/// The store's identity is the backing file path. A missing file is an empty
/// ledger for every read operation and is lazily created on the first
/// append.
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    /// Create a ledger store over the given backing file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Get the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a new expense record, creating the backing file if absent
    ///
    /// The date defaults to the current local calendar date when omitted.
    /// This never reads or rewrites existing content, so its cost is
    /// independent of ledger size.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for an empty category or a non-finite/negative
    /// amount, and `StorageUnavailable` if the file cannot be opened for
    /// writing.
    pub fn append(
        &self,
        category: &str,
        amount: f64,
        date: Option<NaiveDate>,
    ) -> LedgerResult<Record> {
        let category = category.trim();
        if category.is_empty() {
            return Err(LedgerError::Validation("category must not be empty".into()));
        }
        if !amount.is_finite() || amount < 0.0 {
            return Err(LedgerError::Validation(format!(
                "amount must be a non-negative number, got {}",
                amount
            )));
        }

        let date = date.unwrap_or_else(|| Local::now().date_naive());
        let record = Record::new(date, category, amount);

        append_line(&self.path, &record.to_line())?;
        Ok(record)
    }

    /// Lazily scan raw lines in file order
    ///
    /// The scan is restartable (call again to start over) and finite. A
    /// missing file yields an empty scan, not an error.
    pub fn scan(&self) -> LedgerResult<ScanLines> {
        scan_lines(&self.path)
    }

    /// Collect every raw line in insertion order
    pub fn view_all(&self) -> LedgerResult<Vec<String>> {
        self.scan()?.collect()
    }

    /// Find records whose category field matches, case-insensitively
    ///
    /// Matching is exact (not substring) against the category field.
    /// Lines that don't split into at least two fields are skipped and
    /// counted rather than aborting the scan.
    pub fn filter_by_category(&self, category: &str) -> LedgerResult<FilteredRecords> {
        let query = category.to_lowercase();
        let mut result = FilteredRecords::default();

        for line in self.scan()? {
            let line = line?;
            match category_field(&line) {
                Some(field) if field.to_lowercase() == query => result.lines.push(line),
                Some(_) => {}
                None => result.skipped += 1,
            }
        }

        Ok(result)
    }

    /// Compute total, average, and count over every well-formed record
    ///
    /// Malformed records (bad field count, non-numeric or negative amount)
    /// are skipped and counted; one bad line never fails the whole
    /// operation. An empty ledger yields `(0, 0, 0)`.
    pub fn compute_stats(&self) -> LedgerResult<LedgerStats> {
        let mut stats = LedgerStats::default();

        for line in self.scan()? {
            let line = line?;
            match Record::parse(&line) {
                Ok(record) => {
                    stats.total += record.amount;
                    stats.count += 1;
                }
                Err(LedgerError::MalformedRecord(_)) => stats.skipped += 1,
                Err(e) => return Err(e),
            }
        }

        if stats.count > 0 {
            stats.average = stats.total / stats.count as f64;
        }

        Ok(stats)
    }

    /// Remove every line starting with `date` that contains `category`
    /// anywhere in the line, rewriting the backing file atomically
    ///
    /// The category match is deliberately loose containment (case-sensitive,
    /// anywhere in the line, including inside the date or amount fields),
    /// preserving the store's original removal semantics. Returns the number
    /// of lines removed; zero is a legitimate "nothing matched" outcome.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the ledger file doesn't exist at all.
    pub fn remove_matching(&self, date: &str, category: &str) -> LedgerResult<usize> {
        if !self.path.exists() {
            return Err(LedgerError::ledger_not_found(self.path.display().to_string()));
        }

        let lines: Vec<String> = self.scan()?.collect::<Result<_, _>>()?;
        let retained: Vec<String> = lines
            .iter()
            .filter(|line| !(line.starts_with(date) && line.contains(category)))
            .cloned()
            .collect();

        let removed = lines.len() - retained.len();
        write_lines_atomic(&self.path, &retained)?;

        Ok(removed)
    }

    /// Enumerate the distinct category values across all records
    ///
    /// Categories are lower-cased for comparison and output; duplicates
    /// collapse. Lines without a category field are skipped and counted.
    pub fn list_categories(&self) -> LedgerResult<CategorySet> {
        let mut result = CategorySet::default();

        for line in self.scan()? {
            let line = line?;
            match category_field(&line) {
                Some(field) => {
                    result.categories.insert(field.to_lowercase());
                }
                None => result.skipped += 1,
            }
        }

        Ok(result)
    }
}
