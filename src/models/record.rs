//! Expense record model and line codec
//!
//! A record is one `date,category,amount` line in the ledger file. The codec
//! validates field count and numeric well-formedness at the boundary so that
//! scans produce `MalformedRecord` deterministically instead of an
//! uncontrolled parse fault.

use chrono::NaiveDate;

use crate::error::LedgerError;

/// A single expense entry: one line in the ledger file
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Calendar date in ISO 8601 form (`YYYY-MM-DD`), no timezone.
    ///
    /// Kept as stored: the read path never re-validates dates, only the
    /// append path constructs them from a typed `NaiveDate`.
    pub date: String,
    /// Free-form category label, case-preserved
    pub category: String,
    /// Non-negative expense amount
    pub amount: f64,
}

impl Record {
    /// Create a record from typed append inputs
    pub fn new(date: NaiveDate, category: impl Into<String>, amount: f64) -> Self {
        Self {
            date: date.format("%Y-%m-%d").to_string(),
            category: category.into(),
            amount,
        }
    }

    /// Parse one stored line into a record
    ///
    /// A line must split into exactly three comma-separated fields and carry
    /// a finite, non-negative numeric amount. Anything else is a
    /// [`LedgerError::MalformedRecord`].
    pub fn parse(line: &str) -> Result<Self, LedgerError> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 3 {
            return Err(LedgerError::MalformedRecord(format!(
                "expected 3 fields, found {}: {:?}",
                fields.len(),
                line
            )));
        }

        let amount: f64 = fields[2].trim().parse().map_err(|_| {
            LedgerError::MalformedRecord(format!("amount is not numeric: {:?}", fields[2]))
        })?;

        if !amount.is_finite() || amount < 0.0 {
            return Err(LedgerError::MalformedRecord(format!(
                "amount must be finite and non-negative: {}",
                amount
            )));
        }

        Ok(Self {
            date: fields[0].trim().to_string(),
            category: fields[1].trim().to_string(),
            amount,
        })
    }

    /// Serialize the record back to its stored line form
    ///
    /// No precision is enforced on the amount. A category or date containing
    /// a comma corrupts the record boundary; the format has no quoting or
    /// escaping (documented limitation).
    pub fn to_line(&self) -> String {
        format!("{},{},{}", self.date, self.category, self.amount)
    }
}

/// Extract the category field from a raw line without full validation
///
/// Filter and distinct-category scans only need the second field; a line
/// that does not split into at least two comma-separated fields is the
/// malformed condition there. The returned field is trimmed.
pub fn category_field(line: &str) -> Option<&str> {
    line.split(',').nth(1).map(str::trim)
}
