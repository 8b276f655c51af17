//! Ledger display formatting
//!
//! Formats ledger entries, filter results, statistics, and category sets for
//! terminal output. Skipped-line counts are always rendered when non-zero so
//! file corruption is observable instead of silent.

use crate::models::Record;
use crate::storage::{CategorySet, FilteredRecords, LedgerStats};

/// Format a confirmation line for a freshly appended record
pub fn format_added(record: &Record, currency: &str) -> String {
    format!(
        "Added: {} - {}{} on {}\n",
        record.category, currency, record.amount, record.date
    )
}

/// Format the full entry listing in insertion order
pub fn format_entry_list(lines: &[String]) -> String {
    if lines.is_empty() {
        return "No expenses recorded yet.\n\nRun 'spendlog add <category> <amount>' to record your first expense.\n"
            .to_string();
    }

    let mut output = String::new();
    for line in lines {
        output.push_str(line);
        output.push('\n');
    }
    output
}

/// Format a category filter result with its header
pub fn format_filtered(category: &str, result: &FilteredRecords) -> String {
    let mut output = format!("Expenses in category '{}':\n", category);

    if result.lines.is_empty() {
        output.push_str("  (none)\n");
    } else {
        for line in &result.lines {
            output.push_str(&format!("  {}\n", line));
        }
    }

    output.push_str(&skipped_note(result.skipped));
    output
}

/// Format the stats summary with two-decimal amounts
pub fn format_stats(stats: &LedgerStats, currency: &str) -> String {
    let mut output = format!(
        "Total Expenses: {}{:.2} | Average: {}{:.2} ({} {})\n",
        currency,
        stats.total,
        currency,
        stats.average,
        stats.count,
        if stats.count == 1 { "entry" } else { "entries" }
    );

    output.push_str(&skipped_note(stats.skipped));
    output
}

/// Format the distinct category set
///
/// The set itself is unordered; output is sorted for stable display only.
pub fn format_categories(result: &CategorySet) -> String {
    if result.categories.is_empty() {
        return "No categories used yet.\n".to_string();
    }

    let mut names: Vec<&String> = result.categories.iter().collect();
    names.sort();

    let mut output = String::new();
    output.push_str("Categories used:\n");
    for name in names {
        output.push_str(&format!("  {}\n", name));
    }

    output.push_str(&skipped_note(result.skipped));
    output
}

/// Format the removal outcome from a removed-line count
pub fn format_removed(removed: usize, date: &str, category: &str) -> String {
    if removed == 0 {
        format!(
            "No entries matched date '{}' and category '{}'.\n",
            date, category
        )
    } else {
        format!(
            "Removed {} {} matching date '{}' and category '{}'.\n",
            removed,
            if removed == 1 { "entry" } else { "entries" },
            date,
            category
        )
    }
}

fn skipped_note(skipped: usize) -> String {
    if skipped == 0 {
        String::new()
    } else {
        format!(
            "Warning: skipped {} malformed {}.\n",
            skipped,
            if skipped == 1 { "line" } else { "lines" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_format_entry_list_empty() {
        let output = format_entry_list(&[]);
        assert!(output.contains("No expenses recorded yet."));
    }

    #[test]
    fn test_format_entry_list_preserves_order() {
        let lines = vec![
            "2024-01-01,Food,20".to_string(),
            "2024-01-02,Transport,15".to_string(),
        ];
        let output = format_entry_list(&lines);
        assert_eq!(output, "2024-01-01,Food,20\n2024-01-02,Transport,15\n");
    }

    #[test]
    fn test_format_stats_two_decimals() {
        let stats = LedgerStats {
            total: 35.0,
            average: 17.5,
            count: 2,
            skipped: 0,
        };
        let output = format_stats(&stats, "$");
        assert!(output.contains("Total Expenses: $35.00 | Average: $17.50 (2 entries)"));
        assert!(!output.contains("Warning"));
    }

    #[test]
    fn test_format_stats_surfaces_skipped() {
        let stats = LedgerStats {
            total: 10.0,
            average: 10.0,
            count: 1,
            skipped: 1,
        };
        let output = format_stats(&stats, "$");
        assert!(output.contains("Warning: skipped 1 malformed line."));
    }

    #[test]
    fn test_format_categories_sorted() {
        let mut categories = HashSet::new();
        categories.insert("transport".to_string());
        categories.insert("food".to_string());
        let result = CategorySet {
            categories,
            skipped: 0,
        };

        let output = format_categories(&result);
        let food_pos = output.find("food").unwrap();
        let transport_pos = output.find("transport").unwrap();
        assert!(food_pos < transport_pos);
    }

    #[test]
    fn test_format_removed() {
        assert!(format_removed(0, "2024-01-01", "Food").contains("No entries matched"));
        assert!(format_removed(1, "2024-01-01", "Food").contains("Removed 1 entry"));
        assert!(format_removed(3, "2024-01-01", "Food").contains("Removed 3 entries"));
    }
}
