//! File I/O utilities for line-oriented storage with atomic rewrites
//!
//! Provides the three file primitives the ledger needs: a lazy line scan,
//! a size-independent append, and a full-file rewrite that won't leave a
//! truncated file behind on failure.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::LedgerError;

/// Lazy iterator over the lines of a backing file
///
/// Missing files yield an empty iterator: "no data yet" is a valid state,
/// distinct from an I/O failure. Re-invoking [`scan_lines`] restarts the
/// scan from the beginning.
pub struct ScanLines {
    inner: Option<io::Lines<BufReader<File>>>,
}

impl Iterator for ScanLines {
    type Item = Result<String, LedgerError>;

    fn next(&mut self) -> Option<Self::Item> {
        let lines = self.inner.as_mut()?;
        lines
            .next()
            .map(|r| r.map_err(|e| LedgerError::Io(format!("Failed to read line: {}", e))))
    }
}

/// Open a lazy line scan over a file, empty if the file doesn't exist
pub fn scan_lines<P: AsRef<Path>>(path: P) -> Result<ScanLines, LedgerError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(ScanLines { inner: None });
    }

    let file = File::open(path).map_err(|e| {
        LedgerError::StorageUnavailable(format!("Failed to open {}: {}", path.display(), e))
    })?;

    Ok(ScanLines {
        inner: Some(BufReader::new(file).lines()),
    })
}

/// Append a single line to a file, creating it (and parent directories) if absent
///
/// This is the only write path that doesn't touch existing content, so its
/// cost is independent of file size.
pub fn append_line<P: AsRef<Path>>(path: P, line: &str) -> Result<(), LedgerError> {
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::StorageUnavailable(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            LedgerError::StorageUnavailable(format!(
                "Failed to open {} for append: {}",
                path.display(),
                e
            ))
        })?;

    let mut writer = BufWriter::new(file);
    writeln!(writer, "{}", line)
        .map_err(|e| LedgerError::StorageUnavailable(format!("Failed to append line: {}", e)))?;

    writer
        .flush()
        .map_err(|e| LedgerError::StorageUnavailable(format!("Failed to flush append: {}", e)))?;

    Ok(())
}

/// Rewrite a file's full contents atomically (write to temp, then rename)
///
/// This ensures that the file is either completely rewritten or not modified
/// at all, preventing a truncated file if the process is interrupted
/// mid-write.
pub fn write_lines_atomic<P: AsRef<Path>>(path: P, lines: &[String]) -> Result<(), LedgerError> {
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::StorageUnavailable(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Create temp file in same directory (important for atomic rename),
    // appending to the full file name so the target's extension doesn't
    // matter
    let file_name = path.file_name().ok_or_else(|| {
        LedgerError::StorageUnavailable(format!("Invalid file path: {}", path.display()))
    })?;
    let mut temp_name = file_name.to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    let file = File::create(&temp_path).map_err(|e| {
        LedgerError::StorageUnavailable(format!("Failed to create temp file: {}", e))
    })?;

    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line)
            .map_err(|e| LedgerError::Io(format!("Failed to write line: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| LedgerError::Io(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| LedgerError::Io(format!("Failed to sync data: {}", e)))?;

    // Atomic rename
    fs::rename(&temp_path, path).map_err(|e| {
        // Try to clean up temp file if rename fails
        let _ = fs::remove_file(&temp_path);
        LedgerError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
