// src/core/ignore_list.rs
use anyhow::{Context as _, Result};
use std::fs::{self, OpenOptions};
use std::io::Write as _;
use std::path::Path;

use crate::models::{Action, Progress};

/// Reads the lines of the ignore file, treating a missing file as empty.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn read_ignore_lines(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read ignore file: {}", path.display()))?;
    Ok(content.lines().map(str::to_owned).collect())
}

/// Appends each entry not already present as a line of `ignore_file`.
///
/// Entries are written as `"\n" + entry` in append mode; the file is created
/// if it does not exist. Only the lines present before this call are checked.
///
/// # Errors
///
/// This function may return an error if:
/// * The ignore file cannot be read
/// * The ignore file cannot be opened for appending or written
pub fn append_ignore_entries(
    root: &Path,
    ignore_file: &Path,
    entries: &[String],
    progress: &mut Progress,
) -> Result<()> {
    let path = root.join(ignore_file);
    let existing = read_ignore_lines(&path)?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open ignore file: {}", path.display()))?;

    for entry in entries {
        if existing.iter().any(|line| line == entry) {
            tracing::debug!(%entry, "already ignored");
            continue;
        }

        write!(file, "\n{entry}")
            .with_context(|| format!("Failed to write ignore file: {}", path.display()))?;
        progress.record(Action::AddedIgnoreEntry {
            file: ignore_file.to_path_buf(),
            entry: entry.clone(),
        });
    }

    file.flush()
        .with_context(|| format!("Failed to write ignore file: {}", path.display()))
}
