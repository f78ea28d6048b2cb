// src/core/env_files.rs
use anyhow::{Context as _, Result};
use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::fs_ops::move_path;
use crate::models::{Action, Progress};

/// Compiles the file-name pattern for environment files.
///
/// # Errors
///
/// Returns an error if `pattern` is not a valid glob.
pub fn env_file_matcher(pattern: &str) -> Result<Pattern> {
    Pattern::new(pattern).with_context(|| format!("Invalid env file pattern: {pattern}"))
}

/// Finds every non-directory entry below `root` whose name matches `pattern`
/// and that is not already directly inside `root`.
///
/// Only files and symlinks are gathered. A directory whose name matches,
/// such as a virtualenv called `.env`, stays where it is and is still walked.
/// Entries come back in walk order, sorted by name within each directory.
///
/// # Errors
///
/// Returns an error if the walk fails.
pub fn find_nested_env_files(root: &Path, pattern: &Pattern) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    for entry in WalkDir::new(root).min_depth(2).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk: {}", root.display()))?;
        if entry.file_type().is_dir() {
            continue;
        }

        let matches = entry
            .file_name()
            .to_str()
            .is_some_and(|name| pattern.matches(name));
        if matches {
            found.push(entry.into_path());
        }
    }

    Ok(found)
}

/// Moves every nested environment file to the project root.
///
/// Same-named files at the root are overwritten silently, so among nested
/// duplicates the one walked last wins.
///
/// # Errors
///
/// Returns an error if the walk or any move fails.
pub fn gather_env_files(root: &Path, pattern: &Pattern, progress: &mut Progress) -> Result<()> {
    for env_file in find_nested_env_files(root, pattern)? {
        let Some(name) = env_file.file_name() else {
            continue;
        };
        let target = root.join(name);

        move_path(&env_file, &target)?;
        progress.record(Action::MovedEnvFile {
            from: env_file
                .strip_prefix(root)
                .unwrap_or(env_file.as_path())
                .to_path_buf(),
            to: PathBuf::from(name),
        });
    }
    Ok(())
}
