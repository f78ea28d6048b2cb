// src/core/consolidate.rs
use anyhow::Result;
use std::path::Path;

use crate::core::fs_ops::{is_empty_dir, move_path, path_exists, remove_path};
use crate::models::{Action, Progress};

/// Lifts `source` (e.g. `backend/functions`) to `destination` (e.g.
/// `functions`), both relative to `root`.
///
/// Whatever already sits at `destination` is deleted first, without a
/// backup. If the source's parent folder is left empty it is removed too.
/// Nothing happens when `source` does not exist.
///
/// # Errors
///
/// This function may return an error if:
/// * The existing destination cannot be deleted
/// * The move fails
/// * The parent folder cannot be read or removed
pub fn consolidate_nested_dir(
    root: &Path,
    source: &Path,
    destination: &Path,
    progress: &mut Progress,
) -> Result<()> {
    let source_path = root.join(source);
    let destination_path = root.join(destination);

    if !path_exists(&source_path) {
        tracing::debug!(path = %source_path.display(), "nothing to consolidate");
        return Ok(());
    }

    if path_exists(&destination_path) {
        remove_path(&destination_path)?;
        progress.record(Action::DeletedExistingDestination {
            path: destination.to_path_buf(),
        });
    }

    move_path(&source_path, &destination_path)?;
    progress.record(Action::MovedNestedDir {
        from: source.to_path_buf(),
        to: destination.to_path_buf(),
    });

    if let Some(parent) = source.parent().filter(|p| !p.as_os_str().is_empty()) {
        let parent_path = root.join(parent);
        if parent_path.is_dir() && is_empty_dir(&parent_path)? {
            remove_path(&parent_path)?;
            progress.record(Action::RemovedEmptyParent {
                path: parent.to_path_buf(),
            });
        }
    }

    Ok(())
}
