// src/core/cleanup.rs
use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::core::fs_ops::{path_exists, remove_path};
use crate::models::{Action, Progress};

/// Removes each accidental folder that is present under `root`.
///
/// # Errors
///
/// Returns an error if a present folder cannot be removed.
pub fn remove_stray_dirs(root: &Path, stray_dirs: &[PathBuf], progress: &mut Progress) -> Result<()> {
    for stray in stray_dirs {
        let path = root.join(stray);
        if !path_exists(&path) {
            tracing::debug!(path = %path.display(), "no stray folder");
            continue;
        }

        remove_path(&path)?;
        progress.record(Action::RemovedStrayDir {
            path: stray.clone(),
        });
    }
    Ok(())
}
