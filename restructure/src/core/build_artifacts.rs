// src/core/build_artifacts.rs
use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::core::fs_ops::{path_exists, remove_path};
use crate::models::{Action, Progress};

/// Deletes each generated output folder that exists under `root`.
///
/// # Errors
///
/// Returns an error if a present folder cannot be removed.
pub fn remove_build_dirs(root: &Path, build_dirs: &[PathBuf], progress: &mut Progress) -> Result<()> {
    for build_dir in build_dirs {
        let path = root.join(build_dir);
        if path_exists(&path) {
            remove_path(&path)?;
            progress.record(Action::RemovedBuildDir {
                path: build_dir.clone(),
            });
        }
    }
    Ok(())
}
