// src/core/paths.rs
use anyhow::{Context as _, Result, bail};
use std::env;
use std::path::{Path, PathBuf};

/// Directory containing the running executable.
///
/// # Errors
///
/// Returns an error if the executable path cannot be determined.
pub fn executable_dir() -> Result<PathBuf> {
    let exe = env::current_exe().context("Failed to locate the running executable")?;
    exe.parent()
        .map(Path::to_path_buf)
        .with_context(|| format!("Executable has no parent directory: {}", exe.display()))
}

/// Resolves the project directory the run will operate on.
///
/// An explicit `project` wins. Otherwise `project_dir` is joined onto
/// `base`, so an absolute `project_dir` is used as is.
#[must_use]
pub fn resolve_project_dir(base: &Path, project_dir: &Path, project: Option<&Path>) -> PathBuf {
    project.map_or_else(|| base.join(project_dir), Path::to_path_buf)
}

/// Fails unless `project` is an existing directory.
///
/// # Errors
///
/// Returns an error naming the folder if it is missing or is not a directory.
pub fn ensure_project_dir(project: &Path) -> Result<()> {
    if !project.is_dir() {
        bail!(
            "Folder '{}' not found. Make sure you're running this next to that folder.",
            project.display()
        );
    }
    Ok(())
}
