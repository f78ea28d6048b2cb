// src/core/fs_ops.rs
use anyhow::{Context as _, Result};
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Deletes `path` whether it is a directory tree or a single file.
///
/// # Errors
///
/// Returns an error if the path cannot be inspected or removed.
pub fn remove_path(path: &Path) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .with_context(|| format!("Failed to inspect: {}", path.display()))?;
    if metadata.is_dir() {
        fs::remove_dir_all(path)
            .with_context(|| format!("Failed to remove directory: {}", path.display()))
    } else {
        fs::remove_file(path).with_context(|| format!("Failed to remove file: {}", path.display()))
    }
}

/// True if `path` exists, without following a trailing symlink.
#[must_use]
pub fn path_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Moves a file or directory to `to`, replacing an existing file there.
///
/// A plain rename is tried first. When source and destination live on
/// different filesystems the entry is copied and the source removed:
/// directories recursively, files by content, symlinks recreated as links.
///
/// # Errors
///
/// This function may return an error if:
/// * The destination's parent directory cannot be created
/// * The rename fails for any reason other than crossing devices
/// * Copying or removing during the cross-device fallback fails
pub fn move_path(from: &Path, to: &Path) -> Result<()> {
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::CrossesDevices => {
            tracing::debug!(from = %from.display(), to = %to.display(), "rename crosses devices, copying");
            copy_across(from, to)?;
            remove_path(from)
        }
        Err(err) => Err(err).with_context(|| {
            format!("Failed to move '{}' to '{}'", from.display(), to.display())
        }),
    }
}

fn copy_across(from: &Path, to: &Path) -> Result<()> {
    let metadata = fs::symlink_metadata(from)
        .with_context(|| format!("Failed to inspect: {}", from.display()))?;
    if metadata.is_dir() {
        copy_tree(from, to)
    } else {
        copy_entry(from, to, metadata.file_type())
    }
}

fn copy_tree(from: &Path, to: &Path) -> Result<()> {
    for entry in WalkDir::new(from) {
        let entry = entry?;
        let relative = entry.path().strip_prefix(from)?;
        let target = to.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("Failed to create directory: {}", target.display()))?;
        } else {
            copy_entry(entry.path(), &target, entry.file_type())?;
        }
    }
    Ok(())
}

fn copy_entry(from: &Path, to: &Path, file_type: fs::FileType) -> Result<()> {
    if file_type.is_symlink() {
        return copy_symlink(from, to);
    }
    fs::copy(from, to).with_context(|| {
        format!("Failed to copy '{}' to '{}'", from.display(), to.display())
    })?;
    Ok(())
}

#[cfg(unix)]
fn copy_symlink(from: &Path, to: &Path) -> Result<()> {
    let link_target = fs::read_link(from)
        .with_context(|| format!("Failed to read link: {}", from.display()))?;
    if path_exists(to) {
        remove_path(to)?;
    }
    std::os::unix::fs::symlink(&link_target, to)
        .with_context(|| format!("Failed to create link: {}", to.display()))
}

// Links can't be recreated portably here, so the target's content is copied.
#[cfg(not(unix))]
fn copy_symlink(from: &Path, to: &Path) -> Result<()> {
    fs::copy(from, to).with_context(|| {
        format!("Failed to copy '{}' to '{}'", from.display(), to.display())
    })?;
    Ok(())
}

/// True if `dir` is a directory with no entries.
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub fn is_empty_dir(dir: &Path) -> Result<bool> {
    let mut entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory: {}", dir.display()))?;
    Ok(entries.next().is_none())
}
