// src/models/action.rs
use std::fmt;
use std::path::PathBuf;

/// One change made to the project. Paths are relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    RemovedStrayDir { path: PathBuf },
    DeletedExistingDestination { path: PathBuf },
    MovedNestedDir { from: PathBuf, to: PathBuf },
    RemovedEmptyParent { path: PathBuf },
    MovedEnvFile { from: PathBuf, to: PathBuf },
    AddedIgnoreEntry { file: PathBuf, entry: String },
    RemovedBuildDir { path: PathBuf },
    RewroteSource { path: PathBuf },
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RemovedStrayDir { path } => {
                write!(f, "Removed stray '{}' folder", path.display())
            }
            Self::DeletedExistingDestination { path } => {
                write!(f, "Deleted existing '{}/'", path.display())
            }
            Self::MovedNestedDir { from, to } => {
                write!(f, "Moved '{}/' -> '{}/'", from.display(), to.display())
            }
            Self::RemovedEmptyParent { path } => {
                write!(f, "Removed empty '{}/' folder", path.display())
            }
            Self::MovedEnvFile { from, to } => {
                write!(f, "Moved '{}' -> '{}'", from.display(), to.display())
            }
            Self::AddedIgnoreEntry { file, entry } => {
                write!(f, "Added '{entry}' to {}", file.display())
            }
            Self::RemovedBuildDir { path } => {
                write!(f, "Removed build folder '{}'", path.display())
            }
            Self::RewroteSource { path } => {
                write!(f, "Updated imports/types in '{}'", path.display())
            }
        }
    }
}
