pub mod cli;
pub mod config;
pub mod core;
pub mod models;

pub use cli::{Args, run};
pub use config::{Plan, load_plan};
pub use crate::core::build_artifacts::remove_build_dirs;
pub use crate::core::cleanup::remove_stray_dirs;
pub use crate::core::consolidate::consolidate_nested_dir;
pub use crate::core::env_files::{env_file_matcher, find_nested_env_files, gather_env_files};
pub use crate::core::ignore_list::{append_ignore_entries, read_ignore_lines};
pub use crate::core::paths::{ensure_project_dir, resolve_project_dir};
pub use crate::core::rewrite::SourceRewriter;
pub use crate::core::runner::restructure;
pub use models::{Action, Progress};
