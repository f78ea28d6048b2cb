// src/core/runner.rs
use anyhow::Result;
use std::path::Path;

use crate::config::Plan;
use crate::core::build_artifacts::remove_build_dirs;
use crate::core::cleanup::remove_stray_dirs;
use crate::core::consolidate::consolidate_nested_dir;
use crate::core::env_files::{env_file_matcher, gather_env_files};
use crate::core::ignore_list::append_ignore_entries;
use crate::core::paths::ensure_project_dir;
use crate::core::rewrite::SourceRewriter;
use crate::models::Progress;

/// Runs every restructuring step against `root`, in order.
///
/// The project folder is checked and the plan's patterns are compiled before
/// anything on disk is touched. After that each step runs once; the first
/// failure stops the run and earlier changes stay in place.
///
/// # Errors
///
/// This function may return an error if:
/// * `root` is missing or not a directory
/// * The plan's env file glob or import regex is invalid
/// * Any filesystem operation in a step fails
pub fn restructure(root: &Path, plan: &Plan, progress: &mut Progress) -> Result<()> {
    ensure_project_dir(root)?;
    let env_pattern = env_file_matcher(&plan.env_file_pattern)?;
    let rewriter = SourceRewriter::from_plan(plan)?;

    tracing::info!(project = %root.display(), "restructuring");

    remove_stray_dirs(root, &plan.stray_dirs, progress)?;
    consolidate_nested_dir(root, &plan.nested_source, &plan.nested_destination, progress)?;
    gather_env_files(root, &env_pattern, progress)?;
    append_ignore_entries(root, &plan.ignore_file, &plan.ignore_entries, progress)?;
    remove_build_dirs(root, &plan.build_dirs, progress)?;
    rewriter.rewrite_tree(root, progress)?;

    tracing::info!(actions = progress.actions().len(), "restructure finished");
    Ok(())
}
