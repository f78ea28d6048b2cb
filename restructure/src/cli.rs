// src/cli.rs
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::config::load_plan;
use crate::core::paths::{executable_dir, resolve_project_dir};
use crate::core::runner::restructure;
use crate::models::Progress;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Project directory to restructure (defaults to the project folder next to this executable)
    #[arg(short = 'd', long)]
    pub project: Option<PathBuf>,

    /// TOML file overriding the built-in plan
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Don't print a line for each change
    #[arg(short, long)]
    pub quiet: bool,

    /// Log debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Resolves the project, runs every step, and prints the completion line.
///
/// # Errors
///
/// Returns an error if the plan cannot be loaded, the project folder is
/// missing, or any step fails.
pub fn run(args: Args) -> Result<Progress> {
    let plan = load_plan(args.config.as_deref())?;

    let base = if args.project.is_some() {
        PathBuf::new()
    } else {
        executable_dir()?
    };
    let project = resolve_project_dir(&base, &plan.project_dir, args.project.as_deref());

    let mut progress = if args.quiet {
        Progress::quiet()
    } else {
        Progress::new()
    };
    restructure(&project, &plan, &mut progress)?;

    println!(
        "Restructure complete! Your '{}' folder is now cleaned and reorganized.",
        plan.project_name()
    );
    Ok(progress)
}
