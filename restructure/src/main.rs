// src/main.rs
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use restructure::cli::{Args, run};

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "restructure=debug"
    } else {
        "restructure=warn"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    run(args)?;
    Ok(())
}
