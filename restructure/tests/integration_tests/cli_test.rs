// tests/integration_tests/cli_test.rs
use super::common::{create_test_file, read};
use anyhow::Result;
use clap::Parser as _;
use restructure::Args;
use std::path::PathBuf;
use tempfile::TempDir;

fn setup_small_project() -> Result<TempDir> {
    let dir = TempDir::new()?;

    create_test_file(dir.path(), "-p/x", "")?;
    create_test_file(dir.path(), "backend/functions/index.ts", "let a: any;")?;
    create_test_file(dir.path(), "dist/app.js", "")?;

    Ok(dir)
}

#[test]
fn test_run_with_project_flag() -> Result<()> {
    let dir = setup_small_project()?;

    let args = Args {
        project: Some(dir.path().to_path_buf()),
        config: None,
        quiet: false,
        verbose: false,
    };

    let progress = restructure::run(args)?;
    assert!(!progress.is_empty());
    assert_eq!(read(dir.path(), "functions/index.ts")?, "let a: unknown;");
    Ok(())
}

#[test]
fn test_run_with_config_file() -> Result<()> {
    let dir = setup_small_project()?;
    let config = create_test_file(
        dir.path(),
        "plan.toml",
        "build_dirs = []\ntype_replacement = \": never\"\n",
    )?;

    let args = Args {
        project: Some(dir.path().to_path_buf()),
        config: Some(config),
        quiet: true,
        verbose: false,
    };

    restructure::run(args)?;
    assert!(dir.path().join("dist/app.js").exists(), "dist/ kept by config");
    assert_eq!(read(dir.path(), "functions/index.ts")?, "let a: never;");
    Ok(())
}

#[test]
fn test_run_with_missing_project() -> Result<()> {
    let dir = setup_small_project()?;

    let args = Args {
        project: Some(dir.path().join("absent")),
        config: None,
        quiet: true,
        verbose: false,
    };

    assert!(restructure::run(args).is_err());
    assert!(dir.path().join("-p").exists());
    Ok(())
}

#[test]
fn test_args_parse_flags() {
    let args = Args::parse_from(["restructure", "-d", "/tmp/project", "--quiet"]);
    assert_eq!(args.project, Some(PathBuf::from("/tmp/project")));
    assert!(args.quiet);
    assert!(!args.verbose);
    assert!(args.config.is_none());
}
