// tests/integration_tests/edge_cases_test.rs
use super::common::{create_test_file, setup_test_project};
use anyhow::Result;
use restructure::{Action, Plan, Progress, restructure};
use std::fs;

#[test]
fn test_missing_project_leaves_disk_untouched() -> Result<()> {
    let temp_dir = setup_test_project()?;
    let mut progress = Progress::quiet();

    let err = restructure(
        &temp_dir.path().join("forex-trade-companion"),
        &Plan::default(),
        &mut progress,
    )
    .expect_err("missing project should fail");

    assert!(err.to_string().contains("not found"));
    assert!(progress.is_empty());
    assert!(temp_dir.path().join("-p").exists());
    assert!(temp_dir.path().join("dist").exists());
    Ok(())
}

#[test]
fn test_second_run_is_quiet() -> Result<()> {
    let temp_dir = setup_test_project()?;

    let mut first = Progress::quiet();
    restructure(temp_dir.path(), &Plan::default(), &mut first)?;

    let mut second = Progress::quiet();
    restructure(temp_dir.path(), &Plan::default(), &mut second)?;

    assert!(second.is_empty(), "Nothing left to do: {:?}", second.actions());
    Ok(())
}

#[test]
fn test_empty_project() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    let mut progress = Progress::quiet();

    restructure(temp_dir.path(), &Plan::default(), &mut progress)?;

    // Only the ignore entries are added, to a freshly created file.
    assert_eq!(progress.actions().len(), 2);
    assert!(
        progress
            .actions()
            .iter()
            .all(|a| matches!(a, Action::AddedIgnoreEntry { .. }))
    );
    assert_eq!(
        fs::read_to_string(temp_dir.path().join(".gitignore"))?,
        "\ndist/\nfunctions/lib/"
    );
    Ok(())
}

#[test]
fn test_invalid_utf8_source_aborts_run() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    create_test_file(temp_dir.path(), "dist/out.js", "")?;
    fs::write(temp_dir.path().join("broken.ts"), [0xff, 0xfe, 0x00])?;
    let mut progress = Progress::quiet();

    let result = restructure(temp_dir.path(), &Plan::default(), &mut progress);

    assert!(result.is_err());
    assert!(
        !temp_dir.path().join("dist").exists(),
        "Earlier steps are not rolled back"
    );
    Ok(())
}
