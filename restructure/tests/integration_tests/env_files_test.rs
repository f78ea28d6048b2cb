// tests/integration_tests/env_files_test.rs
use super::common::{read, setup_test_project};
use anyhow::Result;
use restructure::{Progress, env_file_matcher, find_nested_env_files, gather_env_files};

#[test]
fn test_env_files_gathered_to_root() -> Result<()> {
    let temp_dir = setup_test_project()?;
    let root = temp_dir.path();
    let pattern = env_file_matcher(".env*")?;

    let nested = find_nested_env_files(root, &pattern)?;
    assert_eq!(nested.len(), 3, "Should find every nested env file");

    let mut progress = Progress::quiet();
    gather_env_files(root, &pattern, &mut progress)?;

    assert_eq!(
        read(root, ".env.local")?,
        "VITE_KEY=services\n",
        "The env file walked last should win"
    );
    assert_eq!(read(root, ".env.production")?, "MODE=prod\n");
    assert!(!root.join("frontend/.env.local").exists());
    assert!(!root.join("services/deep/.env.local").exists());
    assert!(find_nested_env_files(root, &pattern)?.is_empty());
    Ok(())
}
