// tests/integration_tests/rewrite_test.rs
use super::common::{read, setup_test_project};
use anyhow::Result;
use restructure::{Action, Plan, Progress, SourceRewriter};
use std::path::PathBuf;

#[test]
fn test_sources_rewritten_outside_skipped_dirs() -> Result<()> {
    let temp_dir = setup_test_project()?;
    let root = temp_dir.path();
    let rewriter = SourceRewriter::from_plan(&Plan::default())?;
    let mut progress = Progress::quiet();

    rewriter.rewrite_tree(root, &mut progress)?;

    assert_eq!(
        read(root, "services/api.ts")?,
        "import { ping } from \"./functions/src';\nexport const call = (x: unknown) => ping(x);\n"
    );
    assert_eq!(
        read(root, "components/Chart.tsx")?,
        "import type { Series } from \"./functions/types\";\n"
    );
    assert_eq!(read(root, "notes.md")?, "payload: any");
    assert_eq!(read(root, "node_modules/react/index.d.ts")?, "declare const React: any;\n");
    assert_eq!(read(root, "ftc_work/scratch.js")?, "let tmp: any;\n");

    assert!(
        !progress.actions().contains(&Action::RewroteSource {
            path: PathBuf::from("constants.ts")
        }),
        "Unchanged files should not be rewritten"
    );
    Ok(())
}

#[test]
fn test_second_pass_changes_nothing() -> Result<()> {
    let temp_dir = setup_test_project()?;
    let rewriter = SourceRewriter::from_plan(&Plan::default())?;

    let mut first = Progress::quiet();
    rewriter.rewrite_tree(temp_dir.path(), &mut first)?;
    assert!(!first.is_empty());

    let mut second = Progress::quiet();
    rewriter.rewrite_tree(temp_dir.path(), &mut second)?;
    assert!(second.is_empty(), "Rewritten files should be stable");
    Ok(())
}
