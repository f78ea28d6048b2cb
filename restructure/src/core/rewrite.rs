// src/core/rewrite.rs
use anyhow::{Context as _, Result};
use regex::{NoExpand, Regex};
use std::ffi::OsStr;
use std::fs;
use std::path::{Component, Path};
use walkdir::WalkDir;

use crate::config::Plan;
use crate::models::{Action, Progress};

/// Rewrites relative imports and loosens type annotations in source files.
#[derive(Debug)]
pub struct SourceRewriter {
    import_pattern: Regex,
    import_replacement: String,
    type_annotation: String,
    type_replacement: String,
    extensions: Vec<String>,
    skip_dirs: Vec<String>,
}

impl SourceRewriter {
    /// Builds a rewriter from the plan's rewrite settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the plan's import pattern is not a valid regex.
    pub fn from_plan(plan: &Plan) -> Result<Self> {
        let import_pattern = Regex::new(&plan.import_pattern)
            .with_context(|| format!("Invalid import pattern: {}", plan.import_pattern))?;

        Ok(Self {
            import_pattern,
            import_replacement: plan.import_replacement.clone(),
            type_annotation: plan.type_annotation.clone(),
            type_replacement: plan.type_replacement.clone(),
            extensions: plan.source_extensions.clone(),
            skip_dirs: plan.skip_dirs.clone(),
        })
    }

    /// Returns the rewritten text, or `None` when nothing would change.
    #[must_use]
    pub fn rewrite(&self, text: &str) -> Option<String> {
        let imports_fixed = self
            .import_pattern
            .replace_all(text, NoExpand(&self.import_replacement));
        let rewritten = if self.type_annotation.is_empty() {
            imports_fixed.into_owned()
        } else {
            imports_fixed.replace(&self.type_annotation, &self.type_replacement)
        };

        (rewritten != text).then_some(rewritten)
    }

    fn is_source_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    /// True if any component of the absolute `path` is a skipped name.
    fn is_skipped(&self, path: &Path) -> bool {
        path.components().any(|component| match component {
            Component::Normal(name) => name
                .to_str()
                .is_some_and(|name| self.skip_dirs.iter().any(|d| d == name)),
            _ => false,
        })
    }

    /// Rewrites every source file below `root` whose content changes.
    ///
    /// A file is left alone when its resolved path contains a skipped
    /// directory name anywhere, including above `root`. Symlinked files are
    /// rewritten through the link. Files are written in place and only when
    /// their text changed.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * `root` cannot be resolved to an absolute path
    /// * The walk fails
    /// * A source file is unreadable or not valid UTF-8
    /// * A changed file cannot be written back
    pub fn rewrite_tree(&self, root: &Path, progress: &mut Progress) -> Result<()> {
        let root = fs::canonicalize(root)
            .with_context(|| format!("Failed to resolve: {}", root.display()))?;

        for entry in WalkDir::new(&root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !self.is_skipped(e.path()))
        {
            let entry = entry.with_context(|| format!("Failed to walk: {}", root.display()))?;
            if !entry.path().is_file() || !self.is_source_file(entry.path()) {
                continue;
            }

            let path = entry.path();
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read source file: {}", path.display()))?;

            if let Some(rewritten) = self.rewrite(&text) {
                fs::write(path, rewritten)
                    .with_context(|| format!("Failed to write source file: {}", path.display()))?;
                progress.record(Action::RewroteSource {
                    path: path.strip_prefix(&root).unwrap_or(path).to_path_buf(),
                });
            }
        }
        Ok(())
    }
}
