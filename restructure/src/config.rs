// src/config.rs
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Every constant that drives a restructure run.
///
/// `Plan::default()` is the built-in plan for the `forex-trade-companion`
/// project. A TOML file may override any subset of the fields; fields it
/// leaves out keep their built-in value.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Plan {
    /// Project folder, joined onto the executable's directory. An absolute
    /// path replaces that directory entirely.
    pub project_dir: PathBuf,
    /// Accidental folders removed outright.
    pub stray_dirs: Vec<PathBuf>,
    /// Nested directory lifted to `nested_destination`.
    pub nested_source: PathBuf,
    pub nested_destination: PathBuf,
    /// Glob matched against file names, e.g. `.env*`.
    pub env_file_pattern: String,
    pub ignore_file: PathBuf,
    pub ignore_entries: Vec<String>,
    /// Generated output folders, relative to the project root.
    pub build_dirs: Vec<PathBuf>,
    /// Extensions (without the dot) of files the rewriter touches.
    pub source_extensions: Vec<String>,
    /// Directory names never rewritten, at any depth.
    pub skip_dirs: Vec<String>,
    /// Regex for the relative import that should point at the new location.
    pub import_pattern: String,
    /// Inserted literally; `$` has no special meaning.
    pub import_replacement: String,
    pub type_annotation: String,
    pub type_replacement: String,
}

impl Default for Plan {
    fn default() -> Self {
        Self {
            project_dir: PathBuf::from("forex-trade-companion"),
            stray_dirs: vec![PathBuf::from("-p")],
            nested_source: PathBuf::from("backend/functions"),
            nested_destination: PathBuf::from("functions"),
            env_file_pattern: String::from(".env*"),
            ignore_file: PathBuf::from(".gitignore"),
            ignore_entries: vec![String::from("dist/"), String::from("functions/lib/")],
            build_dirs: vec![PathBuf::from("dist"), PathBuf::from("functions/lib")],
            source_extensions: ["ts", "tsx", "js", "jsx"].map(String::from).to_vec(),
            skip_dirs: vec![String::from("node_modules"), String::from("ftc_work")],
            import_pattern: String::from(r#"from\s+['"]\.\./backend/functions"#),
            import_replacement: String::from(r#"from "./functions"#),
            type_annotation: String::from(": any"),
            type_replacement: String::from(": unknown"),
        }
    }
}

impl Plan {
    /// Parses a plan from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or names a field the
    /// plan does not have.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse plan")
    }

    /// Human-readable project name used in the completion message.
    #[must_use]
    pub fn project_name(&self) -> String {
        self.project_dir.file_name().map_or_else(
            || self.project_dir.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }
}

/// Loads the plan from `path`, or returns the built-in plan when no path is
/// given.
///
/// # Errors
///
/// This function may return an error if:
/// * The config file cannot be read
/// * The config file is not a valid plan
pub fn load_plan(path: Option<&Path>) -> Result<Plan> {
    let Some(path) = path else {
        return Ok(Plan::default());
    };

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    Plan::from_toml(&content).with_context(|| format!("Invalid config file: {}", path.display()))
}
