//! Project file loading.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::debug;

use crate::model::project::{Project, PROJECT_FILE};

/// Loads the project stored in `dir`.
///
/// # Errors
///
/// Fails with "Missing project file" when `dir` has no `whatunga.json`, or
/// when the file cannot be read or is not a valid project document.
///
/// # Examples
///
/// ```no_run
/// use whatunga::file::loader::load_project;
///
/// let project = load_project("my-domain").unwrap();
/// println!("{}:{}", project.name, project.version);
/// ```
pub fn load_project<P: AsRef<Path>>(dir: P) -> Result<Project> {
    let path = dir.as_ref().join(PROJECT_FILE);
    if !path.is_file() {
        bail!("Missing project file {}", path.display());
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let project =
        parse_project(&content).with_context(|| format!("Failed to parse {}", path.display()))?;
    debug!("Loaded project {}:{} from {}", project.name, project.version, path.display());
    Ok(project)
}

/// Parses a project document. Missing attributes take their defaults.
pub fn parse_project(content: &str) -> Result<Project> {
    serde_json::from_str(content).context("Invalid project document")
}
