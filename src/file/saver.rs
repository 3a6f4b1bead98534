//! Project file saving.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use log::debug;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::config::Config;
use crate::model::project::{Project, PROJECT_FILE};

/// Saves `project` as `whatunga.json` in `dir`.
///
/// The document is pretty-printed with `config.indent_size` spaces. The write
/// is atomic (temp file, then rename) so the project file is never left
/// partially written. With `config.create_backup` an existing file is first
/// copied to `whatunga.json.bak`.
///
/// # Examples
///
/// ```no_run
/// use whatunga::config::Config;
/// use whatunga::file::saver::save_project;
/// use whatunga::model::project::Project;
///
/// let project = Project::new("demo", "1.0");
/// save_project("my-domain", &project, &Config::default()).unwrap();
/// ```
pub fn save_project<P: AsRef<Path>>(dir: P, project: &Project, config: &Config) -> Result<()> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    let path = dir.join(PROJECT_FILE);

    if config.create_backup && path.exists() {
        create_backup(&path)?;
    }

    let mut json = Vec::new();
    write_pretty_json(&mut json, project, config.indent_size)
        .context("Failed to serialize project")?;
    json.push(b'\n');
    write_file_atomic(&path, &json)?;

    debug!("Saved project {}:{} to {}", project.name, project.version, path.display());
    Ok(())
}

/// Writes `value` as pretty JSON with `indent_size` spaces per level.
pub fn write_pretty_json<W, T>(writer: W, value: &T, indent_size: usize) -> serde_json::Result<()>
where
    W: io::Write,
    T: Serialize + ?Sized,
{
    let indent = " ".repeat(indent_size);
    let mut serializer =
        Serializer::with_formatter(writer, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut serializer)
}

/// Creates a backup of a file by copying it with a .bak extension.
fn create_backup(path: &Path) -> Result<()> {
    let mut backup_path = path.to_path_buf();
    let original_name = backup_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow!("Invalid file name"))?;
    backup_path.set_file_name(format!("{}.bak", original_name));
    fs::copy(path, backup_path).context("Failed to create backup")?;
    Ok(())
}

fn write_file_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, data).context("Failed to write temp file")?;
    fs::rename(&temp_path, path).context("Failed to rename temp file")?;
    Ok(())
}
