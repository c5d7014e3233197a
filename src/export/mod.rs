//! Snapshot file writing.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde_json::{Map, Value};
use tracing::info;

use crate::error::ExportError;
use crate::models::EndpointDataStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Two-space indented JSON
    #[default]
    Pretty,
    /// Single-line JSON
    Compact,
}

impl OutputFormat {
    fn render(self, value: &Value) -> Result<String, ExportError> {
        Ok(match self {
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
            OutputFormat::Compact => serde_json::to_string(value)?,
        })
    }
}

/// Stamps `date` onto the store and overwrites `path` with the result.
pub fn export(
    mut store: EndpointDataStore,
    path: &Path,
    date: NaiveDate,
    format: OutputFormat,
) -> Result<PathBuf, ExportError> {
    store.stamp_date(date);

    let contents = format.render(&store.into_value())?;
    fs::write(path, contents).map_err(|e| ExportError::io(path, e))?;

    info!(path = %path.display(), "Base JSON file generated successfully");
    Ok(path.to_path_buf())
}

/// Merges several JSON files into one object keyed by the given names.
///
/// Every input must exist; nothing is written otherwise.
pub fn pack(inputs: &[(String, PathBuf)], output: &Path) -> Result<PathBuf, ExportError> {
    let mut merged = Map::new();

    for (name, path) in inputs {
        if !path.exists() {
            return Err(ExportError::MissingInput(path.clone()));
        }
        let raw = fs::read_to_string(path).map_err(|e| ExportError::io(path, e))?;
        let value: Value = serde_json::from_str(&raw)?;
        merged.insert(name.clone(), value);
    }

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ExportError::io(parent, e))?;
    }

    let contents = OutputFormat::Compact.render(&Value::Object(merged))?;
    fs::write(output, contents).map_err(|e| ExportError::io(output, e))?;

    info!(path = %output.display(), files = inputs.len(), "Packed snapshot written");
    Ok(output.to_path_buf())
}
