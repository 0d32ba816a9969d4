//! Row sources.
//!
//! Rows arrive as one JSON document: an array of objects, read from a file
//! or from piped stdin. Columns are derived from the object keys.

use crate::model::error::SourceError;
use crate::model::Column;
use serde_json::Value;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use tracing::{debug, info};

/// Label used in errors for piped input.
pub const STDIN_ORIGIN: &str = "<stdin>";

/// Where the viewer reads its rows from.
///
/// Sum type enforces exactly one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A JSON file on disk.
    File(PathBuf),
    /// Piped stdin.
    Stdin,
}

impl InputSource {
    /// Human-readable origin for error messages.
    pub fn origin(&self) -> String {
        match self {
            InputSource::File(path) => path.display().to_string(),
            InputSource::Stdin => STDIN_ORIGIN.to_string(),
        }
    }

    /// Read and parse every row.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Io` for read failures and the JSON variants
    /// for malformed input.
    pub fn load(&self) -> Result<Vec<Value>, SourceError> {
        let rows = match self {
            InputSource::File(path) => {
                let text = std::fs::read_to_string(path)?;
                parse_rows(&text, &self.origin())?
            }
            InputSource::Stdin => read_rows(std::io::stdin().lock(), STDIN_ORIGIN)?,
        };
        info!(origin = %self.origin(), rows = rows.len(), "Loaded rows");
        Ok(rows)
    }
}

/// Detect the input source.
///
/// # Logic:
/// 1. If a file path is provided it must exist
/// 2. Else stdin must be piped
///
/// # Errors
///
/// Returns `SourceError::FileNotFound` for a missing file and
/// `SourceError::NoInput` when stdin is an interactive terminal.
pub fn detect_input_source(file: Option<PathBuf>) -> Result<InputSource, SourceError> {
    match file {
        Some(path) if !path.exists() => Err(SourceError::FileNotFound { path }),
        Some(path) => Ok(InputSource::File(path)),
        None if std::io::stdin().is_terminal() => Err(SourceError::NoInput),
        None => Ok(InputSource::Stdin),
    }
}

/// Read a whole JSON document from `reader` and parse it as rows.
///
/// # Errors
///
/// Same as [`parse_rows`], plus `SourceError::Io`.
pub fn read_rows<R: Read>(mut reader: R, origin: &str) -> Result<Vec<Value>, SourceError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_rows(&text, origin)
}

/// Parse a JSON array of objects.
///
/// # Errors
///
/// Returns `SourceError::InvalidJson` for malformed JSON and
/// `SourceError::NotAnArrayOfObjects` when the document has another shape.
pub fn parse_rows(text: &str, origin: &str) -> Result<Vec<Value>, SourceError> {
    let document: Value = serde_json::from_str(text).map_err(|e| SourceError::InvalidJson {
        origin: origin.to_string(),
        message: e.to_string(),
    })?;

    let Value::Array(items) = document else {
        return Err(SourceError::NotAnArrayOfObjects {
            origin: origin.to_string(),
            found: describe(&document).to_string(),
        });
    };

    if let Some((index, item)) = items.iter().enumerate().find(|(_, v)| !v.is_object()) {
        return Err(SourceError::NotAnArrayOfObjects {
            origin: origin.to_string(),
            found: format!("{} at index {}", describe(item), index),
        });
    }

    Ok(items)
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Column keys to display.
///
/// An explicit list wins; otherwise the keys of the first row in document
/// order. No rows and no list yields no columns.
pub fn column_keys(rows: &[Value], explicit: Option<&[String]>) -> Vec<String> {
    if let Some(keys) = explicit {
        return keys.to_vec();
    }
    rows.first()
        .and_then(Value::as_object)
        .map(|object| object.keys().cloned().collect())
        .unwrap_or_default()
}

/// One sortable column per key, headed by the key itself.
pub fn build_columns(keys: &[String]) -> Vec<Column<Value>> {
    debug!(?keys, "Building columns");
    keys.iter()
        .map(|key| Column::new(key.clone()).accessor(key.clone()).sortable())
        .collect()
}

/// Parse a comma-separated `--columns` value, dropping blanks.
pub fn parse_column_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .collect()
}
