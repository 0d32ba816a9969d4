//! Registry splitting.
//!
//! A registry manifest lists components under `items`. Package tooling fetches
//! components one at a time, so each item is written to `<name>.json` in an
//! output directory.

use crate::model::error::RegistryError;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The parts of a registry manifest this tool reads.
///
/// Items are kept as raw objects so every field (and its order) survives.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryManifest {
    /// Component descriptors.
    pub items: Vec<Map<String, Value>>,
}

impl RegistryManifest {
    /// Read and parse a manifest file.
    ///
    /// # Errors
    ///
    /// `ReadManifest` if the file cannot be read, `InvalidManifest` if it is
    /// not JSON or has no `items` array of objects.
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let text = std::fs::read_to_string(path).map_err(|source| RegistryError::ReadManifest {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// Parse manifest text; `path` is only used for error messages.
    ///
    /// # Errors
    ///
    /// `InvalidManifest` on malformed JSON or a missing `items` array.
    pub fn parse(text: &str, path: &Path) -> Result<Self, RegistryError> {
        serde_json::from_str(text).map_err(|e| RegistryError::InvalidManifest {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Outcome of a successful split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    /// Directory the files were written to.
    pub out_dir: PathBuf,
    /// File names written, in manifest order.
    pub files: Vec<String>,
}

impl fmt::Display for GenerateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for file in &self.files {
            writeln!(f, "✓ Generated {}", file)?;
        }
        write!(
            f,
            "Generated {} component files in {}",
            self.files.len(),
            self.out_dir.display()
        )
    }
}

/// Validate an item name for use as a file stem.
///
/// # Errors
///
/// `InvalidItemName` when the name is missing, empty, a dot path, or
/// contains a path separator.
pub fn item_file_name(index: usize, item: &Map<String, Value>) -> Result<String, RegistryError> {
    let invalid = |name: &str, reason: &'static str| RegistryError::InvalidItemName {
        index,
        name: name.to_string(),
        reason,
    };

    let name = match item.get("name") {
        Some(Value::String(name)) => name.as_str(),
        Some(other) => return Err(invalid(&other.to_string(), "name must be a string")),
        None => return Err(invalid("", "name is missing")),
    };

    if name.is_empty() {
        return Err(invalid(name, "name is empty"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(invalid(name, "name contains a path separator"));
    }
    if name == "." || name == ".." {
        return Err(invalid(name, "name is a relative path component"));
    }

    Ok(format!("{}.json", name))
}

/// Pretty-print an item: two-space indent, trailing newline.
pub fn render_item(item: &Map<String, Value>) -> String {
    // Serializing a Map<String, Value> cannot fail.
    let mut text = serde_json::to_string_pretty(item).unwrap_or_default();
    text.push('\n');
    text
}

/// Write every manifest item to `out_dir`, creating it when missing.
///
/// All names are validated before anything is written.
///
/// # Errors
///
/// Any `RegistryError`; files written before an I/O failure are left behind.
pub fn generate(manifest: &RegistryManifest, out_dir: &Path) -> Result<GenerateReport, RegistryError> {
    let names = manifest
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| item_file_name(index, item))
        .collect::<Result<Vec<_>, _>>()?;

    std::fs::create_dir_all(out_dir).map_err(|source| RegistryError::CreateOutputDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    for (item, file_name) in manifest.items.iter().zip(&names) {
        let path = out_dir.join(file_name);
        std::fs::write(&path, render_item(item))
            .map_err(|source| RegistryError::WriteItem { path: path.clone(), source })?;
        info!(file = %path.display(), "Generated registry item");
    }

    debug!(count = names.len(), out_dir = %out_dir.display(), "Registry split complete");
    Ok(GenerateReport {
        out_dir: out_dir.to_path_buf(),
        files: names,
    })
}

/// Load `manifest_path` and split it into `out_dir`.
///
/// # Errors
///
/// See [`RegistryManifest::load`] and [`generate`].
pub fn generate_from_path(
    manifest_path: &Path,
    out_dir: &Path,
) -> Result<GenerateReport, RegistryError> {
    let manifest = RegistryManifest::load(manifest_path)?;
    generate(&manifest, out_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {}", other),
        }
    }

    #[test]
    fn render_item_uses_two_space_indent_and_trailing_newline() {
        let rendered = render_item(&item(json!({"name": "button", "type": "registry:ui"})));
        assert_eq!(
            rendered,
            "{\n  \"name\": \"button\",\n  \"type\": \"registry:ui\"\n}\n"
        );
    }

    #[test]
    fn render_item_preserves_key_order() {
        let rendered = render_item(&item(json!({"zeta": 1, "alpha": 2, "name": "x"})));
        let zeta = rendered.find("zeta").unwrap();
        let alpha = rendered.find("alpha").unwrap();
        let name = rendered.find("name").unwrap();
        assert!(zeta < alpha && alpha < name, "got: {}", rendered);
    }

    #[test]
    fn item_file_name_appends_json() {
        assert_eq!(
            item_file_name(0, &item(json!({"name": "data-table"}))).unwrap(),
            "data-table.json"
        );
    }

    #[test]
    fn item_file_name_rejects_bad_names() {
        for (value, reason) in [
            (json!({}), "name is missing"),
            (json!({"name": ""}), "name is empty"),
            (json!({"name": 3}), "name must be a string"),
            (json!({"name": "../etc"}), "name contains a path separator"),
            (json!({"name": "a\\b"}), "name contains a path separator"),
            (json!({"name": ".."}), "name is a relative path component"),
        ] {
            match item_file_name(4, &item(value.clone())) {
                Err(RegistryError::InvalidItemName { index, reason: got, .. }) => {
                    assert_eq!(index, 4);
                    assert_eq!(got, reason, "for {}", value);
                }
                other => panic!("Expected InvalidItemName for {}, got {:?}", value, other),
            }
        }
    }

    #[test]
    fn parse_rejects_manifest_without_items() {
        let result = RegistryManifest::parse(r#"{"name":"registry"}"#, Path::new("registry.json"));
        assert!(matches!(result, Err(RegistryError::InvalidManifest { .. })));
    }

    #[test]
    fn report_display_lists_files_and_summary() {
        let report = GenerateReport {
            out_dir: PathBuf::from("components-json"),
            files: vec!["button.json".to_string(), "card.json".to_string()],
        };
        assert_eq!(
            report.to_string(),
            "✓ Generated button.json\n✓ Generated card.json\nGenerated 2 component files in components-json"
        );
    }
}
