//! Reading and writing namespace JSON files.
//!
//! Every write goes through [`to_canonical_string`]: keys sorted at every
//! depth, 4-space indentation and a trailing newline. Two runs over the same
//! input therefore produce byte-identical files.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde_json::{Map, Value, ser::PrettyFormatter};

const INDENT: &[u8] = b"    ";

/// A namespace file loaded into memory.
pub struct JsonDocument {
    file_path: PathBuf,
    data: Map<String, Value>,
}

impl JsonDocument {
    /// Load an existing file. The root must be a JSON object.
    pub fn open(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        let value: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON: {}", path.display()))?;
        match value {
            Value::Object(data) => Ok(Self {
                file_path: path.to_path_buf(),
                data,
            }),
            _ => bail!("Root of JSON file must be an object: {}", path.display()),
        }
    }

    /// An empty document that will be written to `path` on save.
    pub fn empty(path: &Path) -> Self {
        Self {
            file_path: path.to_path_buf(),
            data: Map::new(),
        }
    }

    pub fn data_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.data
    }

    /// Write the document in canonical form.
    pub fn save(&self) -> Result<()> {
        let content = to_canonical_string(&Value::Object(self.data.clone()))?;
        fs::write(&self.file_path, content)
            .with_context(|| format!("Failed to write file: {}", self.file_path.display()))?;
        Ok(())
    }
}

/// Serialize with sorted keys, 4-space indentation and a trailing newline.
pub fn to_canonical_string(value: &Value) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    sorted(value)
        .serialize(&mut serializer)
        .context("Failed to serialize JSON")?;
    let mut content = String::from_utf8(buf).context("Serialized JSON is not valid UTF-8")?;
    content.push('\n');
    Ok(content)
}

/// Recursively sort object keys.
fn sorted(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.clone(), sorted(v)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.iter().map(sorted).collect()),
        other => other.clone(),
    }
}

/// All `*.json` files directly inside `dir`, sorted by path.
pub fn json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to read directory: {}", dir.display()))?
            .path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Namespace name of a locale file: `en/home.json` -> `home`.
pub fn namespace_of(path: &Path) -> Option<&str> {
    path.file_stem().and_then(|stem| stem.to_str())
}

/// Rewrite an existing file in canonical form.
pub fn normalize_file(path: &Path) -> Result<()> {
    JsonDocument::open(path)?.save()
}
