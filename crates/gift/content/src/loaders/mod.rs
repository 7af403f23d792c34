//! Content loaders for reading guide data from files.
//!
//! One loader per fixture file, plus [`ContentFactory`] tying them to a data
//! directory.

pub mod characters;
pub mod config;
pub mod factory;
pub mod gifts;
pub mod meta;
pub mod modifiers;

pub use characters::CharacterLoader;
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use gifts::GiftLoader;
pub use meta::MetaLoader;
pub use modifiers::ModifierLoader;

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Parses a JSON array of rows.
///
/// The document itself must be an array. Elements that are not objects, or
/// that fail to decode, are skipped with a warning; `null` elements are
/// skipped silently.
pub(crate) fn parse_rows<T: DeserializeOwned>(content: &str, path: &Path) -> LoadResult<Vec<T>> {
    let document: Value = serde_json::from_str(content)
        .map_err(|e| anyhow::anyhow!("Failed to parse JSON {}: {}", path.display(), e))?;

    let Value::Array(elements) = document else {
        anyhow::bail!("Expected a JSON array in {}", path.display());
    };

    let mut rows = Vec::with_capacity(elements.len());
    for (position, element) in elements.into_iter().enumerate() {
        match element {
            Value::Null => {}
            Value::Object(_) => match serde_json::from_value(element) {
                Ok(row) => rows.push(row),
                Err(error) => tracing::warn!(
                    file = %path.display(),
                    position,
                    %error,
                    "skipping undecodable row"
                ),
            },
            other => tracing::warn!(
                file = %path.display(),
                position,
                kind = value_kind(&other),
                "skipping non-object row"
            ),
        }
    }
    Ok(rows)
}

/// Reads and parses a required JSON array file.
pub(crate) fn load_rows<T: DeserializeOwned>(path: &Path) -> LoadResult<Vec<T>> {
    let content = read_file(path)?;
    let rows = parse_rows(&content, path)?;
    tracing::debug!(file = %path.display(), rows = rows.len(), "loaded fixture");
    Ok(rows)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
