//! Character metadata loader.

use std::path::Path;

use gift_core::CharacterMeta;

use crate::loaders::{parse_rows, read_file};

/// Loader for the optional `characters.json`.
pub struct MetaLoader;

impl MetaLoader {
    /// Load character metadata, degrading to an empty list.
    ///
    /// Metadata only affects presentation, so a missing file or a file that is
    /// not a JSON array is logged and ignored.
    pub fn load(path: &Path) -> Vec<CharacterMeta> {
        if !path.exists() {
            tracing::warn!(
                file = %path.display(),
                "character metadata not found; continuing without it"
            );
            return Vec::new();
        }

        match read_file(path).and_then(|content| parse_rows(&content, path)) {
            Ok(metas) => metas,
            Err(error) => {
                tracing::warn!(%error, "ignoring character metadata");
                Vec::new()
            }
        }
    }
}
