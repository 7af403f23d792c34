//! Gift modifier loader.

use std::path::Path;

use gift_core::Modifier;

use crate::loaders::{LoadResult, load_rows};

/// Loader for `gift_modifiers.json`.
pub struct ModifierLoader;

impl ModifierLoader {
    /// Load modifiers from a JSON array file.
    ///
    /// Rows with an unrecognized `modifier_type` are kept; they simply never
    /// match a character.
    pub fn load(path: &Path) -> LoadResult<Vec<Modifier>> {
        let modifiers: Vec<Modifier> = load_rows(path)?;

        let unknown = modifiers.iter().filter(|m| !m.kind.is_known()).count();
        if unknown > 0 {
            tracing::debug!(
                file = %path.display(),
                unknown,
                "modifiers with unrecognized kinds will never apply"
            );
        }

        Ok(modifiers)
    }
}
