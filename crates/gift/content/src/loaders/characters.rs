//! Character trait loader.

use std::path::Path;

use gift_core::Character;

use crate::loaders::{LoadResult, load_rows};

/// Loader for `character_traits.json`.
pub struct CharacterLoader;

impl CharacterLoader {
    /// Load characters from a JSON array file.
    ///
    /// Each row's physical and personality traits are merged into the
    /// character's normalized trait set while decoding.
    pub fn load(path: &Path) -> LoadResult<Vec<Character>> {
        load_rows(path)
    }
}
