//! Gift catalog loader.

use std::path::Path;

use gift_core::Gift;

use crate::loaders::{LoadResult, load_rows};

/// Loader for `gifts.json`.
pub struct GiftLoader;

impl GiftLoader {
    /// Load gifts from a JSON array file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON file containing gift rows
    pub fn load(path: &Path) -> LoadResult<Vec<Gift>> {
        load_rows(path)
    }
}
