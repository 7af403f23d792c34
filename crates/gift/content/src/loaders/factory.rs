//! Content factory for building the catalog from data files.

use std::path::{Path, PathBuf};

use gift_core::{Catalog, CatalogIndex, Character, CharacterMeta, Gift, GuideConfig, Modifier};

use crate::loaders::{
    CharacterLoader, ConfigLoader, GiftLoader, LoadResult, MetaLoader, ModifierLoader,
};

/// Content factory that loads all guide content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── guide.toml              (optional)
/// ├── gifts.json
/// ├── character_traits.json
/// ├── gift_modifiers.json
/// └── characters.json         (optional)
/// ```
///
/// File names other than `guide.toml` can be changed through the `[files]`
/// table of the config.
pub struct ContentFactory {
    data_dir: PathBuf,
    config: GuideConfig,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "guide.toml";

    /// Creates a factory using default file names.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            config: GuideConfig::default(),
        }
    }

    /// Creates a factory configured from `guide.toml` in `data_dir`.
    pub fn open(data_dir: impl Into<PathBuf>) -> LoadResult<Self> {
        let mut factory = Self::new(data_dir);
        factory.config = factory.load_config()?;
        Ok(factory)
    }

    /// Load guide configuration from `guide.toml`.
    pub fn load_config(&self) -> LoadResult<GuideConfig> {
        ConfigLoader::load(&self.data_dir.join(Self::CONFIG_FILE))
    }

    pub fn load_gifts(&self) -> LoadResult<Vec<Gift>> {
        GiftLoader::load(&self.path_of(&self.config.files.gifts))
    }

    pub fn load_characters(&self) -> LoadResult<Vec<Character>> {
        CharacterLoader::load(&self.path_of(&self.config.files.characters))
    }

    pub fn load_modifiers(&self) -> LoadResult<Vec<Modifier>> {
        ModifierLoader::load(&self.path_of(&self.config.files.modifiers))
    }

    /// Load optional character metadata. Never fails.
    pub fn load_metas(&self) -> Vec<CharacterMeta> {
        MetaLoader::load(&self.path_of(&self.config.files.character_meta))
    }

    /// Load every collection into a [`Catalog`].
    pub fn load_catalog(&self) -> LoadResult<Catalog> {
        Ok(Catalog {
            characters: self.load_characters()?,
            gifts: self.load_gifts()?,
            modifiers: self.load_modifiers()?,
            metas: self.load_metas(),
        })
    }

    /// Load every collection and build the lookup index.
    pub fn load_index(&self) -> LoadResult<CatalogIndex> {
        let index = CatalogIndex::new(self.load_catalog()?);
        tracing::debug!(
            characters = index.characters().len(),
            gifts = index.gifts().len(),
            modifiers = index.modifier_count(),
            metas = index.metas().len(),
            "catalog indexed"
        );
        Ok(index)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> &GuideConfig {
        &self.config
    }

    fn path_of(&self, file_name: &str) -> PathBuf {
        self.data_dir.join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
        assert_eq!(
            factory.path_of(&factory.config().files.gifts),
            Path::new("/tmp/data/gifts.json")
        );
    }

    #[test]
    fn test_bundled_data_loads() {
        let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        let factory = ContentFactory::open(&data_dir).unwrap();
        let index = factory.load_index().unwrap();

        assert!(!index.gifts().is_empty());
        assert!(!index.characters().is_empty());
        assert!(index.modifier_count() > 0);
        assert!(!index.metas().is_empty());
    }
}
