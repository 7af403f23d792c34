//! Loads fixtures and builds the catalog index.

use std::sync::Arc;

use anyhow::{Context, Result};
use gift_content::{ContentFactory, LoadResult};
use gift_core::{Catalog, CatalogIndex, GuideConfig};

use crate::config::ClientConfig;

/// Loaded content ready for queries.
pub struct GuideSetup {
    pub config: GuideConfig,
    pub index: CatalogIndex,
}

/// Reads `guide.toml`, then the four fixture files concurrently.
pub async fn load_guide(config: &ClientConfig) -> Result<GuideSetup> {
    let data_dir = config.data_dir.clone();
    tracing::debug!("Loading guide content from {}", data_dir.display());

    let factory = tokio::task::spawn_blocking(move || ContentFactory::open(data_dir))
        .await
        .context("config loader task failed")??;
    let factory = Arc::new(factory);

    let (characters, gifts, modifiers, metas) = tokio::try_join!(
        blocking(&factory, ContentFactory::load_characters),
        blocking(&factory, ContentFactory::load_gifts),
        blocking(&factory, ContentFactory::load_modifiers),
        blocking(&factory, |factory: &ContentFactory| Ok(factory.load_metas())),
    )?;

    let index = CatalogIndex::new(Catalog {
        characters,
        gifts,
        modifiers,
        metas,
    });
    tracing::info!(
        characters = index.characters().len(),
        gifts = index.gifts().len(),
        modifiers = index.modifier_count(),
        "Guide content loaded"
    );

    Ok(GuideSetup {
        config: factory.config().clone(),
        index,
    })
}

async fn blocking<T, F>(factory: &Arc<ContentFactory>, load: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce(&ContentFactory) -> LoadResult<T> + Send + 'static,
{
    let factory = Arc::clone(factory);
    tokio::task::spawn_blocking(move || load(&factory))
        .await
        .context("loader task failed")?
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_load_bundled_data() {
        let config = ClientConfig {
            data_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../gift/content/data"),
            ..ClientConfig::default()
        };
        let setup = load_guide(&config).await.unwrap();
        assert_eq!(setup.index.gifts().len(), 7);
        assert_eq!(setup.index.characters().len(), 7);
        assert_eq!(
            setup.index.character("egan").unwrap().show(),
            Some("masters_of_the_air")
        );
        assert!(setup.config.show_labels.contains_key("masters_of_the_air"));
    }

    #[tokio::test]
    async fn test_missing_data_dir_fails() {
        let config = ClientConfig {
            data_dir: PathBuf::from("/nonexistent/giftguide"),
            ..ClientConfig::default()
        };
        let err = load_guide(&config).await.err().unwrap();
        assert!(format!("{err:#}").contains("Failed to read file"));
    }
}
