use std::collections::BTreeMap;

/// Fixture file names and presentation overrides.
///
/// Every field has a default, so a partial `guide.toml` only overrides what it
/// names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GuideConfig {
    pub files: DataFiles,

    /// Show key → label, taking precedence over curated labels.
    pub show_labels: BTreeMap<String, String>,
}

impl GuideConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

/// File names of the fixture collections, relative to the data directory.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DataFiles {
    pub gifts: String,
    pub characters: String,
    pub modifiers: String,
    /// Optional metadata file; a missing file means no metadata.
    pub character_meta: String,
}

impl DataFiles {
    // ===== default file names =====
    pub const DEFAULT_GIFTS: &'static str = "gifts.json";
    pub const DEFAULT_CHARACTERS: &'static str = "character_traits.json";
    pub const DEFAULT_MODIFIERS: &'static str = "gift_modifiers.json";
    pub const DEFAULT_CHARACTER_META: &'static str = "characters.json";
}

impl Default for DataFiles {
    fn default() -> Self {
        Self {
            gifts: Self::DEFAULT_GIFTS.to_string(),
            characters: Self::DEFAULT_CHARACTERS.to_string(),
            modifiers: Self::DEFAULT_MODIFIERS.to_string(),
            character_meta: Self::DEFAULT_CHARACTER_META.to_string(),
        }
    }
}
