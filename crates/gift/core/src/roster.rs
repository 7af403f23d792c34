//! Character roster: metadata rows grouped by show.

use std::collections::BTreeMap;

use crate::show::{OTHER_SHOW, show_rank};

/// A `characters.json` row: presentation metadata for one character.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterMeta {
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::record::lenient::text")
    )]
    pub command_name: String,

    /// Display title.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::record::lenient::text")
    )]
    pub title: String,

    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "crate::record::lenient::opt_text",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub show: Option<String>,

    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "crate::record::lenient::opt_text",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub image: Option<String>,

    /// Alternate names, searched alongside title and command name.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::record::lenient::text_list")
    )]
    pub aka: Vec<String>,
}

impl CharacterMeta {
    pub fn new(command_name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            command_name: command_name.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_show(mut self, show: impl Into<String>) -> Self {
        self.show = Some(show.into());
        self
    }

    #[must_use]
    pub fn with_aka<I, S>(mut self, aka: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aka = aka.into_iter().map(Into::into).collect();
        self
    }

    /// Title, falling back to the command name.
    pub fn label(&self) -> &str {
        if self.title.is_empty() {
            &self.command_name
        } else {
            &self.title
        }
    }

    /// Roster section key: lowercased show, or `other`.
    pub fn section_key(&self) -> String {
        self.show
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_else(|| OTHER_SHOW.to_string())
    }

    /// Portrait file name: the explicit image, else the command name
    /// lowercased with whitespace runs replaced by `_`, as `.webp`.
    pub fn portrait_file(&self) -> String {
        if let Some(image) = &self.image {
            return image.clone();
        }
        let slug = self
            .command_name
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_");
        format!("{slug}.webp")
    }

    /// Case-insensitive substring search over title, command name and aliases.
    ///
    /// `needle` must already be trimmed and lowercased; an empty needle
    /// matches everything.
    fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let haystack = [self.title.as_str(), self.command_name.as_str()]
            .into_iter()
            .chain(self.aka.iter().map(String::as_str))
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        haystack.contains(needle)
    }
}

/// One show's worth of roster entries.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RosterSection<'a> {
    /// Lowercased show key (`other` for characters without a show).
    pub show: String,
    pub entries: Vec<&'a CharacterMeta>,
}

/// Groups `metas` by show, optionally filtered by a search query.
///
/// Known shows come first in canonical order, then other keys alphabetically.
/// Entries are sorted by label, case-insensitively.
pub fn roster<'a>(metas: &'a [CharacterMeta], query: Option<&str>) -> Vec<RosterSection<'a>> {
    let needle = query.map(|q| q.trim().to_lowercase()).unwrap_or_default();

    let mut grouped: BTreeMap<String, Vec<&'a CharacterMeta>> = BTreeMap::new();
    for meta in metas.iter().filter(|meta| meta.matches(&needle)) {
        grouped.entry(meta.section_key()).or_default().push(meta);
    }

    let mut sections: Vec<RosterSection<'a>> = grouped
        .into_iter()
        .map(|(show, mut entries)| {
            entries.sort_by_cached_key(|meta| meta.label().to_lowercase());
            RosterSection { show, entries }
        })
        .collect();

    // BTreeMap already yields unknown keys alphabetically; rank known shows first.
    sections.sort_by_key(|section| show_rank(&section.show).unwrap_or(usize::MAX));
    sections
}
