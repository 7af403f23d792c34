//! Character trait sets.
//!
//! A character's physical and personality traits are matched as one set.
//! Source data is inconsistent about casing and padding (`"Scar"`, `"scar "`),
//! so every trait is normalized before it enters the set and every lookup
//! normalizes its query the same way.

use std::collections::BTreeSet;

/// Normalizes a trait name for matching: surrounding whitespace removed,
/// lowercased.
pub fn normalize_trait(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Normalized, de-duplicated set of trait names.
///
/// Blank entries never enter the set, so a blank query never matches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TraitSet {
    traits: BTreeSet<String>,
}

impl TraitSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from raw trait names.
    pub fn from_traits<I, S>(traits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for name in traits {
            set.insert(name.as_ref());
        }
        set
    }

    /// Inserts a raw trait name. Returns `false` for blank or duplicate names.
    pub fn insert(&mut self, raw: &str) -> bool {
        let normalized = normalize_trait(raw);
        if normalized.is_empty() {
            return false;
        }
        self.traits.insert(normalized)
    }

    /// Returns true if the set holds `raw` after normalization.
    pub fn contains(&self, raw: &str) -> bool {
        let normalized = normalize_trait(raw);
        !normalized.is_empty() && self.traits.contains(&normalized)
    }

    pub fn len(&self) -> usize {
        self.traits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }

    /// Iterates normalized trait names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.traits.iter().map(String::as_str)
    }
}
