//! Show keys and their display labels.

use std::collections::BTreeMap;

use strum::IntoEnumIterator;

/// Section key for characters without a show.
pub const OTHER_SHOW: &str = "other";

/// Shows with a curated label, in canonical roster order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum KnownShow {
    BandOfBrothers,
    ThePacific,
    MastersOfTheAir,
    GenerationKill,
    Preacher,
    Ncis,
}

impl KnownShow {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::BandOfBrothers => "Band of Brothers",
            Self::ThePacific => "The Pacific",
            Self::MastersOfTheAir => "Masters of the Air",
            Self::GenerationKill => "Generation Kill",
            Self::Preacher => "Preacher",
            Self::Ncis => "NCIS",
        }
    }
}

/// Position of a show key in canonical order, if it is a known show.
pub fn show_rank(key: &str) -> Option<usize> {
    KnownShow::iter().position(|show| show.as_ref() == key)
}

/// Label for a show key.
///
/// Resolution order: configured override, curated label, then the key with
/// underscores turned into spaces and each word capitalized.
pub fn show_label(key: &str, overrides: &BTreeMap<String, String>) -> String {
    if let Some(label) = overrides.get(key) {
        return label.clone();
    }
    match key.parse::<KnownShow>() {
        Ok(show) => show.label().to_string(),
        Err(_) => prettify_key(key),
    }
}

/// `"star_trek_tng"` → `"Star Trek Tng"`.
///
/// Only the first character of each alphanumeric run is uppercased; the rest
/// is left as written.
pub fn prettify_key(key: &str) -> String {
    let mut label = String::with_capacity(key.len());
    let mut in_word = false;
    for ch in key.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        let is_word = ch.is_ascii_alphanumeric();
        if is_word && !in_word {
            label.push(ch.to_ascii_uppercase());
        } else {
            label.push(ch);
        }
        in_word = is_word;
    }
    label
}
