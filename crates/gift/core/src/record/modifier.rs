use core::fmt;
use core::str::FromStr;

/// What a modifier's target refers to.
///
/// The set of kinds grows as the data grows, so the enumeration is open:
/// tags that are not recognized parse into [`ModifierKind::Other`] and never
/// match anything. Tags are case-sensitive.
#[derive(Clone, Debug, PartialEq, Eq, Hash, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ModifierKind {
    /// Target is a trait name, matched case-insensitively.
    Trait,
    /// Target is a character command name (or display name), matched exactly.
    Character,
    /// Target is a show key, matched exactly.
    Show,
    /// Unrecognized tag, kept verbatim.
    #[strum(default)]
    Other(String),
}

impl ModifierKind {
    /// Parses a tag; unknown tags become [`ModifierKind::Other`].
    pub fn from_tag(tag: &str) -> Self {
        match Self::from_str(tag) {
            Ok(kind) => kind,
            Err(_) => Self::Other(tag.to_owned()),
        }
    }

    /// Tag as it appears in fixture data.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Trait => "trait",
            Self::Character => "character",
            Self::Show => "show",
            Self::Other(tag) => tag,
        }
    }

    /// Returns true for kinds the engine knows how to match.
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl Default for ModifierKind {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl fmt::Display for ModifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ModifierKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ModifierKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        super::lenient::kind(deserializer)
    }
}

/// A rule that adds deltas to one gift's rewards when a character matches.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Modifier {
    /// Key of the gift this modifier belongs to.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "super::lenient::text")
    )]
    pub gift_name: String,

    #[cfg_attr(feature = "serde", serde(rename = "modifier_type", default))]
    pub kind: ModifierKind,

    /// Trait name, command name, or show key depending on `kind`.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "super::lenient::text")
    )]
    pub target: String,

    #[cfg_attr(
        feature = "serde",
        serde(rename = "fxp_modifier", default, deserialize_with = "super::lenient::int")
    )]
    pub fxp_delta: i64,

    #[cfg_attr(
        feature = "serde",
        serde(rename = "rxp_modifier", default, deserialize_with = "super::lenient::int")
    )]
    pub rxp_delta: i64,
}

impl Modifier {
    pub fn new(
        gift_name: impl Into<String>,
        kind: ModifierKind,
        target: impl Into<String>,
        fxp_delta: i64,
        rxp_delta: i64,
    ) -> Self {
        Self {
            gift_name: gift_name.into(),
            kind,
            target: target.into(),
            fxp_delta,
            rxp_delta,
        }
    }

    /// Trait modifier shorthand.
    pub fn on_trait(gift_name: &str, target: &str, fxp_delta: i64, rxp_delta: i64) -> Self {
        Self::new(gift_name, ModifierKind::Trait, target, fxp_delta, rxp_delta)
    }

    /// Character modifier shorthand.
    pub fn on_character(gift_name: &str, target: &str, fxp_delta: i64, rxp_delta: i64) -> Self {
        Self::new(gift_name, ModifierKind::Character, target, fxp_delta, rxp_delta)
    }

    /// Show modifier shorthand.
    pub fn on_show(gift_name: &str, target: &str, fxp_delta: i64, rxp_delta: i64) -> Self {
        Self::new(gift_name, ModifierKind::Show, target, fxp_delta, rxp_delta)
    }

    /// Returns true if this modifier belongs to the gift named `gift_name`.
    pub fn belongs_to(&self, gift_name: &str) -> bool {
        !self.gift_name.is_empty() && self.gift_name == gift_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_tag() {
        assert_eq!(ModifierKind::from_tag("trait"), ModifierKind::Trait);
        assert_eq!(ModifierKind::from_tag("character"), ModifierKind::Character);
        assert_eq!(ModifierKind::from_tag("show"), ModifierKind::Show);
        assert_eq!(
            ModifierKind::from_tag("category"),
            ModifierKind::Other("category".to_string())
        );
        // Tags are case-sensitive.
        assert_eq!(
            ModifierKind::from_tag("Trait"),
            ModifierKind::Other("Trait".to_string())
        );
    }

    #[test]
    fn test_kind_display_round_trips_tag() {
        assert_eq!(ModifierKind::Show.to_string(), "show");
        assert_eq!(ModifierKind::from_tag("season").to_string(), "season");
        assert!(!ModifierKind::default().is_known());
    }

    #[test]
    fn test_belongs_to_requires_key() {
        let modifier = Modifier::on_trait("flowers", "stoic", 3, -1);
        assert!(modifier.belongs_to("flowers"));
        assert!(!modifier.belongs_to("chocolate"));
        assert!(!Modifier::on_trait("", "stoic", 1, 1).belongs_to(""));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_fixture_row() {
        let modifier: Modifier = serde_json::from_value(serde_json::json!({
            "gift_name": "flowers",
            "modifier_type": "trait",
            "target": "stoic",
            "fxp_modifier": "3",
            "rxp_modifier": -1
        }))
        .unwrap();
        assert_eq!(modifier, Modifier::on_trait("flowers", "stoic", 3, -1));

        let unknown: Modifier = serde_json::from_value(serde_json::json!({
            "gift_name": "flowers",
            "modifier_type": "weather",
            "target": "rain"
        }))
        .unwrap();
        assert_eq!(unknown.kind, ModifierKind::Other("weather".to_string()));
        assert_eq!((unknown.fxp_delta, unknown.rxp_delta), (0, 0));
    }
}
