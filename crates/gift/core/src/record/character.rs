use crate::traits::TraitSet;

/// A character with the traits and show used for modifier matching.
///
/// The combined trait set is computed once at construction from the physical
/// and personality lists, so fields are only reachable through accessors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "CharacterRow")
)]
pub struct Character {
    command_name: String,
    display_name: String,
    physical_traits: Vec<String>,
    personality_traits: Vec<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    show: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    image: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing))]
    traits: TraitSet,
}

impl Character {
    pub fn new(command_name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            command_name: command_name.into(),
            display_name: display_name.into(),
            ..Self::default()
        }
    }

    /// Replaces the physical traits (builder pattern).
    #[must_use]
    pub fn with_physical_traits<I, S>(mut self, traits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.physical_traits = traits.into_iter().map(Into::into).collect();
        self.rebuild_traits();
        self
    }

    /// Replaces the personality traits (builder pattern).
    #[must_use]
    pub fn with_personality_traits<I, S>(mut self, traits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.personality_traits = traits.into_iter().map(Into::into).collect();
        self.rebuild_traits();
        self
    }

    /// Sets the show key (builder pattern). Blank keys clear the show.
    #[must_use]
    pub fn with_show(mut self, show: impl Into<String>) -> Self {
        let show = show.into();
        self.show = (!show.trim().is_empty()).then_some(show);
        self
    }

    /// Sets the portrait file (builder pattern).
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn command_name(&self) -> &str {
        &self.command_name
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Display name, falling back to the command name.
    pub fn label(&self) -> &str {
        if self.display_name.is_empty() {
            &self.command_name
        } else {
            &self.display_name
        }
    }

    pub fn physical_traits(&self) -> &[String] {
        &self.physical_traits
    }

    pub fn personality_traits(&self) -> &[String] {
        &self.personality_traits
    }

    pub fn show(&self) -> Option<&str> {
        self.show.as_deref()
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Normalized union of physical and personality traits.
    pub fn traits(&self) -> &TraitSet {
        &self.traits
    }

    /// Returns true if the record carries its identifying key.
    pub fn has_key(&self) -> bool {
        !self.command_name.is_empty()
    }

    fn rebuild_traits(&mut self) {
        self.traits = TraitSet::from_traits(
            self.physical_traits
                .iter()
                .chain(self.personality_traits.iter()),
        );
    }
}

/// Wire shape of a `character_traits.json` row.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CharacterRow {
    #[serde(default, deserialize_with = "super::lenient::text")]
    command_name: String,
    #[serde(default, deserialize_with = "super::lenient::text")]
    display_name: String,
    #[serde(default, deserialize_with = "super::lenient::text_list")]
    physical_traits: Vec<String>,
    #[serde(default, deserialize_with = "super::lenient::text_list")]
    personality_traits: Vec<String>,
    #[serde(default, deserialize_with = "super::lenient::opt_text")]
    show: Option<String>,
    #[serde(default, deserialize_with = "super::lenient::opt_text")]
    image: Option<String>,
}

#[cfg(feature = "serde")]
impl From<CharacterRow> for Character {
    fn from(row: CharacterRow) -> Self {
        let mut character = Self {
            command_name: row.command_name,
            display_name: row.display_name,
            physical_traits: row.physical_traits,
            personality_traits: row.personality_traits,
            show: row.show,
            image: row.image,
            traits: TraitSet::new(),
        };
        character.rebuild_traits();
        character
    }
}
