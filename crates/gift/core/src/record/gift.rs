/// A gift and its base reward values.
///
/// Base values default to `0` when absent or non-numeric in the source row.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gift {
    /// Unique key referenced by modifiers.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "super::lenient::text")
    )]
    pub gift_name: String,

    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "super::lenient::text")
    )]
    pub display_name: String,

    /// Base friendship experience.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "super::lenient::int")
    )]
    pub base_fxp: i64,

    /// Base relationship experience.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "super::lenient::int")
    )]
    pub base_rxp: i64,
}

impl Gift {
    pub fn new(gift_name: impl Into<String>, base_fxp: i64, base_rxp: i64) -> Self {
        Self {
            gift_name: gift_name.into(),
            display_name: String::new(),
            base_fxp,
            base_rxp,
        }
    }

    /// Sets the display name (builder pattern).
    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Display name, falling back to the gift key.
    pub fn label(&self) -> &str {
        if self.display_name.is_empty() {
            &self.gift_name
        } else {
            &self.display_name
        }
    }

    /// Returns true if the record carries its identifying key.
    pub fn has_key(&self) -> bool {
        !self.gift_name.is_empty()
    }
}
