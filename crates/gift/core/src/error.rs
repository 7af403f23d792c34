//! Errors raised around the engine.
//!
//! The resolution engine itself is total and never fails. Errors only arise
//! when a caller asks the index or the guide for a record that does not exist.

/// How a caller should react to a [`GuideError`].
///
/// - **Recoverable**: the request was incomplete; ask again with more input
/// - **Validation**: the request named something unknown; retrying it unchanged fails again
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Lookup failures reported by [`crate::CatalogIndex`] and [`crate::Guide`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GuideError {
    /// No gift with this key exists in the catalog.
    #[error("gift '{0}' not found")]
    GiftNotFound(String),

    /// No character with this command name exists in the catalog.
    #[error("character '{0}' not found")]
    CharacterNotFound(String),

    /// A query named neither a gift nor a character.
    #[error("pick a gift, a character, or both")]
    EmptySelection,
}

impl GuideError {
    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::GiftNotFound(_) | Self::CharacterNotFound(_) => ErrorSeverity::Validation,
            Self::EmptySelection => ErrorSeverity::Recoverable,
        }
    }

    /// Stable identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::GiftNotFound(_) => "GUIDE_GIFT_NOT_FOUND",
            Self::CharacterNotFound(_) => "GUIDE_CHARACTER_NOT_FOUND",
            Self::EmptySelection => "GUIDE_EMPTY_SELECTION",
        }
    }
}

pub type Result<T> = core::result::Result<T, GuideError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_and_codes() {
        let err = GuideError::GiftNotFound("flowers".to_string());
        assert_eq!(err.to_string(), "gift 'flowers' not found");
        assert_eq!(err.error_code(), "GUIDE_GIFT_NOT_FOUND");
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(
            GuideError::CharacterNotFound("webster".to_string()).error_code(),
            "GUIDE_CHARACTER_NOT_FOUND"
        );
    }

    #[test]
    fn test_empty_selection_is_recoverable() {
        let severity = GuideError::EmptySelection.severity();
        assert!(severity.is_recoverable());
        assert_eq!(severity.as_str(), "recoverable");
    }
}
