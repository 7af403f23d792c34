//! Gift effect rules.
//!
//! Resolves how much friendship (FXP) and relationship (RXP) experience a
//! character receives from a gift. A gift carries base values; modifiers
//! attached to the gift add deltas when they match the character by trait,
//! by name, or by show.
//!
//! # Modules
//!
//! - [`record`]: characters, gifts and modifiers as loaded from fixtures
//! - [`engine`]: the pure resolution rules
//! - [`index`]: keyed lookups over a loaded catalog
//! - [`guide`]: rankings and buckets built on the index
//! - [`roster`] / [`show`]: presentation metadata grouped by show
//!
//! The crate performs no I/O. Fixture loading lives in `gift-content`.
pub mod config;
pub mod engine;
pub mod error;
pub mod guide;
pub mod index;
pub mod record;
pub mod roster;
pub mod show;
pub mod traits;

pub use config::{DataFiles, GuideConfig};
pub use engine::{
    AppliedModifier, Effect, EffectBreakdown, MatchReason, explain_effect, match_modifier,
    resolve_effect,
};
pub use error::{ErrorSeverity, GuideError, Result};
pub use guide::{CharacterEffect, GiftBuckets, GiftEffect, Guide, GuideView, PairEffect};
pub use index::{Catalog, CatalogIndex};
pub use record::{Character, Gift, Modifier, ModifierKind};
pub use roster::{CharacterMeta, RosterSection, roster};
pub use show::{KnownShow, OTHER_SHOW, prettify_key, show_label};
pub use traits::{TraitSet, normalize_trait};
