//! Fixture loaders for the gift guide.
//!
//! Reads the JSON collections (gifts, character traits, gift modifiers and
//! optional character metadata) plus the `guide.toml` configuration from a
//! data directory, and assembles them into a [`gift_core::Catalog`].
//!
//! All row decoding goes through the tolerant serde impls in `gift-core`, so a
//! hand-edited fixture with odd values still loads; only unreadable or
//! structurally wrong files are errors.

pub mod loaders;

pub use loaders::{
    CharacterLoader, ConfigLoader, ContentFactory, GiftLoader, LoadResult, MetaLoader,
    ModifierLoader,
};
