//! Read-only records consumed by the resolution engine.
//!
//! Records are built once, either in code or from fixture rows, and never
//! mutated by the engine. Missing or malformed fields are resolved to neutral
//! defaults at construction so the rules never have to re-check them.
mod character;
mod gift;
#[cfg(feature = "serde")]
pub mod lenient;
mod modifier;

pub use character::Character;
pub use gift::Gift;
pub use modifier::{Modifier, ModifierKind};
