//! Immutable lookup index over a loaded catalog.
//!
//! Built once after the fixture collections are loaded and then shared by
//! reference. Rows without an identifying key are dropped; when a key repeats,
//! lookups return the last row with that key while iteration keeps every row in
//! source order.

use std::collections::HashMap;

use crate::engine::{Effect, EffectBreakdown, explain_effect, resolve_effect};
use crate::error::{GuideError, Result};
use crate::record::{Character, Gift, Modifier};
use crate::roster::CharacterMeta;

/// The raw collections, in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    pub characters: Vec<Character>,
    pub gifts: Vec<Gift>,
    pub modifiers: Vec<Modifier>,
    /// Optional presentation metadata (`characters.json`).
    pub metas: Vec<CharacterMeta>,
}

/// Keyed view of a [`Catalog`].
#[derive(Clone, Debug, Default)]
pub struct CatalogIndex {
    characters: Vec<Character>,
    gifts: Vec<Gift>,
    metas: Vec<CharacterMeta>,
    characters_by_command: HashMap<String, usize>,
    gifts_by_name: HashMap<String, usize>,
    metas_by_command: HashMap<String, usize>,
    modifiers_by_gift: HashMap<String, Vec<Modifier>>,
    modifier_count: usize,
}

impl CatalogIndex {
    /// Indexes `catalog`.
    ///
    /// A character's show comes from its metadata row when that row names one,
    /// otherwise from the trait row itself.
    pub fn new(catalog: Catalog) -> Self {
        let Catalog {
            characters,
            gifts,
            modifiers,
            metas,
        } = catalog;

        let metas_by_command = key_positions(&metas, |meta| meta.command_name.as_str());

        let characters: Vec<Character> = characters
            .into_iter()
            .filter(Character::has_key)
            .map(|character| {
                let meta_show = metas_by_command
                    .get(character.command_name())
                    .and_then(|&pos| metas[pos].show.clone());
                match meta_show {
                    Some(show) => character.with_show(show),
                    None => character,
                }
            })
            .collect();
        let characters_by_command = key_positions(&characters, Character::command_name);

        let gifts: Vec<Gift> = gifts.into_iter().filter(Gift::has_key).collect();
        let gifts_by_name = key_positions(&gifts, |gift| gift.gift_name.as_str());

        let mut modifiers_by_gift: HashMap<String, Vec<Modifier>> = HashMap::new();
        let mut modifier_count = 0;
        for modifier in modifiers {
            if modifier.gift_name.is_empty() {
                continue;
            }
            modifier_count += 1;
            modifiers_by_gift
                .entry(modifier.gift_name.clone())
                .or_default()
                .push(modifier);
        }

        Self {
            characters,
            gifts,
            metas,
            characters_by_command,
            gifts_by_name,
            metas_by_command,
            modifiers_by_gift,
            modifier_count,
        }
    }

    /// Looks up a gift by key.
    pub fn gift(&self, gift_name: &str) -> Result<&Gift> {
        self.gifts_by_name
            .get(gift_name)
            .map(|&pos| &self.gifts[pos])
            .ok_or_else(|| GuideError::GiftNotFound(gift_name.to_string()))
    }

    /// Looks up a character by command name.
    pub fn character(&self, command_name: &str) -> Result<&Character> {
        self.characters_by_command
            .get(command_name)
            .map(|&pos| &self.characters[pos])
            .ok_or_else(|| GuideError::CharacterNotFound(command_name.to_string()))
    }

    /// Metadata row for a character, if one was loaded.
    pub fn meta(&self, command_name: &str) -> Option<&CharacterMeta> {
        self.metas_by_command
            .get(command_name)
            .map(|&pos| &self.metas[pos])
    }

    /// Modifiers belonging to a gift, in source order.
    pub fn modifiers_for(&self, gift_name: &str) -> &[Modifier] {
        self.modifiers_by_gift
            .get(gift_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Resolves `gift` for `character` against the pre-grouped modifiers.
    pub fn effect(&self, character: &Character, gift: &Gift) -> Effect {
        resolve_effect(character, gift, self.modifiers_for(&gift.gift_name))
    }

    /// Like [`Self::effect`], recording which modifiers applied.
    pub fn explain<'a>(&'a self, character: &Character, gift: &Gift) -> EffectBreakdown<'a> {
        explain_effect(character, gift, self.modifiers_for(&gift.gift_name))
    }

    /// Characters in source order.
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// Gifts in source order.
    pub fn gifts(&self) -> &[Gift] {
        &self.gifts
    }

    /// Metadata rows in source order.
    pub fn metas(&self) -> &[CharacterMeta] {
        &self.metas
    }

    /// Characters sorted by label, case-insensitively.
    pub fn sorted_characters(&self) -> Vec<&Character> {
        let mut sorted: Vec<&Character> = self.characters.iter().collect();
        sorted.sort_by_cached_key(|character| character.label().to_lowercase());
        sorted
    }

    /// Gifts sorted by label, case-insensitively.
    pub fn sorted_gifts(&self) -> Vec<&Gift> {
        let mut sorted: Vec<&Gift> = self.gifts.iter().collect();
        sorted.sort_by_cached_key(|gift| gift.label().to_lowercase());
        sorted
    }

    /// Number of modifiers attached to some gift.
    pub fn modifier_count(&self) -> usize {
        self.modifier_count
    }
}

impl From<Catalog> for CatalogIndex {
    fn from(catalog: Catalog) -> Self {
        Self::new(catalog)
    }
}

/// Maps each non-empty key to the position of its last occurrence.
fn key_positions<T>(rows: &[T], key: impl Fn(&T) -> &str) -> HashMap<String, usize> {
    let mut positions = HashMap::with_capacity(rows.len());
    for (pos, row) in rows.iter().enumerate() {
        let key = key(row);
        if !key.is_empty() {
            positions.insert(key.to_string(), pos);
        }
    }
    positions
}
