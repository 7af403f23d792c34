//! Single-pass modifier fold.

use super::Effect;
use crate::record::{Character, Gift, Modifier, ModifierKind};

/// Why a modifier applied to a character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum MatchReason {
    /// Target found in the character's normalized trait set.
    Trait,
    /// Target equals the character's command name.
    CommandName,
    /// Target equals the character's display name (secondary match).
    DisplayName,
    /// Target equals the character's show key.
    Show,
}

/// Decides whether `modifier` applies to `character`.
///
/// Gift membership is not checked here; see [`resolve_effect`].
///
/// - `trait`: normalized target is a non-empty member of the trait set
/// - `character`: exact command name, else exact display name
/// - `show`: exact show key; characters without a show never match
/// - anything else: never matches
pub fn match_modifier(character: &Character, modifier: &Modifier) -> Option<MatchReason> {
    let target = modifier.target.as_str();
    match &modifier.kind {
        ModifierKind::Trait => character
            .traits()
            .contains(target)
            .then_some(MatchReason::Trait),
        ModifierKind::Character => {
            if target.is_empty() {
                None
            } else if target == character.command_name() {
                Some(MatchReason::CommandName)
            } else if target == character.display_name() {
                Some(MatchReason::DisplayName)
            } else {
                None
            }
        }
        ModifierKind::Show => character
            .show()
            .filter(|show| *show == target)
            .map(|_| MatchReason::Show),
        ModifierKind::Other(_) => None,
    }
}

/// Computes the final rewards `character` receives from `gift`.
///
/// `modifiers` may be the whole modifier collection or a subset already
/// filtered by gift name; modifiers of other gifts are skipped either way.
/// A gift without a name or a character without a command name yields the
/// gift's base values.
pub fn resolve_effect<'a, I>(character: &Character, gift: &Gift, modifiers: I) -> Effect
where
    I: IntoIterator<Item = &'a Modifier>,
{
    let base = Effect::base_of(gift);
    if !gift.has_key() || !character.has_key() {
        return base;
    }

    modifiers
        .into_iter()
        .filter(|modifier| modifier.belongs_to(&gift.gift_name))
        .filter(|modifier| match_modifier(character, modifier).is_some())
        .fold(base, |acc, modifier| acc + Effect::delta_of(modifier))
}

/// A modifier that contributed to a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AppliedModifier<'a> {
    pub modifier: &'a Modifier,
    pub reason: MatchReason,
}

/// Base values, contributing modifiers and final values of one resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EffectBreakdown<'a> {
    pub base: Effect,
    pub applied: Vec<AppliedModifier<'a>>,
    pub result: Effect,
}

/// Same computation as [`resolve_effect`], recording which modifiers applied
/// and why. `result` always equals what `resolve_effect` returns.
pub fn explain_effect<'a, I>(
    character: &Character,
    gift: &Gift,
    modifiers: I,
) -> EffectBreakdown<'a>
where
    I: IntoIterator<Item = &'a Modifier>,
{
    let base = Effect::base_of(gift);
    let mut breakdown = EffectBreakdown {
        base,
        applied: Vec::new(),
        result: base,
    };
    if !gift.has_key() || !character.has_key() {
        return breakdown;
    }

    for modifier in modifiers {
        if !modifier.belongs_to(&gift.gift_name) {
            continue;
        }
        if let Some(reason) = match_modifier(character, modifier) {
            breakdown.result += Effect::delta_of(modifier);
            breakdown.applied.push(AppliedModifier { modifier, reason });
        }
    }

    breakdown
}
