//! Read-only queries over a [`CatalogIndex`].
//!
//! Rankings sort by [`Effect::total`] descending. Every sort is stable, so
//! rows that tie keep their source order.

use crate::engine::{Effect, EffectBreakdown};
use crate::error::{GuideError, Result};
use crate::index::CatalogIndex;
use crate::record::{Character, Gift};

/// A gift as received by one character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GiftEffect<'a> {
    pub gift: &'a Gift,
    pub base: Effect,
    pub effect: Effect,
}

/// One character's outcome for a fixed gift.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CharacterEffect<'a> {
    pub character: &'a Character,
    pub effect: Effect,
}

/// Outcome of one gift for one character, with the modifiers that applied.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PairEffect<'a> {
    pub gift: &'a Gift,
    pub character: &'a Character,
    pub breakdown: EffectBreakdown<'a>,
}

impl PairEffect<'_> {
    pub fn effect(&self) -> Effect {
        self.breakdown.result
    }
}

/// A character's gifts split by the sign of each final value.
///
/// A gift lands in the FXP buckets by its final FXP and in the RXP buckets by
/// its final RXP; zero values land in neither. Each bucket is ordered by
/// magnitude, largest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GiftBuckets<'a> {
    pub fxp_positive: Vec<GiftEffect<'a>>,
    pub fxp_negative: Vec<GiftEffect<'a>>,
    pub rxp_positive: Vec<GiftEffect<'a>>,
    pub rxp_negative: Vec<GiftEffect<'a>>,
}

impl GiftBuckets<'_> {
    pub fn is_empty(&self) -> bool {
        self.fxp_positive.is_empty()
            && self.fxp_negative.is_empty()
            && self.rxp_positive.is_empty()
            && self.rxp_negative.is_empty()
    }
}

/// Result of [`Guide::select`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "view", rename_all = "snake_case"))]
pub enum GuideView<'a> {
    Pair(PairEffect<'a>),
    ByGift {
        gift: &'a Gift,
        rows: Vec<CharacterEffect<'a>>,
    },
    ByCharacter {
        character: &'a Character,
        rows: Vec<GiftEffect<'a>>,
    },
}

/// Query handle borrowed from a [`CatalogIndex`].
#[derive(Clone, Copy, Debug)]
pub struct Guide<'a> {
    index: &'a CatalogIndex,
}

impl CatalogIndex {
    pub fn guide(&self) -> Guide<'_> {
        Guide { index: self }
    }
}

impl<'a> Guide<'a> {
    /// Effect of `gift_name` on `command_name`.
    pub fn pair_effect(&self, gift_name: &str, command_name: &str) -> Result<PairEffect<'a>> {
        let gift = self.index.gift(gift_name)?;
        let character = self.index.character(command_name)?;
        Ok(PairEffect {
            gift,
            character,
            breakdown: self.index.explain(character, gift),
        })
    }

    /// Every character's outcome for one gift, best first.
    pub fn effects_for_gift(&self, gift_name: &str) -> Result<Vec<CharacterEffect<'a>>> {
        let gift = self.index.gift(gift_name)?;
        let mut rows: Vec<CharacterEffect<'a>> = self
            .index
            .characters()
            .iter()
            .map(|character| CharacterEffect {
                character,
                effect: self.index.effect(character, gift),
            })
            .collect();
        rows.sort_by(|a, b| b.effect.total().cmp(&a.effect.total()));
        Ok(rows)
    }

    /// Every gift's outcome for one character, best first.
    pub fn effects_for_character(&self, command_name: &str) -> Result<Vec<GiftEffect<'a>>> {
        let mut rows = self.gift_effects(command_name)?;
        rows.sort_by(|a, b| b.effect.total().cmp(&a.effect.total()));
        Ok(rows)
    }

    /// A character's gifts split into the four FXP/RXP sign buckets.
    pub fn gift_buckets(&self, command_name: &str) -> Result<GiftBuckets<'a>> {
        let mut buckets = GiftBuckets::default();
        for row in self.gift_effects(command_name)? {
            match row.effect.fxp.signum() {
                1 => buckets.fxp_positive.push(row),
                -1 => buckets.fxp_negative.push(row),
                _ => {}
            }
            match row.effect.rxp.signum() {
                1 => buckets.rxp_positive.push(row),
                -1 => buckets.rxp_negative.push(row),
                _ => {}
            }
        }

        let by_fxp = |row: &GiftEffect<'_>| core::cmp::Reverse(row.effect.fxp.unsigned_abs());
        let by_rxp = |row: &GiftEffect<'_>| core::cmp::Reverse(row.effect.rxp.unsigned_abs());
        buckets.fxp_positive.sort_by_key(by_fxp);
        buckets.fxp_negative.sort_by_key(by_fxp);
        buckets.rxp_positive.sort_by_key(by_rxp);
        buckets.rxp_negative.sort_by_key(by_rxp);
        Ok(buckets)
    }

    /// Picks the view matching which of gift and character are selected.
    ///
    /// Blank selections count as absent.
    pub fn select(&self, gift: Option<&str>, character: Option<&str>) -> Result<GuideView<'a>> {
        let gift = gift.map(str::trim).filter(|name| !name.is_empty());
        let character = character.map(str::trim).filter(|name| !name.is_empty());

        match (gift, character) {
            (Some(gift_name), Some(command_name)) => {
                self.pair_effect(gift_name, command_name).map(GuideView::Pair)
            }
            (Some(gift_name), None) => Ok(GuideView::ByGift {
                gift: self.index.gift(gift_name)?,
                rows: self.effects_for_gift(gift_name)?,
            }),
            (None, Some(command_name)) => Ok(GuideView::ByCharacter {
                character: self.index.character(command_name)?,
                rows: self.effects_for_character(command_name)?,
            }),
            (None, None) => Err(GuideError::EmptySelection),
        }
    }

    /// Unsorted gift rows for one character, in source order.
    fn gift_effects(&self, command_name: &str) -> Result<Vec<GiftEffect<'a>>> {
        let character = self.index.character(command_name)?;
        Ok(self
            .index
            .gifts()
            .iter()
            .map(|gift| GiftEffect {
                gift,
                base: Effect::base_of(gift),
                effect: self.index.effect(character, gift),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MatchReason;
    use crate::index::Catalog;
    use crate::record::Modifier;

    fn index() -> CatalogIndex {
        CatalogIndex::new(Catalog {
            characters: vec![
                Character::new("webster", "David Webster")
                    .with_physical_traits(["tall"])
                    .with_personality_traits(["Stoic", "bookish"])
                    .with_show("band_of_brothers"),
                Character::new("gibbs", "Leroy Jethro Gibbs").with_show("ncis"),
                Character::new("nixon", "Lewis Nixon").with_show("band_of_brothers"),
            ],
            gifts: vec![
                Gift::new("flowers", 5, 2),
                Gift::new("whiskey", 2, 2),
                Gift::new("book", 0, 0),
            ],
            modifiers: vec![
                Modifier::on_trait("flowers", "stoic", 3, -1),
                Modifier::on_character("whiskey", "nixon", 10, 5),
                Modifier::on_show("whiskey", "ncis", -4, -4),
                Modifier::on_trait("book", "bookish", 6, -2),
            ],
            metas: Vec::new(),
        })
    }

    #[test]
    fn test_pair_effect() {
        let index = index();
        let pair = index.guide().pair_effect("flowers", "webster").unwrap();
        assert_eq!(pair.effect(), Effect::new(8, 1));
        assert_eq!(pair.breakdown.base, Effect::new(5, 2));
        assert_eq!(pair.breakdown.applied.len(), 1);
        assert_eq!(pair.breakdown.applied[0].reason, MatchReason::Trait);
    }

    #[test]
    fn test_pair_effect_unknown_keys() {
        let index = index();
        let guide = index.guide();
        assert_eq!(
            guide.pair_effect("rocks", "webster").unwrap_err(),
            GuideError::GiftNotFound("rocks".to_string())
        );
        assert_eq!(
            guide.pair_effect("flowers", "nobody").unwrap_err(),
            GuideError::CharacterNotFound("nobody".to_string())
        );
    }

    #[test]
    fn test_effects_for_gift_sorted_by_total() {
        let index = index();
        let rows = index.guide().effects_for_gift("whiskey").unwrap();
        let order: Vec<_> = rows.iter().map(|r| r.character.command_name()).collect();
        assert_eq!(order, vec!["nixon", "webster", "gibbs"]);
        assert_eq!(rows[0].effect, Effect::new(12, 7));
        assert_eq!(rows[2].effect, Effect::new(-2, -2));
    }

    #[test]
    fn test_ties_keep_source_order() {
        let index = index();
        let rows = index.guide().effects_for_gift("book").unwrap();
        let order: Vec<_> = rows.iter().map(|r| r.character.command_name()).collect();
        assert_eq!(order, vec!["webster", "gibbs", "nixon"]);
    }

    #[test]
    fn test_effects_for_character() {
        let index = index();
        let rows = index.guide().effects_for_character("webster").unwrap();
        let order: Vec<_> = rows.iter().map(|r| r.gift.gift_name.as_str()).collect();
        assert_eq!(order, vec!["flowers", "whiskey", "book"]);
        assert_eq!(rows[0].base, Effect::new(5, 2));
        assert_eq!(rows[0].effect, Effect::new(8, 1));
        assert_eq!(rows[2].effect, Effect::new(6, -2));
    }

    #[test]
    fn test_gift_buckets() {
        let index = index();
        let buckets = index.guide().gift_buckets("webster").unwrap();
        let names = |rows: &[GiftEffect<'_>]| -> Vec<String> {
            rows.iter().map(|r| r.gift.gift_name.clone()).collect()
        };
        assert_eq!(names(&buckets.fxp_positive), vec!["flowers", "book", "whiskey"]);
        assert!(buckets.fxp_negative.is_empty());
        assert_eq!(names(&buckets.rxp_positive), vec!["whiskey", "flowers"]);
        assert_eq!(names(&buckets.rxp_negative), vec!["book"]);

        let gibbs = index.guide().gift_buckets("gibbs").unwrap();
        assert_eq!(names(&gibbs.fxp_negative), vec!["whiskey"]);
        assert_eq!(names(&gibbs.rxp_negative), vec!["whiskey"]);
        assert!(!gibbs.is_empty());
    }

    #[test]
    fn test_select() {
        let index = index();
        let guide = index.guide();

        assert!(matches!(
            guide.select(Some("flowers"), Some("webster")),
            Ok(GuideView::Pair(_))
        ));
        match guide.select(Some("whiskey"), Some("  ")).unwrap() {
            GuideView::ByGift { gift, rows } => {
                assert_eq!(gift.gift_name, "whiskey");
                assert_eq!(rows.len(), 3);
            }
            other => panic!("unexpected view: {other:?}"),
        }
        assert!(matches!(
            guide.select(None, Some("gibbs")),
            Ok(GuideView::ByCharacter { .. })
        ));
        assert_eq!(guide.select(None, None), Err(GuideError::EmptySelection));
        assert_eq!(
            guide.select(Some(""), None),
            Err(GuideError::EmptySelection)
        );
    }
}
