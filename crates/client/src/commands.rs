//! Subcommand implementations.
//!
//! Each command resolves its query against the loaded index and returns the
//! text to print, either rendered tables or pretty JSON.

use anyhow::Result;
use clap::Parser;
use gift_core::{
    CatalogIndex, Character, CharacterMeta, GiftBuckets, Guide, GuideConfig, GuideView, roster,
    show_label,
};
use serde::Serialize;

use crate::render;

/// Everything a command needs: the index, presentation config and output mode.
pub struct Session<'a> {
    pub index: &'a CatalogIndex,
    pub config: &'a GuideConfig,
    pub json: bool,
}

impl<'a> Session<'a> {
    pub fn new(index: &'a CatalogIndex, config: &'a GuideConfig, json: bool) -> Self {
        Self {
            index,
            config,
            json,
        }
    }

    fn guide(&self) -> Guide<'a> {
        self.index.guide()
    }

    fn show_label(&self, key: &str) -> String {
        show_label(key, &self.config.show_labels)
    }

    fn character_show_label(&self, character: &Character) -> Option<String> {
        character.show().map(|key| self.show_label(key))
    }

    /// Runs the guide view for whichever of gift and character is given.
    fn view(&self, gift: Option<&str>, character: Option<&str>) -> Result<String> {
        let view = self.guide().select(gift, character)?;
        self.output(&view, || match &view {
            GuideView::Pair(pair) => render::pair(pair),
            GuideView::ByGift { gift, rows } => render::gift_table(gift, rows),
            GuideView::ByCharacter { character, rows } => {
                let show = self.character_show_label(character);
                render::character_table(character, show.as_deref(), rows)
            }
        })
    }

    /// JSON when requested, otherwise the lazily rendered text.
    fn output<T: Serialize>(&self, value: &T, text: impl FnOnce() -> String) -> Result<String> {
        if self.json {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(text())
        }
    }
}

/// Effect of one gift on one character
#[derive(Parser, Debug)]
pub struct EffectCmd {
    /// Gift key
    #[arg(short, long)]
    pub gift: String,

    /// Character command name
    #[arg(short, long)]
    pub character: String,
}

impl EffectCmd {
    pub fn execute(&self, session: &Session<'_>) -> Result<String> {
        session.view(Some(&self.gift), Some(&self.character))
    }
}

/// Every character's reaction to a gift
#[derive(Parser, Debug)]
pub struct GiftCmd {
    /// Gift key
    pub gift: String,
}

impl GiftCmd {
    pub fn execute(&self, session: &Session<'_>) -> Result<String> {
        session.view(Some(&self.gift), None)
    }
}

/// Every gift's effect on a character
#[derive(Parser, Debug)]
pub struct CharacterCmd {
    /// Character command name
    pub character: String,
}

impl CharacterCmd {
    pub fn execute(&self, session: &Session<'_>) -> Result<String> {
        session.view(None, Some(&self.character))
    }
}

#[derive(Serialize)]
struct LabView<'a> {
    character: &'a Character,
    traits: Vec<&'a str>,
    buckets: GiftBuckets<'a>,
}

/// A character's best and worst gifts
#[derive(Parser, Debug)]
pub struct LabCmd {
    /// Character command name
    pub character: String,
}

impl LabCmd {
    pub fn execute(&self, session: &Session<'_>) -> Result<String> {
        let character = session.index.character(&self.character)?;
        let buckets = session.guide().gift_buckets(&self.character)?;
        let show = session.character_show_label(character);
        let view = LabView {
            character,
            traits: character.traits().iter().collect(),
            buckets,
        };
        session.output(&view, || {
            render::lab(character, show.as_deref(), &view.buckets)
        })
    }
}

#[derive(Serialize)]
struct TraitsView<'a> {
    character: &'a Character,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    show_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    meta: Option<&'a CharacterMeta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    portrait: Option<&'a str>,
}

/// A character's traits and show
#[derive(Parser, Debug)]
pub struct TraitsCmd {
    /// Character command name
    pub character: String,
}

impl TraitsCmd {
    pub fn execute(&self, session: &Session<'_>) -> Result<String> {
        let character = session.index.character(&self.character)?;
        let meta = session.index.meta(&self.character);
        // Trait-row fields first, then metadata.
        let name = if character.display_name().is_empty() {
            meta.map(|meta| meta.label()).unwrap_or(character.command_name())
        } else {
            character.display_name()
        };
        let portrait = character
            .image()
            .or_else(|| meta.and_then(|meta| meta.image.as_deref()));
        let view = TraitsView {
            character,
            name,
            show_label: session.character_show_label(character),
            meta,
            portrait,
        };
        session.output(&view, || {
            render::traits(
                character,
                view.name,
                view.show_label.as_deref(),
                view.portrait,
            )
        })
    }
}

#[derive(Serialize)]
struct LabeledSection<'a> {
    show: &'a str,
    label: String,
    entries: &'a [&'a CharacterMeta],
}

/// Characters grouped by show
#[derive(Parser, Debug)]
pub struct RosterCmd {
    /// Case-insensitive search over names and aliases
    #[arg(short, long)]
    pub search: Option<String>,
}

impl RosterCmd {
    pub fn execute(&self, session: &Session<'_>) -> Result<String> {
        let sections = roster(session.index.metas(), self.search.as_deref());
        let labeled: Vec<LabeledSection<'_>> = sections
            .iter()
            .map(|section| LabeledSection {
                show: &section.show,
                label: session.show_label(&section.show),
                entries: &section.entries,
            })
            .collect();

        session.output(&labeled, || {
            if labeled.is_empty() {
                return "No characters match.".to_string();
            }
            labeled
                .iter()
                .map(|section| render::roster_section(&section.label, section.entries))
                .collect::<Vec<_>>()
                .join("\n\n")
        })
    }
}

/// List all gifts
#[derive(Parser, Debug)]
pub struct GiftsCmd {}

impl GiftsCmd {
    pub fn execute(&self, session: &Session<'_>) -> Result<String> {
        let gifts = session.index.sorted_gifts();
        session.output(&gifts, || render::gift_list(&gifts))
    }
}
