//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{
    CharacterCmd, EffectCmd, GiftCmd, GiftsCmd, LabCmd, RosterCmd, Session, TraitsCmd,
};

/// Look up how gifts land with each character
#[derive(Parser, Debug)]
#[command(name = "giftguide")]
#[command(about = "Gift effect guide", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory containing the fixture files (overrides GIFT_DATA_DIR)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Directory for the log file (overrides GIFT_LOG_DIR)
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Also write logs to a file
    #[arg(long, global = true)]
    pub log_file: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Effect of one gift on one character
    Effect(EffectCmd),

    /// Every character's reaction to a gift
    Gift(GiftCmd),

    /// Every gift's effect on a character
    Character(CharacterCmd),

    /// A character's best and worst gifts
    Lab(LabCmd),

    /// A character's traits and show
    Traits(TraitsCmd),

    /// Characters grouped by show
    Roster(RosterCmd),

    /// List all gifts
    Gifts(GiftsCmd),
}

impl Command {
    pub fn execute(&self, session: &Session<'_>) -> anyhow::Result<String> {
        match self {
            Self::Effect(cmd) => cmd.execute(session),
            Self::Gift(cmd) => cmd.execute(session),
            Self::Character(cmd) => cmd.execute(session),
            Self::Lab(cmd) => cmd.execute(session),
            Self::Traits(cmd) => cmd.execute(session),
            Self::Roster(cmd) => cmd.execute(session),
            Self::Gifts(cmd) => cmd.execute(session),
        }
    }
}
