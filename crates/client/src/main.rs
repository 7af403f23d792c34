//! `giftguide` binary.
//!
//! Terminal host for the gift effect guide: loads the fixture collections,
//! builds the catalog index once, runs a single query and prints the result.
//!
//! # Examples
//!
//! ```bash
//! giftguide effect --gift flowers --character webster
//! giftguide lab sledge
//! giftguide roster --search nix --json
//! GIFT_DATA_DIR=./data giftguide gifts
//! ```

mod bootstrap;
mod cli;
mod commands;
mod config;
mod logging;
mod render;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;
use crate::commands::Session;
use crate::config::ClientConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // 1. Configuration: environment, then command-line overrides
    let config = ClientConfig::from_env().with_cli(&cli);

    // 2. Logging (guard flushes the file writer on exit)
    let _guard = logging::setup_logging(&config)?;
    tracing::debug!(?config, "Starting giftguide");

    // 3. Content
    let setup = bootstrap::load_guide(&config).await?;

    // 4. Query
    let session = Session::new(&setup.index, &setup.config, cli.json);
    match cli.command.execute(&session) {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(err) => {
            if let Some(guide_err) = err.downcast_ref::<gift_core::GuideError>() {
                let severity = guide_err.severity();
                tracing::debug!(
                    code = guide_err.error_code(),
                    severity = severity.as_str(),
                    "Query failed"
                );
                if severity.is_recoverable() {
                    eprintln!("Pass a gift, a character, or both.");
                }
            }
            Err(err)
        }
    }
}
