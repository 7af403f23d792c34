//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use crate::cli::Cli;

/// Runtime settings for the `giftguide` binary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Directory holding the fixture files and `guide.toml`.
    pub data_dir: PathBuf,
    /// Directory for the optional log file.
    pub log_dir: PathBuf,
    /// Mirror logs into `<log_dir>/giftguide.log`.
    pub log_to_file: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(Self::DEFAULT_DATA_DIR),
            log_dir: default_log_dir(),
            log_to_file: false,
        }
    }
}

impl ClientConfig {
    pub const DEFAULT_DATA_DIR: &'static str = "crates/gift/content/data";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GIFT_DATA_DIR` - Fixture directory (default: `crates/gift/content/data`)
    /// - `GIFT_LOG_DIR` - Log directory (default: platform cache dir)
    /// - `GIFT_LOG_FILE` - Enable the log file (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = env::var_os("GIFT_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(dir) = env::var_os("GIFT_LOG_DIR") {
            config.log_dir = PathBuf::from(dir);
        }

        // Setting the variable without a value also enables it
        if let Some(enable) = read_env::<bool>("GIFT_LOG_FILE") {
            config.log_to_file = enable;
        } else if env::var("GIFT_LOG_FILE").is_ok() {
            config.log_to_file = true;
        }

        config
    }

    /// Applies command-line flags, which take precedence over the environment.
    #[must_use]
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(dir) = &cli.data_dir {
            self.data_dir = dir.clone();
        }
        if let Some(dir) = &cli.log_dir {
            self.log_dir = dir.clone();
        }
        if cli.log_file {
            self.log_to_file = true;
        }
        self
    }
}

/// Platform-specific log directory.
///
/// - macOS: `~/Library/Caches/giftguide/logs`
/// - Linux: `~/.cache/giftguide/logs` (or `$XDG_CACHE_HOME/giftguide/logs`)
/// - Windows: `%LOCALAPPDATA%\giftguide\cache\logs`
/// - Fallback: `<tmp>/giftguide/logs`
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "giftguide")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| env::temp_dir().join("giftguide"))
        .join("logs")
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_overrides() {
        let base = ClientConfig {
            data_dir: PathBuf::from("from-env"),
            log_dir: PathBuf::from("logs"),
            log_to_file: false,
        };

        let cli = Cli::parse_from(["giftguide", "--data-dir", "from-cli", "--log-file", "gifts"]);
        let config = base.clone().with_cli(&cli);
        assert_eq!(config.data_dir, PathBuf::from("from-cli"));
        assert_eq!(config.log_dir, PathBuf::from("logs"));
        assert!(config.log_to_file);

        let cli = Cli::parse_from(["giftguide", "gifts"]);
        assert_eq!(base.clone().with_cli(&cli), base);
    }

    #[test]
    fn test_default_log_dir_ends_in_logs() {
        assert!(default_log_dir().ends_with("logs"));
    }
}
