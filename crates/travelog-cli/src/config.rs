//! Configuration file handling.
//!
//! Settings come from an optional `travelog.toml`; command-line flags win
//! over file values.

use crate::args::{Commands, Order};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use travelog_core::RatingScale;

pub const DEFAULT_CONFIG_FILE: &str = "travelog.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ratings: RatingsConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingsConfig {
    /// Scale the exported ratings were entered on.
    #[serde(default)]
    pub input_scale: RatingScale,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// List the most recently added city first.
    #[serde(default = "default_newest_first")]
    pub newest_first: bool,

    /// Print JSON instead of a table.
    #[serde(default)]
    pub json: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            newest_first: default_newest_first(),
            json: false,
        }
    }
}

fn default_newest_first() -> bool {
    true
}

impl Config {
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Explicit path if given, else `./travelog.toml` if present, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_path(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::load_from_path(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn default_toml() -> String {
        format!(
            "# travelog configuration\n\n\
             [ratings]\n\
             # Scale exported ratings were entered on: \"five\" or \"ten\".\n\
             # Ten-point ratings are halved before aggregation.\n\
             input_scale = \"{}\"\n\n\
             [display]\n\
             newest_first = {}\n\
             json = {}\n",
            RatingScale::default(),
            default_newest_first(),
            false
        )
    }
}

/// Effective settings for one command: flags first, then the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub scale: RatingScale,
    pub newest_first: bool,
    pub json: bool,
}

impl Settings {
    pub fn resolve(command: &Commands, config: &Config) -> Self {
        let mut settings = Settings {
            scale: config.ratings.input_scale,
            newest_first: config.display.newest_first,
            json: config.display.json,
        };

        match command {
            Commands::Aggregate {
                scale,
                order,
                json,
                table,
                ..
            } => {
                if let Some(scale) = scale {
                    settings.scale = *scale;
                }
                if let Some(order) = order {
                    settings.newest_first = *order == Order::Newest;
                }
                if *json {
                    settings.json = true;
                } else if *table {
                    settings.json = false;
                }
            }
            Commands::Stats {
                scale: Some(scale), ..
            } => settings.scale = *scale,
            _ => {}
        }

        settings
    }
}
