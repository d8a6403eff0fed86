//! Configuration for the `match-coach` binary.
//!
//! Read from a TOML file with three optional sections:
//!
//! ```toml
//! [data]
//! dir = "./data"
//!
//! [logging]
//! level = "info"
//! json = false
//!
//! [analysis]
//! default_rank = 45
//! output = "text"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::models::RankTier;

/// Highest numeric rank that maps onto a tier.
const MAX_RANK: i32 = 80;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Where stored match data lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./data"),
        }
    }
}

/// Log filter and format. `RUST_LOG` takes precedence over `level`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Rank used when none is given on the command line (1 to 80)
    pub default_rank: Option<i32>,
    pub output: OutputFormat,
}

impl AnalysisConfig {
    /// Tier the default rank falls into.
    pub fn default_tier(&self) -> RankTier {
        RankTier::from_rank(self.default_rank)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data: DataConfig,
    pub logging: LoggingConfig,
    pub analysis: AnalysisConfig,
}

impl AppConfig {
    /// Parse and validate a TOML document.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.check()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// Load `path`, falling back to defaults when the file is absent.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    pub fn check(&self) -> Result<(), ConfigError> {
        if let Some(rank) = self.analysis.default_rank {
            if !(1..=MAX_RANK).contains(&rank) {
                return Err(ConfigError::Invalid(format!(
                    "analysis.default_rank must be 1..={}, got {}",
                    MAX_RANK, rank
                )));
            }
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Invalid("logging.level is empty".to_string()));
        }

        Ok(())
    }
}
