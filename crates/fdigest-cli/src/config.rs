//! # Configuration
//!
//! Optional YAML file supplied with `--config`. Values set on the command
//! line win over the file; the file wins over built-in defaults.
//!
//! ```yaml
//! block_size: 65536
//! format: json
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use fdigest_core::DEFAULT_BLOCK_SIZE;

/// How `fdigest hash` renders its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `file <path> sha256: <hex>`
    #[default]
    Text,
    /// One JSON object per digest.
    Json,
}

/// Contents of the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DigestConfig {
    /// Read size in bytes.
    #[serde(default)]
    pub block_size: Option<usize>,
    /// Output format for `hash`.
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

/// Effective settings after applying precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub block_size: usize,
    pub format: OutputFormat,
}

impl DigestConfig {
    /// Parse a YAML configuration file. An empty file is the default config.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load from `path` if given, otherwise return the default config.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => {
                tracing::debug!(config = %p.display(), "loading config");
                Self::load(p)
            }
            None => Ok(Self::default()),
        }
    }

    fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Combine with command-line overrides.
    pub fn resolve(&self, block_size: Option<usize>, format: Option<OutputFormat>) -> Settings {
        Settings {
            block_size: block_size
                .or(self.block_size)
                .unwrap_or(DEFAULT_BLOCK_SIZE),
            format: format.or(self.format).unwrap_or_default(),
        }
    }
}
