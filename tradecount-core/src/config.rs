//! TOML defaults for confidence and tuned parameter count.
//!
//! ```toml
//! confidence = 0.95
//! tuned_params = 3
//! ```
//!
//! Missing keys fall back to 0.99 and 1.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sample_size::{SampleSizeRequest, DEFAULT_CONFIDENCE, DEFAULT_TUNED_PARAMS};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Defaults applied to every request that does not override them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SampleSizeConfig {
    pub confidence: f64,
    pub tuned_params: u32,
}

impl Default for SampleSizeConfig {
    fn default() -> Self {
        Self {
            confidence: DEFAULT_CONFIDENCE,
            tuned_params: DEFAULT_TUNED_PARAMS,
        }
    }
}

impl SampleSizeConfig {
    /// Load from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Build a request for `win_rate` and `reward_risk` using these defaults.
    pub fn request(&self, win_rate: f64, reward_risk: f64) -> SampleSizeRequest {
        SampleSizeRequest::new(win_rate, reward_risk)
            .with_confidence(self.confidence)
            .with_tuned_params(self.tuned_params)
    }
}
