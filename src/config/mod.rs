#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::{Result, SequenceError};
use crate::utils::validation::{
    validate_finite, validate_non_empty_string, validate_positive_number, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for a [`RankingPipeline`](crate::app::ranking::RankingPipeline) run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Float attribute used for filtering, scaling and ordering.
    pub score_key: String,
    /// String attribute identifying an element in reports.
    pub id_key: String,
    /// Elements must score strictly above this to be kept.
    pub threshold: f64,
    pub scale: f64,
    pub limit: Option<usize>,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            score_key: "score".to_string(),
            id_key: "id".to_string(),
            threshold: 0.0,
            scale: 1.0,
            limit: None,
        }
    }
}

impl RankingConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SequenceError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| SequenceError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for RankingConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("score_key", &self.score_key)?;
        validate_non_empty_string("id_key", &self.id_key)?;
        validate_finite("threshold", self.threshold)?;
        validate_finite("scale", self.scale)?;
        if let Some(limit) = self.limit {
            validate_positive_number("limit", limit, 1)?;
        }
        Ok(())
    }
}
