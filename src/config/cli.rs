use crate::config::RankingConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "sequence-rank")]
#[command(about = "Filter, rescale and rank a sample set of scored elements")]
pub struct CliConfig {
    #[arg(long, help = "TOML file with ranking settings")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "5", help = "Number of sample elements to generate")]
    pub count: usize,

    #[arg(long)]
    pub score_key: Option<String>,

    #[arg(long)]
    pub threshold: Option<f64>,

    #[arg(long)]
    pub scale: Option<f64>,

    #[arg(long)]
    pub limit: Option<usize>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Loads the config file if given, then applies command-line overrides.
    pub fn ranking_config(&self) -> Result<RankingConfig> {
        let mut config = match &self.config {
            Some(path) => RankingConfig::from_file(path)?,
            None => RankingConfig::default(),
        };

        if let Some(key) = &self.score_key {
            config.score_key = key.clone();
        }
        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if let Some(scale) = self.scale {
            config.scale = scale;
        }
        if self.limit.is_some() {
            config.limit = self.limit;
        }

        config.validate()?;
        Ok(config)
    }
}
