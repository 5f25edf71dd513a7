pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use app::ranking::{sample_elements, RankingPipeline};
pub use config::RankingConfig;
pub use crate::core::{compare_float64_desc, Element, Elements, Value};
pub use utils::error::{Result, SequenceError};
