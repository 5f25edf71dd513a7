use crate::config::RankingConfig;
use crate::core::{Element, Elements};

/// Builds `count` elements with ids `test000`, `test001`, ... and scores `0, 10, 20, ...`.
pub fn sample_elements(count: usize) -> Elements {
    (0..count)
        .map(|i| {
            Element::new()
                .with("score", (i * 10) as f64)
                .with("id", format!("test{:03}", i))
        })
        .collect()
}

/// Threshold filter, rescale, then descending sort by score.
#[derive(Debug, Clone)]
pub struct RankingPipeline {
    config: RankingConfig,
}

impl RankingPipeline {
    pub fn new(config: RankingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    pub fn run(&self, elements: &Elements) -> Elements {
        let key = self.config.score_key.as_str();
        let threshold = self.config.threshold;
        let scale = self.config.scale;

        tracing::info!(
            "Ranking {} elements by '{}' (threshold {}, scale {})",
            elements.len(),
            key,
            threshold,
            scale
        );

        let mut ranked = elements.filter(|e| e.get_float64(key) > threshold);
        ranked
            .map(|mut e| {
                let score = e.get_float64(key);
                e.set(key, score * scale);
                e
            })
            .sort_by_float64_desc(key);

        if let Some(limit) = self.config.limit {
            ranked.truncate(limit);
        }

        tracing::info!("Ranked {} elements", ranked.len());
        ranked
    }

    /// One `id<TAB>score` line per element.
    pub fn report(&self, ranked: &Elements) -> String {
        ranked
            .iter()
            .map(|e| {
                format!(
                    "{}\t{}",
                    e.get_string(&self.config.id_key),
                    e.get_float64(&self.config.score_key)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
