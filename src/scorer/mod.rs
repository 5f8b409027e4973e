pub mod batch;
pub mod grade;
pub mod percentile;
pub mod table;
pub mod types;

pub use self::grade::letter_grade;
pub use self::table::ScoringTable;
pub use self::types::{MetricScore, ScoreResult};

use crate::answers::AnswerSet;
use crate::config::{Config, DistributionParams, MetricWeights};
use crate::error::LgResult;
use crate::metrics::{Grade, Metric};
use std::collections::BTreeMap;
use tracing::debug;

/// Immutable after construction; safe to share across threads.
#[derive(Debug, Clone)]
pub struct Scorer {
    pub weights: MetricWeights,
    pub distribution: DistributionParams,
    pub table: ScoringTable,
}

impl Scorer {
    pub fn new(config: &Config) -> LgResult<Self> {
        ScorerBuilder::new()
            .with_weights(config.weights.clone())
            .with_distribution(config.distribution)
            .with_table_overrides(&config.scoring_table)
            .build()
    }

    pub fn calculate_score(&self, answers: &AnswerSet) -> LgResult<ScoreResult> {
        // Age is asked first on the form but never scored.
        answers.require(Metric::Age)?;

        let mut breakdown = BTreeMap::new();
        let mut total = 0.0f64;

        for metric in Metric::scored() {
            let option = answers.require(metric)?;
            let score = self.table.lookup(metric, option);
            let weighted = score as f64 * self.weights.get(metric);
            total += weighted;
            breakdown.insert(metric, MetricScore { score, weighted });
        }

        // The reference weights sum past 1, so a strong answer set can exceed 100.
        let total = total.clamp(0.0, 100.0);
        let total_score = total.round() as u8;
        let grade = Grade::from_score(total_score as f64);
        let percentile = percentile::percentile(total, &self.distribution);

        debug!(
            "Scored total={:.3} (reported {}) grade={} percentile={}",
            total, total_score, grade, percentile
        );

        Ok(ScoreResult {
            grade,
            total_score,
            percentile,
            breakdown,
        })
    }

    pub fn percentile(&self, score: f64) -> u8 {
        percentile::percentile(score, &self.distribution)
    }

    pub fn population_curve(&self, points: usize) -> Vec<(f64, f64)> {
        percentile::population_curve(&self.distribution, points)
    }

    /// Zero for metrics that never reach the total.
    pub fn weight(&self, metric: Metric) -> f64 {
        if metric.is_scored() {
            self.weights.get(metric)
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScorerBuilder {
    weights: MetricWeights,
    distribution: DistributionParams,
    table: ScoringTable,
}

impl ScorerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(mut self, weights: MetricWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_distribution(mut self, distribution: DistributionParams) -> Self {
        self.distribution = distribution;
        self
    }

    pub fn with_table(mut self, table: ScoringTable) -> Self {
        self.table = table;
        self
    }

    pub fn with_table_overrides(mut self, overrides: &crate::config::TableOverrides) -> Self {
        self.table = self.table.with_overrides(overrides);
        self
    }

    pub fn build(self) -> LgResult<Scorer> {
        self.distribution.validate()?;
        self.weights.validate()?;

        debug!(
            "Scorer ready: mean={} std_dev={} scored weight sum={:.3}",
            self.distribution.mean,
            self.distribution.std_dev,
            self.weights.scored_sum()
        );

        Ok(Scorer {
            weights: self.weights,
            distribution: self.distribution,
            table: self.table,
        })
    }
}
