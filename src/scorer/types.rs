use crate::metrics::{Grade, Metric};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricScore {
    /// Raw table score, 0-100.
    pub score: u8,
    /// Contribution to the total after weighting.
    pub weighted: f64,
}

impl MetricScore {
    pub fn grade(&self) -> Grade {
        Grade::from_score(self.score as f64)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub grade: Grade,
    pub total_score: u8,
    pub percentile: u8,
    pub breakdown: BTreeMap<Metric, MetricScore>,
}
