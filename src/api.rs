use crate::answers::AnswerSet;
use crate::config::Config;
use crate::error::LgResult;
use crate::metrics::{Grade, Metric};
use crate::scorer::{ScoreResult, Scorer};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Samples drawn for the distribution chart; one per score point.
pub const CURVE_POINTS: usize = 100;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetricView {
    pub metric: Metric,
    pub name_key: String,
    pub score: u8,
    pub weighted: f64,
    pub grade: Grade,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub x: f64,
    pub density: f64,
}

/// Everything the results screen needs, with display strings left as locale keys.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResultReport {
    pub result: ScoreResult,
    pub grade_title_key: String,
    pub grade_description_key: String,
    pub metrics: Vec<MetricView>,
    pub curve: Vec<CurvePoint>,
    /// Index into `curve` where the respondent sits.
    pub position: usize,
}

/// Config from file when given, otherwise the reference defaults.
pub fn load_config(path: Option<&Path>) -> LgResult<Config> {
    match path {
        Some(p) if p.exists() => Config::load_from_file(p),
        Some(p) => {
            warn!(
                "⚠️  Config file '{}' not found. Using defaults.",
                p.display()
            );
            Ok(Config::default())
        }
        None => {
            info!("No config file given. Using reference weights.");
            Ok(Config::default())
        }
    }
}

/// Service: score a flat JSON object of `{metric: option}`.
pub fn score_json(scorer: &Scorer, json: &str) -> LgResult<ScoreResult> {
    let answers = AnswerSet::from_json(json)?;
    scorer.calculate_score(&answers)
}

pub fn build_report(scorer: &Scorer, result: ScoreResult) -> ResultReport {
    let metrics = result
        .breakdown
        .iter()
        .map(|(metric, s)| MetricView {
            metric: *metric,
            name_key: metric.name_key(),
            score: s.score,
            weighted: s.weighted,
            grade: s.grade(),
        })
        .collect();

    let curve = scorer
        .population_curve(CURVE_POINTS)
        .into_iter()
        .map(|(x, density)| CurvePoint { x, density })
        .collect();

    ResultReport {
        grade_title_key: result.grade.title_key(),
        grade_description_key: result.grade.description_key(),
        position: (result.total_score as usize).min(CURVE_POINTS),
        metrics,
        curve,
        result,
    }
}
