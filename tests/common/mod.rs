#![allow(dead_code)]

use lifegrade::config::{Config, TableOverrides};
use lifegrade::{AnswerSet, Metric};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

pub fn max_answers() -> AnswerSet {
    AnswerSet::new()
        .with(Metric::Age, "20-29")
        .with(Metric::Education, "phd")
        .with(Metric::Occupation, "doctor")
        .with(Metric::Wealth, "5b+")
        .with(Metric::Marital, "married")
        .with(Metric::Housing, "seoul-apt")
        .with(Metric::Vehicle, "luxury-foreign")
        .with(Metric::Hobbies, "sports")
        .with(Metric::Social, "business-leader")
        .with(Metric::Certifications, "professional-license")
}

pub fn min_answers() -> AnswerSet {
    AnswerSet::new()
        .with(Metric::Age, "70-79")
        .with(Metric::Education, "high-school")
        .with(Metric::Occupation, "unemployed")
        .with(Metric::Wealth, "<50m")
        .with(Metric::Marital, "single")
        .with(Metric::Housing, "no-housing")
        .with(Metric::Vehicle, "no-car")
        .with(Metric::Hobbies, "none")
        .with(Metric::Social, "none")
        .with(Metric::Certifications, "none")
}

/// Config where every metric has a "flat" option worth `score`, with housing
/// trimmed to 0.10 so the scored weights sum to 1.
pub fn flat_config(score: u8) -> Config {
    let mut overrides: TableOverrides = BTreeMap::new();
    for metric in Metric::iter() {
        overrides
            .entry(metric)
            .or_default()
            .insert("flat".to_string(), score);
    }
    let mut config = Config {
        scoring_table: overrides,
        ..Config::default()
    };
    config.weights.set(Metric::Housing, 0.10);
    config
}

pub fn flat_answers() -> AnswerSet {
    Metric::iter().fold(AnswerSet::new(), |set, m| set.with(m, "flat"))
}
