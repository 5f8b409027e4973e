use crate::config::TableOverrides;
use crate::metrics::Metric;
use std::collections::BTreeMap;
use tracing::debug;

// Legacy tokens from earlier form revisions share the table with current ones.
const AGE: &[(&str, u8)] = &[
    ("20-29", 100),
    ("30-39", 90),
    ("40-49", 80),
    ("50-59", 70),
    ("60-69", 60),
    ("70-79", 50),
    ("20-25", 100),
    ("26-30", 100),
    ("31-35", 80),
    ("36-40", 80),
    ("41+", 60),
];

const EDUCATION: &[(&str, u8)] = &[
    ("phd", 100),
    ("master", 90),
    ("bachelor", 75),
    ("associate", 60),
    ("high-school", 45),
];

const OCCUPATION: &[(&str, u8)] = &[
    ("doctor", 100),
    ("lawyer", 100),
    ("engineer", 90),
    ("professor", 100),
    ("finance", 90),
    ("tech", 80),
    ("consultant", 80),
    ("manager", 75),
    ("corporate", 70),
    ("civil-servant", 65),
    ("teacher", 60),
    ("startup", 60),
    ("small-business", 50),
    ("freelancer", 50),
    ("artist", 40),
    ("service", 35),
    ("unemployed", 30),
    ("professional", 90),
];

const WEALTH: &[(&str, u8)] = &[
    ("5b+", 100),
    ("2b-5b", 95),
    ("1b-2b", 90),
    ("700m-1b", 85),
    ("500m-700m", 80),
    ("300m-500m", 75),
    ("200m-300m", 70),
    ("100m-200m", 60),
    ("50m-100m", 50),
    ("<50m", 40),
    ("1m+", 90),
    ("500k-1m", 75),
    ("100k-500k", 60),
    ("<100k", 40),
];

const MARITAL: &[(&str, u8)] = &[("married", 100), ("relationship", 80), ("single", 60)];

const HOUSING: &[(&str, u8)] = &[
    ("seoul-apt", 100),
    ("metro-apt", 90),
    ("seoul-villa", 85),
    ("metro-villa", 80),
    ("provincial-own", 70),
    ("seoul-jeonse", 65),
    ("metro-jeonse", 60),
    ("seoul-rent", 55),
    ("metro-rent", 50),
    ("provincial-rent", 45),
    ("family-home", 40),
    ("goshiwon", 35),
    ("no-housing", 30),
    ("urban-own", 90),
    ("suburban-own", 70),
    ("rent", 55),
];

const VEHICLE: &[(&str, u8)] = &[
    ("luxury-foreign", 100),
    ("luxury-domestic", 90),
    ("foreign-mid", 80),
    ("domestic-mid", 70),
    ("suv", 65),
    ("compact", 55),
    ("economy", 45),
    ("electric", 80),
    ("motorcycle", 40),
    ("no-car", 30),
    ("luxury", 90),
    ("mid-range", 70),
];

const HOBBIES: &[(&str, u8)] = &[
    ("sports", 100),
    ("travel", 90),
    ("reading", 80),
    ("music", 75),
    ("cooking", 70),
    ("photography", 70),
    ("outdoor", 80),
    ("creative", 75),
    ("social", 70),
    ("gaming", 60),
    ("none", 40),
];

const SOCIAL: &[(&str, u8)] = &[
    ("business-leader", 100),
    ("professional", 90),
    ("corporate", 80),
    ("industry", 75),
    ("alumni", 75),
    ("startup", 70),
    ("creative", 65),
    ("moderate", 60),
    ("local", 55),
    ("online", 50),
    ("small", 45),
    ("none", 30),
    ("extensive", 80),
];

const CERTIFICATIONS: &[(&str, u8)] = &[
    ("professional-license", 100),
    ("financial", 90),
    ("tech-advanced", 80),
    ("tech-basic", 65),
    ("language-advanced", 75),
    ("language-intermediate", 65),
    ("project-management", 70),
    ("design", 60),
    ("trade", 60),
    ("education", 55),
    ("language-basic", 50),
    ("none", 30),
    ("professional", 80),
    ("technical", 70),
    ("language", 60),
];

fn reference_entries(metric: Metric) -> &'static [(&'static str, u8)] {
    match metric {
        Metric::Age => AGE,
        Metric::Education => EDUCATION,
        Metric::Occupation => OCCUPATION,
        Metric::Wealth => WEALTH,
        Metric::Marital => MARITAL,
        Metric::Housing => HOUSING,
        Metric::Vehicle => VEHICLE,
        Metric::Hobbies => HOBBIES,
        Metric::Social => SOCIAL,
        Metric::Certifications => CERTIFICATIONS,
    }
}

/// Option token -> raw score (0-100), one flat map per metric.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringTable {
    entries: BTreeMap<Metric, BTreeMap<String, u8>>,
}

impl Default for ScoringTable {
    fn default() -> Self {
        Self::reference()
    }
}

impl ScoringTable {
    pub fn reference() -> Self {
        use strum::IntoEnumIterator;

        let entries = Metric::iter()
            .map(|metric| {
                let options = reference_entries(metric)
                    .iter()
                    .map(|(token, score)| (token.to_string(), *score))
                    .collect();
                (metric, options)
            })
            .collect();
        Self { entries }
    }

    /// Overrides replace or extend individual options; untouched options keep
    /// their reference score.
    pub fn with_overrides(mut self, overrides: &TableOverrides) -> Self {
        for (metric, options) in overrides {
            let slot = self.entries.entry(*metric).or_default();
            for (token, score) in options {
                debug!("Table override {}.{} = {}", metric, token, score);
                slot.insert(token.clone(), (*score).min(100));
            }
        }
        self
    }

    pub fn get(&self, metric: Metric, option: &str) -> Option<u8> {
        self.entries
            .get(&metric)
            .and_then(|opts| opts.get(option))
            .copied()
    }

    /// Unknown tokens score 0.
    pub fn lookup(&self, metric: Metric, option: &str) -> u8 {
        match self.get(metric, option) {
            Some(score) => score,
            None => {
                debug!("Unknown option '{}' for {}, scoring 0", option, metric);
                0
            }
        }
    }

    /// Options sorted best-first, ties broken by token.
    pub fn options(&self, metric: Metric) -> Vec<(&str, u8)> {
        let mut opts: Vec<(&str, u8)> = self
            .entries
            .get(&metric)
            .map(|m| m.iter().map(|(k, v)| (k.as_str(), *v)).collect())
            .unwrap_or_default();
        opts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        opts
    }

    pub fn max_option(&self, metric: Metric) -> Option<(&str, u8)> {
        self.options(metric).first().copied()
    }

    pub fn min_option(&self, metric: Metric) -> Option<(&str, u8)> {
        self.options(metric).last().copied()
    }
}
