use crate::error::{LgResult, LifeGradeError};
use crate::metrics::Metric;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::info;

/// Per-metric score overrides, merged onto the reference table.
pub type TableOverrides = BTreeMap<Metric, BTreeMap<String, u8>>;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub weights: MetricWeights,
    #[command(flatten)]
    pub distribution: DistributionParams,

    #[arg(skip)]
    pub scoring_table: TableOverrides,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MetricWeights {
    #[arg(long = "weight-age", id = "weight_age", default_value_t = 0.10)]
    pub age: f64,
    #[arg(long = "weight-education", id = "weight_education", default_value_t = 0.20)]
    pub education: f64,
    #[arg(long = "weight-occupation", id = "weight_occupation", default_value_t = 0.20)]
    pub occupation: f64,
    #[arg(long = "weight-wealth", id = "weight_wealth", default_value_t = 0.20)]
    pub wealth: f64,
    #[arg(long = "weight-marital", id = "weight_marital", default_value_t = 0.10)]
    pub marital: f64,
    #[arg(long = "weight-housing", id = "weight_housing", default_value_t = 0.15)]
    pub housing: f64,
    #[arg(long = "weight-vehicle", id = "weight_vehicle", default_value_t = 0.05)]
    pub vehicle: f64,
    #[arg(long = "weight-hobbies", id = "weight_hobbies", default_value_t = 0.05)]
    pub hobbies: f64,
    #[arg(long = "weight-social", id = "weight_social", default_value_t = 0.05)]
    pub social: f64,
    #[arg(
        long = "weight-certifications",
        id = "weight_certifications",
        default_value_t = 0.05
    )]
    pub certifications: f64,
}

impl Default for MetricWeights {
    fn default() -> Self {
        Self {
            age: 0.10,
            education: 0.20,
            occupation: 0.20,
            wealth: 0.20,
            marital: 0.10,
            housing: 0.15,
            vehicle: 0.05,
            hobbies: 0.05,
            social: 0.05,
            certifications: 0.05,
        }
    }
}

/// Population the percentile is measured against. Must match the curve the
/// distribution chart draws.
#[derive(Args, Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DistributionParams {
    #[arg(long, default_value_t = 75.0)]
    pub mean: f64,
    #[arg(long, default_value_t = 15.0)]
    pub std_dev: f64,
}

impl Default for DistributionParams {
    fn default() -> Self {
        Self {
            mean: 75.0,
            std_dev: 15.0,
        }
    }
}

impl DistributionParams {
    pub fn new(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }

    pub fn validate(&self) -> LgResult<()> {
        if !self.mean.is_finite() {
            return Err(LifeGradeError::Config(format!(
                "mean must be finite, got {}",
                self.mean
            )));
        }
        if !self.std_dev.is_finite() || self.std_dev <= 0.0 {
            return Err(LifeGradeError::Config(format!(
                "std_dev must be positive, got {}",
                self.std_dev
            )));
        }
        Ok(())
    }
}

impl MetricWeights {
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Age => self.age,
            Metric::Education => self.education,
            Metric::Occupation => self.occupation,
            Metric::Wealth => self.wealth,
            Metric::Marital => self.marital,
            Metric::Housing => self.housing,
            Metric::Vehicle => self.vehicle,
            Metric::Hobbies => self.hobbies,
            Metric::Social => self.social,
            Metric::Certifications => self.certifications,
        }
    }

    pub fn set(&mut self, metric: Metric, weight: f64) {
        let slot = match metric {
            Metric::Age => &mut self.age,
            Metric::Education => &mut self.education,
            Metric::Occupation => &mut self.occupation,
            Metric::Wealth => &mut self.wealth,
            Metric::Marital => &mut self.marital,
            Metric::Housing => &mut self.housing,
            Metric::Vehicle => &mut self.vehicle,
            Metric::Hobbies => &mut self.hobbies,
            Metric::Social => &mut self.social,
            Metric::Certifications => &mut self.certifications,
        };
        *slot = weight;
    }

    /// Sum over the metrics that contribute to the total.
    pub fn scored_sum(&self) -> f64 {
        Metric::scored().map(|m| self.get(m)).sum()
    }

    pub fn validate(&self) -> LgResult<()> {
        for metric in Metric::scored() {
            let w = self.get(metric);
            if !w.is_finite() || w < 0.0 {
                return Err(LifeGradeError::Config(format!(
                    "weight for '{}' must be a non-negative number, got {}",
                    metric, w
                )));
            }
        }
        if self.scored_sum() <= 0.0 {
            return Err(LifeGradeError::Config(
                "scored metric weights sum to zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> LgResult<Self> {
        let path = path.as_ref();
        info!("⚖️  Loading config from: {}", path.display());
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> LgResult<()> {
        self.weights.validate()?;
        self.distribution.validate()?;
        for (metric, options) in &self.scoring_table {
            if let Some((option, score)) = options.iter().find(|(_, s)| **s > 100) {
                return Err(LifeGradeError::Config(format!(
                    "score {} for '{}.{}' is above 100",
                    score, metric, option
                )));
            }
        }
        Ok(())
    }

    /// Copies over only the values the user actually typed on the command line.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident . $field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field;
                }
            };
        }

        update_if_present!(weights.age, "weight_age");
        update_if_present!(weights.education, "weight_education");
        update_if_present!(weights.occupation, "weight_occupation");
        update_if_present!(weights.wealth, "weight_wealth");
        update_if_present!(weights.marital, "weight_marital");
        update_if_present!(weights.housing, "weight_housing");
        update_if_present!(weights.vehicle, "weight_vehicle");
        update_if_present!(weights.hobbies, "weight_hobbies");
        update_if_present!(weights.social, "weight_social");
        update_if_present!(weights.certifications, "weight_certifications");

        update_if_present!(distribution.mean, "mean");
        update_if_present!(distribution.std_dev, "std_dev");
    }
}
