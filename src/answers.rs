use crate::error::{LgResult, LifeGradeError};
use crate::metrics::Metric;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;
use strum::IntoEnumIterator;

/// One selected option token per metric, as collected by the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<Metric, String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, metric: Metric, option: impl Into<String>) -> Self {
        self.set(metric, option);
        self
    }

    pub fn set(&mut self, metric: Metric, option: impl Into<String>) {
        self.answers.insert(metric, option.into().trim().to_string());
    }

    pub fn remove(&mut self, metric: Metric) -> Option<String> {
        self.answers.remove(&metric)
    }

    /// Blank answers count as unanswered.
    pub fn get(&self, metric: Metric) -> Option<&str> {
        self.answers
            .get(&metric)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    pub fn missing(&self) -> Vec<Metric> {
        Metric::iter().filter(|m| self.get(*m).is_none()).collect()
    }

    pub fn is_complete(&self) -> bool {
        Metric::iter().all(|m| self.get(m).is_some())
    }

    pub fn require(&self, metric: Metric) -> LgResult<&str> {
        self.get(metric)
            .ok_or(LifeGradeError::MissingAnswer { metric })
    }

    /// Builds from string keys (form field names). Keys are matched
    /// case-insensitively; anything that is not a metric is rejected.
    pub fn from_raw<K, V, I>(raw: I) -> LgResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut set = Self::new();
        for (key, value) in raw {
            let key = key.as_ref().trim();
            let metric = Metric::from_str(key)
                .map_err(|_| LifeGradeError::UnknownMetric(key.to_string()))?;
            set.set(metric, value);
        }
        Ok(set)
    }

    pub fn from_json(json: &str) -> LgResult<Self> {
        let raw: HashMap<String, String> = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, &str)> {
        self.answers.iter().map(|(m, s)| (*m, s.as_str()))
    }
}
