use crate::metrics::Metric;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LifeGradeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Missing answer for metric '{metric}'")]
    MissingAnswer { metric: Metric },

    #[error("Unknown metric '{0}'")]
    UnknownMetric(String),
}

pub type LgResult<T> = Result<T, LifeGradeError>;
