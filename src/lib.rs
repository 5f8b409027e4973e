pub mod answers;
pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod scorer;

pub use answers::AnswerSet;
pub use error::{LgResult, LifeGradeError};
pub use metrics::{Grade, Metric};
pub use scorer::{ScoreResult, Scorer};
