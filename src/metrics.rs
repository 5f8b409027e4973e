use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// The ten assessment questions, in form order.
#[derive(
    Debug,
    Clone,
    Copy,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Age,
    Education,
    Occupation,
    Wealth,
    Marital,
    Housing,
    Vehicle,
    Hobbies,
    Social,
    Certifications,
}

impl Metric {
    pub const COUNT: usize = 10;

    /// Age is asked on the form but never scored or charted.
    pub fn is_scored(&self) -> bool {
        !matches!(self, Self::Age)
    }

    pub fn scored() -> impl Iterator<Item = Metric> {
        Self::iter().filter(Metric::is_scored)
    }

    pub fn name_key(&self) -> String {
        format!("metricNames.{}", self.as_ref())
    }

    pub fn label_key(&self) -> String {
        format!("fields.{}.label", self.as_ref())
    }

    pub fn options_key(&self) -> String {
        format!("fields.{}.options", self.as_ref())
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Grade {
    S,
    A,
    B,
    C,
    D,
    E,
    F,
}

/// Lower bound of each band, checked from the top. F catches everything below E.
pub const GRADE_BANDS: [(f64, Grade); 6] = [
    (95.0, Grade::S),
    (85.0, Grade::A),
    (75.0, Grade::B),
    (65.0, Grade::C),
    (55.0, Grade::D),
    (45.0, Grade::E),
];

impl Grade {
    pub fn from_score(score: f64) -> Self {
        GRADE_BANDS
            .iter()
            .find(|(min, _)| score >= *min)
            .map(|(_, grade)| *grade)
            .unwrap_or(Grade::F)
    }

    /// Inclusive lower bound of the band. F has none.
    pub fn threshold(&self) -> Option<f64> {
        GRADE_BANDS
            .iter()
            .find(|(_, grade)| grade == self)
            .map(|(min, _)| *min)
    }

    pub fn title_key(&self) -> String {
        format!("gradeTitle.{}", self.as_ref())
    }

    pub fn description_key(&self) -> String {
        format!("gradeDescription.{}", self.as_ref())
    }
}
