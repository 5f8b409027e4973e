use crate::metrics::Grade;

/// Letter for a single metric's raw score. Uses the same bands as the total.
pub fn letter_grade(score: f64) -> Grade {
    Grade::from_score(score)
}

/// Points still needed to reach the next band up, or `None` at S.
pub fn points_to_next_grade(score: f64) -> Option<f64> {
    let current = Grade::from_score(score);
    crate::metrics::GRADE_BANDS
        .iter()
        .rev()
        .find(|(min, grade)| *grade < current && *min > score)
        .map(|(min, _)| min - score)
}
