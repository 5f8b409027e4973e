use super::{ScoreResult, Scorer};
use crate::answers::AnswerSet;
use crate::error::{LgResult, LifeGradeError};
use crate::metrics::Metric;
use rayon::prelude::*;
use std::io::Read;
use std::str::FromStr;
use tracing::{debug, info};

/// Scores every submission independently. Output order matches input order.
pub fn score_batch(scorer: &Scorer, answers: &[AnswerSet]) -> Vec<LgResult<ScoreResult>> {
    answers
        .par_iter()
        .map(|a| scorer.calculate_score(a))
        .collect()
}

/// Like `score_batch`, but rows that already failed to parse pass their error through.
pub fn score_rows(scorer: &Scorer, rows: Vec<LgResult<AnswerSet>>) -> Vec<LgResult<ScoreResult>> {
    rows.into_par_iter()
        .map(|row| row.and_then(|a| scorer.calculate_score(&a)))
        .collect()
}

/// Reads submissions from CSV: a header row of metric names, one submission per row.
/// A bad header fails the whole read; a bad row only fails that row.
pub fn read_answer_csv<R: Read>(reader: R) -> LgResult<Vec<LgResult<AnswerSet>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns: Vec<Metric> = rdr
        .headers()?
        .iter()
        .map(|h| Metric::from_str(h).map_err(|_| LifeGradeError::UnknownMetric(h.to_string())))
        .collect::<LgResult<_>>()?;

    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let row = result.map_err(LifeGradeError::from).map(|rec| {
            columns
                .iter()
                .zip(rec.iter())
                .fold(AnswerSet::new(), |set, (metric, value)| set.with(*metric, value))
        });
        if let Err(e) = &row {
            debug!("Row {}: {}", idx + 1, e);
        }
        rows.push(row);
    }

    info!("📥 Read {} submissions", rows.len());
    Ok(rows)
}
