use crate::reports;
use clap::Args;
use lifegrade::config::Config;
use lifegrade::error::{LgResult, LifeGradeError};
use lifegrade::metrics::Metric;
use lifegrade::scorer::Scorer;
use std::str::FromStr;
use strum::IntoEnumIterator;

#[derive(Args, Debug, Clone)]
pub struct OptionsArgs {
    #[command(flatten)]
    pub config: Config,

    /// Only list this metric.
    #[arg(short, long)]
    pub metric: Option<String>,
}

pub fn run(args: OptionsArgs, scorer: &Scorer) -> LgResult<()> {
    let metrics: Vec<Metric> = match &args.metric {
        Some(name) => {
            vec![Metric::from_str(name).map_err(|_| LifeGradeError::UnknownMetric(name.clone()))?]
        }
        None => Metric::iter().collect(),
    };

    for metric in metrics {
        reports::print_options(metric, scorer);
    }
    Ok(())
}
