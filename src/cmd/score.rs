use crate::reports;
use clap::Args;
use lifegrade::api;
use lifegrade::config::Config;
use lifegrade::error::LgResult;
use lifegrade::scorer::Scorer;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub config: Config,

    /// JSON object mapping each metric to its selected option.
    #[arg(short, long)]
    pub answers: PathBuf,

    /// Print the full result report as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ScoreArgs, scorer: &Scorer) -> LgResult<()> {
    info!("📂 Loading answers: {}", args.answers.display());
    let content = fs::read_to_string(&args.answers)?;
    let result = api::score_json(scorer, &content)?;
    let report = api::build_report(scorer, result);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        reports::print_result(&report, scorer);
    }
    Ok(())
}
