use crate::reports;
use clap::Args;
use lifegrade::config::Config;
use lifegrade::error::LgResult;
use lifegrade::scorer::batch::{read_answer_csv, score_rows};
use lifegrade::scorer::Scorer;
use std::fs::File;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    #[command(flatten)]
    pub config: Config,

    /// CSV with a header row of metric names.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Print one JSON result (or error) per line instead of a table.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: BatchArgs, scorer: &Scorer) -> LgResult<()> {
    info!("📂 Loading submissions: {}", args.input.display());
    let rows = read_answer_csv(File::open(&args.input)?)?;
    let results = score_rows(scorer, rows);

    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        warn!("⚠️  {} of {} submissions could not be scored.", failed, results.len());
    }

    if args.json {
        for r in &results {
            let line = match r {
                Ok(res) => serde_json::to_string(res)?,
                Err(e) => serde_json::json!({ "error": e.to_string() }).to_string(),
            };
            println!("{}", line);
        }
    } else {
        reports::print_batch(&results);
    }
    Ok(())
}
