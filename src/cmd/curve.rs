use crate::reports;
use clap::Args;
use lifegrade::config::Config;
use lifegrade::error::LgResult;
use lifegrade::scorer::Scorer;

#[derive(Args, Debug, Clone)]
pub struct CurveArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(short, long, default_value_t = 20)]
    pub points: usize,
}

pub fn run(args: CurveArgs, scorer: &Scorer) -> LgResult<()> {
    let curve = scorer.population_curve(args.points);
    reports::print_curve(&curve, scorer);
    Ok(())
}
