use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use lifegrade::api;
use lifegrade::config::Config;
use lifegrade::scorer::Scorer;
use std::path::PathBuf;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with weights, distribution and table overrides.
    #[arg(global = true, long = "config", id = "config_file")]
    config_file: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score one submission from a JSON file.
    Score(cmd::score::ScoreArgs),
    /// Score every row of a CSV file.
    Batch(cmd::batch::BatchArgs),
    /// List the options and raw scores for each metric.
    Options(cmd::options::OptionsArgs),
    /// Print the population curve the percentile is measured against.
    Curve(cmd::curve::CurveArgs),
}

fn subcommand_config<'a>(cli: &'a Cli, matches: &'a ArgMatches) -> (&'a Config, &'a ArgMatches) {
    let (config, name) = match &cli.command {
        Commands::Score(args) => (&args.config, "score"),
        Commands::Batch(args) => (&args.config, "batch"),
        Commands::Options(args) => (&args.config, "options"),
        Commands::Curve(args) => (&args.config, "curve"),
    };
    // clap guarantees the subcommand that produced `cli.command` is present.
    let sub = matches.subcommand_matches(name).unwrap_or(matches);
    (config, sub)
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let mut config = api::load_config(cli.config_file.as_deref()).unwrap_or_else(|e| {
        error!("❌ {}", e);
        process::exit(1);
    });

    let (cli_config, sub_matches) = subcommand_config(&cli, &matches);
    config.merge_from_cli(cli_config, sub_matches);

    let scorer = match config.validate().and_then(|_| Scorer::new(&config)) {
        Ok(s) => s,
        Err(e) => {
            error!("❌ FATAL ERROR INITIALIZING SCORER: {}", e);
            process::exit(1);
        }
    };
    info!(
        "📊 Population: mean={} std_dev={}",
        scorer.distribution.mean, scorer.distribution.std_dev
    );

    let outcome = match cli.command {
        Commands::Score(args) => cmd::score::run(args, &scorer),
        Commands::Batch(args) => cmd::batch::run(args, &scorer),
        Commands::Options(args) => cmd::options::run(args, &scorer),
        Commands::Curve(args) => cmd::curve::run(args, &scorer),
    };

    if let Err(e) = outcome {
        error!("❌ {}", e);
        process::exit(1);
    }
}
