use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use degrees_cli::output::OutputFormat;
use degrees_lib::SearchAlgorithm;

mod commands;

use commands::connect::{handle_connect, ConnectArgs};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Find the degrees of separation between two people through shared movies"
)]
struct Cli {
    /// Directory containing people.csv, movies.csv and stars.csv
    /// (defaults to $DEGREES_DATA_DIR, then `large`).
    directory: Option<PathBuf>,

    /// Source person's name; prompted for when omitted.
    #[arg(long)]
    source: Option<String>,

    /// Target person's name; prompted for when omitted.
    #[arg(long)]
    target: Option<String>,

    /// Search strategy: `bfs` finds the fewest degrees, `dfs` finds any connection.
    #[arg(long, default_value_t = SearchAlgorithm::Bfs)]
    algorithm: SearchAlgorithm,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl From<Cli> for ConnectArgs {
    fn from(cli: Cli) -> Self {
        Self {
            directory: cli.directory,
            source: cli.source,
            target: cli.target,
            algorithm: cli.algorithm,
            format: cli.format,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    handle_connect(&cli.into())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
