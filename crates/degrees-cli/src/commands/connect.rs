//! Connect command handler: resolve two names and report how they are linked.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use degrees_cli::console::Console;
use degrees_cli::output::OutputFormat;
use degrees_lib::{
    load_dataset, person_id_for_name, plan_connection, resolve_data_dir, ConnectionSummary,
    Dataset, SearchAlgorithm,
};

/// Arguments for the connect command.
#[derive(Debug, Clone)]
pub struct ConnectArgs {
    /// Dataset directory given on the command line.
    pub directory: Option<PathBuf>,
    /// Source name; prompted for when absent.
    pub source: Option<String>,
    /// Target name; prompted for when absent.
    pub target: Option<String>,
    pub algorithm: SearchAlgorithm,
    pub format: OutputFormat,
}

/// Handle a connect request against stdin/stdout.
///
/// In text mode prompts share stdout with the result; in JSON mode they go to
/// stderr so stdout carries only the JSON document.
pub fn handle_connect(args: &ConnectArgs) -> Result<()> {
    let input = io::stdin().lock();
    let mut out = io::stdout();
    if args.format.is_interactive() {
        run_connect(args, Console::new(input, io::stdout()), &mut out)
    } else {
        run_connect(args, Console::new(input, io::stderr()), &mut out)
    }
}

fn run_connect<R, P, W>(args: &ConnectArgs, mut console: Console<R, P>, out: &mut W) -> Result<()>
where
    R: BufRead,
    P: Write,
    W: Write,
{
    let directory = resolve_data_dir(args.directory.as_deref());

    if args.format.is_interactive() {
        console.say("Loading data...")?;
    }
    let dataset = load_dataset(&directory)
        .with_context(|| format!("failed to load dataset from {}", directory.display()))?;
    if args.format.is_interactive() {
        console.say("Data loaded.")?;
    }

    let source = resolve_name(&dataset, &mut console, args.source.as_deref())?;
    let target = resolve_name(&dataset, &mut console, args.target.as_deref())?;
    debug!(source, target, algorithm = %args.algorithm, "searching for connection");

    let plan = plan_connection(&dataset, source, target, args.algorithm)?;
    let summary = ConnectionSummary::from_plan(&dataset, &plan)?;
    args.format.render_connection(&summary, out)
}

fn resolve_name<'a, R: BufRead, P: Write>(
    dataset: &'a Dataset,
    console: &mut Console<R, P>,
    given: Option<&str>,
) -> Result<&'a str> {
    let name = match given {
        Some(name) => name.to_string(),
        None => console.prompt("Name: ")?.unwrap_or_default(),
    };
    Ok(person_id_for_name(dataset, name.trim(), console)?)
}
