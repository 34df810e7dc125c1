use std::io::Write;

use clap::{Parser, ValueEnum};
use stats_extract::{ExtractError, Invocation, MissingFilePolicy, Result, UsageError, logging};

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        match error {
            ExtractError::Usage(usage) => print_usage(usage),
            error => eprintln!("error: {error}"),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    logging::init()?;
    tracing::debug!(?cli, "parsed CLI arguments");

    let invocation =
        Invocation::from_parts(cli.prefix, cli.stat, cli.counts)?.with_policy(cli.on_missing.into());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for row in stats_extract::run(&invocation) {
        writeln!(out, "{}", row?)?;
        out.flush()?;
    }
    Ok(())
}

fn print_usage(usage: UsageError) {
    println!("{usage}");
    println!();
    println!("{}", UsageError::USAGE);
}

#[derive(Parser, Debug)]
#[command(
    name = "extract",
    author,
    version,
    about = "Print one statistic from a series of run directories as CSV rows."
)]
struct Cli {
    /// Prepended to each COUNT to name its run directory.
    #[arg(allow_hyphen_values = true)]
    prefix: Option<String>,

    /// Key whose values are collected from each stats.txt.
    #[arg(allow_hyphen_values = true)]
    stat: Option<String>,

    /// Run identifiers, one output row each.
    #[arg(allow_hyphen_values = true)]
    counts: Vec<String>,

    /// What to do when a run's stats.txt cannot be read.
    #[arg(long, value_enum, default_value_t = OnMissing::Abort)]
    on_missing: OnMissing,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OnMissing {
    /// Stop at the first unreadable file.
    Abort,
    /// Warn and continue with the next COUNT.
    Skip,
}

impl From<OnMissing> for MissingFilePolicy {
    fn from(kind: OnMissing) -> Self {
        match kind {
            OnMissing::Abort => MissingFilePolicy::Abort,
            OnMissing::Skip => MissingFilePolicy::Skip,
        }
    }
}
