//! Curricula CLI.
//!
//! Extracts metadata from a single curriculum-project directory and
//! prints the resulting record as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use curricula_parser::{process, ParseContext, ParseOptions};
use tracing::error;

mod catalog;

/// Extract structured metadata from a curriculum project directory.
#[derive(Debug, Parser)]
#[command(name = "curricula", version, about)]
struct Cli {
    /// Path to the project directory (basename must be in 00-slug format).
    dir: PathBuf,

    /// Locale tag, e.g. es-ES or pt-BR.
    #[arg(long)]
    locale: String,

    /// Curriculum track, copied verbatim into the record.
    #[arg(long)]
    track: Option<String>,

    /// Source repository, copied verbatim into the record.
    #[arg(long)]
    repo: Option<String>,

    /// Curriculum version, copied verbatim into the record.
    #[arg(long = "project-version")]
    project_version: Option<String>,

    /// Translation suffix; appended to the slug and used to pick
    /// README.<suffix>.md.
    #[arg(long)]
    suffix: Option<String>,

    /// Learning-objective catalog file (JSON forest of code -> children).
    /// Omitting it disables objective validation.
    #[arg(long)]
    lo: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(&cli);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to create Tokio runtime");

    match runtime.block_on(run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut options = ParseOptions::new(&cli.locale);
    options.track = cli.track;
    options.repo = cli.repo;
    options.version = cli.project_version;
    options.suffix = cli.suffix;
    if let Some(lo) = &cli.lo {
        options.catalog = Some(catalog::load(lo)?);
    }

    let context = ParseContext::new(env!("CARGO_PKG_VERSION"));
    let record = process(&cli.dir, &options, &context).await?;

    let json = serde_json::to_string_pretty(&record).context("failed to serialize record")?;
    println!("{json}");
    Ok(())
}

fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(cli.verbose >= 2))
        .init();
}
