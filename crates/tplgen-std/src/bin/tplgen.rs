//! Generate SCL data type templates for a selection over a schema graph.
//!
//! Usage: tplgen --schema <schema.json> --selection <selection.json>
//!               [--output <file>] [--format xml|json] [-v...]

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tplgen_std::{generate_from_files, OutputFormat};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tplgen", version)]
#[command(about = "Generate deduplicated SCL data type templates from a schema selection")]
struct Cli {
    /// Master schema graph (JSON).
    #[arg(long, env = "TPLGEN_SCHEMA")]
    schema: PathBuf,

    /// Selection tree (JSON).
    #[arg(long, env = "TPLGEN_SELECTION")]
    selection: PathBuf,

    /// Output file; stdout if omitted.
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Xml)]
    format: OutputFormat,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(long, short = 'v', action = ArgAction::Count)]
    verbose: u8,
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level(cli.verbose))),
        )
        .with_writer(io::stderr)
        .init();

    let set = generate_from_files(&cli.schema, &cli.selection)?;
    let rendered = cli.format.render(&set)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote templates");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            writeln!(stdout)?;
        }
    }

    let stats = set.stats();
    info!(total = stats.total(), reused = stats.reused, "done");
    Ok(())
}
