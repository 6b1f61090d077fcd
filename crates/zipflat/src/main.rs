use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use zipflat::{TracingReporter, extract_and_flatten};

mod cli;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(cli.log_level().into())
                .from_env_lossy(),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let root = match &cli.root {
        Some(root) => root.clone(),
        None => prompt_root()?,
    };

    let summary = extract_and_flatten(&root, &cli.options(), &mut TracingReporter)
        .with_context(|| format!("failed to process '{}'", root.display()))?;

    if !summary.is_clean() {
        tracing::warn!(
            "finished with {} error(s); affected files and archives were left in place",
            summary.errors
        );
    }

    if cli.json {
        let json = serde_json::to_string_pretty(&summary).context("failed to encode summary")?;
        println!("{json}");
    }

    Ok(())
}

fn prompt_root() -> anyhow::Result<PathBuf> {
    let mut stderr = io::stderr();
    write!(stderr, "Enter the path of the folder to process: ")?;
    stderr.flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read folder path from stdin")?;

    let path = line.trim();
    if path.is_empty() {
        bail!("no folder path given");
    }
    Ok(PathBuf::from(path))
}
