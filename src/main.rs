use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use thumbfix_core::{Config, Document, Normalizer};

#[derive(Parser)]
#[command(name = "thumbfix", about = "Fill in missing YouTube thumbnails in a JSON record file")]
struct Cli {
    /// JSON file holding an array of records; rewritten in place when changed.
    path: PathBuf,

    /// Config file to use instead of ~/.config/thumbfix/config.toml.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write debug logs to stderr (filter with RUST_LOG).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!(path = %cli.path.display(), "thumbfix debug log started");
    }

    let mut stdout = std::io::stdout().lock();

    // Input errors take precedence over configuration errors.
    let document = match Document::load(&cli.path) {
        Ok(document) => document,
        Err(err) => return thumbfix::report_fatal(err, &mut stdout),
    };
    tracing::debug!(records = document.len(), "loaded document");

    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    let normalizer = Normalizer::from_config(&config).context("invalid [platform] configuration")?;

    thumbfix::process(&normalizer, document, &cli.path, &mut stdout)
}
