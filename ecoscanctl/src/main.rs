//! `ecoscanctl`: generate, snapshot and query the synthetic catalog from the
//! command line. Results are written to stdout as JSON; logs go to stderr.

mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, SourceArgs};
use ecoscan_config::{AppConfig, ConfigLoader, logging};
use ecoscan_core::Catalog;
use std::io::Write;
use tracing::debug;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.source.config {
        loader = loader.with_config_path(path);
    }
    let load = loader.load().context("failed to load configuration")?;
    let mut config = load.config;
    logging::init(&config.logging)?;
    debug!(
        source = ?load.source,
        env_file = load.env_file_loaded,
        "Configuration loaded"
    );

    let catalog = open_catalog(&cli.source, &mut config)?;
    let value = commands::run(cli.command, &catalog)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if config.output.pretty && !cli.source.compact {
        serde_json::to_writer_pretty(&mut out, &value)?;
    } else {
        serde_json::to_writer(&mut out, &value)?;
    }
    writeln!(out)?;
    Ok(())
}

fn open_catalog(
    source: &SourceArgs,
    config: &mut AppConfig,
) -> Result<Catalog> {
    if let Some(path) = &source.snapshot {
        return Catalog::read_from_path(path).with_context(|| {
            format!("failed to read snapshot {}", path.display())
        });
    }

    if let Some(seed) = source.seed {
        config.catalog.seed = Some(seed);
    }
    if let Some(size) = source.size {
        config.catalog.size = size;
    }
    Catalog::generate(&config.catalog).context("failed to generate catalog")
}
