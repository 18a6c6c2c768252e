//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::{Context as _, Result};
use args::Cli;
use clap::Parser;
use std::time::Duration;
use tracing::debug;

use dnsbl_core::{BlacklistCatalog, DnsblError};
use dnsbl_lookup::{DEFAULT_CONCURRENCY, DEFAULT_TIMEOUT};

use crate::config::Config;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    crate::logging::init(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Explicit config path must exist; the default one is optional
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let ctx = context(&cli, &config)?;
    debug!(
        zones = ctx.catalog.len(),
        concurrency = ctx.concurrency,
        timeout = ?ctx.timeout,
        "settings resolved"
    );

    if cli.list_zones {
        let mut stdout = std::io::stdout().lock();
        return commands::zones::execute(&ctx, &mut stdout);
    }

    match cli.target.as_deref() {
        Some(target) => commands::check::execute(ctx, target).await,
        None => anyhow::bail!("TARGET is required"),
    }
}

/// Merge flags over config over built-in defaults.
fn context(cli: &Cli, config: &Config) -> Result<commands::Context> {
    let concurrency = cli
        .concurrency
        .or(config.concurrency)
        .unwrap_or(DEFAULT_CONCURRENCY);
    if concurrency == 0 {
        return Err(DnsblError::InvalidConcurrency(concurrency).into());
    }

    let timeout = cli
        .timeout
        .or(config.timeout_ms)
        .map_or(DEFAULT_TIMEOUT, Duration::from_millis);

    let nameservers = if cli.nameservers.is_empty() {
        config.nameservers.clone()
    } else {
        cli.nameservers.clone()
    };

    Ok(commands::Context {
        catalog: catalog(cli, config)?,
        concurrency,
        timeout,
        evidence: config.evidence && !cli.no_evidence,
        nameservers,
        output_format: cli.output.or(config.output_format).unwrap_or_default(),
        verbose: cli.verbose,
        no_color: cli.no_color,
    })
}

/// Zones file flag, then config zones file, then config zones, then built-in.
fn catalog(cli: &Cli, config: &Config) -> Result<BlacklistCatalog> {
    if let Some(path) = cli.zones_file.as_ref().or(config.zones_file.as_ref()) {
        return BlacklistCatalog::load(path)
            .with_context(|| format!("Failed to load zones file {}", path.display()));
    }

    if !config.zones.is_empty() {
        return BlacklistCatalog::from_entries(&config.zones).context("Invalid zones in config");
    }

    Ok(BlacklistCatalog::builtin())
}
