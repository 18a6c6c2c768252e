//! `dnsbl <TARGET>` - check addresses against every catalog zone.

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::info;

use dnsbl_lookup::{HickoryTransport, LookupEngine};

use super::Context;
use crate::output::OutputFormat;
use crate::targets;

pub async fn execute(ctx: Context, target: &str) -> Result<()> {
    let addresses = targets::load(target)?;
    if addresses.is_empty() {
        info!(input = target, "no valid addresses to check");
    }

    let transport = if ctx.nameservers.is_empty() {
        HickoryTransport::from_system(ctx.timeout)?
    } else {
        HickoryTransport::with_nameservers(&ctx.nameservers, ctx.timeout)?
    };

    let engine = LookupEngine::with_transport(transport)
        .timeout(ctx.timeout)
        .collect_evidence(ctx.evidence);

    let show_spinner = ctx.output_format == OutputFormat::Pretty
        && !ctx.verbose
        && !ctx.no_color
        && !addresses.is_empty();
    let spinner = show_spinner.then(|| spinner(addresses.len() * ctx.catalog.len()));

    let batch = engine
        .run_batch(&addresses, ctx.catalog.zones(), ctx.concurrency)
        .await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let batch = batch?;
    let mut stdout = std::io::stdout().lock();
    ctx.reporter().render(&batch, &mut stdout)?;

    Ok(())
}

fn spinner(lookups: usize) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg} [{elapsed}]") {
        pb.set_style(style);
    }
    pb.set_message(format!("Running {lookups} blacklist lookups"));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
