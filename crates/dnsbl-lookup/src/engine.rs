//! Batch orchestration: fan out every (address, zone) pair under a
//! concurrency bound and collect the outcomes in cross-product order.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};

use futures_util::future::join_all;
use tracing::{debug, info, warn};

use dnsbl_core::{Address, BatchEntry, BatchResult, BlacklistZone, LookupKey, LookupOutcome, Result};

use crate::limiter::ConcurrencyLimiter;
use crate::task::{LookupTask, DEFAULT_TIMEOUT};
use crate::transport::DnsTransport;

/// Runs batches of blacklist lookups over a shared DNS transport.
#[derive(Clone)]
pub struct LookupEngine {
    transport: Arc<dyn DnsTransport>,
    timeout: Duration,
    collect_evidence: bool,
}

impl LookupEngine {
    /// Create an engine over `transport` with default settings
    #[must_use]
    pub fn new(transport: Arc<dyn DnsTransport>) -> Self {
        Self {
            transport,
            timeout: DEFAULT_TIMEOUT,
            collect_evidence: true,
        }
    }

    /// Create an engine owning `transport`
    #[must_use]
    pub fn with_transport<T: DnsTransport + 'static>(transport: T) -> Self {
        Self::new(Arc::new(transport))
    }

    /// Set the per-query timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether listed addresses get a follow-up TXT query
    #[must_use]
    pub const fn collect_evidence(mut self, enabled: bool) -> Self {
        self.collect_evidence = enabled;
        self
    }

    /// Check every address against every zone.
    ///
    /// Returns once all lookups have reported. Entries are ordered by address
    /// input order, then zone order, whatever order the lookups finish in.
    /// Repeated addresses or zones are only looked up once.
    ///
    /// Fails only with `InvalidConcurrency` when `concurrency` is zero; DNS
    /// failures are recorded per entry.
    pub async fn run_batch(
        &self,
        addresses: &[Address],
        zones: &[BlacklistZone],
        concurrency: usize,
    ) -> Result<BatchResult> {
        let limiter = ConcurrencyLimiter::new(concurrency)?;
        let keys = cross_product(addresses, zones);

        if keys.is_empty() {
            debug!(
                addresses = addresses.len(),
                zones = zones.len(),
                "nothing to look up"
            );
            return Ok(BatchResult::default());
        }

        info!(
            lookups = keys.len(),
            concurrency = limiter.max_concurrency(),
            "starting DNSBL batch"
        );
        let start = Instant::now();

        // A slot is taken before each spawn, so at most `concurrency` tasks
        // exist at once however large the batch is.
        let mut handles = Vec::with_capacity(keys.len());
        for key in &keys {
            let task = LookupTask::new(key.clone())
                .timeout(self.timeout)
                .collect_evidence(self.collect_evidence);
            let transport = Arc::clone(&self.transport);
            let slot = limiter.acquire().await;

            handles.push(tokio::spawn(async move {
                let Some(_slot) = slot else {
                    return LookupOutcome::TransientError {
                        detail: "concurrency limiter closed".to_string(),
                    };
                };
                task.run(&*transport).await
            }));
        }

        // join_all keeps handle order, so outcome i belongs to keys[i]
        let outcomes = join_all(handles).await;

        let entries = keys
            .into_iter()
            .zip(outcomes)
            .map(|(key, joined)| {
                let outcome = joined.unwrap_or_else(|e| {
                    warn!(key = %key, error = %e, "lookup task did not complete");
                    LookupOutcome::TransientError {
                        detail: format!("lookup task failed: {e}"),
                    }
                });
                BatchEntry { key, outcome }
            })
            .collect();

        let batch = BatchResult::from_entries(entries);
        let summary = batch.summary();
        info!(
            total = summary.total,
            listed = summary.listed,
            not_listed = summary.not_listed,
            no_answer = summary.no_answer,
            errors = summary.errors,
            elapsed = ?start.elapsed(),
            "DNSBL batch complete"
        );

        Ok(batch)
    }
}

/// Every (address, zone) pair, address-major, first occurrences only.
#[must_use]
pub fn cross_product(addresses: &[Address], zones: &[BlacklistZone]) -> Vec<LookupKey> {
    let mut seen_addresses = HashSet::new();
    let addresses: Vec<Address> = addresses
        .iter()
        .copied()
        .filter(|a| seen_addresses.insert(*a))
        .collect();

    let mut seen_zones = HashSet::new();
    let zones: Vec<&BlacklistZone> = zones.iter().filter(|z| seen_zones.insert(*z)).collect();

    addresses
        .iter()
        .flat_map(|address| {
            zones
                .iter()
                .map(move |zone| LookupKey::new(*address, (*zone).clone()))
        })
        .collect()
}
