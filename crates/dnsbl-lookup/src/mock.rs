//! In-memory transport for tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::transport::{DnsRecord, DnsTransport, RecordType, ResolveFailure};

enum Answer {
    Records(Vec<DnsRecord>),
    Fail(ResolveFailure),
    Hang,
}

/// Scripted answers keyed by (name, type); anything unscripted is NXDOMAIN.
#[derive(Default)]
pub struct MockTransport {
    answers: HashMap<(String, RecordType), Answer>,
    delay: Duration,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
    a_calls: AtomicUsize,
    txt_calls: AtomicUsize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn a(mut self, name: &str, ips: &[Ipv4Addr]) -> Self {
        let records = ips.iter().copied().map(DnsRecord::A).collect();
        self.answers
            .insert((name.to_string(), RecordType::A), Answer::Records(records));
        self
    }

    pub fn txt(mut self, name: &str, texts: &[&str]) -> Self {
        let records = texts.iter().map(|t| DnsRecord::Txt((*t).to_string())).collect();
        self.answers
            .insert((name.to_string(), RecordType::Txt), Answer::Records(records));
        self
    }

    pub fn fail(mut self, name: &str, record_type: RecordType, failure: ResolveFailure) -> Self {
        self.answers
            .insert((name.to_string(), record_type), Answer::Fail(failure));
        self
    }

    pub fn hang(mut self, name: &str) -> Self {
        self.answers.insert((name.to_string(), RecordType::A), Answer::Hang);
        self
    }

    pub const fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Highest number of resolve calls observed running at once
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    pub fn calls(&self, record_type: RecordType) -> usize {
        match record_type {
            RecordType::A => self.a_calls.load(Ordering::SeqCst),
            RecordType::Txt => self.txt_calls.load(Ordering::SeqCst),
        }
    }
}

struct InFlight<'a>(&'a AtomicUsize);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl DnsTransport for MockTransport {
    async fn resolve(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<Vec<DnsRecord>, ResolveFailure> {
        match record_type {
            RecordType::A => self.a_calls.fetch_add(1, Ordering::SeqCst),
            RecordType::Txt => self.txt_calls.fetch_add(1, Ordering::SeqCst),
        };

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        let _guard = InFlight(&self.in_flight);
        self.peak.fetch_max(now, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        match self.answers.get(&(name.to_string(), record_type)) {
            Some(Answer::Records(records)) => Ok(records.clone()),
            Some(Answer::Fail(failure)) => Err(failure.clone()),
            Some(Answer::Hang) => std::future::pending().await,
            None => Err(ResolveFailure::NotFound),
        }
    }
}
