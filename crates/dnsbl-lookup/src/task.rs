//! Classification of a single (address, zone) lookup.

use std::net::Ipv4Addr;
use std::time::Duration;

use dnsbl_core::{LookupKey, LookupOutcome};

use crate::transport::{DnsRecord, DnsTransport, RecordType, ResolveFailure};

/// Default per-query timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// One unit of work: query a zone for an address and classify the answer.
///
/// A task never prints or logs; its only effect besides the DNS queries is
/// the returned [`LookupOutcome`].
#[derive(Debug, Clone)]
pub struct LookupTask {
    key: LookupKey,
    timeout: Duration,
    collect_evidence: bool,
}

impl LookupTask {
    /// Create a task with the default timeout and evidence collection on
    #[must_use]
    pub const fn new(key: LookupKey) -> Self {
        Self {
            key,
            timeout: DEFAULT_TIMEOUT,
            collect_evidence: true,
        }
    }

    /// Set the per-query timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether to fetch TXT evidence for listed addresses
    #[must_use]
    pub const fn collect_evidence(mut self, enabled: bool) -> Self {
        self.collect_evidence = enabled;
        self
    }

    /// Run the lookup and classify it. Always yields exactly one outcome.
    pub async fn run(&self, transport: &dyn DnsTransport) -> LookupOutcome {
        let name = self.key.query_name();

        match self.query(transport, &name, RecordType::A).await {
            Ok(records) => {
                let return_codes: Vec<Ipv4Addr> = records
                    .iter()
                    .filter_map(|record| match record {
                        DnsRecord::A(ip) => Some(*ip),
                        DnsRecord::Txt(_) => None,
                    })
                    .collect();

                if return_codes.is_empty() {
                    return LookupOutcome::NoAnswer;
                }

                let evidence = if self.collect_evidence {
                    self.evidence(transport, &name).await
                } else {
                    None
                };

                LookupOutcome::Listed {
                    evidence,
                    return_codes,
                }
            }
            Err(ResolveFailure::NotFound) => LookupOutcome::NotListed,
            Err(ResolveFailure::Transient(detail)) => LookupOutcome::TransientError {
                detail: if detail.is_empty() {
                    "unknown resolution failure".to_string()
                } else {
                    detail
                },
            },
        }
    }

    /// First TXT record on the name; any failure just means "no evidence".
    async fn evidence(&self, transport: &dyn DnsTransport, name: &str) -> Option<String> {
        self.query(transport, name, RecordType::Txt)
            .await
            .ok()?
            .into_iter()
            .find_map(|record| match record {
                DnsRecord::Txt(text) => Some(text),
                DnsRecord::A(_) => None,
            })
            .filter(|text| !text.is_empty())
    }

    async fn query(
        &self,
        transport: &dyn DnsTransport,
        name: &str,
        record_type: RecordType,
    ) -> Result<Vec<DnsRecord>, ResolveFailure> {
        tokio::time::timeout(self.timeout, transport.resolve(name, record_type))
            .await
            .unwrap_or_else(|_| {
                Err(ResolveFailure::Transient(format!(
                    "{record_type} query for {name} timed out after {}ms",
                    self.timeout.as_millis()
                )))
            })
    }
}
