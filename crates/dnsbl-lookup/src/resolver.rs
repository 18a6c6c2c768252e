//! DNS transport backed by hickory-resolver.

use async_trait::async_trait;
use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::rdata::TXT;
use hickory_resolver::proto::{ProtoError, ProtoErrorKind};
use hickory_resolver::{ResolveError, TokioResolver};
use std::net::IpAddr;
use std::time::Duration;

use dnsbl_core::{DnsblError, Result};

use crate::transport::{DnsRecord, DnsTransport, RecordType, ResolveFailure};

const DNS_PORT: u16 = 53;

/// Resolver-backed [`DnsTransport`].
///
/// Each query gets exactly one attempt bounded by the configured timeout.
#[derive(Clone)]
pub struct HickoryTransport {
    resolver: TokioResolver,
}

impl HickoryTransport {
    /// Use the system resolver configuration (`/etc/resolv.conf` on Unix)
    pub fn from_system(timeout: Duration) -> Result<Self> {
        let resolver = TokioResolver::builder_tokio()
            .map_err(|e| DnsblError::Resolver(format!("failed to read system configuration: {e}")))?
            .with_options(lookup_options(timeout))
            .build();

        Ok(Self { resolver })
    }

    /// Query the given nameservers directly over UDP/TCP port 53
    pub fn with_nameservers(nameservers: &[IpAddr], timeout: Duration) -> Result<Self> {
        if nameservers.is_empty() {
            return Err(DnsblError::Resolver("no nameservers given".to_string()));
        }

        let group = NameServerConfigGroup::from_ips_clear(nameservers, DNS_PORT, true);
        let config = ResolverConfig::from_parts(None, vec![], group);
        let resolver = TokioResolver::builder_with_config(config, TokioConnectionProvider::default())
            .with_options(lookup_options(timeout))
            .build();

        Ok(Self { resolver })
    }
}

fn lookup_options(timeout: Duration) -> ResolverOpts {
    let mut opts = ResolverOpts::default();
    opts.timeout = timeout;
    opts.attempts = 1;
    opts
}

/// Split resolver errors into "does not exist", "exists but empty" and the rest.
///
/// hickory reports every error rcode as `NoRecordsFound`, so only `NOERROR`
/// counts as NODATA. SERVFAIL, REFUSED and friends are transient.
fn classify(err: &ResolveError) -> std::result::Result<Vec<DnsRecord>, ResolveFailure> {
    match err.proto().map(ProtoError::kind) {
        Some(ProtoErrorKind::NoRecordsFound {
            response_code: ResponseCode::NXDomain,
            ..
        }) => Err(ResolveFailure::NotFound),
        Some(ProtoErrorKind::NoRecordsFound {
            response_code: ResponseCode::NoError,
            ..
        }) => Ok(Vec::new()),
        _ => {
            let detail = err.to_string();
            if detail.is_empty() {
                Err(ResolveFailure::Transient("resolution failed".to_string()))
            } else {
                Err(ResolveFailure::Transient(detail))
            }
        }
    }
}

/// Concatenate the character-strings of one TXT record.
fn txt_text(txt: &TXT) -> String {
    txt.iter()
        .map(|data| String::from_utf8_lossy(data))
        .collect()
}

#[async_trait]
impl DnsTransport for HickoryTransport {
    async fn resolve(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> std::result::Result<Vec<DnsRecord>, ResolveFailure> {
        // Absolute name so search domains never apply
        let fqdn = format!("{}.", name.trim_end_matches('.'));

        match record_type {
            RecordType::A => match self.resolver.ipv4_lookup(fqdn.as_str()).await {
                Ok(response) => Ok(response.iter().map(|a| DnsRecord::A(a.0)).collect()),
                Err(e) => classify(&e),
            },
            RecordType::Txt => match self.resolver.txt_lookup(fqdn.as_str()).await {
                Ok(response) => Ok(response.iter().map(|txt| DnsRecord::Txt(txt_text(txt))).collect()),
                Err(e) => classify(&e),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hickory_resolver::proto::op::Query;
    use hickory_resolver::Name;

    #[test]
    fn test_lookup_options_single_attempt() {
        let opts = lookup_options(Duration::from_millis(1500));
        assert_eq!(opts.attempts, 1);
        assert_eq!(opts.timeout, Duration::from_millis(1500));
    }

    #[test]
    fn test_explicit_nameservers_required() {
        assert!(HickoryTransport::with_nameservers(&[], Duration::from_secs(1)).is_err());
    }

    fn rcode_error(response_code: ResponseCode) -> ResolveError {
        let query = Query::query(
            Name::from_ascii("2.0.0.127.bl.example.org.").unwrap(),
            hickory_resolver::proto::rr::RecordType::A,
        );
        ProtoError::nx_error(Box::new(query), None, None, None, response_code, false, None).into()
    }

    #[test]
    fn test_classify_response_codes() {
        let cases = [
            (ResponseCode::NXDomain, "not_found"),
            (ResponseCode::NoError, "nodata"),
            (ResponseCode::ServFail, "transient"),
            (ResponseCode::Refused, "transient"),
            (ResponseCode::FormErr, "transient"),
            (ResponseCode::NotImp, "transient"),
        ];

        for (code, expected) in cases {
            let got = match classify(&rcode_error(code)) {
                Err(ResolveFailure::NotFound) => "not_found",
                Ok(records) if records.is_empty() => "nodata",
                Err(ResolveFailure::Transient(detail)) => {
                    assert!(!detail.is_empty(), "{code:?} produced an empty detail");
                    "transient"
                }
                Ok(records) => panic!("{code:?} produced records: {records:?}"),
            };
            assert_eq!(got, expected, "response code {code:?}");
        }
    }

    #[test]
    fn test_classify_timeout_is_transient() {
        let err = ResolveError::from(ProtoError::from(ProtoErrorKind::Timeout));
        assert!(matches!(
            classify(&err),
            Err(ResolveFailure::Transient(detail)) if !detail.is_empty()
        ));
    }

    #[test]
    fn test_classify_non_proto_error_is_transient() {
        let err = ResolveError::from("no connections available");
        assert!(matches!(classify(&err), Err(ResolveFailure::Transient(_))));
    }

    #[test]
    fn test_txt_strings_joined() {
        let txt = TXT::new(vec![
            "Listed by SBL, see ".to_string(),
            "https://check.spamhaus.org/sbl/query/SBL2".to_string(),
        ]);
        assert_eq!(
            txt_text(&txt),
            "Listed by SBL, see https://check.spamhaus.org/sbl/query/SBL2"
        );
    }

    #[test]
    fn test_txt_invalid_utf8_is_lossy() {
        let txt = TXT::from_bytes(vec![b"reason ".as_slice(), [0xff, b'!'].as_slice()]);
        assert_eq!(txt_text(&txt), "reason \u{fffd}!");
    }
}
