//! The DNS resolution capability the lookup engine depends on.
//!
//! Any resolver that can answer A and TXT queries and tell a definitive
//! NXDOMAIN apart from other failures can drive the engine. The production
//! implementation lives in [`crate::resolver`].

use async_trait::async_trait;
use std::fmt;
use std::net::Ipv4Addr;

/// Record types queried during a blacklist lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    /// IPv4 address record; presence means "listed"
    A,
    /// Text record; carries the listing reason
    Txt,
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => f.write_str("A"),
            Self::Txt => f.write_str("TXT"),
        }
    }
}

/// A single answer record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DnsRecord {
    /// IPv4 address from an A record
    A(Ipv4Addr),
    /// Text from a TXT record, character-strings concatenated
    Txt(String),
}

/// Why a query produced no records.
///
/// An empty answer (NODATA) is not a failure: transports return `Ok(vec![])`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveFailure {
    /// The name does not exist (NXDOMAIN)
    NotFound,
    /// Timeout, no nameservers, SERVFAIL, malformed response, ...
    Transient(String),
}

impl fmt::Display for ResolveFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => f.write_str("NXDOMAIN"),
            Self::Transient(detail) => f.write_str(detail),
        }
    }
}

/// Resolve a name for one record type.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    /// Query `name` for `record_type`.
    ///
    /// `name` is a relative-looking name such as `4.3.2.1.zen.spamhaus.org`;
    /// implementations must treat it as fully qualified.
    async fn resolve(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<Vec<DnsRecord>, ResolveFailure>;
}
