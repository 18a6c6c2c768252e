use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;

use super::{Address, BlacklistZone};

/// One unit of work: an address checked against one blacklist zone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LookupKey {
    /// Address being checked
    pub address: Address,
    /// Blacklist zone it is checked against
    pub zone: BlacklistZone,
}

impl LookupKey {
    /// Pair an address with a zone
    #[must_use]
    pub const fn new(address: Address, zone: BlacklistZone) -> Self {
        Self { address, zone }
    }

    /// The DNS name queried for this key: `<reversed-address>.<zone>`
    #[must_use]
    pub fn query_name(&self) -> String {
        format!("{}.{}", self.address.reversed_label(), self.zone)
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.address, self.zone)
    }
}

/// Classified result of a single blacklist lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LookupOutcome {
    /// The zone answered with one or more A records
    Listed {
        /// Text of the first TXT record, when the zone publishes one
        #[serde(default, skip_serializing_if = "Option::is_none")]
        evidence: Option<String>,
        /// A records returned by the zone (usually `127.0.0.x` codes)
        #[serde(default)]
        return_codes: Vec<Ipv4Addr>,
    },

    /// The zone answered NXDOMAIN
    NotListed,

    /// The name resolved but carried no A records
    NoAnswer,

    /// Timeout, missing nameservers or any other resolution failure
    TransientError {
        /// What went wrong
        detail: String,
    },
}

impl LookupOutcome {
    /// Returns true if the address is listed
    #[must_use]
    pub const fn is_listed(&self) -> bool {
        matches!(self, Self::Listed { .. })
    }

    /// Returns true if the lookup failed without a definitive answer
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::TransientError { .. })
    }

    /// The outcome's kind, without its payload
    #[must_use]
    pub const fn kind(&self) -> OutcomeKind {
        match self {
            Self::Listed { .. } => OutcomeKind::Listed,
            Self::NotListed => OutcomeKind::NotListed,
            Self::NoAnswer => OutcomeKind::NoAnswer,
            Self::TransientError { .. } => OutcomeKind::TransientError,
        }
    }

    /// Evidence text for a listed address
    #[must_use]
    pub fn evidence(&self) -> Option<&str> {
        match self {
            Self::Listed { evidence, .. } => evidence.as_deref(),
            _ => None,
        }
    }
}

/// Payload-free discriminant of [`LookupOutcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// See [`LookupOutcome::Listed`]
    Listed,
    /// See [`LookupOutcome::NotListed`]
    NotListed,
    /// See [`LookupOutcome::NoAnswer`]
    NoAnswer,
    /// See [`LookupOutcome::TransientError`]
    TransientError,
}

impl OutcomeKind {
    /// Short machine-friendly label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Listed => "listed",
            Self::NotListed => "not_listed",
            Self::NoAnswer => "no_answer",
            Self::TransientError => "transient_error",
        }
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
