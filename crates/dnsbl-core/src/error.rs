use thiserror::Error;

/// Result type alias for DNSBL operations
pub type Result<T> = std::result::Result<T, DnsblError>;

/// Configuration-level errors.
///
/// Per-lookup DNS failures are never represented here: they are data
/// (see [`crate::LookupOutcome`]) and never abort a batch.
#[derive(Error, Debug)]
pub enum DnsblError {
    /// Input is not a syntactically valid IPv4 literal
    #[error("invalid IPv4 address '{input}': {reason}")]
    InvalidAddress {
        /// The rejected input, as given
        input: String,
        /// Why it was rejected
        reason: String,
    },

    /// A blacklist catalog entry is not a usable zone name
    #[error("invalid catalog entry #{index} '{entry}': {reason}")]
    InvalidCatalogEntry {
        /// 1-based position of the entry in its source
        index: usize,
        /// The rejected entry, as given
        entry: String,
        /// Why it was rejected
        reason: String,
    },

    /// Concurrency must be at least one
    #[error("invalid concurrency {0}: must be at least 1")]
    InvalidConcurrency(usize),

    /// The DNS transport could not be constructed
    #[error("resolver setup failed: {0}")]
    Resolver(String),

    /// I/O error while reading a catalog or address list
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DnsblError {
    /// Returns true if the error concerns a single input address.
    ///
    /// Address errors are fatal only for that address when processing a
    /// list; every other variant aborts the run.
    #[must_use]
    pub const fn is_address_error(&self) -> bool {
        matches!(self, Self::InvalidAddress { .. })
    }

    pub(crate) fn invalid_address(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidAddress {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_entry(index: usize, entry: &str, reason: impl Into<String>) -> Self {
        Self::InvalidCatalogEntry {
            index,
            entry: entry.to_string(),
            reason: reason.into(),
        }
    }
}
