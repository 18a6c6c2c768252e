//! Command implementations.

pub mod check;
pub mod zones;

use dnsbl_core::BlacklistCatalog;
use std::net::IpAddr;
use std::time::Duration;

use crate::output::{OutputFormat, Reporter};

/// Shared context for all commands, after merging flags and config.
#[derive(Debug, Clone)]
pub struct Context {
    /// Zones every address is checked against
    pub catalog: BlacklistCatalog,

    /// Maximum lookups in flight
    pub concurrency: usize,

    /// Per-query timeout
    pub timeout: Duration,

    /// Fetch TXT evidence for listed addresses
    pub evidence: bool,

    /// Nameservers to use instead of the system resolver
    pub nameservers: Vec<IpAddr>,

    /// Output format
    pub output_format: OutputFormat,

    /// Verbose output
    pub verbose: bool,

    /// Disable colors
    pub no_color: bool,
}

impl Context {
    /// Reporter configured for this run.
    pub const fn reporter(&self) -> Reporter {
        Reporter::new(self.output_format)
            .verbose(self.verbose)
            .color(!self.no_color)
    }
}
