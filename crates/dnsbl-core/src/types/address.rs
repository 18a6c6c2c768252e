use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::error::{DnsblError, Result};

/// A validated IPv4 address to check against blacklists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(Ipv4Addr);

impl Address {
    /// Wrap an already-parsed IPv4 address
    #[must_use]
    pub const fn new(ip: Ipv4Addr) -> Self {
        Self(ip)
    }

    /// The underlying IPv4 address
    #[must_use]
    pub const fn ip(&self) -> Ipv4Addr {
        self.0
    }

    /// The reversed-octet label used as a DNSBL query prefix.
    ///
    /// `1.2.3.4` becomes `4.3.2.1`.
    #[must_use]
    pub fn reversed_label(&self) -> String {
        reverse_ipv4(&self.0)
    }

    /// Parse a reversed-octet label back into an address.
    ///
    /// This is the inverse of [`Address::reversed_label`].
    pub fn from_reversed_label(label: &str) -> Result<Self> {
        let octets: Vec<&str> = label.split('.').collect();
        if octets.len() != 4 {
            return Err(DnsblError::invalid_address(
                label,
                format!("expected 4 octets in reversed label, got {}", octets.len()),
            ));
        }

        format!("{}.{}.{}.{}", octets[3], octets[2], octets[1], octets[0]).parse()
    }

    /// Recover the address from a full query name under `zone`.
    ///
    /// Example: `4.3.2.1.bl.example.org` under `bl.example.org` -> `1.2.3.4`
    pub fn from_query_name(query: &str, zone: &str) -> Result<Self> {
        let query = query.trim_end_matches('.');
        let zone = zone.trim_end_matches('.');
        let prefix = query
            .strip_suffix(zone)
            .and_then(|s| s.strip_suffix('.'))
            .ok_or_else(|| {
                DnsblError::invalid_address(query, format!("query name is not under zone '{zone}'"))
            })?;

        Self::from_reversed_label(prefix)
    }
}

/// Reverse the octets of an IPv4 address.
///
/// Converts `1.2.3.4` into `4.3.2.1` (without zone suffix).
#[must_use]
pub fn reverse_ipv4(ip: &Ipv4Addr) -> String {
    let octets = ip.octets();
    format!("{}.{}.{}.{}", octets[3], octets[2], octets[1], octets[0])
}

impl FromStr for Address {
    type Err = DnsblError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DnsblError::invalid_address(s, "empty input"));
        }

        match trimmed.parse::<Ipv4Addr>() {
            Ok(ip) => Ok(Self(ip)),
            Err(_) if trimmed.parse::<Ipv6Addr>().is_ok() => Err(DnsblError::invalid_address(
                trimmed,
                "IPv6 addresses are not supported",
            )),
            Err(e) => Err(DnsblError::invalid_address(trimmed, e.to_string())),
        }
    }
}

impl From<Ipv4Addr> for Address {
    fn from(ip: Ipv4Addr) -> Self {
        Self(ip)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
