use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Longest domain name allowed on the wire, without the root dot
const MAX_NAME_LEN: usize = 253;
/// Longest single label
const MAX_LABEL_LEN: usize = 63;

/// A validated DNS blacklist zone, e.g. `zen.spamhaus.org`.
///
/// Stored lowercase and without the trailing root dot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BlacklistZone(pub(crate) String);

impl BlacklistZone {
    /// The zone name
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate a zone name, returning the reason it was rejected.
    pub fn validate(name: &str) -> std::result::Result<Self, String> {
        let name = name.trim();
        let name = name.strip_suffix('.').unwrap_or(name);

        if name.is_empty() {
            return Err("zone name is empty".to_string());
        }
        if name.len() > MAX_NAME_LEN {
            return Err(format!("zone name exceeds {MAX_NAME_LEN} characters"));
        }

        for label in name.split('.') {
            if label.is_empty() {
                return Err("zone name contains an empty label".to_string());
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(format!("label '{label}' exceeds {MAX_LABEL_LEN} characters"));
            }
            if label.starts_with('-') || label.ends_with('-') {
                return Err(format!("label '{label}' starts or ends with a hyphen"));
            }
            if let Some(c) = label
                .chars()
                .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
            {
                return Err(format!("label '{label}' contains invalid character '{c}'"));
            }
        }

        Ok(Self(name.to_ascii_lowercase()))
    }
}

impl FromStr for BlacklistZone {
    type Err = crate::DnsblError;

    fn from_str(s: &str) -> crate::Result<Self> {
        Self::validate(s).map_err(|reason| crate::DnsblError::invalid_entry(1, s, reason))
    }
}

impl TryFrom<String> for BlacklistZone {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Self::validate(&value)
    }
}

impl From<BlacklistZone> for String {
    fn from(zone: BlacklistZone) -> Self {
        zone.0
    }
}

impl AsRef<str> for BlacklistZone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlacklistZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
