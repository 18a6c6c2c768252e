//! Resolve the TARGET argument into a list of addresses.

use anyhow::{bail, Context as _, Result};
use dnsbl_core::Address;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

/// Interpret `input` as one IPv4 address, or else as a file of addresses.
pub fn load(input: &str) -> Result<Vec<Address>> {
    if let Ok(address) = input.parse::<Address>() {
        return Ok(vec![address]);
    }

    let path = Path::new(input);
    if path.is_file() {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read address file {}", path.display()))?;
        let addresses = parse_list(&text);
        debug!(file = %path.display(), count = addresses.len(), "loaded addresses");
        return Ok(addresses);
    }

    bail!("Invalid IP address or file: {input}")
}

/// Parse one address per line.
///
/// Blank lines and `#` comments are ignored. Invalid lines are logged and
/// skipped. Repeated addresses keep their first position.
pub fn parse_list(text: &str) -> Vec<Address> {
    let mut seen = HashSet::new();
    let mut addresses = Vec::new();

    for (number, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match line.parse::<Address>() {
            Ok(address) => {
                if seen.insert(address) {
                    addresses.push(address);
                }
            }
            Err(e) => warn!(line = number + 1, "skipping {e}"),
        }
    }

    addresses
}
