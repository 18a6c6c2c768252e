use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;

use super::BlacklistZone;
use crate::error::{DnsblError, Result};

/// Blacklist zones queried when no other catalog is configured.
pub const DEFAULT_ZONES: &[&str] = &[
    "0spam.fusionzero.com",
    "all.s5h.net",
    "b.barracudacentral.org",
    "bl.0spam.org",
    "bl.blocklist.de",
    "bl.mailspike.net",
    "bl.nordspam.com",
    "bl.spamcop.net",
    "black.dnsbl.brukalai.lt",
    "blacklist.woody.ch",
    "bogons.cymru.com",
    "cbl.abuseat.org",
    "combined.abuse.ch",
    "db.wpbl.info",
    "dnsbl-1.uceprotect.net",
    "dnsbl-2.uceprotect.net",
    "dnsbl-3.uceprotect.net",
    "dnsbl.dronebl.org",
    "dnsbl.sorbs.net",
    "dnsbl.spfbl.net",
    "drone.abuse.ch",
    "dul.dnsbl.sorbs.net",
    "dyna.spamrats.com",
    "http.dnsbl.sorbs.net",
    "ips.backscatterer.org",
    "ix.dnsbl.manitu.net",
    "korea.services.net",
    "misc.dnsbl.sorbs.net",
    "noptr.spamrats.com",
    "orvedb.aupads.org",
    "pbl.spamhaus.org",
    "psbl.surriel.com",
    "rbl.efnetrbl.org",
    "relays.nether.net",
    "sbl.spamhaus.org",
    "singular.ttk.pte.hu",
    "smtp.dnsbl.sorbs.net",
    "socks.dnsbl.sorbs.net",
    "spam.abuse.ch",
    "spam.dnsbl.anonmails.de",
    "spam.dnsbl.sorbs.net",
    "spam.spamrats.com",
    "spambot.bls.digibase.ca",
    "spamrbl.imp.ch",
    "spamsources.fabel.dk",
    "ubl.lashback.com",
    "ubl.unsubscore.com",
    "virus.rbl.jp",
    "web.dnsbl.sorbs.net",
    "wormrbl.imp.ch",
    "xbl.spamhaus.org",
    "z.mailspike.net",
    "zen.spamhaus.org",
    "zombie.dnsbl.sorbs.net",
];

/// An immutable, ordered list of blacklist zones.
///
/// Every zone is validated on load and appears at most once, so pairing a
/// catalog with a set of distinct addresses yields unique lookup keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BlacklistCatalog {
    zones: Vec<BlacklistZone>,
}

impl BlacklistCatalog {
    /// The embedded default catalog
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            zones: DEFAULT_ZONES
                .iter()
                .map(|zone| BlacklistZone((*zone).to_string()))
                .collect(),
        }
    }

    /// Build a catalog from raw entries, validating each one.
    ///
    /// Fails on the first entry that is not a valid zone name or that repeats
    /// an earlier entry. Error indices are 1-based.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = CatalogBuilder::default();
        for (idx, entry) in entries.into_iter().enumerate() {
            builder.push(idx + 1, entry.as_ref())?;
        }
        Ok(builder.finish())
    }

    /// Parse a zones file: one zone per line, `#` starts a comment.
    ///
    /// Error indices are line numbers.
    pub fn parse(text: &str) -> Result<Self> {
        let mut builder = CatalogBuilder::default();
        for (idx, line) in text.lines().enumerate() {
            let entry = line.split('#').next().unwrap_or_default().trim();
            if entry.is_empty() {
                continue;
            }
            builder.push(idx + 1, entry)?;
        }
        Ok(builder.finish())
    }

    /// Load and parse a zones file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// The zones, in catalog order
    #[must_use]
    pub fn zones(&self) -> &[BlacklistZone] {
        &self.zones
    }

    /// Number of zones
    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Whether the catalog has no zones
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Iterate over zones in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, BlacklistZone> {
        self.zones.iter()
    }

    /// Whether the catalog contains `zone`
    #[must_use]
    pub fn contains(&self, zone: &BlacklistZone) -> bool {
        self.zones.contains(zone)
    }
}

impl<'a> IntoIterator for &'a BlacklistCatalog {
    type Item = &'a BlacklistZone;
    type IntoIter = std::slice::Iter<'a, BlacklistZone>;

    fn into_iter(self) -> Self::IntoIter {
        self.zones.iter()
    }
}

#[derive(Default)]
struct CatalogBuilder {
    zones: Vec<BlacklistZone>,
    seen: HashSet<BlacklistZone>,
}

impl CatalogBuilder {
    fn push(&mut self, index: usize, entry: &str) -> Result<()> {
        let zone = BlacklistZone::validate(entry)
            .map_err(|reason| DnsblError::invalid_entry(index, entry, reason))?;

        if !self.seen.insert(zone.clone()) {
            return Err(DnsblError::invalid_entry(index, entry, "duplicate zone"));
        }

        self.zones.push(zone);
        Ok(())
    }

    fn finish(self) -> BlacklistCatalog {
        BlacklistCatalog { zones: self.zones }
    }
}
