use serde::Serialize;

use super::{LookupKey, LookupOutcome, OutcomeKind};

/// A lookup key paired with its classified outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchEntry {
    /// Which (address, zone) pair this is
    #[serde(flatten)]
    pub key: LookupKey,
    /// How the lookup was classified
    #[serde(flatten)]
    pub outcome: LookupOutcome,
}

/// The final, fully-resolved result of a batch.
///
/// Entries follow cross-product order: for each address in input order, for
/// each zone in catalog order. A `BatchResult` is only ever handed out once
/// every lookup has reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BatchResult {
    entries: Vec<BatchEntry>,
}

impl BatchResult {
    /// Wrap completed entries
    #[must_use]
    pub const fn from_entries(entries: Vec<BatchEntry>) -> Self {
        Self { entries }
    }

    /// All entries, in cross-product order
    #[must_use]
    pub fn entries(&self) -> &[BatchEntry] {
        &self.entries
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the batch produced no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in cross-product order
    pub fn iter(&self) -> std::slice::Iter<'_, BatchEntry> {
        self.entries.iter()
    }

    /// Entries whose address is listed
    pub fn listed(&self) -> impl Iterator<Item = &BatchEntry> {
        self.entries.iter().filter(|e| e.outcome.is_listed())
    }

    /// Outcome recorded for `key`, if it was part of the batch
    #[must_use]
    pub fn outcome_for(&self, key: &LookupKey) -> Option<&LookupOutcome> {
        self.entries
            .iter()
            .find(|e| &e.key == key)
            .map(|e| &e.outcome)
    }

    /// Count outcomes by kind
    #[must_use]
    pub fn summary(&self) -> BatchSummary {
        let mut summary = BatchSummary {
            total: self.entries.len(),
            ..BatchSummary::default()
        };
        for entry in &self.entries {
            match entry.outcome.kind() {
                OutcomeKind::Listed => summary.listed += 1,
                OutcomeKind::NotListed => summary.not_listed += 1,
                OutcomeKind::NoAnswer => summary.no_answer += 1,
                OutcomeKind::TransientError => summary.errors += 1,
            }
        }
        summary
    }
}

impl<'a> IntoIterator for &'a BatchResult {
    type Item = &'a BatchEntry;
    type IntoIter = std::slice::Iter<'a, BatchEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Outcome counts for a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    /// Number of lookups performed
    pub total: usize,
    /// Lookups that found a listing
    pub listed: usize,
    /// Lookups answered with NXDOMAIN
    pub not_listed: usize,
    /// Lookups that resolved without records
    pub no_answer: usize,
    /// Lookups that failed transiently
    pub errors: usize,
}
