//! Admission control for concurrent lookups.

use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use dnsbl_core::{DnsblError, Result};

/// Default number of lookups allowed in flight at once
pub const DEFAULT_CONCURRENCY: usize = 20;

/// Bounds how many lookups run their DNS I/O at the same time.
///
/// Cloning shares the same slot pool. Waiters are admitted in FIFO order, so
/// a queued lookup is never starved.
#[derive(Debug, Clone)]
pub struct ConcurrencyLimiter {
    semaphore: Arc<Semaphore>,
    max: usize,
}

/// An occupied slot; the slot is released on drop.
#[derive(Debug)]
pub struct Slot {
    _permit: OwnedSemaphorePermit,
}

impl ConcurrencyLimiter {
    /// Create a limiter admitting at most `max` lookups at once.
    ///
    /// Zero is rejected with [`DnsblError::InvalidConcurrency`].
    pub fn new(max: usize) -> Result<Self> {
        if max < 1 {
            return Err(DnsblError::InvalidConcurrency(max));
        }

        let max = max.min(Semaphore::MAX_PERMITS);
        Ok(Self {
            semaphore: Arc::new(Semaphore::new(max)),
            max,
        })
    }

    /// Wait for a free slot.
    ///
    /// Returns `None` only if the limiter was shut down, which never happens
    /// while any clone is alive.
    pub async fn acquire(&self) -> Option<Slot> {
        Arc::clone(&self.semaphore)
            .acquire_owned()
            .await
            .ok()
            .map(|permit| Slot { _permit: permit })
    }

    /// Take a slot only if one is free right now
    pub fn try_acquire(&self) -> Option<Slot> {
        Arc::clone(&self.semaphore)
            .try_acquire_owned()
            .ok()
            .map(|permit| Slot { _permit: permit })
    }

    /// Configured maximum
    #[must_use]
    pub const fn max_concurrency(&self) -> usize {
        self.max
    }

    /// Slots currently free
    #[must_use]
    pub fn available(&self) -> usize {
        self.semaphore.available_permits()
    }
}

impl Default for ConcurrencyLimiter {
    fn default() -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(DEFAULT_CONCURRENCY)),
            max: DEFAULT_CONCURRENCY,
        }
    }
}
