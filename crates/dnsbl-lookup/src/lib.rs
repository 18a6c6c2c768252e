//! Concurrent DNS blacklist lookups.
//!
//! Given addresses and blacklist zones, the [`LookupEngine`] queries
//! `<reversed-address>.<zone>` for every pair, at most N at a time, and
//! classifies each answer:
//!
//! | Answer                  | Outcome          |
//! |-------------------------|------------------|
//! | one or more A records   | `Listed`         |
//! | NXDOMAIN                | `NotListed`      |
//! | name exists, no records | `NoAnswer`       |
//! | anything else           | `TransientError` |
//!
//! DNS access goes through the [`DnsTransport`] trait; [`HickoryTransport`]
//! is the production implementation.

#![doc(html_root_url = "https://docs.rs/dnsbl-lookup/1.0.0")]

pub mod engine;
pub mod limiter;
pub mod resolver;
pub mod task;
pub mod transport;

#[cfg(test)]
mod mock;

pub use engine::{cross_product, LookupEngine};
pub use limiter::{ConcurrencyLimiter, Slot, DEFAULT_CONCURRENCY};
pub use resolver::HickoryTransport;
pub use task::{LookupTask, DEFAULT_TIMEOUT};
pub use transport::{DnsRecord, DnsTransport, RecordType, ResolveFailure};
