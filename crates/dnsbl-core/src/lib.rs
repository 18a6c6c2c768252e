//! Core types for DNS blacklist (DNSBL) lookups.
//!
//! This crate provides the foundational types shared by the lookup engine and
//! the command-line tool:
//!
//! - **Types**: validated [`Address`] and [`BlacklistZone`] values, the
//!   [`BlacklistCatalog`], per-pair [`LookupOutcome`]s and the final
//!   [`BatchResult`]
//! - **Errors**: configuration errors via [`DnsblError`]
//!
//! # Example
//!
//! ```rust
//! use dnsbl_core::{Address, BlacklistZone, LookupKey};
//!
//! let address: Address = "1.2.3.4".parse().unwrap();
//! let zone: BlacklistZone = "zen.spamhaus.org".parse().unwrap();
//! let key = LookupKey::new(address, zone);
//!
//! assert_eq!(key.query_name(), "4.3.2.1.zen.spamhaus.org");
//! ```

#![doc(html_root_url = "https://docs.rs/dnsbl-core/1.0.0")]

mod error;
pub mod types;

pub use error::{DnsblError, Result};
pub use types::*;
