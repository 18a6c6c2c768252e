//! # dnsbl-cli
//!
//! Command-line front end for the DNSBL lookup engine.
//!
//! ## Features
//!
//! - **Single address or address file**: invalid lines are skipped with a warning
//! - **Configurable catalog**: built-in zones, a zones file, or the config file
//! - **Bounded concurrency**: `-c/--concurrency`, 20 by default
//! - **Multiple output formats**: colored text, JSON, CSV, YAML

pub mod cli;
pub mod config;
pub mod logging;
pub mod output;
pub mod targets;

pub use cli::run;
