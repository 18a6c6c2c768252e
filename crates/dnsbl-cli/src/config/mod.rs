//! Configuration management.

use anyhow::{Context as _, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;

/// CLI configuration.
///
/// Every field is optional in the file. Command-line flags take precedence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of lookups in flight.
    pub concurrency: Option<usize>,

    /// Per-query timeout in milliseconds.
    pub timeout_ms: Option<u64>,

    /// Default output format.
    pub output_format: Option<OutputFormat>,

    /// Fetch the TXT listing reason for listed addresses.
    pub evidence: bool,

    /// Nameservers to query instead of the system resolver.
    pub nameservers: Vec<IpAddr>,

    /// File with blacklist zones, one per line.
    pub zones_file: Option<PathBuf>,

    /// Inline blacklist zones, used when no zones file is configured.
    pub zones: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            concurrency: None,
            timeout_ms: None,
            output_format: None,
            evidence: true,
            nameservers: Vec::new(),
            zones_file: None,
            zones: Vec::new(),
        }
    }
}

impl Config {
    /// Get the config file path.
    pub fn path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("org", "dnsbl", "dnsbl")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default location, if present.
    pub fn load() -> Result<Self> {
        let Ok(path) = Self::path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from an explicit file. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.evidence);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
concurrency = 8
timeout_ms = 1500
output_format = "json"
evidence = false
nameservers = ["9.9.9.9"]
zones = ["bl.example.org"]
"#
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.concurrency, Some(8));
        assert_eq!(config.timeout_ms, Some(1500));
        assert_eq!(config.output_format, Some(OutputFormat::Json));
        assert!(!config.evidence);
        assert_eq!(config.nameservers, vec!["9.9.9.9".parse::<IpAddr>().unwrap()]);
        assert_eq!(config.zones, vec!["bl.example.org".to_string()]);
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(toml::from_str::<Config>("output_format = \"xml\"").is_err());
    }
}
