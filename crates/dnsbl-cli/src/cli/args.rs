//! Command-line argument definitions using clap.

use clap::Parser;
use std::net::IpAddr;
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Check whether IPv4 addresses are listed on DNS-based blacklists
///
/// TARGET is either a single IPv4 address or a file with one address per
/// line. Every address is checked against every blacklist zone.
#[derive(Parser, Debug)]
#[command(name = "dnsbl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// IPv4 address or file with IPv4 addresses
    #[arg(required_unless_present = "list_zones")]
    pub target: Option<String>,

    /// Number of concurrent lookups [default: 20]
    #[arg(short, long)]
    pub concurrency: Option<usize>,

    /// Also report addresses that are not listed, and lookup errors
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Per-query timeout in milliseconds [default: 5000]
    #[arg(short, long, value_name = "MS")]
    pub timeout: Option<u64>,

    /// File with blacklist zones, one per line
    #[arg(short, long, value_name = "PATH")]
    pub zones_file: Option<PathBuf>,

    /// Query this nameserver instead of the system resolver (repeatable)
    #[arg(short, long = "nameserver", value_name = "IP")]
    pub nameservers: Vec<IpAddr>,

    /// Skip the TXT query that fetches the listing reason
    #[arg(long)]
    pub no_evidence: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Configuration file [default: platform config dir]
    #[arg(long, value_name = "PATH", env = "DNSBL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the blacklist zones that would be queried, then exit
    #[arg(long)]
    pub list_zones: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_target_required() {
        assert!(Cli::try_parse_from(["dnsbl"]).is_err());
        assert!(Cli::try_parse_from(["dnsbl", "--list-zones"]).is_ok());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "dnsbl", "-c", "5", "-v", "-n", "9.9.9.9", "-n", "1.1.1.1", "-o", "json", "127.0.0.2",
        ])
        .unwrap();
        assert_eq!(cli.target.as_deref(), Some("127.0.0.2"));
        assert_eq!(cli.concurrency, Some(5));
        assert!(cli.verbose);
        assert_eq!(cli.nameservers.len(), 2);
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }
}
