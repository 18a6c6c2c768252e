//! `dnsbl --list-zones` - print the blacklist catalog.

use anyhow::Result;
use std::io::Write;

use super::Context;
use crate::output::OutputFormat;

pub fn execute<W: Write>(ctx: &Context, out: &mut W) -> Result<()> {
    match ctx.output_format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &ctx.catalog)?;
            writeln!(out)?;
        }
        OutputFormat::Yaml => serde_yaml::to_writer(&mut *out, &ctx.catalog)?,
        OutputFormat::Csv => {
            writeln!(out, "zone")?;
            for zone in &ctx.catalog {
                writeln!(out, "{zone}")?;
            }
        }
        OutputFormat::Pretty => {
            for zone in &ctx.catalog {
                writeln!(out, "{zone}")?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dnsbl_core::BlacklistCatalog;
    use std::time::Duration;

    fn context(format: OutputFormat) -> Context {
        Context {
            catalog: BlacklistCatalog::from_entries(["zen.spamhaus.org", "bl.spamcop.net"]).unwrap(),
            concurrency: 20,
            timeout: Duration::from_secs(5),
            evidence: true,
            nameservers: Vec::new(),
            output_format: format,
            verbose: false,
            no_color: true,
        }
    }

    #[test]
    fn test_pretty_lists_one_per_line() {
        let mut out = Vec::new();
        execute(&context(OutputFormat::Pretty), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "zen.spamhaus.org\nbl.spamcop.net\n");
    }

    #[test]
    fn test_json_is_an_array() {
        let mut out = Vec::new();
        execute(&context(OutputFormat::Json), &mut out).unwrap();
        let zones: Vec<String> = serde_json::from_slice(&out).unwrap();
        assert_eq!(zones, vec!["zen.spamhaus.org", "bl.spamcop.net"]);
    }
}
