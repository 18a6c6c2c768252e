//! Output formatting for different formats.

use anyhow::Result;
use clap::ValueEnum;
use colored::{Color, Colorize};
use dnsbl_core::{BatchEntry, BatchResult, BatchSummary, LookupOutcome};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::str::FromStr;

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored one-line-per-finding text
    #[default]
    Pretty,
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// YAML output
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => anyhow::bail!(
                "Unknown output format: {}\n\
                 Valid formats: pretty, json, csv, yaml",
                s
            ),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Structured document emitted by the JSON and YAML formats.
#[derive(Serialize)]
struct Report<'a> {
    summary: BatchSummary,
    results: &'a BatchResult,
}

/// Renders a finished batch in one of the [`OutputFormat`]s.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    format: OutputFormat,
    verbose: bool,
    color: bool,
}

impl Reporter {
    pub const fn new(format: OutputFormat) -> Self {
        Self {
            format,
            verbose: false,
            color: true,
        }
    }

    /// Also print not-listed, no-answer and failed lookups in pretty mode.
    pub const fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub const fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn render<W: Write>(&self, batch: &BatchResult, out: &mut W) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                let report = Report {
                    summary: batch.summary(),
                    results: batch,
                };
                serde_json::to_writer_pretty(&mut *out, &report)?;
                writeln!(out)?;
            }
            OutputFormat::Yaml => {
                let report = Report {
                    summary: batch.summary(),
                    results: batch,
                };
                serde_yaml::to_writer(&mut *out, &report)?;
            }
            OutputFormat::Csv => self.render_csv(batch, out)?,
            OutputFormat::Pretty => self.render_pretty(batch, out)?,
        }

        Ok(())
    }

    fn render_pretty<W: Write>(&self, batch: &BatchResult, out: &mut W) -> Result<()> {
        for entry in batch {
            if let Some(line) = self.pretty_line(entry) {
                writeln!(out, "{line}")?;
            }
            if let Some(evidence) = entry.outcome.evidence() {
                writeln!(out, "  ╰─ ➤ {evidence}")?;
            }
        }

        let summary = batch.summary();
        let listed = format!("{} listed", summary.listed);
        let listed = if summary.listed > 0 {
            self.paint(&listed, Color::Green)
        } else {
            listed
        };
        writeln!(
            out,
            "{} lookups: {}, {} not listed, {} no answer, {} errors",
            summary.total, listed, summary.not_listed, summary.no_answer, summary.errors
        )?;

        Ok(())
    }

    fn pretty_line(&self, entry: &BatchEntry) -> Option<String> {
        let address = entry.key.address;
        let zone = &entry.key.zone;

        match &entry.outcome {
            LookupOutcome::Listed { return_codes, .. } => {
                let line = match return_codes.first() {
                    Some(code) => format!("{address} is blacklisted on {zone}: {code}"),
                    None => format!("{address} is blacklisted on {zone}"),
                };
                Some(self.paint(&line, Color::Green))
            }
            _ if !self.verbose => None,
            LookupOutcome::NotListed => Some(self.paint(
                &format!("{address} is not blacklisted on {zone}"),
                Color::BrightBlack,
            )),
            LookupOutcome::NoAnswer => Some(self.paint(
                &format!("{address} has no reply from {zone}"),
                Color::Red,
            )),
            LookupOutcome::TransientError { detail } => Some(self.paint(
                &format!(
                    "{address} errored on {zone} with {}: {detail}",
                    entry.key.query_name()
                ),
                Color::Red,
            )),
        }
    }

    fn render_csv<W: Write>(&self, batch: &BatchResult, out: &mut W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(&mut *out);
        writer.write_record(["address", "zone", "query", "status", "return_codes", "detail"])?;

        for entry in batch {
            let (codes, detail) = match &entry.outcome {
                LookupOutcome::Listed {
                    evidence,
                    return_codes,
                } => (
                    return_codes
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(";"),
                    evidence.clone().unwrap_or_default(),
                ),
                LookupOutcome::TransientError { detail } => (String::new(), detail.clone()),
                LookupOutcome::NotListed | LookupOutcome::NoAnswer => {
                    (String::new(), String::new())
                }
            };

            writer.write_record([
                entry.key.address.to_string(),
                entry.key.zone.to_string(),
                entry.key.query_name(),
                entry.outcome.kind().label().to_string(),
                codes,
                detail,
            ])?;
        }

        writer.flush()?;
        Ok(())
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dnsbl_core::LookupKey;
    use std::net::Ipv4Addr;

    fn entry(address: &str, zone: &str, outcome: LookupOutcome) -> BatchEntry {
        BatchEntry {
            key: LookupKey::new(address.parse().unwrap(), zone.parse().unwrap()),
            outcome,
        }
    }

    fn sample() -> BatchResult {
        BatchResult::from_entries(vec![
            entry(
                "127.0.0.2",
                "zen.spamhaus.org",
                LookupOutcome::Listed {
                    evidence: Some("https://www.spamhaus.org/sbl/query/SBL2".to_string()),
                    return_codes: vec![Ipv4Addr::new(127, 0, 0, 2)],
                },
            ),
            entry("127.0.0.2", "bl.spamcop.net", LookupOutcome::NotListed),
            entry("127.0.0.2", "dnsbl.sorbs.net", LookupOutcome::NoAnswer),
            entry(
                "127.0.0.2",
                "b.barracudacentral.org",
                LookupOutcome::TransientError {
                    detail: "A query timed out".to_string(),
                },
            ),
        ])
    }

    fn render(reporter: Reporter, batch: &BatchResult) -> String {
        let mut out = Vec::new();
        reporter.render(batch, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("yml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_pretty_shows_only_listed() {
        let text = render(Reporter::new(OutputFormat::Pretty).color(false), &sample());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "127.0.0.2 is blacklisted on zen.spamhaus.org: 127.0.0.2",
                "  ╰─ ➤ https://www.spamhaus.org/sbl/query/SBL2",
                "4 lookups: 1 listed, 1 not listed, 1 no answer, 1 errors",
            ]
        );
    }

    #[test]
    fn test_pretty_verbose_shows_everything() {
        let reporter = Reporter::new(OutputFormat::Pretty).color(false).verbose(true);
        let text = render(reporter, &sample());

        assert!(text.contains("127.0.0.2 is not blacklisted on bl.spamcop.net"));
        assert!(text.contains("127.0.0.2 has no reply from dnsbl.sorbs.net"));
        assert!(text.contains(
            "127.0.0.2 errored on b.barracudacentral.org with 2.0.0.127.b.barracudacentral.org: A query timed out"
        ));
        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    fn test_pretty_empty_batch() {
        let text = render(Reporter::new(OutputFormat::Pretty).color(false), &BatchResult::default());
        assert_eq!(text, "0 lookups: 0 listed, 0 not listed, 0 no answer, 0 errors\n");
    }

    #[test]
    fn test_json_report() {
        let text = render(Reporter::new(OutputFormat::Json), &sample());
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["summary"]["total"], 4);
        assert_eq!(value["summary"]["listed"], 1);
        assert_eq!(value["results"][0]["status"], "listed");
        assert_eq!(value["results"][0]["address"], "127.0.0.2");
        assert_eq!(value["results"][0]["return_codes"][0], "127.0.0.2");
        assert_eq!(value["results"][3]["detail"], "A query timed out");
    }

    #[test]
    fn test_yaml_report() {
        let text = render(Reporter::new(OutputFormat::Yaml), &sample());
        assert!(text.contains("summary:"));
        assert!(text.contains("status: not_listed"));
    }

    #[test]
    fn test_csv_report() {
        let text = render(Reporter::new(OutputFormat::Csv), &sample());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "address,zone,query,status,return_codes,detail");
        assert_eq!(
            lines[1],
            "127.0.0.2,zen.spamhaus.org,2.0.0.127.zen.spamhaus.org,listed,127.0.0.2,https://www.spamhaus.org/sbl/query/SBL2"
        );
        assert_eq!(
            lines[2],
            "127.0.0.2,bl.spamcop.net,2.0.0.127.bl.spamcop.net,not_listed,,"
        );
        assert_eq!(lines.len(), 5);
    }
}
