//! JSON output formatting

use std::io::{self, Write};

use serde::Serialize;

use crate::error::Result;
use crate::scan::{GroupReport, ScanReport, SkippedGroup};
use crate::stats::GroupStats;

#[derive(Serialize)]
struct JsonReport<'a> {
    root: &'a std::path::Path,
    groups: &'a [GroupReport],
    total: GroupStats,
    #[serde(skip_serializing_if = "no_skips")]
    skipped: &'a [SkippedGroup],
}

fn no_skips(skipped: &&[SkippedGroup]) -> bool {
    skipped.is_empty()
}

/// Render a scan report, with its total, as pretty-printed JSON.
pub fn to_json(report: &ScanReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        root: &report.root,
        groups: &report.groups,
        total: report.total(),
        skipped: &report.skipped,
    })
}

/// Print a scan report as pretty-printed JSON to stdout.
pub fn print_json(report: &ScanReport) -> Result<()> {
    let json = to_json(report).map_err(io::Error::other)?;
    writeln!(io::stdout().lock(), "{}", json)?;
    Ok(())
}
