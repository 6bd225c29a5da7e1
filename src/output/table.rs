//! Table output for scan reports
//!
//! One row per group with something to prune, a blank separator, then the
//! total. Byte cells are colored by severity and counts are left blank when
//! zero.

use std::io::{self, Write};

use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

use super::config::OutputConfig;
use super::utils::{Severity, format_bytes};
use crate::error::Result;
use crate::scan::ScanReport;
use crate::stats::GroupStats;

const HEADERS: [&str; 4] = ["Module", "Bytes pruned", "dirs pruned", "files pruned"];
const TOTAL_LABEL: &str = "Total";
const COLUMN_GAP: &str = "   ";

/// A single table cell: plain text plus how to color it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Cell {
    text: String,
    color: Option<Color>,
    bold: bool,
}

impl Cell {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            bold: false,
        }
    }

    fn colored(text: impl Into<String>, color: Color) -> Self {
        Self {
            color: Some(color),
            ..Self::plain(text)
        }
    }

    fn header(text: &str) -> Self {
        Self {
            bold: true,
            ..Self::plain(text)
        }
    }

    fn count(n: usize) -> Self {
        if n > 0 {
            Self::colored(n.to_string(), Color::Blue)
        } else {
            Self::plain("")
        }
    }

    fn spec(&self) -> Option<ColorSpec> {
        if self.color.is_none() && !self.bold {
            return None;
        }
        let mut spec = ColorSpec::new();
        spec.set_fg(self.color).set_bold(self.bold);
        Some(spec)
    }
}

/// Cells for one row, or `None` when the row is suppressed.
fn stats_row(label: &str, stats: &GroupStats) -> Option<[Cell; 4]> {
    if stats.is_empty() {
        return None;
    }
    let severity = Severity::from_bytes(stats.bytes);
    Some([
        Cell::plain(label),
        Cell::colored(format_bytes(stats.bytes), severity.color()),
        Cell::count(stats.dirs),
        Cell::count(stats.files),
    ])
}

/// Rows of the table body: groups, then `None` for the separator, then total.
fn build_rows(report: &ScanReport) -> Vec<Option<[Cell; 4]>> {
    let mut rows: Vec<Option<[Cell; 4]>> = report
        .non_empty_groups()
        .filter_map(|g| stats_row(&g.name, &g.stats))
        .map(Some)
        .collect();

    if let Some(total) = stats_row(TOTAL_LABEL, &report.total()) {
        rows.push(None);
        rows.push(Some(total));
    }
    rows
}

fn write_row<W: WriteColor>(out: &mut W, cells: &[Cell; 4], widths: &[usize; 4]) -> io::Result<()> {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            write!(out, "{}", COLUMN_GAP)?;
        }
        match cell.spec() {
            Some(spec) => {
                out.set_color(&spec)?;
                write!(out, "{}", cell.text)?;
                out.reset()?;
            }
            None => write!(out, "{}", cell.text)?,
        }
        if i + 1 < cells.len() {
            let pad = widths[i].saturating_sub(cell.text.chars().count());
            write!(out, "{:pad$}", "", pad = pad)?;
        }
    }
    writeln!(out)
}

/// Write the report table to any color-capable writer.
pub fn write_report<W: WriteColor>(out: &mut W, report: &ScanReport) -> io::Result<()> {
    let rows = build_rows(report);

    if rows.is_empty() {
        writeln!(out, "Nothing to prune in {}", report.root.display())?;
    } else {
        let header = HEADERS.map(Cell::header);
        let mut widths = [0usize; 4];
        for cells in std::iter::once(&header).chain(rows.iter().flatten()) {
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(cell.text.chars().count());
            }
        }

        write_row(out, &header, &widths)?;
        for row in &rows {
            match row {
                Some(cells) => write_row(out, cells, &widths)?,
                None => writeln!(out)?,
            }
        }
    }

    if !report.skipped.is_empty() {
        writeln!(out)?;
        let mut warn = ColorSpec::new();
        warn.set_fg(Some(Color::Yellow));
        for skipped in &report.skipped {
            out.set_color(&warn)?;
            write!(out, "skipped")?;
            out.reset()?;
            writeln!(out, " {}: {}", skipped.name, skipped.reason)?;
        }
    }

    Ok(())
}

/// Print the report table to stdout.
pub fn print_report(report: &ScanReport, config: &OutputConfig) -> Result<()> {
    let mut stdout = StandardStream::stdout(config.color_choice());
    write_report(&mut stdout, report)?;
    stdout.flush()?;
    Ok(())
}
