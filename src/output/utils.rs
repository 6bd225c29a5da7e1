//! Shared utility functions for output formatting

use termcolor::Color;

const UNITS: [&str; 9] = ["B", "kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Above this many bytes a group is worth a second look.
pub const MEDIUM_THRESHOLD: u64 = 3_000;
/// Above this many bytes a group is worth pruning.
pub const HIGH_THRESHOLD: u64 = 10_000;

/// Format a byte count in SI units with three significant digits.
///
/// Trailing zeros are dropped: `1500` -> `1.5 kB`, `1000000` -> `1 MB`.
pub fn format_bytes(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1000.0 && unit < UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }

    if unit == 0 {
        return format!("{} {}", bytes, UNITS[0]);
    }

    let decimals = if value >= 100.0 {
        0
    } else if value >= 10.0 {
        1
    } else {
        2
    };
    let fixed = format!("{:.*}", decimals, value);
    let trimmed: f64 = fixed.parse().unwrap_or(value);
    format!("{} {}", trimmed, UNITS[unit])
}

/// Display-only classification of a byte total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn from_bytes(bytes: u64) -> Self {
        if bytes > HIGH_THRESHOLD {
            Severity::High
        } else if bytes > MEDIUM_THRESHOLD {
            Severity::Medium
        } else {
            Severity::Low
        }
    }

    pub fn color(self) -> Color {
        match self {
            Severity::Low => Color::Green,
            Severity::Medium => Color::Yellow,
            Severity::High => Color::Red,
        }
    }
}
