//! Report formatting and display
//!
//! - `table` - colored table on the terminal
//! - `json` - machine-readable report
//! - `utils` - byte formatting and severity tiers

mod config;
mod json;
mod table;
mod utils;

pub use config::OutputConfig;
pub use json::{print_json, to_json};
pub use table::{print_report, write_report};
pub use utils::{HIGH_THRESHOLD, MEDIUM_THRESHOLD, Severity, format_bytes};
