//! CLI entry point for prunescan

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use prunescan::{OutputConfig, ScanConfig, Scanner, print_json, print_report};
use tracing::Level;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "prunescan")]
#[command(about = "Report how many bytes of docs, tests and other junk an install root carries")]
#[command(version)]
struct Args {
    /// Install root whose children are scanned as packages
    #[arg(default_value = "node_modules")]
    path: PathBuf,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Skip packages that cannot be read instead of aborting
    #[arg(short = 'k', long = "keep-going")]
    keep_going: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(args.verbose))
        .with_writer(std::io::stderr)
        .with_ansi(should_use_color(args.color) && std::io::stderr().is_terminal())
        .init();

    let config = ScanConfig {
        keep_going: args.keep_going,
        ..Default::default()
    };

    let report = match Scanner::new(config).scan(&args.path) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("prunescan: {}", e);
            process::exit(1);
        }
    };

    let result = if args.json {
        print_json(&report)
    } else {
        print_report(
            &report,
            &OutputConfig {
                use_color: should_use_color(args.color),
            },
        )
    };

    if let Err(e) = result {
        eprintln!("prunescan: {}", e);
        process::exit(1);
    }
}
