//! Pagebar - Compact pagination bar formatter
//!
//! CLI entry point.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use pagebar::cli::render_colored;
use pagebar::config::BarConfig;
use pagebar::page::params::PageParams;
use pagebar::page::window::{PageRun, PageSet};

/// Compact pagination bar formatter
///
/// Prints the page numbers to show for a pagination control: boundary pages
/// at each end, a window around the current page, and "..." markers where
/// runs of pages are skipped.
#[derive(Parser, Debug)]
#[command(name = "pagebar", version, about)]
struct Cli {
    /// Page currently being viewed (1-based)
    current_page: String,

    /// Total number of pages
    total_pages: String,

    /// Pages always shown at the start and end (config default when omitted)
    #[arg(long)]
    boundaries: Option<String>,

    /// Pages shown on each side of the current page (config default when omitted)
    #[arg(long)]
    around: Option<String>,

    /// Path to the pagebar.toml defaults file
    #[arg(long, default_value = "pagebar.toml")]
    config: PathBuf,

    /// Emit a JSON report instead of the plain bar
    #[arg(long)]
    json: bool,

    /// Disable ANSI styling
    #[arg(long)]
    no_color: bool,
}

/// JSON report emitted by `--json`.
#[derive(Debug, Serialize)]
struct BarReport<'a> {
    /// Plain rendered bar.
    display: String,
    /// Validated parameters, with `boundaries` post-clamp.
    params: &'a PageParams,
    /// Disjoint ascending runs of visible pages.
    runs: &'a [PageRun],
}

/// Resolve a raw flag value, falling back to a config default.
fn resolve_raw(flag: Option<String>, config_default: i64) -> String {
    flag.unwrap_or_else(|| config_default.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Defaults for the visibility flags come from pagebar.toml when present
    let config = BarConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from '{}'", cli.config.display()))?;

    let boundaries = resolve_raw(cli.boundaries, config.boundaries);
    let around = resolve_raw(cli.around, config.around);

    let params = PageParams::from_raw(&cli.current_page, &cli.total_pages, &boundaries, &around)
        .context("Invalid pagination parameters")?;
    let set = PageSet::compute(&params);

    if cli.json {
        let report = BarReport {
            display: set.render(),
            params: &params,
            runs: set.runs(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        );
    } else {
        println!("{}", render_colored(&set));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_raw_prefers_the_flag() {
        assert_eq!(resolve_raw(Some("5".to_string()), 1), "5");
        assert_eq!(resolve_raw(None, 2), "2");
    }

    #[test]
    fn test_bar_report_serializes_runs_and_display() {
        let params = PageParams::new(2, 10, 3, 1).unwrap();
        let set = PageSet::compute(&params);
        let report = BarReport {
            display: set.render(),
            params: &params,
            runs: set.runs(),
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["display"], "1 2 3 ... 8 9 10");
        assert_eq!(json["params"]["boundaries"], 3);
        assert_eq!(json["runs"][0]["start"], 1);
        assert_eq!(json["runs"][1]["end"], 10);
    }
}
