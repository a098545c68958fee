//! Shared utilities for commands
//!
//! This module contains:
//! - `load_config` - Resolve the insight threshold configuration
//! - `resolve_date` - Parse `--date` or fall back to today

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tally_core::InsightConfig;

/// Load thresholds from `--config`, the user override file, or defaults
pub fn load_config(path: Option<&Path>) -> Result<InsightConfig> {
    match path {
        Some(p) => InsightConfig::load(Some(p))
            .with_context(|| format!("Failed to load config from {}", p.display())),
        None => InsightConfig::load(None).context("Failed to load insight config"),
    }
}

/// Parse a YYYY-MM-DD reference date, defaulting to today (local time)
pub fn resolve_date(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(d) => NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d")
            .context("Invalid --date format (use YYYY-MM-DD)"),
        None => Ok(chrono::Local::now().date_naive()),
    }
}
