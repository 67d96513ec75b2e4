//! Command-line interface definitions for the fixtures tool.
//!
//! This module defines the CLI arguments using the `clap` crate: an optional
//! league filter and an optional day, defaulting to today.

use chrono::Local;
use clap::Parser;

/// Command-line arguments for the fixtures tool.
///
/// # Examples
///
/// ```sh
/// # Everything on today's scoreboard
/// espnfc_scores
///
/// # Premier League fixtures for a specific day
/// espnfc_scores --league premier 20260815
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Show fixtures for a single league, by alias (e.g. "premier", "seriea")
    #[arg(short, long)]
    pub league: Option<String>,

    /// Day to show fixtures for, as YYYYMMDD
    #[arg(default_value_t = default_day())]
    pub day: String,
}

/// Today's date in the `YYYYMMDD` form the scores endpoint expects.
pub fn default_day() -> String {
    Local::now().format("%Y%m%d").to_string()
}
