//! # ESPN FC Scores
//!
//! A small CLI that fetches the ESPN FC scoreboard for a given day, extracts
//! every football fixture from the page, optionally narrows the result to a
//! single league, and prints a one-line summary per match.
//!
//! ## Usage
//!
//! ```sh
//! # Everything on today's scoreboard
//! espnfc_scores
//!
//! # Premier League only, for a specific day
//! espnfc_scores --league premier 20260815
//! ```
//!
//! ## Architecture
//!
//! The application is a straight pipeline:
//! 1. **CLI**: parse the league alias and day arguments
//! 2. **Fetching**: one GET for the day's scoreboard page
//! 3. **Extraction**: walk the parsed markup into [`models::Fixture`] records
//! 4. **Output**: print each fixture, or exit non-zero when there are none

use std::error::Error;

use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod error;
mod leagues;
mod models;
mod scrapers;

use cli::Cli;
use models::GameTime;
use scrapers::espnfc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tfmt()
        .with_env_filter(filter)
        // Fixture lines own stdout; logs go to stderr.
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();
    debug!(?args.league, %args.day, "Parsed CLI arguments");

    // Resolve the league filter before touching the network so a bad alias
    // fails fast.
    let league_id = args
        .league
        .as_deref()
        .map(leagues::resolve_alias)
        .transpose()?;

    let doc = espnfc::fetch_page(&args.day).await?;

    let fixtures = match league_id {
        Some(id) => match espnfc::league_subtree(&doc, id) {
            Some(scope) => espnfc::extract_fixtures(scope),
            None => {
                debug!(league_id = id, day = %args.day, "League not on the scoreboard");
                Vec::new()
            }
        },
        None => espnfc::extract_fixtures(doc.root_element()),
    };

    if fixtures.is_empty() {
        warn!(day = %args.day, "No fixtures found");
        eprintln!("No fixtures");
        std::process::exit(1);
    }

    info!(count = fixtures.len(), day = %args.day, "Printing fixtures");
    for fixture in &fixtures {
        if let GameTime::Kickoff(kickoff) = fixture.kickoff() {
            debug!(%kickoff, home = %fixture.teams[0].name, "Fixture has not kicked off yet");
        } else if let Some(winner) = fixture.winning_team() {
            debug!(winner = %winner.name, "Decided fixture");
        }
        println!("{}", fixture.pretty());
    }

    Ok(())
}
