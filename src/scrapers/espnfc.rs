//! ESPN FC scoreboard scraper.
//!
//! The scores page is fetched with an `xhr=1` flag, which makes the server
//! answer with a JSON envelope whose `content.html` field carries the
//! scoreboard markup: one `div.score-league` group per competition, with one
//! `div.score.full` child per match.
//!
//! # Markup layout
//!
//! ```text
//! div.score-league [data-league-id]
//! └── div.score.full [data-gameid]
//!     ├── div.team-name   (x2, home then away)
//!     ├── div.team-score  (x2, the winning side also classed "winner")
//!     ├── div.game-info   (status text: "FT", minutes played, kickoff time)
//!     └── a.primary-link  (href to the match detail page)
//! ```

use std::time::Duration;

use once_cell::sync::OnceCell;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::error::ScoresError;
use crate::leagues;
use crate::models::{Club, Fixture};

/// Scoreboard endpoint. The date is passed as a query parameter.
const SCORES_URL: &str = "http://www.espnfc.us/scores";

const REQUEST_TIMEOUT_SECS: u64 = 10;

static CLIENT: OnceCell<Client> = OnceCell::new();

/// Shared HTTP client with a bounded request timeout.
fn http_client() -> Result<&'static Client, ScoresError> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(ScoresError::from)
    })
}

/// Response envelope around the scoreboard markup.
#[derive(Debug, Deserialize)]
struct Envelope {
    content: Option<EnvelopeContent>,
}

#[derive(Debug, Deserialize)]
struct EnvelopeContent {
    html: Option<String>,
}

/// Pull the scoreboard markup out of the JSON envelope body.
///
/// # Errors
///
/// Returns [`ScoresError::Content`] when the body is not JSON or the
/// `content.html` field is missing or empty.
fn envelope_html(body: &str) -> Result<String, ScoresError> {
    let envelope: Envelope = serde_json::from_str(body).map_err(|_| ScoresError::Content)?;
    envelope
        .content
        .and_then(|content| content.html)
        .filter(|html| !html.is_empty())
        .ok_or(ScoresError::Content)
}

/// Fetch the scoreboard page for `day` and parse its embedded markup.
///
/// `day` is expected as `YYYYMMDD` and is forwarded to the endpoint
/// verbatim; no local validation happens.
///
/// # Errors
///
/// [`ScoresError::Network`] on transport failure, timeout, or a non-2xx
/// status; [`ScoresError::Content`] when the response lacks the scoreboard
/// payload.
#[instrument(level = "info", skip_all, fields(%day))]
pub async fn fetch_page(day: &str) -> Result<Html, ScoresError> {
    let url = Url::parse_with_params(SCORES_URL, &[("date", day), ("xhr", "1")])?;

    let body = http_client()?
        .get(url.clone())
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    debug!(bytes = body.len(), %url, "Fetched scoreboard envelope");

    let html = envelope_html(&body)?;
    info!(bytes = html.len(), "Decoded scoreboard markup");

    Ok(Html::parse_document(&html))
}

/// Locate the subtree carrying one league's fixtures, if the day's page has
/// it. `None` means the league simply is not on the scoreboard that day.
pub fn league_subtree(doc: &Html, league_id: u32) -> Option<ElementRef<'_>> {
    let subtree_selector =
        Selector::parse(&format!(r#"div[data-league-id="{league_id}"]"#)).unwrap();
    doc.select(&subtree_selector).next()
}

fn has_class(element: ElementRef<'_>, class: &str) -> bool {
    element
        .value()
        .attr("class")
        .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
}

/// Walk every league group under `root` and collect its fixtures, in
/// document order.
///
/// Fixture nodes without a `data-gameid` attribute are decoration and are
/// silently ignored. Nodes that do carry one but are missing expected
/// sub-nodes (team names, scores, the status line) are logged and skipped;
/// the rest of the page still extracts.
#[instrument(level = "info", skip_all)]
pub fn extract_fixtures(root: ElementRef<'_>) -> Vec<Fixture> {
    let league_selector = Selector::parse("div.score-league").unwrap();
    let fixture_selector = Selector::parse("div.score.full").unwrap();
    let name_selector = Selector::parse("div.team-name").unwrap();
    let score_selector = Selector::parse("div.team-score").unwrap();
    let info_selector = Selector::parse("div.game-info").unwrap();
    let link_selector = Selector::parse("a.primary-link").unwrap();

    // A league-scoped root may itself be the group node.
    let groups: Vec<ElementRef<'_>> = if has_class(root, "score-league") {
        vec![root]
    } else {
        root.select(&league_selector).collect()
    };

    let mut fixtures = Vec::new();
    for league_div in &groups {
        let league = league_div
            .value()
            .attr("data-league-id")
            .and_then(|id| id.parse::<u32>().ok())
            .map(leagues::display_name)
            .unwrap_or("Unknown");

        for fixture_div in league_div.select(&fixture_selector) {
            let Some(game_id) = fixture_div.value().attr("data-gameid") else {
                continue;
            };

            let names: Vec<String> = fixture_div
                .select(&name_selector)
                .map(|name| name.text().collect())
                .collect();
            let names: [String; 2] = match names.try_into() {
                Ok(names) => names,
                Err(names) => {
                    warn!(
                        game_id,
                        count = names.len(),
                        "Fixture did not have exactly two team names; skipping"
                    );
                    continue;
                }
            };

            let mut scores = Vec::new();
            let mut winner = None;
            let mut malformed_score = false;
            for (i, score_div) in fixture_div.select(&score_selector).enumerate() {
                let text: String = score_div.text().collect();
                let text = text.trim();
                if text.is_empty() {
                    // Not played yet.
                    scores.push(0);
                } else {
                    match text.parse::<u32>() {
                        Ok(score) => scores.push(score),
                        Err(_) => {
                            warn!(game_id, score = text, "Unparseable score text; skipping");
                            malformed_score = true;
                            break;
                        }
                    }
                }
                if has_class(score_div, "winner") {
                    // If the source marks both sides, the last one wins.
                    winner = Some(i);
                }
            }
            if malformed_score {
                continue;
            }
            let scores: [u32; 2] = match scores.try_into() {
                Ok(scores) => scores,
                Err(scores) => {
                    warn!(
                        game_id,
                        count = scores.len(),
                        "Fixture did not have exactly two scores; skipping"
                    );
                    continue;
                }
            };

            let Some(game_time) = fixture_div
                .select(&info_selector)
                .next()
                .map(|info| info.text().collect::<String>())
            else {
                warn!(game_id, "Fixture had no game-info node; skipping");
                continue;
            };

            let game_link = fixture_div
                .select(&link_selector)
                .next()
                .and_then(|link| link.value().attr("href"))
                .map(str::to_string);

            let teams = names.map(|name| Club {
                name,
                league: Some(league.to_string()),
            });

            debug!(game_id, league, "Extracted fixture");
            fixtures.push(Fixture {
                teams,
                scores,
                league: league.to_string(),
                winner,
                game_time,
                game_link,
            });
        }
    }

    info!(count = fixtures.len(), "Extracted fixtures");
    fixtures
}
