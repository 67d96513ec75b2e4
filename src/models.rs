//! Domain records for scraped fixtures.
//!
//! This module defines the structures the extractor produces:
//! - [`Club`]: one team taking part in a fixture
//! - [`Fixture`]: a single match with its scores and status line
//! - [`GameTime`]: the status text viewed as either a kickoff clock time or
//!   a raw status string
//!
//! Records are immutable after construction; the derived views
//! ([`Fixture::winning_team`], [`Fixture::kickoff`]) recompute from the
//! stored fields on every call.

use chrono::NaiveTime;

/// A club taking part in a fixture.
///
/// Two clubs with the same name are distinct records; no deduplication
/// happens anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Club {
    /// Club name as it appeared in the markup. May be empty.
    pub name: String,
    /// Display label of the competition the club was listed under.
    pub league: Option<String>,
}

/// A fixture's status text viewed as a kickoff time where possible.
///
/// Both variants are ordinary outcomes: a match that has not started carries
/// a clock string, while one in progress or finished carries "FT", "HT",
/// minutes played, or a postponement note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameTime<'a> {
    /// The status text parsed as a time of day.
    Kickoff(NaiveTime),
    /// The status text as-is, when it is not a clock string.
    Status(&'a str),
}

/// A single scheduled or played match.
///
/// `teams` and `scores` are positionally aligned, home side first, in the
/// order the markup listed them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    /// Home and away club, in document order.
    pub teams: [Club; 2],
    /// Home and away score. A side with no score text yet is recorded as 0.
    pub scores: [u32; 2],
    /// Display label of the competition, or `"Unknown"`.
    pub league: String,
    /// Index into `teams` of the side the source marked as the winner.
    pub winner: Option<usize>,
    /// Raw status text: "FT", minutes played, or a kickoff time string.
    pub game_time: String,
    /// Link to the fixture detail page, when the markup carried one.
    pub game_link: Option<String>,
}

impl Fixture {
    /// The club the source marked as the winner, if any.
    pub fn winning_team(&self) -> Option<&Club> {
        self.winner.map(|i| &self.teams[i])
    }

    /// The status text parsed as a kickoff time, falling back to the raw
    /// string when it is not a clock string.
    pub fn kickoff(&self) -> GameTime<'_> {
        match NaiveTime::parse_from_str(self.game_time.trim(), "%I:%M %p") {
            Ok(time) => GameTime::Kickoff(time),
            Err(_) => GameTime::Status(&self.game_time),
        }
    }

    /// One-line summary used for console output.
    pub fn pretty(&self) -> String {
        format!(
            "{} - {} vs {}, {} - {}, {}",
            self.league,
            self.teams[0].name,
            self.teams[1].name,
            self.scores[0],
            self.scores[1],
            self.game_time,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(winner: Option<usize>, game_time: &str) -> Fixture {
        Fixture {
            teams: [
                Club {
                    name: "Arsenal".to_string(),
                    league: Some("English Premier League".to_string()),
                },
                Club {
                    name: "Chelsea".to_string(),
                    league: Some("English Premier League".to_string()),
                },
            ],
            scores: [2, 1],
            league: "English Premier League".to_string(),
            winner,
            game_time: game_time.to_string(),
            game_link: Some("/match/1".to_string()),
        }
    }

    #[test]
    fn test_winning_team_resolves_index() {
        let home_win = fixture(Some(0), "FT");
        assert_eq!(
            home_win.winning_team().map(|club| club.name.as_str()),
            Some("Arsenal")
        );

        let away_win = fixture(Some(1), "FT");
        assert_eq!(
            away_win.winning_team().map(|club| club.name.as_str()),
            Some("Chelsea")
        );
    }

    #[test]
    fn test_winning_team_absent() {
        assert_eq!(fixture(None, "FT").winning_team(), None);
    }

    #[test]
    fn test_kickoff_parses_clock_string() {
        let upcoming = fixture(None, "07:45 PM");
        assert_eq!(
            upcoming.kickoff(),
            GameTime::Kickoff(NaiveTime::from_hms_opt(19, 45, 0).unwrap())
        );
    }

    #[test]
    fn test_kickoff_falls_back_to_raw_status() {
        let finished = fixture(Some(0), "FT");
        assert_eq!(finished.kickoff(), GameTime::Status("FT"));

        let in_progress = fixture(None, "73'");
        assert_eq!(in_progress.kickoff(), GameTime::Status("73'"));
    }

    #[test]
    fn test_pretty_format() {
        let fixture = fixture(Some(0), "FT");
        assert_eq!(
            fixture.pretty(),
            "English Premier League - Arsenal vs Chelsea, 2 - 1, FT"
        );
    }
}
