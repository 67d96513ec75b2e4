//! League registry: fixed lookup tables mapping user-facing aliases to
//! league ids and league ids to display names.
//!
//! Both tables are process-wide constants; there is no mutation API. Several
//! aliases may point at the same id (e.g. `premier` and `england`). An id
//! with no display name resolves to `"Unknown"` rather than failing, since
//! the scoreboard page routinely carries competitions we have no name for.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::ScoresError;

/// Lowercase alias -> league id.
static LEAGUE_IDS: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    HashMap::from([
        // UEFA Champions League.
        ("champs", 2),
        ("champ", 2),
        ("cl", 2),
        // UEFA Europa League.
        ("europa", 2310),
        ("el", 2310),
        // French Ligue 1.
        ("ligue1", 9),
        ("france", 9),
        // French Coupe de France.
        ("coupe", 182),
        // Dutch Eredivisie.
        ("eredivisie", 11),
        ("netherlands", 11),
        // Italian Serie A.
        ("seriea", 12),
        ("italy", 12),
        // Italian Coppa Italia.
        ("coppa", 2192),
        // German Bundesliga.
        ("bundesliga", 10),
        ("germany", 10),
        // German DFB Pokal.
        ("pokal", 2061),
        ("dfbpokal", 2061),
        // Spanish Primera Division.
        ("primeradivison", 15),
        ("spain", 15),
        // Spanish Super Cup.
        ("supercup", 431),
        // English Premier League.
        ("premier", 24),
        ("england", 24),
        // English FA Cup.
        ("fa", 20),
    ])
});

/// League id -> displayable league name.
static LEAGUE_NAMES: Lazy<HashMap<u32, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (2, "UEFA Champion's League"),
        (9, "French Ligue 1"),
        (10, "German Bundesliga"),
        (11, "Dutch Eredivisie"),
        (12, "Italian Serie A"),
        (15, "Spanish Primera Divison"),
        (24, "English Premier League"),
        (20, "English FA Cup"),
        (182, "French Coupe de France"),
        (431, "Spanish Super Cup"),
        (2061, "German DFB Pokal"),
        (2192, "Italian Coppa Italia"),
        (2310, "UEFA Europa League"),
    ])
});

/// Resolve a user-facing league alias to its numeric id.
///
/// # Errors
///
/// Returns [`ScoresError::UnknownLeague`] when the alias is not in the
/// registry.
pub fn resolve_alias(alias: &str) -> Result<u32, ScoresError> {
    LEAGUE_IDS
        .get(alias)
        .copied()
        .ok_or_else(|| ScoresError::UnknownLeague {
            alias: alias.to_string(),
        })
}

/// Display name for a league id. Ids outside the table map to `"Unknown"`.
pub fn display_name(id: u32) -> &'static str {
    LEAGUE_NAMES.get(&id).copied().unwrap_or("Unknown")
}
