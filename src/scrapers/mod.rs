//! Scoreboard scrapers.
//!
//! One submodule per remote source. Each follows the same two-phase pattern:
//!
//! 1. **Fetching**: download the day's scoreboard page and parse it into a
//!    document tree ([`espnfc::fetch_page`])
//! 2. **Extraction**: walk the parsed tree into domain records
//!    ([`espnfc::extract_fixtures`])
//!
//! The extraction half never touches the network, so it can be exercised
//! against crafted documents in tests. Malformed fixture nodes are logged
//! and skipped without failing the rest of the page.

pub mod espnfc;
