//! Error taxonomy for the fixtures tool.
//!
//! Three failure classes exist: an unrecognized league alias (caught before
//! any network traffic), a transport-level failure on the scoreboard fetch,
//! and a response that came back without the expected scoreboard payload.
//! Per-fixture markup problems are not errors; the extractor logs and skips
//! those nodes instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoresError {
    #[error("could not find a league id for alias `{alias}`")]
    UnknownLeague { alias: String },

    #[error("scores response did not contain an HTML payload")]
    Content,

    #[error(transparent)]
    Network(#[from] reqwest::Error),

    #[error("failed to build the scores url")]
    Url(#[from] url::ParseError),
}
