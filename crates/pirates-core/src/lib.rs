#![deny(warnings)]
pub mod model;
pub mod rules;

use model::round::{Round, RoundError};

pub struct AppInfo;

impl AppInfo {
    pub const fn name() -> &'static str {
        "pirates"
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

/// Evaluate a whitespace-separated round and announce the winner.
pub fn play(round: &str) -> Result<String, RoundError> {
    let round: Round = round.parse()?;
    rules::evaluate(&round).map(|outcome| outcome.announcement())
}
