//! Per-game averages recomputed from game logs.

use court_core::entities::GameLog;
use court_core::fields::{GAME_FIELDS, number};
use court_core::format::round_one;

fn sum(games: &[&GameLog], canonical: &str) -> f64 {
    games
        .iter()
        .map(|g| number(GAME_FIELDS, g, canonical).unwrap_or(0.0))
        .sum()
}

/// Mean rebounds per game, one decimal. Zero when there are no games.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn rebounds_per_game(games: &[&GameLog]) -> f64 {
    if games.is_empty() {
        return 0.0;
    }
    round_one(sum(games, "REB") / games.len() as f64)
}

/// Free-throw percentage over the games, one decimal, capped at 100.
/// Zero when no free throws were attempted.
#[must_use]
pub fn free_throw_pct(games: &[&GameLog]) -> f64 {
    let attempts = sum(games, "FTA");
    if attempts <= 0.0 {
        return 0.0;
    }
    round_one((sum(games, "FTM") / attempts * 100.0).min(100.0))
}
