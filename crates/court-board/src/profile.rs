//! Player profile assembly.
//!
//! A profile joins one prospect's bio with normalized season totals, game
//! lines, scout ranks, measurements and reports. A player missing from the
//! bio table has no profile; that is a normal outcome, not an error.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

use court_core::dataset::Dataset;
use court_core::entities::{GameLog, Prospect, ScoutRank, ScoutReport, SeasonLog};
use court_core::fields::{GAME_FIELDS, SEASON_FIELDS, normalize, number, text};
use court_core::format::{age_from_birth_date, display_height, parse_date};

use crate::reports::ReportLog;
use crate::stats::{free_throw_pct, rebounds_per_game};

/// Latest-season line with averages recomputed from that season's games.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SeasonTotals {
    #[serde(rename = "Season")]
    pub season: Option<String>,
    #[serde(rename = "REB")]
    pub rebounds_per_game: f64,
    #[serde(rename = "FT_PCT")]
    pub ft_pct: f64,
    #[serde(rename = "W")]
    pub wins: f64,
    #[serde(rename = "L")]
    pub losses: f64,
    /// Number of game logs the averages were computed from.
    pub games_sampled: usize,
    /// Remaining normalized season columns.
    #[serde(flatten)]
    pub stats: BTreeMap<String, Value>,
}

/// One game, normalized, with a score line when both scores are known.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GameLine {
    #[serde(flatten)]
    pub stats: BTreeMap<String, Value>,
    pub outcome: Option<String>,
}

impl GameLine {
    fn from_log(game: &GameLog) -> Self {
        let home = text(GAME_FIELDS, game, "homeTeamPts");
        let visitor = text(GAME_FIELDS, game, "visitorTeamPts");
        Self {
            stats: normalize(GAME_FIELDS, game),
            outcome: home.zip(visitor).map(|(h, v)| format!("{h}-{v}")),
        }
    }

    /// Normalized column as text.
    #[must_use]
    pub fn text(&self, canonical: &str) -> Option<String> {
        match self.stats.get(canonical)? {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    #[serde(flatten)]
    pub prospect: Prospect,
    pub age: Option<u32>,
    pub display_height: Option<String>,
    /// Scout ranks labelled without the ` Rank` suffix.
    pub scout_ranks: Vec<ScoutRank>,
    pub measurements: Option<BTreeMap<String, Value>>,
    pub latest_season: Option<SeasonTotals>,
    /// All season lines, newest season label first.
    pub seasons: Vec<BTreeMap<String, Value>>,
    pub game_logs: Vec<GameLine>,
    /// Bundled reports, then session reports in add order.
    pub reports: Vec<ScoutReport>,
}

fn season_label(season: &SeasonLog) -> Option<String> {
    text(SEASON_FIELDS, season, "Season")
}

/// Opponent ascending, then date descending. Games without a parseable date
/// sort after dated games against the same opponent.
fn game_order(a: &GameLog, b: &GameLog) -> Ordering {
    let opponent = |g: &GameLog| text(GAME_FIELDS, g, "opponentName").unwrap_or_default();
    let date = |g: &GameLog| text(GAME_FIELDS, g, "gameDate").and_then(|d| parse_date(&d));
    opponent(a)
        .cmp(&opponent(b))
        .then_with(|| date(b).cmp(&date(a)))
}

fn latest_totals(latest: &SeasonLog, season_games: &[&GameLog]) -> SeasonTotals {
    let mut stats = normalize(SEASON_FIELDS, latest);
    for computed in ["Season", "REB", "FT_PCT", "W", "L"] {
        stats.remove(computed);
    }
    SeasonTotals {
        season: season_label(latest),
        rebounds_per_game: rebounds_per_game(season_games),
        ft_pct: free_throw_pct(season_games),
        wins: number(SEASON_FIELDS, latest, "W").unwrap_or(0.0),
        losses: number(SEASON_FIELDS, latest, "L").unwrap_or(0.0),
        games_sampled: season_games.len(),
        stats,
    }
}

/// Assemble the profile for `player_id`, or `None` if the player has no bio.
#[must_use]
pub fn assemble(
    dataset: &Dataset,
    log: &ReportLog,
    player_id: i64,
    today: NaiveDate,
) -> Option<PlayerProfile> {
    let Some(prospect) = dataset.prospect(player_id) else {
        tracing::warn!(player_id, "player not found in bio table");
        return None;
    };

    let mut seasons: Vec<&SeasonLog> = dataset.season_logs_for(player_id).collect();
    seasons.sort_by(|a, b| {
        season_label(b)
            .unwrap_or_default()
            .cmp(&season_label(a).unwrap_or_default())
    });

    let latest_season = seasons.first().map(|latest| {
        let label = season_label(latest);
        let season_games: Vec<&GameLog> = dataset
            .game_logs_for(player_id)
            .filter(|g| text(GAME_FIELDS, g, "season") == label)
            .collect();
        latest_totals(latest, &season_games)
    });

    let mut games: Vec<&GameLog> = dataset.game_logs_for(player_id).collect();
    games.sort_by(|a, b| game_order(a, b));

    let scout_ranks = dataset
        .ranking(player_id)
        .map(|ranking| {
            ranking
                .ranks()
                .into_iter()
                .map(|r| ScoutRank {
                    scout: r.label().to_string(),
                    rank: r.rank,
                })
                .collect()
        })
        .unwrap_or_default();

    let reports = dataset
        .reports_for(player_id)
        .chain(log.for_player(player_id))
        .cloned()
        .collect();

    Some(PlayerProfile {
        age: age_from_birth_date(prospect.birth_date.as_deref(), today),
        display_height: display_height(prospect.height),
        scout_ranks,
        measurements: dataset.measurement(player_id).map(|m| m.fields.clone()),
        latest_season,
        seasons: seasons
            .iter()
            .map(|s| normalize(SEASON_FIELDS, s))
            .collect(),
        game_logs: games.iter().map(|g| GameLine::from_log(g)).collect(),
        reports,
        prospect: prospect.clone(),
    })
}
