//! Field compatibility tables for dual-named stat columns.
//!
//! Season and game feeds name the same stat differently (`fgm` in one feed,
//! `FG` in another). Each canonical display name lists its source spellings in
//! preference order; the canonical name itself is always the last fallback.
//! Display code reads through these tables and never chains fallbacks itself.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::entities::StatRow;
use crate::entities::stat_row::{value_as_f64, value_as_text};

/// One canonical field and the source spellings that feed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldAlias {
    pub canonical: &'static str,
    pub sources: &'static [&'static str],
}

const fn alias(canonical: &'static str, sources: &'static [&'static str]) -> FieldAlias {
    FieldAlias { canonical, sources }
}

/// Season-total fields, in display order.
pub const SEASON_FIELDS: &[FieldAlias] = &[
    alias("Season", &["season"]),
    alias("G", &["gp"]),
    alias("GS", &["gs"]),
    alias("MP", &["mp", "min"]),
    alias("PTS", &["pts"]),
    alias("REB", &["reb"]),
    alias("AST", &["ast"]),
    alias("STL", &["stl"]),
    alias("BLK", &["blk"]),
    alias("TOV", &["tov"]),
    alias("PF", &["pf"]),
    alias("FG", &["fgm"]),
    alias("FGA", &["fga"]),
    alias("FG_PCT", &["fg%"]),
    alias("TP", &["tpm"]),
    alias("TPA", &["tpa"]),
    alias("TP_PCT", &["tp%"]),
    alias("FT", &["ftm"]),
    alias("FTA", &["fta"]),
    alias("FT_PCT", &["ft%"]),
    alias("ORB", &["oreb"]),
    alias("DRB", &["dreb"]),
    alias("W", &["w"]),
    alias("L", &["l"]),
];

/// Single-game fields, in display order.
pub const GAME_FIELDS: &[FieldAlias] = &[
    alias("gameDate", &["date"]),
    alias("opponentName", &["opponent"]),
    alias("season", &["Season"]),
    alias("MIN", &["timePlayed"]),
    alias("PTS", &["pts"]),
    alias("REB", &["reb"]),
    alias("AST", &["ast"]),
    alias("STL", &["stl"]),
    alias("BLK", &["blk"]),
    alias("TOV", &["tov"]),
    alias("PF", &["pf"]),
    alias("FGM", &["fgm"]),
    alias("FGA", &["fga"]),
    alias("FG_PCT", &["fg%"]),
    alias("TPM", &["tpm"]),
    alias("TPA", &["tpa"]),
    alias("TP_PCT", &["tp%"]),
    alias("FTM", &["ftm"]),
    alias("FTA", &["fta"]),
    alias("FT_PCT", &["ft%"]),
    alias("homeTeamPts", &["homePts"]),
    alias("visitorTeamPts", &["visitorPts"]),
];

impl FieldAlias {
    /// First non-null value among the source spellings, then the canonical name.
    #[must_use]
    pub fn resolve<'a>(&self, row: &'a StatRow) -> Option<&'a Value> {
        self.sources
            .iter()
            .chain(std::iter::once(&self.canonical))
            .find_map(|key| row.get(key))
    }
}

/// Look up the alias entry for a canonical name.
#[must_use]
pub fn find(table: &[FieldAlias], canonical: &str) -> Option<FieldAlias> {
    table.iter().copied().find(|entry| entry.canonical == canonical)
}

/// Read a canonical field as a number.
///
/// Names missing from the table are read directly from the row.
#[must_use]
pub fn number(table: &[FieldAlias], row: &StatRow, canonical: &str) -> Option<f64> {
    match find(table, canonical) {
        Some(entry) => entry.resolve(row).and_then(value_as_f64),
        None => row.number(canonical),
    }
}

/// Read a canonical field as text.
#[must_use]
pub fn text(table: &[FieldAlias], row: &StatRow, canonical: &str) -> Option<String> {
    match find(table, canonical) {
        Some(entry) => entry.resolve(row).and_then(value_as_text),
        None => row.text(canonical),
    }
}

/// Source columns not covered by any alias entry, keyed by their raw name.
///
/// These are passed through untouched so no data is lost in normalization.
#[must_use]
pub fn unmapped(table: &[FieldAlias], row: &StatRow) -> BTreeMap<String, Value> {
    row.fields
        .iter()
        .filter(|(key, value)| {
            !value.is_null()
                && !table.iter().any(|entry| {
                    entry.canonical == key.as_str()
                        || entry.sources.iter().any(|source| *source == key.as_str())
                })
        })
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Canonical view of a row: every resolvable alias under its canonical
/// name, followed by the unmapped source columns.
#[must_use]
pub fn normalize(table: &[FieldAlias], row: &StatRow) -> BTreeMap<String, Value> {
    let mut out = unmapped(table, row);
    for entry in table {
        if let Some(value) = entry.resolve(row) {
            out.insert(entry.canonical.to_string(), value.clone());
        }
    }
    out
}
