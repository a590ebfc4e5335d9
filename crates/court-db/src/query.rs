//! Filter/sort/paginate SQL builders for the team tables.
//!
//! User input only ever reaches SQL as bound positional parameters (`?N`).
//! The only identifiers interpolated into SQL text come from fixed
//! allow-lists. Malformed optional inputs (unparseable numbers, unknown sort
//! columns) are dropped rather than reported.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Page size when the caller gives none.
pub const DEFAULT_LIMIT: u32 = 50;

/// Sortable team-record columns.
const RECORD_SORT_COLUMNS: &[&str] = &[
    "season", "w", "l", "wl", "srs", "pace", "rel_pace", "ortg", "rel_ortg", "drtg", "rel_drtg",
    "coaches",
];

/// Sortable team-stat display ids. Each maps to the same column name, quoted.
const STAT_SORT_COLUMNS: &[&str] = &[
    "Season", "Age", "G", "MP", "FG", "FGA", "FG_percent", "3P", "3PA", "3P_percent", "2P", "2PA",
    "2P_percent", "FT", "FTA", "FT_percent", "ORB", "DRB", "TRB", "AST", "STL", "BLK", "TOV", "PF",
    "PTS",
];

/// Raw query-string parameters, already percent-decoded.
pub type QueryParams = BTreeMap<String, String>;

/// A statement ready to run: SQL text plus positional parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuery {
    pub sql: String,
    pub params: Vec<libsql::Value>,
}

impl BuiltQuery {
    fn new(base: &str) -> Self {
        Self {
            sql: base.to_string(),
            params: Vec::new(),
        }
    }

    /// Append ` AND {column} {op} ?N` and bind `value` as parameter N.
    fn and(&mut self, column: &str, op: &str, value: libsql::Value) {
        self.params.push(value);
        self.sql
            .push_str(&format!(" AND {column} {op} ?{}", self.params.len()));
    }

    fn paginate(&mut self, limit: Option<u32>, offset: Option<u32>) {
        let first = self.params.len() + 1;
        self.sql
            .push_str(&format!(" LIMIT ?{first} OFFSET ?{}", first + 1));
        self.params
            .push(i64::from(limit.unwrap_or(DEFAULT_LIMIT)).into());
        self.params.push(i64::from(offset.unwrap_or(0)).into());
    }
}

/// Bind integral numbers as integers so comparisons against INTEGER columns
/// stay exact.
#[allow(clippy::cast_possible_truncation)]
fn number_value(n: f64) -> libsql::Value {
    if n.fract() == 0.0 && n.abs() < 9.0e15 {
        libsql::Value::Integer(n as i64)
    } else {
        libsql::Value::Real(n)
    }
}

fn contains_pattern(needle: &str) -> libsql::Value {
    libsql::Value::Text(format!("%{needle}%"))
}

fn direction(sort_order: Option<&str>) -> &'static str {
    if sort_order == Some("ASC") { "ASC" } else { "DESC" }
}

fn text_param(params: &QueryParams, key: &str) -> Option<String> {
    params
        .get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(String::from)
}

fn number_param(params: &QueryParams, key: &str) -> Option<f64> {
    text_param(params, key)
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|n| n.is_finite())
}

fn count_param(params: &QueryParams, key: &str) -> Option<u32> {
    text_param(params, key).and_then(|v| v.parse::<u32>().ok())
}

/// Filters for `teamrecords`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecordQuery {
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub coach: Option<String>,
    pub min_wins: Option<f64>,
    pub max_wins: Option<f64>,
    #[serde(rename = "minORtg")]
    pub min_ortg: Option<f64>,
    #[serde(rename = "maxORtg")]
    pub max_ortg: Option<f64>,
    #[serde(rename = "minDRtg")]
    pub min_drtg: Option<f64>,
    #[serde(rename = "maxDRtg")]
    pub max_drtg: Option<f64>,
    pub min_pace: Option<f64>,
    pub max_pace: Option<f64>,
    pub season: Option<String>,
    pub playoffs: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl TeamRecordQuery {
    /// Read filters from query-string parameters using their wire names.
    #[must_use]
    pub fn from_params(params: &QueryParams) -> Self {
        Self {
            sort_by: text_param(params, "sortBy"),
            sort_order: text_param(params, "sortOrder"),
            coach: text_param(params, "coach"),
            min_wins: number_param(params, "minWins"),
            max_wins: number_param(params, "maxWins"),
            min_ortg: number_param(params, "minORtg"),
            max_ortg: number_param(params, "maxORtg"),
            min_drtg: number_param(params, "minDRtg"),
            max_drtg: number_param(params, "maxDRtg"),
            min_pace: number_param(params, "minPace"),
            max_pace: number_param(params, "maxPace"),
            season: text_param(params, "season"),
            playoffs: text_param(params, "playoffs"),
            limit: count_param(params, "limit"),
            offset: count_param(params, "offset"),
        }
    }

    /// Allow-listed, lowercased sort column, if any.
    #[must_use]
    pub fn sort_column(&self) -> Option<String> {
        let requested = self.sort_by.as_deref()?.to_lowercase();
        RECORD_SORT_COLUMNS
            .contains(&requested.as_str())
            .then_some(requested)
    }

    /// Build the SELECT. Filters are applied in a fixed order so the same
    /// input always yields the same SQL and parameter positions.
    #[must_use]
    pub fn build(&self) -> BuiltQuery {
        let mut query = BuiltQuery::new("SELECT * FROM teamrecords WHERE 1=1");

        if let Some(coach) = &self.coach {
            query.and("coaches", "LIKE", contains_pattern(coach));
        }
        let ranges = [
            ("w", ">=", self.min_wins),
            ("w", "<=", self.max_wins),
            ("ortg", ">=", self.min_ortg),
            ("ortg", "<=", self.max_ortg),
            ("drtg", ">=", self.min_drtg),
            ("drtg", "<=", self.max_drtg),
            ("pace", ">=", self.min_pace),
            ("pace", "<=", self.max_pace),
        ];
        for (column, op, bound) in ranges {
            if let Some(n) = bound {
                query.and(column, op, number_value(n));
            }
        }
        if let Some(season) = &self.season {
            query.and("season", "=", season.as_str().into());
        }
        if let Some(playoffs) = &self.playoffs {
            query.and("playoffs", "LIKE", contains_pattern(playoffs));
        }

        if let Some(column) = self.sort_column() {
            query.sql.push_str(&format!(
                " ORDER BY {column} {}",
                direction(self.sort_order.as_deref())
            ));
        }

        query.paginate(self.limit, self.offset);
        query
    }
}

/// Filters for `mavsteamstats`. Percentages are given on a 0-100 scale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStatsQuery {
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub season: Option<String>,
    pub min_pts: Option<f64>,
    pub max_pts: Option<f64>,
    pub min_fg_percent: Option<f64>,
    pub max_fg_percent: Option<f64>,
    #[serde(rename = "min3pPercent")]
    pub min_3p_percent: Option<f64>,
    #[serde(rename = "max3pPercent")]
    pub max_3p_percent: Option<f64>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl TeamStatsQuery {
    #[must_use]
    pub fn from_params(params: &QueryParams) -> Self {
        Self {
            sort_by: text_param(params, "sortBy"),
            sort_order: text_param(params, "sortOrder"),
            season: text_param(params, "season"),
            min_pts: number_param(params, "minPts"),
            max_pts: number_param(params, "maxPts"),
            min_fg_percent: number_param(params, "minFgPercent"),
            max_fg_percent: number_param(params, "maxFgPercent"),
            min_3p_percent: number_param(params, "min3pPercent"),
            max_3p_percent: number_param(params, "max3pPercent"),
            limit: count_param(params, "limit"),
            offset: count_param(params, "offset"),
        }
    }

    /// Quoted column for the requested sort id, exact match only.
    #[must_use]
    pub fn sort_column(&self) -> Option<String> {
        let requested = self.sort_by.as_deref()?;
        STAT_SORT_COLUMNS
            .contains(&requested)
            .then(|| format!("\"{requested}\""))
    }

    #[must_use]
    pub fn build(&self) -> BuiltQuery {
        let mut query = BuiltQuery::new("SELECT * FROM mavsteamstats WHERE 1=1");

        if let Some(season) = &self.season {
            query.and("\"Season\"", "=", season.as_str().into());
        }
        let points = [("\"PTS\"", ">=", self.min_pts), ("\"PTS\"", "<=", self.max_pts)];
        for (column, op, bound) in points {
            if let Some(n) = bound {
                query.and(column, op, number_value(n));
            }
        }
        let percents = [
            ("\"FG_percent\"", ">=", self.min_fg_percent),
            ("\"FG_percent\"", "<=", self.max_fg_percent),
            ("\"3P_percent\"", ">=", self.min_3p_percent),
            ("\"3P_percent\"", "<=", self.max_3p_percent),
        ];
        for (column, op, bound) in percents {
            if let Some(pct) = bound {
                query.and(column, op, libsql::Value::Real(pct / 100.0));
            }
        }

        match self.sort_column() {
            Some(column) => query.sql.push_str(&format!(
                " ORDER BY {column} {}",
                direction(self.sort_order.as_deref())
            )),
            None => query.sql.push_str(" ORDER BY \"Season\" DESC"),
        }

        query.paginate(self.limit, self.offset);
        query
    }
}
