//! Row conversion helpers.
//!
//! Typed repos read `libsql::Row` by column index. Untyped tables (team
//! records and stats) are handed back verbatim as JSON objects keyed by
//! column name, so these helpers also bridge `libsql::Value` and
//! `serde_json::Value` in both directions.

use chrono::{DateTime, Utc};
use serde_json::{Map, Number, Value as Json};

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Convert one SQL value to JSON. Non-finite reals become `null`; blobs
/// become arrays of bytes.
#[must_use]
pub fn sql_to_json(value: libsql::Value) -> Json {
    match value {
        libsql::Value::Null => Json::Null,
        libsql::Value::Integer(i) => Json::from(i),
        libsql::Value::Real(f) => Number::from_f64(f).map_or(Json::Null, Json::Number),
        libsql::Value::Text(s) => Json::String(s),
        libsql::Value::Blob(bytes) => Json::from(bytes),
    }
}

/// Convert a JSON scalar to a bindable SQL value.
///
/// Booleans bind as 0/1. Arrays and objects are stored as their JSON text.
#[must_use]
pub fn json_to_sql(value: &Json) -> libsql::Value {
    match value {
        Json::Null => libsql::Value::Null,
        Json::Bool(b) => libsql::Value::Integer(i64::from(*b)),
        Json::Number(n) => n.as_i64().map_or_else(
            || n.as_f64().map_or(libsql::Value::Null, libsql::Value::Real),
            libsql::Value::Integer,
        ),
        Json::String(s) => libsql::Value::Text(s.clone()),
        other => libsql::Value::Text(other.to_string()),
    }
}

/// Read every column of a row into a JSON object keyed by column name.
///
/// # Errors
///
/// Returns `DatabaseError` if a column value cannot be read.
pub fn row_to_json(row: &libsql::Row) -> Result<Map<String, Json>, DatabaseError> {
    let mut object = Map::new();
    for idx in 0..row.column_count() {
        let name = row
            .column_name(idx)
            .map_or_else(|| format!("column_{idx}"), String::from);
        object.insert(name, sql_to_json(row.get_value(idx)?));
    }
    Ok(object)
}

/// Drain a result set into JSON objects.
///
/// # Errors
///
/// Returns `DatabaseError` if fetching or reading a row fails.
pub async fn collect_json(mut rows: libsql::Rows) -> Result<Vec<Json>, DatabaseError> {
    let mut out = Vec::new();
    while let Some(row) = rows.next().await? {
        out.push(Json::Object(row_to_json(&row)?));
    }
    Ok(out)
}

/// Drain a single-column result set of nullable text.
///
/// # Errors
///
/// Returns `DatabaseError` if fetching or reading a row fails.
pub async fn collect_column(mut rows: libsql::Rows) -> Result<Vec<Json>, DatabaseError> {
    let mut out = Vec::new();
    while let Some(row) = rows.next().await? {
        out.push(sql_to_json(row.get_value(0)?));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_both_datetime_formats() {
        let rfc = parse_datetime("2026-02-09T14:30:00+00:00").unwrap();
        let sqlite = parse_datetime("2026-02-09 14:30:00").unwrap();
        assert_eq!(rfc, sqlite);
        assert!(parse_datetime("yesterday").is_err());
    }

    #[test]
    fn sql_values_map_to_json() {
        assert_eq!(sql_to_json(libsql::Value::Null), Json::Null);
        assert_eq!(sql_to_json(libsql::Value::Integer(57)), json!(57));
        assert_eq!(sql_to_json(libsql::Value::Real(0.5)), json!(0.5));
        assert_eq!(sql_to_json(libsql::Value::Real(f64::NAN)), Json::Null);
        assert_eq!(sql_to_json(libsql::Value::Text("2023-24".into())), json!("2023-24"));
    }

    #[test]
    fn json_scalars_map_to_sql() {
        assert_eq!(json_to_sql(&json!(50)), libsql::Value::Integer(50));
        assert_eq!(json_to_sql(&json!(112.4)), libsql::Value::Real(112.4));
        assert_eq!(json_to_sql(&json!(true)), libsql::Value::Integer(1));
        assert_eq!(json_to_sql(&json!(null)), libsql::Value::Null);
        assert_eq!(
            json_to_sql(&json!("Jason Kidd (50-32)")),
            libsql::Value::Text("Jason Kidd (50-32)".into())
        );
    }
}
