//! Request routing and handlers.
//!
//! Notes endpoints report failures as `{"error": message}`. The team
//! endpoints add `details` and `stack` (the error's source chain) so a
//! failing query can be diagnosed from the response alone.

use std::error::Error as _;

use serde::Serialize;
use serde_json::{Value, json};

use court_core::entities::NoteFields;
use court_db::CourtDb;
use court_db::error::DatabaseError;
use court_db::query::{TeamRecordQuery, TeamStatsQuery};

use crate::query_string;

/// Status code and JSON body of a handled request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    fn ok(body: impl Serialize) -> Self {
        match serde_json::to_value(body) {
            Ok(body) => Self { status: 200, body },
            Err(e) => Self::error(500, &e.to_string()),
        }
    }

    pub(crate) fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: json!({ "error": message }),
        }
    }

    fn not_found(message: &str) -> Self {
        Self::error(404, message)
    }

    /// 500 with diagnostic fields, used by the team endpoints.
    fn diagnostic(err: &DatabaseError) -> Self {
        let mut stack = vec![err.to_string()];
        let mut source = err.source();
        while let Some(cause) = source {
            stack.push(format!("caused by: {cause}"));
            source = cause.source();
        }
        Self {
            status: 500,
            body: json!({
                "error": "Internal server error",
                "details": err.to_string(),
                "stack": stack.join("\n"),
            }),
        }
    }

    fn from_note_result<T: Serialize>(result: Result<T, DatabaseError>) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(e) if e.is_not_found() => Self::not_found("Note not found"),
            Err(e) => {
                tracing::error!(error = %e, "scouting note request failed");
                Self::error(500, &e.to_string())
            }
        }
    }
}

pub struct Router {
    db: CourtDb,
}

impl Router {
    #[must_use]
    pub const fn new(db: CourtDb) -> Self {
        Self { db }
    }

    #[must_use]
    pub const fn db(&self) -> &CourtDb {
        &self.db
    }

    /// Dispatch one request. Never fails: every error becomes a response.
    pub async fn handle(&self, method: &str, path: &str, query: &str, body: &str) -> ApiResponse {
        let path = path.trim_end_matches('/');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match (method, segments.as_slice()) {
            ("GET", ["api", "scouting-notes"]) => {
                ApiResponse::from_note_result(self.db.list_notes().await)
            }
            ("POST", ["api", "scouting-notes"]) => match parse_note(body) {
                Ok(fields) => ApiResponse::from_note_result(self.db.create_note(&fields).await),
                Err(resp) => resp,
            },
            ("PUT", ["api", "scouting-notes", id]) => {
                let Some(id) = parse_id(id) else {
                    return ApiResponse::not_found("Note not found");
                };
                match parse_note(body) {
                    Ok(fields) => {
                        ApiResponse::from_note_result(self.db.update_note(id, &fields).await)
                    }
                    Err(resp) => resp,
                }
            }
            ("DELETE", ["api", "scouting-notes", id]) => match parse_id(id) {
                Some(id) => ApiResponse::from_note_result(self.db.delete_note(id).await),
                None => ApiResponse::not_found("Note not found"),
            },
            ("GET", ["api", "team-records"]) => {
                let filter = TeamRecordQuery::from_params(&query_string::parse(query));
                team_result("team-records", self.db.team_records(&filter).await)
            }
            ("GET", ["api", "team-records", "filters"]) => {
                team_result("team-records/filters", self.db.record_filter_options().await)
            }
            ("GET", ["api", "team-stats"]) => {
                let filter = TeamStatsQuery::from_params(&query_string::parse(query));
                team_result("team-stats", self.db.team_stats(&filter).await)
            }
            _ => {
                tracing::debug!(method, path, "no route");
                ApiResponse::not_found("Not found")
            }
        }
    }
}

fn team_result<T: Serialize>(endpoint: &str, result: Result<T, DatabaseError>) -> ApiResponse {
    match result {
        Ok(value) => ApiResponse::ok(value),
        Err(e) => {
            tracing::error!(endpoint, error = %e, "team query failed");
            ApiResponse::diagnostic(&e)
        }
    }
}

fn parse_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

fn parse_note(body: &str) -> Result<NoteFields, ApiResponse> {
    if body.trim().is_empty() {
        return Ok(NoteFields::default());
    }
    serde_json::from_str(body)
        .map_err(|e| ApiResponse::error(400, &format!("Invalid note body: {e}")))
}
