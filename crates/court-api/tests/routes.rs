//! End-to-end routing against an in-memory database.

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

use court_api::Router;
use court_db::CourtDb;
use court_db::repos::import::TeamTable;

async fn router() -> Router {
    let db = CourtDb::open_local(":memory:").await.unwrap();
    db.import_rows(
        TeamTable::Records,
        &[
            json!({"season": "2023-24", "w": 50, "l": 32, "coaches": "J. Kidd (50-32)", "playoffs": "Lost Finals"}),
            json!({"season": "2021-22", "w": 52, "l": 30, "coaches": "J. Kidd (52-30)", "playoffs": "Lost W. Conf. Finals"}),
            json!({"season": "2018-19", "w": 33, "l": 49, "coaches": "R. Carlisle (33-49)"}),
        ],
    )
    .await
    .unwrap();
    db.import_rows(
        TeamTable::Stats,
        &[
            json!({"Season": "2023-24", "FG_percent": 0.489, "PTS": 117.9}),
            json!({"Season": "2018-19", "FG_percent": 0.441, "PTS": 108.9}),
        ],
    )
    .await
    .unwrap();
    Router::new(db)
}

#[tokio::test]
async fn note_lifecycle() {
    let router = router().await;

    let created = router
        .handle("POST", "/api/scouting-notes", "", r#"{"player": "Cooper Flagg", "age": 18}"#)
        .await;
    assert_eq!(created.status, 200);
    assert_eq!(created.body["player"], "Cooper Flagg");
    assert_eq!(created.body["age"], "18");
    let id = created.body["id"].as_i64().unwrap();

    let updated = router
        .handle(
            "PUT",
            &format!("/api/scouting-notes/{id}"),
            "",
            r#"{"player": "Cooper Flagg", "college": "Duke"}"#,
        )
        .await;
    assert_eq!(updated.status, 200);
    assert_eq!(updated.body["college"], "Duke");

    let listed = router.handle("GET", "/api/scouting-notes", "", "").await;
    assert_eq!(listed.body.as_array().map(Vec::len), Some(1));

    let deleted = router
        .handle("DELETE", &format!("/api/scouting-notes/{id}"), "", "")
        .await;
    assert_eq!(deleted.status, 200);
    assert_eq!(deleted.body["id"], id);

    let listed = router.handle("GET", "/api/scouting-notes", "", "").await;
    assert_eq!(listed.body, json!([]));
}

#[rstest]
#[case::update_missing("PUT", "/api/scouting-notes/41")]
#[case::delete_missing("DELETE", "/api/scouting-notes/41")]
#[case::delete_non_numeric("DELETE", "/api/scouting-notes/not-a-number")]
#[tokio::test]
async fn unknown_note_ids_are_404(#[case] method: &str, #[case] path: &str) {
    let router = router().await;
    let resp = router.handle(method, path, "", "{}").await;
    assert_eq!(resp.status, 404, "{method} {path}");
    assert_eq!(resp.body, json!({"error": "Note not found"}));
}

#[tokio::test]
async fn malformed_note_body_is_400() {
    let router = router().await;
    let resp = router.handle("POST", "/api/scouting-notes", "", "{not json").await;
    assert_eq!(resp.status, 400);
    assert!(resp.body["error"].is_string());
}

#[tokio::test]
async fn team_records_apply_query_string() {
    let router = router().await;
    let resp = router
        .handle("GET", "/api/team-records", "coach=KIDD&sortBy=w&sortOrder=ASC", "")
        .await;
    assert_eq!(resp.status, 200);
    let wins: Vec<&Value> = resp.body.as_array().unwrap().iter().map(|r| &r["w"]).collect();
    assert_eq!(wins, vec![&json!(50), &json!(52)]);
}

#[tokio::test]
async fn filter_options_endpoint() {
    let router = router().await;
    let resp = router.handle("GET", "/api/team-records/filters", "", "").await;
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body["seasons"], json!(["2023-24", "2021-22", "2018-19"]));
    assert_eq!(
        resp.body["playoffs"],
        json!(["Lost Finals", "Lost W. Conf. Finals"])
    );
}

#[tokio::test]
async fn team_stats_filter_by_percentage() {
    let router = router().await;
    let resp = router.handle("GET", "/api/team-stats", "minFgPercent=45", "").await;
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body.as_array().map(Vec::len), Some(1));
    assert_eq!(resp.body[0]["Season"], "2023-24");
}

#[tokio::test]
async fn database_failure_includes_diagnostics() {
    let router = router().await;
    router
        .db()
        .execute("DROP TABLE mavsteamstats", ())
        .await
        .unwrap();

    let resp = router.handle("GET", "/api/team-stats", "", "").await;
    assert_eq!(resp.status, 500);
    assert_eq!(resp.body["error"], "Internal server error");
    assert!(resp.body["details"].as_str().unwrap().contains("mavsteamstats"));
    assert!(resp.body["stack"].is_string());
}

#[tokio::test]
async fn unknown_routes_are_404() {
    let router = router().await;
    let resp = router.handle("GET", "/api/players", "", "").await;
    assert_eq!(resp.status, 404);
    let resp = router.handle("PATCH", "/api/scouting-notes/1", "", "").await;
    assert_eq!(resp.status, 404);
}
