//! Membership invariants of the Big Board under arbitrary move sequences.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use court_board::aggregate::aggregate_dataset;
use court_board::{BigBoard, BoardMove};
use court_core::dataset::Dataset;
use rstest::rstest;

const DATA: &str = r#"{
    "bio": [
        {"playerId": 1, "name": "Flagg"}, {"playerId": 2, "name": "Bailey"},
        {"playerId": 3, "name": "Harper"}, {"playerId": 4, "name": "Edgecombe"},
        {"playerId": 5, "name": "Adams"}, {"playerId": 6, "name": "Carter"},
        {"playerId": 7, "name": "Brown"}
    ],
    "scoutRankings": [
        {"playerId": 1, "ESPN Rank": 1, "Sam Vecenie Rank": 1},
        {"playerId": 2, "ESPN Rank": 3, "Sam Vecenie Rank": 5},
        {"playerId": 3, "ESPN Rank": 2, "Sam Vecenie Rank": 2},
        {"playerId": 4, "ESPN Rank": 4, "Sam Vecenie Rank": null}
    ]
}"#;

fn board() -> BigBoard {
    let dataset = Dataset::from_json_str(DATA).unwrap();
    let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    aggregate_dataset(&dataset, today).into()
}

fn members(board: &BigBoard) -> Vec<i64> {
    let mut ids: Vec<i64> = board
        .ranked()
        .iter()
        .chain(board.unranked())
        .map(|e| e.player_id())
        .collect();
    ids.sort_unstable();
    ids
}

fn assert_unranked_sorted(board: &BigBoard) {
    let names: Vec<&str> = board.unranked().iter().map(|e| e.name()).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}

#[test]
fn initial_partition_orders_both_sections() {
    let board = board();
    let ranked: Vec<i64> = board.ranked().iter().map(|e| e.player_id()).collect();
    assert_eq!(ranked, vec![1, 3, 2, 4]);
    let unranked: Vec<&str> = board.unranked().iter().map(|e| e.name()).collect();
    assert_eq!(unranked, vec!["Adams", "Brown", "Carter"]);
}

#[rstest]
#[case::shuffle_within_ranked(&["up:3", "top:2", "down:0", "bottom:1", "up:0", "down:3"])]
#[case::drain_ranked(&["unrank:0", "unrank:0", "unrank:0", "unrank:0", "unrank:0"])]
#[case::drain_unranked(&["rank:2", "rank:0", "rank:0", "rank:0", "rank:9"])]
#[case::mixed(&["rank:1", "unrank:4", "top:3", "rank:3", "up:2", "unrank:1", "rank:0", "bottom:0"])]
fn membership_is_preserved(#[case] moves: &[&str]) {
    let mut board = board();
    let original: BTreeSet<i64> = members(&board).into_iter().collect();

    for raw in moves {
        let mv: BoardMove = raw.parse().unwrap();
        let _ = board.apply(mv);

        let now = members(&board);
        assert_eq!(now.len(), original.len(), "duplicate or lost entry after {raw}");
        assert_eq!(now.into_iter().collect::<BTreeSet<_>>(), original);
        assert_unranked_sorted(&board);
    }
}
