//! Ranking aggregation: averages scout ranks and partitions prospects into
//! ranked and unranked sequences.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::Serialize;

use court_core::dataset::Dataset;
use court_core::entities::{Prospect, ScoutRank, ScoutRanking};
use court_core::format::{age_from_birth_date, display_height, round_one};

/// A prospect with its derived board fields.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    #[serde(flatten)]
    pub prospect: Prospect,
    /// Mean of the scout ranks, one decimal. `None` places the entry in the
    /// unranked section.
    pub average_rank: Option<f64>,
    pub age: Option<u32>,
    pub display_height: Option<String>,
    pub scout_ranks: Vec<ScoutRank>,
}

impl RankedEntry {
    #[must_use]
    pub const fn player_id(&self) -> i64 {
        self.prospect.player_id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.prospect.name
    }
}

/// Ranked entries ascending by average rank; unranked entries by name.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Partition {
    pub ranked: Vec<RankedEntry>,
    pub unranked: Vec<RankedEntry>,
}

/// Arithmetic mean of the ranks rounded to one decimal, or `None` when there
/// are none.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average_rank(ranks: &[ScoutRank]) -> Option<f64> {
    if ranks.is_empty() {
        return None;
    }
    let total: f64 = ranks.iter().map(|r| r.rank).sum();
    Some(round_one(total / ranks.len() as f64))
}

/// Ordinal name comparison used for the unranked section.
pub(crate) fn by_name(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    a.prospect.name.cmp(&b.prospect.name)
}

fn by_average_rank(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    match (a.average_rank, b.average_rank) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        _ => Ordering::Equal,
    }
}

/// Build one entry. Missing bio or ranking rows contribute nothing.
#[must_use]
pub fn entry_for(
    prospect: &Prospect,
    bio: Option<&Prospect>,
    ranking: Option<&ScoutRanking>,
    today: NaiveDate,
) -> RankedEntry {
    let merged = bio.map_or_else(|| prospect.clone(), |b| prospect.merged_with(b));
    let scout_ranks = ranking.map(ScoutRanking::ranks).unwrap_or_default();
    RankedEntry {
        average_rank: average_rank(&scout_ranks),
        age: age_from_birth_date(merged.birth_date.as_deref(), today),
        display_height: display_height(merged.height),
        scout_ranks,
        prospect: merged,
    }
}

/// Derive the Big Board partition.
///
/// Both sorts are stable, so prospects with equal keys keep their input order.
#[must_use]
pub fn aggregate(
    prospects: &[Prospect],
    bio: &[Prospect],
    rankings: &[ScoutRanking],
    today: NaiveDate,
) -> Partition {
    let (mut ranked, mut unranked): (Vec<_>, Vec<_>) = prospects
        .iter()
        .map(|p| {
            let bio_row = bio.iter().find(|b| b.player_id == p.player_id);
            let ranking = rankings.iter().find(|r| r.player_id == p.player_id);
            entry_for(p, bio_row, ranking, today)
        })
        .partition(|entry| entry.average_rank.is_some());

    ranked.sort_by(by_average_rank);
    unranked.sort_by(by_name);

    tracing::debug!(
        ranked = ranked.len(),
        unranked = unranked.len(),
        "big board aggregated"
    );
    Partition { ranked, unranked }
}

/// Aggregate the dataset's own bio table, which doubles as the prospect list.
#[must_use]
pub fn aggregate_dataset(dataset: &Dataset, today: NaiveDate) -> Partition {
    aggregate(&dataset.bio, &dataset.bio, &dataset.scout_rankings, today)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn prospect(id: i64, name: &str) -> Prospect {
        Prospect {
            player_id: id,
            name: name.into(),
            ..Prospect::default()
        }
    }

    fn ranking(id: i64, json: &str) -> ScoutRanking {
        let mut ranking: ScoutRanking = serde_json::from_str(json).unwrap();
        ranking.player_id = id;
        ranking
    }

    fn rank(value: f64) -> ScoutRank {
        ScoutRank {
            scout: "ESPN Rank".into(),
            rank: value,
        }
    }

    #[test]
    fn average_of_three_five_seven_is_five() {
        assert_eq!(average_rank(&[rank(3.0), rank(5.0), rank(7.0)]), Some(5.0));
    }

    #[test]
    fn average_rounds_to_one_decimal() {
        assert_eq!(average_rank(&[rank(1.0), rank(2.0), rank(2.0)]), Some(1.7));
        assert_eq!(average_rank(&[]), None);
    }

    #[test]
    fn prospects_without_numeric_ranks_are_unranked() {
        let prospects = [prospect(1, "Carter"), prospect(2, "Adams"), prospect(3, "Brown")];
        let rankings = [
            ranking(1, r#"{"playerId": 1, "ESPN Rank": null, "Notes": "watch"}"#),
            ranking(3, r#"{"playerId": 3, "ESPN Rank": 4, "Sam Vecenie Rank": 6}"#),
        ];

        let partition = aggregate(&prospects, &[], &rankings, today());

        assert_eq!(partition.ranked.len(), 1);
        assert_eq!(partition.ranked[0].name(), "Brown");
        assert_eq!(partition.ranked[0].average_rank, Some(5.0));
        let unranked: Vec<&str> = partition.unranked.iter().map(RankedEntry::name).collect();
        assert_eq!(unranked, vec!["Adams", "Carter"]);
    }

    #[test]
    fn ranked_sorted_ascending_and_stable_on_ties() {
        let prospects = [prospect(1, "A"), prospect(2, "B"), prospect(3, "C")];
        let rankings = [
            ranking(1, r#"{"playerId": 1, "ESPN Rank": 9}"#),
            ranking(2, r#"{"playerId": 2, "ESPN Rank": 2}"#),
            ranking(3, r#"{"playerId": 3, "ESPN Rank": 9}"#),
        ];

        let partition = aggregate(&prospects, &[], &rankings, today());
        let order: Vec<i64> = partition.ranked.iter().map(RankedEntry::player_id).collect();
        assert_eq!(order, vec![2, 1, 3]);
    }

    #[test]
    fn unranked_name_order_is_ordinal() {
        let prospects = [prospect(1, "adams"), prospect(2, "Brown"), prospect(3, "Adams")];
        let partition = aggregate(&prospects, &[], &[], today());
        let names: Vec<&str> = partition.unranked.iter().map(RankedEntry::name).collect();
        assert_eq!(names, vec!["Adams", "Brown", "adams"]);
    }

    #[test]
    fn bio_fields_merge_and_derive_age_and_height() {
        let bio = Prospect {
            player_id: 1,
            name: "Cooper Flagg".into(),
            birth_date: Some("2006-12-21".into()),
            height: Some(81.0),
            ..Prospect::default()
        };

        let partition = aggregate(&[prospect(1, "C. Flagg")], &[bio], &[], today());
        let entry = &partition.unranked[0];
        assert_eq!(entry.name(), "Cooper Flagg");
        assert_eq!(entry.age, Some(18));
        assert_eq!(entry.display_height.as_deref(), Some("6' 9\""));
    }

    #[test]
    fn missing_bio_and_ranking_are_not_errors() {
        let partition = aggregate(&[prospect(7, "Solo")], &[], &[], today());
        let entry = &partition.unranked[0];
        assert_eq!(entry.age, None);
        assert_eq!(entry.display_height, None);
        assert!(entry.scout_ranks.is_empty());
    }

    #[test]
    fn serializes_with_flattened_prospect() {
        let partition = aggregate(&[prospect(1, "A")], &[], &[], today());
        let json = serde_json::to_value(&partition.unranked[0]).unwrap();
        assert_eq!(json["playerId"], 1);
        assert_eq!(json["name"], "A");
        assert!(json["averageRank"].is_null());
    }
}
