//! The editable Big Board: ranked and unranked sequences plus the moves a
//! scout can make between and within them.
//!
//! Every move preserves membership: the union of both sections is always the
//! original prospect set with no duplicates. A move addressing an index past
//! the end of its section fails with [`BoardError::IndexOutOfRange`] and leaves
//! the board untouched.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::aggregate::{Partition, RankedEntry, by_name};
use crate::error::BoardError;

/// Which half of the board an index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Ranked,
    Unranked,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ranked => f.write_str("ranked"),
            Self::Unranked => f.write_str("unranked"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct BigBoard {
    ranked: Vec<RankedEntry>,
    unranked: Vec<RankedEntry>,
}

impl From<Partition> for BigBoard {
    fn from(partition: Partition) -> Self {
        Self {
            ranked: partition.ranked,
            unranked: partition.unranked,
        }
    }
}

impl BigBoard {
    #[must_use]
    pub fn ranked(&self) -> &[RankedEntry] {
        &self.ranked
    }

    #[must_use]
    pub fn unranked(&self) -> &[RankedEntry] {
        &self.unranked
    }

    /// Total prospects across both sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranked.len() + self.unranked.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty() && self.unranked.is_empty()
    }

    fn check(section: Section, entries: &[RankedEntry], index: usize) -> Result<(), BoardError> {
        if index < entries.len() {
            Ok(())
        } else {
            Err(BoardError::IndexOutOfRange {
                section,
                index,
                len: entries.len(),
            })
        }
    }

    /// Move a ranked entry to the first position.
    pub fn move_to_top(&mut self, index: usize) -> Result<(), BoardError> {
        Self::check(Section::Ranked, &self.ranked, index)?;
        let entry = self.ranked.remove(index);
        self.ranked.insert(0, entry);
        Ok(())
    }

    /// Swap a ranked entry with its predecessor. No-op at index 0.
    pub fn move_up(&mut self, index: usize) -> Result<(), BoardError> {
        Self::check(Section::Ranked, &self.ranked, index)?;
        if index > 0 {
            self.ranked.swap(index, index - 1);
        }
        Ok(())
    }

    /// Swap a ranked entry with its successor. No-op at the last index.
    pub fn move_down(&mut self, index: usize) -> Result<(), BoardError> {
        Self::check(Section::Ranked, &self.ranked, index)?;
        if index + 1 < self.ranked.len() {
            self.ranked.swap(index, index + 1);
        }
        Ok(())
    }

    /// Move a ranked entry to the last position.
    pub fn move_to_bottom(&mut self, index: usize) -> Result<(), BoardError> {
        Self::check(Section::Ranked, &self.ranked, index)?;
        let entry = self.ranked.remove(index);
        self.ranked.push(entry);
        Ok(())
    }

    /// Drop a ranked entry into the unranked section, which is re-sorted by name.
    pub fn move_to_unranked(&mut self, index: usize) -> Result<(), BoardError> {
        Self::check(Section::Ranked, &self.ranked, index)?;
        let entry = self.ranked.remove(index);
        self.unranked.push(entry);
        self.unranked.sort_by(by_name);
        Ok(())
    }

    /// Promote an unranked entry to the end of the ranked section.
    ///
    /// The ranked section is not re-sorted by average rank.
    pub fn move_to_ranked(&mut self, index: usize) -> Result<(), BoardError> {
        Self::check(Section::Unranked, &self.unranked, index)?;
        let entry = self.unranked.remove(index);
        self.ranked.push(entry);
        Ok(())
    }

    /// Apply a parsed move.
    pub fn apply(&mut self, mv: BoardMove) -> Result<(), BoardError> {
        match mv {
            BoardMove::Top(i) => self.move_to_top(i),
            BoardMove::Up(i) => self.move_up(i),
            BoardMove::Down(i) => self.move_down(i),
            BoardMove::Bottom(i) => self.move_to_bottom(i),
            BoardMove::Unrank(i) => self.move_to_unranked(i),
            BoardMove::Rank(i) => self.move_to_ranked(i),
        }
    }
}

/// A single board move, written `<op>:<index>` on the command line,
/// e.g. `up:3` or `rank:0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardMove {
    Top(usize),
    Up(usize),
    Down(usize),
    Bottom(usize),
    Unrank(usize),
    Rank(usize),
}

impl FromStr for BoardMove {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BoardError::InvalidMove(s.to_string());
        let (op, index) = s.split_once(':').ok_or_else(invalid)?;
        let index: usize = index.trim().parse().map_err(|_| invalid())?;
        match op.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top(index)),
            "up" => Ok(Self::Up(index)),
            "down" => Ok(Self::Down(index)),
            "bottom" => Ok(Self::Bottom(index)),
            "unrank" => Ok(Self::Unrank(index)),
            "rank" => Ok(Self::Rank(index)),
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use court_core::entities::{Prospect, ScoutRanking};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::aggregate::aggregate;

    /// Ranked: Ace(1.0), Bo(2.0), Cy(3.0). Unranked: Adams, Brown, Carter.
    fn board() -> BigBoard {
        let names = ["Ace", "Bo", "Cy", "Carter", "Adams", "Brown"];
        let prospects: Vec<Prospect> = names
            .iter()
            .zip(1..)
            .map(|(name, id)| Prospect {
                player_id: id,
                name: (*name).into(),
                ..Prospect::default()
            })
            .collect();
        let rankings: Vec<ScoutRanking> = (1..=3)
            .map(|id| {
                serde_json::from_value(serde_json::json!({"playerId": id, "ESPN Rank": id}))
                    .unwrap()
            })
            .collect();
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        aggregate(&prospects, &[], &rankings, today).into()
    }

    fn ranked_names(board: &BigBoard) -> Vec<&str> {
        board.ranked().iter().map(RankedEntry::name).collect()
    }

    fn unranked_names(board: &BigBoard) -> Vec<&str> {
        board.unranked().iter().map(RankedEntry::name).collect()
    }

    #[test]
    fn starts_partitioned() {
        let board = board();
        assert_eq!(ranked_names(&board), vec!["Ace", "Bo", "Cy"]);
        assert_eq!(unranked_names(&board), vec!["Adams", "Brown", "Carter"]);
    }

    #[test]
    fn move_to_top_and_bottom() {
        let mut board = board();
        board.move_to_top(2).unwrap();
        assert_eq!(ranked_names(&board), vec!["Cy", "Ace", "Bo"]);
        board.move_to_bottom(0).unwrap();
        assert_eq!(ranked_names(&board), vec!["Ace", "Bo", "Cy"]);
    }

    #[test]
    fn move_up_at_zero_is_noop() {
        let mut board = board();
        let before = board.clone();
        board.move_up(0).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn move_down_at_last_is_noop() {
        let mut board = board();
        let before = board.clone();
        board.move_down(2).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn move_up_and_down_swap_neighbours() {
        let mut board = board();
        board.move_up(1).unwrap();
        assert_eq!(ranked_names(&board), vec!["Bo", "Ace", "Cy"]);
        board.move_down(1).unwrap();
        assert_eq!(ranked_names(&board), vec!["Bo", "Cy", "Ace"]);
    }

    #[test]
    fn move_to_unranked_resorts_by_name() {
        let mut board = board();
        board.move_to_unranked(1).unwrap();
        assert_eq!(ranked_names(&board), vec!["Ace", "Cy"]);
        assert_eq!(unranked_names(&board), vec!["Adams", "Bo", "Brown", "Carter"]);
    }

    #[test]
    fn move_to_ranked_appends_without_resorting() {
        let mut board = board();
        board.move_to_ranked(2).unwrap();
        assert_eq!(ranked_names(&board), vec!["Ace", "Bo", "Cy", "Carter"]);
        assert_eq!(unranked_names(&board), vec!["Adams", "Brown"]);
        assert_eq!(board.ranked()[3].average_rank, None);
    }

    #[rstest]
    #[case::top(BoardMove::Top(3), Section::Ranked)]
    #[case::up(BoardMove::Up(3), Section::Ranked)]
    #[case::down(BoardMove::Down(9), Section::Ranked)]
    #[case::bottom(BoardMove::Bottom(3), Section::Ranked)]
    #[case::unrank(BoardMove::Unrank(3), Section::Ranked)]
    #[case::rank(BoardMove::Rank(3), Section::Unranked)]
    fn out_of_range_fails_and_leaves_board_unchanged(
        #[case] mv: BoardMove,
        #[case] section: Section,
    ) {
        let mut board = board();
        let before = board.clone();
        let err = board.apply(mv).unwrap_err();
        assert!(matches!(err, BoardError::IndexOutOfRange { section: s, len: 3, .. } if s == section));
        assert_eq!(board, before);
    }

    #[test]
    fn empty_board_rejects_every_move() {
        let mut board = BigBoard::default();
        assert!(board.move_up(0).is_err());
        assert!(board.move_to_ranked(0).is_err());
        assert!(board.is_empty());
    }

    #[rstest]
    #[case("top:0", BoardMove::Top(0))]
    #[case("UP:4", BoardMove::Up(4))]
    #[case("down: 2", BoardMove::Down(2))]
    #[case("bottom:1", BoardMove::Bottom(1))]
    #[case("unrank:0", BoardMove::Unrank(0))]
    #[case("rank:2", BoardMove::Rank(2))]
    fn parses_moves(#[case] raw: &str, #[case] expected: BoardMove) {
        assert_eq!(raw.parse::<BoardMove>().unwrap(), expected);
    }

    #[rstest]
    #[case("top")]
    #[case("sideways:1")]
    #[case("up:-1")]
    fn rejects_malformed_moves(#[case] raw: &str) {
        assert!(matches!(
            raw.parse::<BoardMove>(),
            Err(BoardError::InvalidMove(_))
        ));
    }
}
