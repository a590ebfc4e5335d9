//! # court-board
//!
//! Draft-room logic over the bundled dataset: averaging scout ranks into a
//! Big Board, reordering it, and assembling per-player profiles. Everything
//! here is synchronous and a pure function of its inputs plus an explicit
//! `today`.

pub mod aggregate;
pub mod board;
pub mod error;
pub mod profile;
pub mod reports;
pub mod stats;

pub use aggregate::{Partition, RankedEntry, aggregate};
pub use board::{BigBoard, BoardMove, Section};
pub use error::BoardError;
pub use profile::{GameLine, PlayerProfile, SeasonTotals, assemble};
pub use reports::{ReportDraft, ReportLog};
