//! Entity structs for all courtside domain objects.
//!
//! Draft entities mirror the rows of the bundled dataset (keyed by numeric
//! `playerId`). `ScoutingNote` maps to the `scouting_notes` table.

mod measurement;
mod note;
mod prospect;
mod ranking;
mod report;
pub(crate) mod stat_row;

pub use measurement::Measurement;
pub use note::{NoteFields, ScoutingNote};
pub use prospect::Prospect;
pub use ranking::{ScoutRank, ScoutRanking};
pub use report::{ReportId, ScoutReport};
pub use stat_row::{GameLog, SeasonLog, StatRow};
