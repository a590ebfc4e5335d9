//! Repository methods on [`CourtDb`](crate::CourtDb), one module per table.

pub mod import;
pub mod notes;
pub mod team_records;
pub mod team_stats;
