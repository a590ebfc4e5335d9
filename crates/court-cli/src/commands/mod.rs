pub mod board;
pub mod countdown;
pub mod dispatch;
pub mod filters;
pub mod import;
pub mod notes;
pub mod profile;
pub mod records;
pub mod serve;
pub mod shared;
pub mod stats;
