//! # court-core
//!
//! Core types shared across all courtside crates.
//!
//! This crate provides:
//! - Entity structs for the draft dataset (prospects, scout rankings, stat rows,
//!   scouting reports, measurements) and the server-side scouting notes
//! - The bundled dataset loader
//! - The field compatibility table that normalizes dual-named stat columns
//! - Display helpers (age, height, rounding) and the season countdown
//! - Dataset error types

pub mod countdown;
pub mod dataset;
mod de;
pub mod entities;
pub mod errors;
pub mod fields;
pub mod format;
