//! Board error types.

use thiserror::Error;

use crate::board::Section;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    /// A move addressed a position past the end of a section.
    #[error("index {index} is out of range for {section} board of {len}")]
    IndexOutOfRange {
        section: Section,
        index: usize,
        len: usize,
    },

    /// A move expression could not be parsed.
    #[error("invalid board move '{0}': expected <op>:<index>, op one of top, up, down, bottom, unrank, rank")]
    InvalidMove(String),
}
