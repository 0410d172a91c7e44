//! Construction-time errors
//!
//! Rejected moves are not errors; they simply leave the previous value in place.
//! These variants only cover values that could never be valid to begin with.

use crate::position::Position;

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    #[error("piece size {0} is outside the supported 0..=4 range")]
    InvalidPieceSize(usize),
    #[error("position {0:?} lies outside the {1}x{1} bounding box")]
    PositionOutOfBox(Position, usize),
    #[error("position {0:?} appears more than once")]
    DuplicatePosition(Position),
    #[error("a piece holds at most {0} cells")]
    TooManyCells(usize),
    #[error("board {width}x{height} is smaller than the {min}x{min} minimum")]
    BoardTooSmall {
        width: usize,
        height: usize,
        min: usize,
    },
    #[error("expected {expected} cells, found {found}")]
    ShapeMismatch { expected: usize, found: usize },
    #[error("fixture row {row} has {found} cells, expected {expected}")]
    RaggedFixture {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("fixture text is empty")]
    EmptyFixture,
}

impl Error {
    /// Stable machine-readable code
    pub fn code(self) -> &'static str {
        match self {
            Error::InvalidPieceSize(_)
            | Error::PositionOutOfBox(..)
            | Error::DuplicatePosition(_)
            | Error::TooManyCells(_)
            | Error::ShapeMismatch { .. } => "invalid_piece",
            Error::BoardTooSmall { .. } => "invalid_board",
            Error::RaggedFixture { .. } | Error::EmptyFixture => "invalid_fixture",
        }
    }
}
