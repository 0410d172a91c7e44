//! Geometry module - grid coordinates and rotation transforms
//!
//! Positions are `{row, col}` pairs with a bottom-left origin: rows grow upward,
//! columns grow rightward. All operations are total over `i32` inputs: arithmetic
//! wraps on overflow instead of panicking.

use std::ops::{Add, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A cell coordinate on (or off) the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const ORIGIN: Position = Position { row: 0, col: 0 };

    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn add(self, other: Position) -> Position {
        Position::new(
            self.row.wrapping_add(other.row),
            self.col.wrapping_add(other.col),
        )
    }

    pub fn negate(self) -> Position {
        Position::new(self.row.wrapping_neg(), self.col.wrapping_neg())
    }

    /// True iff `0 <= col < max_cols`
    pub fn within_lateral_boundaries(self, max_cols: i32) -> bool {
        self.col >= 0 && self.col < max_cols
    }

    /// True iff the position has fallen below the floor
    pub fn grounded(self) -> bool {
        self.row < 0
    }

    /// Rotate inside a `size x size` box: `{row: col, col: size - row - 1}`
    pub fn flip_clockwise(self, size: i32) -> Position {
        Position::new(self.col, size.wrapping_sub(self.row).wrapping_sub(1))
    }

    /// Inverse of [`flip_clockwise`](Self::flip_clockwise): `{row: size - col - 1, col: row}`
    pub fn flip_reverse_clockwise(self, size: i32) -> Position {
        Position::new(size.wrapping_sub(self.col).wrapping_sub(1), self.row)
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::add(self, rhs)
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::add(self, rhs.negate())
    }
}

impl Neg for Position {
    type Output = Position;

    fn neg(self) -> Position {
        self.negate()
    }
}

/// One row down
pub const DOWN: Position = Position::new(-1, 0);
/// One column left
pub const LEFT: Position = Position::new(0, -1);
/// One column right
pub const RIGHT: Position = Position::new(0, 1);
