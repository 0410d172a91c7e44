//! Tetrimino module - piece shapes, translation and in-place rotation
//!
//! A [`Tetrimino`] is an immutable value: moving or rotating it produces a new
//! piece. Rotation normalizes cells against the piece origin, flips them inside
//! the `size x size` bounding box and moves them back. No wall kicks are tried
//! here; a rotation that collides is rejected by the move validator upstream.

use arrayvec::ArrayVec;

use crate::error::Error;
use crate::position::Position;
use crate::types::{Color, ShapeKind, MAX_PIECE_SIZE};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum number of cells a piece can occupy
pub const MAX_CELLS: usize = 4;

/// Occupied cells of a piece
pub type Cells = ArrayVec<Position, MAX_CELLS>;

/// Opaque piece identity, stable across moves and rotations
///
/// Assigned by the piece supply when a piece is drawn. Only used to tell
/// otherwise identical pieces apart (e.g. animation keys); gameplay never
/// looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceId(pub u64);

impl PieceId {
    /// Identity of the empty sentinel and of hand-built pieces
    pub const NONE: PieceId = PieceId(0);
}

/// Cell offsets of each canonical shape inside its bounding box (row 0 at the bottom)
fn canonical_cells(kind: ShapeKind) -> [Position; MAX_CELLS] {
    let p = Position::new;
    match kind {
        ShapeKind::I => [p(1, 0), p(1, 1), p(1, 2), p(1, 3)],
        ShapeKind::J => [p(0, 0), p(0, 1), p(1, 1), p(2, 1)],
        ShapeKind::L => [p(0, 1), p(0, 2), p(1, 1), p(2, 1)],
        ShapeKind::O => [p(0, 0), p(0, 1), p(1, 0), p(1, 1)],
        ShapeKind::S => [p(0, 0), p(0, 1), p(1, 1), p(1, 2)],
        ShapeKind::T => [p(1, 0), p(1, 1), p(1, 2), p(2, 1)],
        ShapeKind::Z => [p(1, 0), p(1, 1), p(0, 1), p(0, 2)],
    }
}

/// A movable, rotatable shape
///
/// Serialize-only; hand-built pieces go through [`TetriminoBuilder`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Tetrimino {
    id: PieceId,
    kind: Option<ShapeKind>,
    color: Color,
    size: i32,
    origin: Position,
    positions: Cells,
}

impl Tetrimino {
    /// The zero-cell placeholder used while no piece is falling
    pub fn empty() -> Self {
        Self {
            id: PieceId::NONE,
            kind: None,
            color: Color::None,
            size: 0,
            origin: Position::ORIGIN,
            positions: Cells::new(),
        }
    }

    /// Canonical shape at the bottom-left of its bounding box
    pub fn of(kind: ShapeKind) -> Self {
        Self {
            id: PieceId::NONE,
            kind: Some(kind),
            color: kind.color(),
            size: kind.size() as i32,
            origin: Position::ORIGIN,
            positions: Cells::from(canonical_cells(kind)),
        }
    }

    /// Unvalidated piece from raw cells, for in-crate fixtures
    pub(crate) fn from_cells(size: i32, color: Color, cells: &[Position]) -> Self {
        Self {
            id: PieceId::NONE,
            kind: None,
            color,
            size,
            origin: Position::ORIGIN,
            positions: cells.iter().copied().take(MAX_CELLS).collect(),
        }
    }

    /// Same piece carrying a new identity
    pub fn with_id(mut self, id: PieceId) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> PieceId {
        self.id
    }

    /// Shape the piece was built from, `None` for the sentinel and custom pieces
    pub fn kind(&self) -> Option<ShapeKind> {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Translate every cell and the origin by `diff`
    pub fn moved(&self, diff: Position) -> Tetrimino {
        Tetrimino {
            origin: self.origin + diff,
            positions: self.positions.iter().map(|&p| p + diff).collect(),
            ..self.clone()
        }
    }

    pub fn clockwise(&self) -> Tetrimino {
        self.rotated(Position::flip_clockwise)
    }

    pub fn reverse_clockwise(&self) -> Tetrimino {
        self.rotated(Position::flip_reverse_clockwise)
    }

    fn rotated(&self, flip: fn(Position, i32) -> Position) -> Tetrimino {
        let origin = self.origin;
        let size = self.size;
        Tetrimino {
            positions: self
                .positions
                .iter()
                .map(|&p| flip(p - origin, size) + origin)
                .collect(),
            ..self.clone()
        }
    }
}

impl Default for Tetrimino {
    fn default() -> Self {
        Self::empty()
    }
}

/// Same color and same set of cells, regardless of order or identity
impl PartialEq for Tetrimino {
    fn eq(&self, other: &Self) -> bool {
        self.color == other.color
            && self.positions.len() == other.positions.len()
            && self.positions.iter().all(|p| other.positions.contains(p))
    }
}

impl Eq for Tetrimino {}

/// Validating constructor for hand-built pieces
///
/// Cells are given relative to the bounding box (`0..size` on both axes) and
/// the piece is built with its origin at `(0, 0)`; use [`Tetrimino::moved`]
/// to place it.
///
/// # Examples
///
/// ```
/// use blockfall_core::position::Position;
/// use blockfall_core::tetrimino::TetriminoBuilder;
/// use blockfall_core::types::Color;
///
/// let flat = TetriminoBuilder::new(2, Color::Red)
///     .with_position(Position::new(0, 0))
///     .with_position(Position::new(0, 1))
///     .build()
///     .unwrap();
/// assert_eq!(flat.positions().len(), 2);
///
/// let broken = TetriminoBuilder::new(2, Color::Red)
///     .with_position(Position::new(0, 2))
///     .build();
/// assert!(broken.is_err());
/// ```
#[derive(Debug, Clone)]
pub struct TetriminoBuilder {
    kind: Option<ShapeKind>,
    color: Color,
    size: usize,
    positions: Vec<Position>,
}

impl TetriminoBuilder {
    pub fn new(size: usize, color: Color) -> Self {
        Self {
            kind: None,
            color,
            size,
            positions: Vec::new(),
        }
    }

    /// Builder for a named shape; `build` then requires exactly four cells
    pub fn shape(kind: ShapeKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::new(kind.size(), kind.color())
        }
    }

    pub fn with_position(mut self, p: Position) -> Self {
        self.positions.push(p);
        self
    }

    pub fn with_positions(mut self, ps: impl IntoIterator<Item = Position>) -> Self {
        self.positions.extend(ps);
        self
    }

    pub fn build(self) -> Result<Tetrimino, Error> {
        if self.size > MAX_PIECE_SIZE {
            return Err(Error::InvalidPieceSize(self.size));
        }
        if self.kind.is_some() && self.positions.len() != MAX_CELLS {
            return Err(Error::ShapeMismatch {
                expected: MAX_CELLS,
                found: self.positions.len(),
            });
        }

        let bound = self.size as i32;
        let mut positions = Cells::new();
        for p in self.positions {
            if p.row < 0 || p.row >= bound || p.col < 0 || p.col >= bound {
                return Err(Error::PositionOutOfBox(p, self.size));
            }
            if positions.contains(&p) {
                return Err(Error::DuplicatePosition(p));
            }
            positions
                .try_push(p)
                .map_err(|_| Error::TooManyCells(MAX_CELLS))?;
        }

        Ok(Tetrimino {
            id: PieceId::NONE,
            kind: self.kind,
            color: self.color,
            size: bound,
            origin: Position::ORIGIN,
            positions,
        })
    }
}
