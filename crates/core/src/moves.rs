//! Move validation - legality checks for a proposed playfield
//!
//! Each check either passes the playfield through or rejects it with a
//! [`Rejection`]. Pipelines stop at the first rejection. A rejected move has no
//! effect: callers keep the configuration they had before trying it.

use crate::playfield::Playfield;
use crate::position::{Position, DOWN, LEFT, RIGHT};
use crate::tetrimino::Tetrimino;

/// Why a proposed configuration was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The piece sits on an occupied cell
    Touch,
    /// The piece left the board sideways or fell through the floor
    Boundaries,
}

impl Rejection {
    pub fn as_str(self) -> &'static str {
        match self {
            Rejection::Touch => "touch",
            Rejection::Boundaries => "boundaries",
        }
    }
}

/// Outcome of a validation step
pub type Validation = Result<Playfield, Rejection>;

/// Every active cell's column lies in `[0, width)`
pub fn within_lateral_boundaries(playfield: Playfield) -> Validation {
    let width = playfield.width() as i32;
    if playfield
        .piece()
        .positions()
        .iter()
        .all(|p| p.within_lateral_boundaries(width))
    {
        Ok(playfield)
    } else {
        Err(Rejection::Boundaries)
    }
}

/// No active cell coincides with a board block
pub fn overlap(playfield: Playfield) -> Validation {
    if playfield.piece_overlaps() {
        Err(Rejection::Touch)
    } else {
        Ok(playfield)
    }
}

/// No active cell is below the floor
pub fn ground(playfield: Playfield) -> Validation {
    if playfield.piece().positions().iter().any(|p| p.grounded()) {
        Err(Rejection::Boundaries)
    } else {
        Ok(playfield)
    }
}

/// Checks for sideways moves and rotations: boundaries, then overlap
pub fn validate_lateral_position(playfield: Playfield) -> Validation {
    within_lateral_boundaries(playfield).and_then(overlap)
}

/// Checks for downward moves: overlap, then floor
pub fn validate_tick_position(playfield: Playfield) -> Validation {
    overlap(playfield).and_then(ground)
}

/// Translate a piece by one step
pub fn shift(piece: &Tetrimino, diff: Position) -> Tetrimino {
    piece.moved(diff)
}

pub fn down(piece: &Tetrimino) -> Tetrimino {
    shift(piece, DOWN)
}

pub fn left(piece: &Tetrimino) -> Tetrimino {
    shift(piece, LEFT)
}

pub fn right(piece: &Tetrimino) -> Tetrimino {
    shift(piece, RIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BoardSize, ShapeKind};

    fn field_with(piece: Tetrimino) -> Playfield {
        Playfield::new(BoardSize::new(4, 4), piece)
    }

    #[test]
    fn lateral_rejects_side_walls() {
        let o = Tetrimino::of(ShapeKind::O);
        assert!(validate_lateral_position(field_with(o.clone())).is_ok());
        assert_eq!(
            validate_lateral_position(field_with(left(&o))),
            Err(Rejection::Boundaries)
        );
        assert_eq!(
            validate_lateral_position(field_with(o.moved(Position::new(0, 3)))),
            Err(Rejection::Boundaries)
        );
    }

    #[test]
    fn tick_rejects_floor_but_not_walls() {
        let o = Tetrimino::of(ShapeKind::O);
        assert_eq!(
            validate_tick_position(field_with(down(&o))),
            Err(Rejection::Boundaries)
        );
        // Walls are not part of the tick pipeline.
        assert!(validate_tick_position(field_with(left(&o))).is_ok());
    }

    #[test]
    fn overlap_reported_as_touch() {
        let o = Tetrimino::of(ShapeKind::O);
        let merged = field_with(o.clone()).merge_piece();
        assert_eq!(validate_tick_position(merged.clone()), Err(Rejection::Touch));
        assert_eq!(validate_lateral_position(merged), Err(Rejection::Touch));
    }

    #[test]
    fn pipeline_stops_at_first_failure() {
        // Off the left wall and overlapping: lateral reports the wall first.
        let o = Tetrimino::of(ShapeKind::O);
        let merged = field_with(o.clone()).merge_piece().with_piece(left(&o));
        assert_eq!(validate_lateral_position(merged.clone()), Err(Rejection::Boundaries));

        // Below the floor and overlapping: tick reports the overlap first.
        let sunk = field_with(o.clone())
            .merge_piece()
            .with_piece(o.moved(Position::new(-1, 0)));
        assert_eq!(validate_tick_position(sunk), Err(Rejection::Touch));
    }

    #[test]
    fn empty_piece_always_valid() {
        let field = field_with(Tetrimino::empty());
        assert!(validate_lateral_position(field.clone()).is_ok());
        assert!(validate_tick_position(field).is_ok());
    }

    #[test]
    fn rejection_tags() {
        assert_eq!(Rejection::Touch.as_str(), "touch");
        assert_eq!(Rejection::Boundaries.as_str(), "boundaries");
    }
}
