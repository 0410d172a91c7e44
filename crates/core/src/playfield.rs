//! Playfield module - the board grid plus the falling piece
//!
//! The grid is stored column-major (`board[col][row]`), row 0 at the floor.
//! Nothing here judges whether a configuration is legal; that is the move
//! validator's job. Every operation consumes the playfield and returns the
//! updated value, so callers clone when they need to keep the original.

use std::collections::HashSet;

use crate::position::Position;
use crate::tetrimino::Tetrimino;
use crate::types::{BoardSize, Color};

#[cfg(feature = "serde")]
use serde::Serialize;

/// A board cell: `Some(color)` when occupied
pub type Cell = Option<Color>;

/// Serialize-only: boards are always rectangular, which only the constructors
/// here guarantee.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Playfield {
    board: Vec<Vec<Cell>>,
    piece: Tetrimino,
}

impl Playfield {
    /// Empty `width x height` grid holding `piece`
    pub fn new(size: BoardSize, piece: Tetrimino) -> Self {
        Self {
            board: vec![vec![None; size.height]; size.width],
            piece,
        }
    }

    /// Build from explicit columns (`columns[col][row]`)
    ///
    /// Columns are expected to share one height; shorter ones are padded with
    /// empty cells up to the tallest.
    pub fn from_columns(mut columns: Vec<Vec<Cell>>, piece: Tetrimino) -> Self {
        let height = columns.iter().map(Vec::len).max().unwrap_or(0);
        for column in &mut columns {
            column.resize(height, None);
        }
        Self {
            board: columns,
            piece,
        }
    }

    pub fn width(&self) -> usize {
        self.board.len()
    }

    pub fn height(&self) -> usize {
        self.board.first().map_or(0, Vec::len)
    }

    pub fn size(&self) -> BoardSize {
        BoardSize::new(self.width(), self.height())
    }

    pub fn board(&self) -> &[Vec<Cell>] {
        &self.board
    }

    pub fn piece(&self) -> &Tetrimino {
        &self.piece
    }

    /// Cell at `p`, `None` when `p` is off the board
    pub fn cell(&self, p: Position) -> Option<Cell> {
        if p.row < 0 || p.col < 0 {
            return None;
        }
        self.board
            .get(p.col as usize)
            .and_then(|column| column.get(p.row as usize))
            .copied()
    }

    /// Occupied board cell at `p` (off-board positions are never taken)
    pub fn is_position_taken(&self, p: Position) -> bool {
        matches!(self.cell(p), Some(Some(_)))
    }

    /// Place `piece` centered at the top rows, replacing the current one
    pub fn introduce_piece(self, piece: Tetrimino) -> Self {
        let size = piece.size();
        let offset = Position::new(
            self.height() as i32 - size,
            (self.width() as i32 - size).div_euclid(2),
        );
        self.with_piece(piece.moved(offset))
    }

    /// Swap the active piece, board untouched
    pub fn with_piece(self, piece: Tetrimino) -> Self {
        Self { piece, ..self }
    }

    /// Write the active piece's cells into the grid
    ///
    /// The active piece itself is left in place; callers replace it.
    pub fn merge_piece(mut self) -> Self {
        let block = Some(self.piece.color());
        for p in self.piece.positions() {
            if p.row < 0 || p.col < 0 {
                continue;
            }
            if let Some(cell) = self
                .board
                .get_mut(p.col as usize)
                .and_then(|column| column.get_mut(p.row as usize))
            {
                *cell = block;
            }
        }
        self
    }

    /// True iff every column holds a block at `row`
    pub fn is_line_complete(&self, row: usize) -> bool {
        row < self.height()
            && self
                .board
                .iter()
                .all(|column| matches!(column.get(row), Some(Some(_))))
    }

    /// Indices of all full rows, bottom first
    pub fn find_complete_lines(&self) -> Vec<usize> {
        (0..self.height())
            .filter(|&row| self.is_line_complete(row))
            .collect()
    }

    /// Remove `rows` from every column and pad the top back to full height
    ///
    /// Rows above a removed row drop by the number of removed rows beneath
    /// them. Indices outside the board and duplicates are ignored.
    pub fn clean_lines(mut self, rows: &[usize]) -> Self {
        if rows.is_empty() {
            return self;
        }
        let height = self.height();
        let removed: HashSet<usize> = rows.iter().copied().collect();
        for column in &mut self.board {
            let mut row = 0;
            column.retain(|_| {
                let keep = !removed.contains(&row);
                row += 1;
                keep
            });
            column.resize(height, None);
        }
        self
    }

    /// True iff any active cell sits on an occupied board cell
    pub fn piece_overlaps(&self) -> bool {
        self.piece
            .positions()
            .iter()
            .any(|&p| self.is_position_taken(p))
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new(BoardSize::standard(), Tetrimino::empty())
    }
}
