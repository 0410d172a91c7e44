//! Snapshot module - flat read-only views of a game for renderers

use crate::game::Game;
use crate::position::Position;
use crate::types::{Status, BOARD_HEIGHT, BOARD_WIDTH};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Flat, renderer-facing view of a [`Game`]
///
/// `board` is row-major with the top row first, each cell holding a
/// [`Color::code`](crate::types::Color::code) (0 = empty).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    pub board: Vec<Vec<u8>>,
    pub active: Vec<Position>,
    pub active_color: u8,
    pub piece_id: u64,
    pub next: Vec<Position>,
    pub next_color: u8,
    pub score: u64,
    pub level: u32,
    pub lines: u32,
    pub status: Status,
    pub scoring_lines: Vec<usize>,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.status == Status::Playing
    }

    pub fn game_over(&self) -> bool {
        self.status == Status::GameOver
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            board: vec![vec![0; BOARD_WIDTH]; BOARD_HEIGHT],
            active: Vec::new(),
            active_color: 0,
            piece_id: 0,
            next: Vec::new(),
            next_color: 0,
            score: 0,
            level: 0,
            lines: 0,
            status: Status::Playing,
            scoring_lines: Vec::new(),
        }
    }
}

impl Game {
    pub fn snapshot(&self) -> GameSnapshot {
        let playfield = self.playfield();
        let columns = playfield.board();
        let board = (0..playfield.height())
            .rev()
            .map(|row| {
                columns
                    .iter()
                    .map(|column| column[row].map_or(0, |color| color.code()))
                    .collect()
            })
            .collect();

        let piece = playfield.piece();
        let next = self.next_piece();
        GameSnapshot {
            width: playfield.width(),
            height: playfield.height(),
            board,
            active: piece.positions().to_vec(),
            active_color: piece.color().code(),
            piece_id: piece.id().0,
            next: next.positions().to_vec(),
            next_color: next.color().code(),
            score: self.score(),
            level: self.level(),
            lines: self.lines(),
            status: self.status(),
            scoring_lines: self.scoring_lines().to_vec(),
        }
    }
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        game.snapshot()
    }
}
