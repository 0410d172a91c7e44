//! Game module - aggregate state and the action algebra
//!
//! A [`Game`] is never mutated in place. Every transition borrows the current
//! value and returns the next one; a transition that does not apply in the
//! current status (or a move the validator refuses) returns an unchanged copy.
//!
//! ```text
//! playing --next_tick (landed)--> scoring --score_lines--> scored --cleanup_score--> playing
//!    ^  |                                                   |
//!    |  +--pause--> pause                                   +--(spawn blocked)--> gameover
//!    +------pause---+
//! ```

use crate::error::Error;
use crate::moves::{self, validate_lateral_position, validate_tick_position};
use crate::playfield::Playfield;
use crate::scoring::{level_for_lines, line_clear_score};
use crate::supply::PieceSource;
use crate::tetrimino::Tetrimino;
use crate::types::{BoardSize, GameAction, Status, MAX_PIECE_SIZE};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Serialize-only; read games back through [`GameSnapshot`](crate::GameSnapshot)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Game {
    playfield: Playfield,
    score: u64,
    level: u32,
    lines: u32,
    next_piece: Tetrimino,
    scoring_lines: Vec<usize>,
    status: Status,
}

impl Game {
    /// Start a session: empty board, first piece spawned, second queued
    pub fn new<S: PieceSource + ?Sized>(
        size: BoardSize,
        initial_level: u32,
        source: &mut S,
    ) -> Result<Self, Error> {
        if size.width < MAX_PIECE_SIZE || size.height < MAX_PIECE_SIZE {
            return Err(Error::BoardTooSmall {
                width: size.width,
                height: size.height,
                min: MAX_PIECE_SIZE,
            });
        }

        let piece = source.next_piece();
        let next_piece = source.next_piece();
        let playfield = Playfield::new(size, Tetrimino::empty()).introduce_piece(piece);

        Ok(Self::from_playfield(playfield)
            .with_level(initial_level)
            .with_next_piece(next_piece))
    }

    /// Wrap an existing playfield in a fresh `playing` game
    ///
    /// The preview piece starts as a copy of the active piece.
    pub fn from_playfield(playfield: Playfield) -> Self {
        let next_piece = playfield.piece().clone();
        Self {
            playfield,
            score: 0,
            level: 0,
            lines: 0,
            next_piece,
            scoring_lines: Vec::new(),
            status: Status::Playing,
        }
    }

    pub fn with_playfield(self, playfield: Playfield) -> Self {
        Self { playfield, ..self }
    }

    pub fn with_score(self, score: u64) -> Self {
        Self { score, ..self }
    }

    pub fn with_level(self, level: u32) -> Self {
        Self { level, ..self }
    }

    pub fn with_lines(self, lines: u32) -> Self {
        Self { lines, ..self }
    }

    pub fn with_next_piece(self, next_piece: Tetrimino) -> Self {
        Self { next_piece, ..self }
    }

    pub fn with_scoring_lines(self, scoring_lines: Vec<usize>) -> Self {
        Self {
            scoring_lines,
            ..self
        }
    }

    pub fn with_status(self, status: Status) -> Self {
        Self { status, ..self }
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn next_piece(&self) -> &Tetrimino {
        &self.next_piece
    }

    pub fn scoring_lines(&self) -> &[usize] {
        &self.scoring_lines
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_playing(&self) -> bool {
        self.status == Status::Playing
    }

    pub fn is_over(&self) -> bool {
        self.status == Status::GameOver
    }

    pub fn move_left(&self) -> Game {
        self.try_lateral(moves::left)
    }

    pub fn move_right(&self) -> Game {
        self.try_lateral(moves::right)
    }

    /// Rotate clockwise in place (button A); blocked rotations are dropped
    pub fn rotate(&self) -> Game {
        self.try_lateral(Tetrimino::clockwise)
    }

    /// Rotate reverse-clockwise in place (button B)
    pub fn rotate_reverse(&self) -> Game {
        self.try_lateral(Tetrimino::reverse_clockwise)
    }

    fn try_lateral(&self, transform: fn(&Tetrimino) -> Tetrimino) -> Game {
        if !self.is_playing() {
            return self.clone();
        }
        let piece = transform(self.playfield.piece());
        match validate_lateral_position(self.playfield.clone().with_piece(piece)) {
            Ok(playfield) => self.clone().with_playfield(playfield),
            Err(_) => self.clone(),
        }
    }

    /// Drop the active piece one row, landing it when it cannot descend
    pub fn next_tick(&self) -> Game {
        if !self.is_playing() {
            return self.clone();
        }
        // Nothing to drop; treat as landed so drops always terminate.
        if self.playfield.piece().is_empty() {
            return self.land();
        }
        let piece = moves::down(self.playfield.piece());
        match validate_tick_position(self.playfield.clone().with_piece(piece)) {
            Ok(playfield) => self.clone().with_playfield(playfield),
            Err(_) => self.land(),
        }
    }

    fn land(&self) -> Game {
        let playfield = self
            .playfield
            .clone()
            .merge_piece()
            .with_piece(Tetrimino::empty());
        let scoring_lines = playfield.find_complete_lines();
        self.clone()
            .with_playfield(playfield)
            .with_scoring_lines(scoring_lines)
            .with_status(Status::Scoring)
    }

    /// Tick until the piece lands
    ///
    /// Bounded by the board height: every successful tick lowers the piece
    /// and the floor check eventually refuses.
    pub fn consolidate_piece(&self) -> Game {
        let mut game = self.next_tick();
        while game.is_playing() {
            game = game.next_tick();
        }
        game
    }

    /// Award points for the pending rows and remove them
    pub fn score_lines(&self) -> Game {
        if self.status != Status::Scoring {
            return self.clone();
        }
        let cleared = self.scoring_lines.len();
        let score = self.score + line_clear_score(cleared, self.level);
        let lines = self.lines + cleared as u32;
        let level = level_for_lines(lines, self.level);
        let playfield = self.playfield.clone().clean_lines(&self.scoring_lines);

        self.clone()
            .with_score(score)
            .with_lines(lines)
            .with_level(level)
            .with_playfield(playfield)
            .with_scoring_lines(Vec::new())
            .with_status(Status::Scored)
    }

    /// Spawn the queued piece and queue a fresh one
    ///
    /// When the spawn position is blocked the game ends, keeping the
    /// attempted playfield so the final frame can still be drawn.
    pub fn cleanup_score<S: PieceSource + ?Sized>(&self, source: &mut S) -> Game {
        if self.status != Status::Scored {
            return self.clone();
        }
        let attempted = self
            .playfield
            .clone()
            .introduce_piece(self.next_piece.clone());

        match validate_tick_position(attempted.clone()) {
            Ok(playfield) => self
                .clone()
                .with_playfield(playfield)
                .with_next_piece(source.next_piece())
                .with_status(Status::Playing),
            Err(_) => self
                .clone()
                .with_playfield(attempted)
                .with_status(Status::GameOver),
        }
    }

    /// Toggle `playing <-> pause`; ignored in every other status
    pub fn pause(&self) -> Game {
        match self.status {
            Status::Playing => self.clone().with_status(Status::Pause),
            Status::Pause => self.clone().with_status(Status::Playing),
            _ => self.clone(),
        }
    }

    pub fn apply_action(&self, action: GameAction) -> Game {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::RotateClockwise => self.rotate(),
            GameAction::RotateReverse => self.rotate_reverse(),
            GameAction::SoftDrop => self.consolidate_piece(),
            GameAction::StepDown => self.next_tick(),
            GameAction::Pause => self.pause(),
        }
    }

    /// Run whichever transition the current status calls for
    pub fn advance<S: PieceSource + ?Sized>(&self, source: &mut S) -> Game {
        match self.status {
            Status::Playing => self.next_tick(),
            Status::Scoring => self.score_lines(),
            Status::Scored => self.cleanup_score(source),
            Status::Pause | Status::GameOver => self.clone(),
        }
    }
}

/// Start a new session on a `size` board
pub fn create_game<S: PieceSource + ?Sized>(
    size: BoardSize,
    initial_level: u32,
    source: &mut S,
) -> Result<Game, Error> {
    Game::new(size, initial_level, source)
}

pub fn apply_action(game: &Game, action: GameAction) -> Game {
    game.apply_action(action)
}

/// One automatic downward step
pub fn advance_tick(game: &Game) -> Game {
    game.next_tick()
}
