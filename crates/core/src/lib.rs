//! Core game logic - pure values and transitions
//!
//! Everything here is deterministic and free of I/O. A [`Game`] is an
//! immutable value; each player action or tick computes the next `Game` and
//! the caller replaces its copy.
//!
//! # Module Structure
//!
//! - [`position`]: grid coordinates and the in-box rotation flips
//! - [`tetrimino`]: piece shapes, translation and rotation
//! - [`supply`]: 7-bag piece generation with an injectable RNG
//! - [`playfield`]: board grid, merge and line clearing
//! - [`moves`]: validation pipelines for lateral and downward moves
//! - [`scoring`]: line-clear points, level curve and drop speeds
//! - [`game`]: the action algebra and status machine
//! - [`snapshot`]: flattened read-only view for renderers
//! - [`fixture`]: `O`/`X` text boards for tests
//!
//! # Coordinates
//!
//! Row 0 is the floor and rows grow upward; column 0 is the left wall.
//!
//! # Example
//!
//! ```
//! use blockfall_core::supply::PieceSupply;
//! use blockfall_core::types::{BoardSize, GameAction, Status};
//! use blockfall_core::Game;
//!
//! let mut supply = PieceSupply::seeded(12345);
//! let game = Game::new(BoardSize::standard(), 0, &mut supply).unwrap();
//!
//! let game = game.apply_action(GameAction::MoveRight);
//! let game = game.apply_action(GameAction::SoftDrop);
//! assert_eq!(game.status(), Status::Scoring);
//!
//! let game = game.score_lines().cleanup_score(&mut supply);
//! assert_eq!(game.status(), Status::Playing);
//! ```

pub mod error;
pub mod fixture;
pub mod game;
pub mod moves;
pub mod playfield;
pub mod position;
pub mod scoring;
pub mod snapshot;
pub mod supply;
pub mod tetrimino;

pub use blockfall_types as types;

pub use error::Error;
pub use game::{advance_tick, apply_action, create_game, Game};
pub use moves::{validate_lateral_position, validate_tick_position, Rejection, Validation};
pub use playfield::{Cell, Playfield};
pub use position::Position;
pub use scoring::{drop_interval_ms, level_for_lines, line_clear_score, score_for_lines};
pub use snapshot::GameSnapshot;
pub use supply::{PieceSource, PieceSupply, RandomBag};
pub use tetrimino::{PieceId, Tetrimino, TetriminoBuilder};
