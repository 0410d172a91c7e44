//! Time-driven host for the pure game core
//!
//! [`Engine`] owns the current [`Game`](blockfall_core::Game), a piece supply
//! and a [`Clock`]. Call [`Engine::update`] from the host loop and
//! [`Engine::apply_action`] on input; observers receive an [`EngineEvent`]
//! after every transition.
//!
//! ```
//! use blockfall_engine::{Engine, EngineConfig, ManualClock};
//! use blockfall_core::supply::PieceSupply;
//! use blockfall_core::types::{EventKind, GameAction};
//!
//! let clock = ManualClock::new();
//! let mut engine =
//!     Engine::with_parts(EngineConfig::default(), clock.clone(), PieceSupply::seeded(7)).unwrap();
//!
//! engine.apply_action(GameAction::MoveRight);
//! clock.advance(800);
//! engine.update();
//!
//! let kinds: Vec<_> = engine.drain_events().into_iter().map(|e| e.kind).collect();
//! assert_eq!(kinds, vec![EventKind::Action, EventKind::Tick]);
//! ```

pub mod clock;
pub mod config;
pub mod engine;
pub mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::EngineConfig;
pub use engine::{Engine, EngineEvent, MAX_PENDING_EVENTS};
pub use timer::Timer;
