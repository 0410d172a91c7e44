//! Scheduler that drives a [`Game`] through time
//!
//! The engine owns the single current game value and replaces it on every
//! transition. Hosts call [`Engine::update`] from their loop (any cadence; the
//! engine compares deadlines against its clock) and [`Engine::apply_action`]
//! for player input. Both run to completion and must not be re-entered.

use std::collections::VecDeque;
use std::fmt;

use rand::rngs::StdRng;
use rand::Rng;

use blockfall_core::scoring::drop_interval_ms;
use blockfall_core::supply::PieceSupply;
use blockfall_core::{Error, Game, GameSnapshot};
use blockfall_types::{EventKind, GameAction, Status};

use crate::clock::{Clock, SystemClock};
use crate::config::EngineConfig;
use crate::timer::Timer;

/// Events kept for [`Engine::drain_events`] before the oldest are dropped
pub const MAX_PENDING_EVENTS: usize = 256;

/// Emitted after every transition the engine applies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineEvent {
    pub kind: EventKind,
    pub game: Game,
}

impl EngineEvent {
    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }
}

type Observer = Box<dyn FnMut(&EngineEvent)>;

pub struct Engine<C: Clock = SystemClock, R: Rng = StdRng> {
    config: EngineConfig,
    clock: C,
    supply: PieceSupply<R>,
    game: Game,
    timer: Timer,
    observers: Vec<Observer>,
    pending: VecDeque<EngineEvent>,
}

impl Engine<SystemClock, StdRng> {
    /// Real-time engine; seeded from `config.seed` when set
    pub fn new(config: EngineConfig) -> Result<Self, Error> {
        let supply = match config.seed {
            Some(seed) => PieceSupply::seeded(seed),
            None => PieceSupply::from_entropy(),
        };
        Self::with_parts(config, SystemClock::new(), supply)
    }
}

impl<C: Clock, R: Rng> Engine<C, R> {
    pub fn with_parts(
        config: EngineConfig,
        clock: C,
        mut supply: PieceSupply<R>,
    ) -> Result<Self, Error> {
        let game = Game::new(config.board, config.initial_level, &mut supply)?;
        let mut engine = Self {
            config,
            clock,
            supply,
            game,
            timer: Timer::new(),
            observers: Vec::new(),
            pending: VecDeque::new(),
        };
        engine.schedule_drop();
        engine.log(format_args!(
            "started {}x{} at level {}",
            engine.config.board.width, engine.config.board.height, engine.config.initial_level
        ));
        Ok(engine)
    }

    /// Continue from an existing game value (replays, fixtures)
    pub fn with_game(mut self, game: Game) -> Self {
        self.game = game;
        self.after_descent();
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    /// Time left before the next scheduled phase step
    pub fn remaining_ms(&self) -> u64 {
        self.timer.remaining_ms(self.clock.now_ms())
    }

    /// Register a callback invoked synchronously for every event
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&EngineEvent) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Take every event emitted since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        self.pending.drain(..).collect()
    }

    /// Advance the game if its current phase is due
    ///
    /// Returns true when a transition was applied.
    pub fn update(&mut self) -> bool {
        let now = self.clock.now_ms();
        match self.game.status() {
            Status::Playing => {
                if !self.timer.is_done(now) {
                    return false;
                }
                self.game = self.game.next_tick();
                self.after_descent();
                self.emit(EventKind::Tick);
                true
            }
            Status::Scoring => {
                if !self.timer.is_done(now) {
                    return false;
                }
                let cleared = self.game.scoring_lines().len();
                self.game = self.game.score_lines();
                if cleared > 0 {
                    self.log(format_args!(
                        "cleared {} rows, score {} level {}",
                        cleared,
                        self.game.score(),
                        self.game.level()
                    ));
                }
                self.emit(EventKind::Scoring);
                true
            }
            Status::Scored => {
                self.game = self.game.cleanup_score(&mut self.supply);
                if self.game.is_over() {
                    self.log(format_args!(
                        "game over, score {} lines {}",
                        self.game.score(),
                        self.game.lines()
                    ));
                    self.emit(EventKind::GameOver);
                } else {
                    self.schedule_drop();
                    self.log(format_args!(
                        "spawned piece {}",
                        self.game.playfield().piece().id().0
                    ));
                    self.emit(EventKind::Scored);
                }
                true
            }
            Status::Pause | Status::GameOver => false,
        }
    }

    /// Apply a player action and emit an `Action` event
    ///
    /// Ignored (returns false, no event) once the game is over.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.game.is_over() {
            return false;
        }
        let was_paused = self.game.status() == Status::Pause;
        self.game = self.game.apply_action(action);

        match action {
            GameAction::SoftDrop | GameAction::StepDown => self.after_descent(),
            GameAction::Pause if was_paused && self.game.is_playing() => self.schedule_drop(),
            _ => {}
        }
        self.emit(EventKind::Action);
        true
    }

    /// Throw the current game away and start a fresh one with the same config
    pub fn restart(&mut self) -> Result<(), Error> {
        self.game = Game::new(
            self.config.board,
            self.config.initial_level,
            &mut self.supply,
        )?;
        self.schedule_drop();
        self.log(format_args!("restarted"));
        self.emit(EventKind::Restart);
        Ok(())
    }

    /// Reset the timer after the piece moved down by a tick or a drop
    fn after_descent(&mut self) {
        match self.game.status() {
            Status::Playing => self.schedule_drop(),
            Status::Scoring => {
                let delay = if self.game.scoring_lines().is_empty() {
                    0
                } else {
                    self.config.line_clear_delay_ms
                };
                self.timer.schedule(self.clock.now_ms(), delay);
                self.log(format_args!(
                    "piece landed, {} rows pending",
                    self.game.scoring_lines().len()
                ));
            }
            _ => {}
        }
    }

    fn schedule_drop(&mut self) {
        let gap = drop_interval_ms(self.game.level());
        self.timer.schedule(self.clock.now_ms(), gap);
    }

    fn emit(&mut self, kind: EventKind) {
        let event = EngineEvent {
            kind,
            game: self.game.clone(),
        };
        for observer in &mut self.observers {
            observer(&event);
        }
        if self.pending.len() == MAX_PENDING_EVENTS {
            self.pending.pop_front();
        }
        self.pending.push_back(event);
    }

    fn log(&self, args: fmt::Arguments<'_>) {
        if self.config.log_events {
            eprintln!("[Engine] {}", args);
        }
    }
}

impl<C: Clock, R: Rng> fmt::Debug for Engine<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("status", &self.game.status())
            .field("timer", &self.timer)
            .field("observers", &self.observers.len())
            .field("pending", &self.pending.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use blockfall_core::types::BoardSize;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn engine(seed: u64) -> (Engine<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let config = EngineConfig::default().with_seed(seed);
        let engine =
            Engine::with_parts(config, clock.clone(), PieceSupply::seeded(seed)).unwrap();
        (engine, clock)
    }

    #[test]
    fn waits_for_drop_interval() {
        let (mut engine, clock) = engine(1);
        let start = engine.game().playfield().piece().origin();

        assert!(!engine.update());
        clock.advance(799);
        assert!(!engine.update());
        clock.advance(1);
        assert!(engine.update());

        let events = engine.drain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, EventKind::Tick);
        assert_eq!(
            engine.game().playfield().piece().origin().row,
            start.row - 1
        );
        assert!(engine.drain_events().is_empty());
    }

    #[test]
    fn soft_drop_runs_through_phases() {
        let (mut engine, _clock) = engine(2);
        assert!(engine.apply_action(GameAction::SoftDrop));
        assert_eq!(engine.game().status(), Status::Scoring);

        // No rows pending, so scoring is due immediately.
        assert!(engine.update());
        assert_eq!(engine.game().status(), Status::Scored);
        assert!(engine.update());
        assert_eq!(engine.game().status(), Status::Playing);

        let kinds: Vec<EventKind> = engine.drain_events().into_iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![EventKind::Action, EventKind::Scoring, EventKind::Scored]
        );
    }

    #[test]
    fn observers_see_every_event() {
        let (mut engine, clock) = engine(3);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        engine.subscribe(move |event| sink.borrow_mut().push(event.kind));

        engine.apply_action(GameAction::MoveLeft);
        clock.advance(1_000);
        engine.update();
        assert_eq!(*seen.borrow(), vec![EventKind::Action, EventKind::Tick]);
    }

    #[test]
    fn pause_freezes_ticks() {
        let (mut engine, clock) = engine(4);
        engine.apply_action(GameAction::Pause);
        assert_eq!(engine.game().status(), Status::Pause);
        clock.advance(10_000);
        assert!(!engine.update());

        engine.apply_action(GameAction::Pause);
        assert!(engine.game().is_playing());
        // Resuming restarts the drop interval.
        assert!(!engine.update());
        clock.advance(800);
        assert!(engine.update());
    }

    #[test]
    fn tiny_board_is_rejected() {
        let config = EngineConfig {
            board: BoardSize::new(2, 2),
            ..EngineConfig::default()
        };
        let result = Engine::with_parts(config, ManualClock::new(), PieceSupply::seeded(0));
        assert!(matches!(result, Err(Error::BoardTooSmall { .. })));
    }

    #[test]
    fn game_over_is_reported_once_and_freezes() {
        let clock = ManualClock::new();
        let config = EngineConfig {
            board: BoardSize::new(4, 4),
            ..EngineConfig::default()
        };
        let mut engine =
            Engine::with_parts(config, clock.clone(), PieceSupply::seeded(9)).unwrap();

        for _ in 0..200 {
            if engine.game().is_over() {
                break;
            }
            engine.apply_action(GameAction::SoftDrop);
            clock.advance(1_000);
            engine.update();
            engine.update();
            engine.update();
        }
        assert!(engine.game().is_over());

        let overs = engine
            .drain_events()
            .iter()
            .filter(|e| e.kind == EventKind::GameOver)
            .count();
        assert_eq!(overs, 1);

        let frozen = engine.game().clone();
        assert!(!engine.apply_action(GameAction::MoveLeft));
        assert!(!engine.update());
        assert_eq!(engine.game(), &frozen);
        assert!(engine.drain_events().is_empty());
    }

    #[test]
    fn restart_replaces_game() {
        let (mut engine, _clock) = engine(5);
        engine.apply_action(GameAction::SoftDrop);
        engine.restart().unwrap();
        assert!(engine.game().is_playing());
        assert_eq!(engine.game().score(), 0);
        assert!(engine.game().playfield().board().iter().flatten().all(Option::is_none));
        let last = engine.drain_events().pop().unwrap();
        assert_eq!(last.kind, EventKind::Restart);
    }

    #[test]
    fn pending_events_are_bounded() {
        let (mut engine, _clock) = engine(6);
        for _ in 0..(MAX_PENDING_EVENTS + 10) {
            engine.apply_action(GameAction::MoveLeft);
        }
        assert_eq!(engine.drain_events().len(), MAX_PENDING_EVENTS);
    }
}
