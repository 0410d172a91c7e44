//! Headless autoplay runner (default binary).
//!
//! Plays one session with a fixed placement policy on simulated time and
//! writes every engine event to stdout as a JSON line. Board size, level, seed
//! and logging come from `BLOCKFALL_*` environment variables; the optional
//! first argument caps the number of pieces played.

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use blockfall::core::supply::PieceSupply;
use blockfall::core::{Game, GameSnapshot, PieceId};
use blockfall::engine::{Clock, Engine, EngineConfig, EngineEvent, ManualClock};
use blockfall::types::GameAction;

/// Simulated frame length
const FRAME_MS: u64 = 16;
const DEFAULT_MAX_PIECES: u64 = 500;

#[derive(Serialize)]
struct EventLine<'a> {
    event: &'a str,
    at_ms: u64,
    game: GameSnapshot,
}

fn main() -> Result<()> {
    let config = EngineConfig::from_env();
    let max_pieces = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("piece limit must be a number, got {:?}", arg))?,
        None => DEFAULT_MAX_PIECES,
    };

    let supply = match config.seed {
        Some(seed) => PieceSupply::seeded(seed),
        None => PieceSupply::from_entropy(),
    };
    let clock = ManualClock::new();
    let mut engine = Engine::with_parts(config, clock.clone(), supply)
        .context("failed to start engine")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let mut last_piece = PieceId::NONE;
    let mut pieces = 0u64;
    while !engine.game().is_over() && pieces < max_pieces {
        if engine.game().is_playing() {
            let id = engine.game().playfield().piece().id();
            if id != last_piece {
                last_piece = id;
                pieces += 1;
                for action in plan(engine.game()) {
                    engine.apply_action(action);
                }
            }
        }

        clock.advance(FRAME_MS);
        engine.update();
        for event in engine.drain_events() {
            write_event(&mut out, clock.now_ms(), &event)?;
        }
    }
    out.flush()?;

    let game = engine.game();
    eprintln!(
        "[Main] {} after {} pieces: score {} lines {} level {}",
        game.status().as_str(),
        pieces,
        game.score(),
        game.lines(),
        game.level()
    );
    Ok(())
}

/// Spread pieces across the board by rotating and shifting on their id
fn plan(game: &Game) -> Vec<GameAction> {
    let id = game.playfield().piece().id().0;
    let width = game.playfield().width() as i64;
    let turns = id % 4;
    let shift = (id.wrapping_mul(3) % width.max(1) as u64) as i64 - width / 2;

    let mut actions: Vec<GameAction> = (0..turns).map(|_| GameAction::RotateClockwise).collect();
    let step = if shift < 0 {
        GameAction::MoveLeft
    } else {
        GameAction::MoveRight
    };
    actions.extend((0..shift.unsigned_abs()).map(|_| step));
    actions.push(GameAction::SoftDrop);
    actions
}

fn write_event(out: &mut impl Write, at_ms: u64, event: &EngineEvent) -> Result<()> {
    let line = EventLine {
        event: event.kind.as_str(),
        at_ms,
        game: event.snapshot(),
    };
    serde_json::to_writer(&mut *out, &line)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_written_as_json_lines() {
        let clock = ManualClock::new();
        let mut engine =
            Engine::with_parts(EngineConfig::default(), clock.clone(), PieceSupply::seeded(1))
                .unwrap();
        clock.advance(48);
        engine.apply_action(GameAction::MoveLeft);

        let mut out = Vec::new();
        for event in engine.drain_events() {
            write_event(&mut out, clock.now_ms(), &event).unwrap();
        }
        let text = String::from_utf8(out).unwrap();
        let line: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(line["event"], "action");
        assert_eq!(line["at_ms"], 48);
        assert_eq!(line["game"]["status"], "playing");
    }

    #[test]
    fn plan_ends_with_a_drop() {
        let mut supply = PieceSupply::seeded(2);
        let game = blockfall::core::create_game(Default::default(), 0, &mut supply).unwrap();
        let actions = plan(&game);
        assert_eq!(actions.last(), Some(&GameAction::SoftDrop));
    }
}
