//! Playfield tests driven by text fixtures

use blockfall::core::fixture::{clean, dot_piece, flat_piece, playfield_from_text, render};
use blockfall::core::{validate_lateral_position, validate_tick_position, Game, Rejection};
use blockfall::core::{Position, Tetrimino};
use blockfall::types::Status;

fn board(text: &str) -> String {
    clean(text)
}

#[test]
fn test_clean_single_line() {
    let field = playfield_from_text(
        "
        OO
        OO
        OX
        XX
        ",
        Tetrimino::empty(),
    )
    .unwrap();
    assert_eq!(field.find_complete_lines(), vec![0]);

    let cleaned = field.clean_lines(&[0]);
    assert_eq!(
        render(&cleaned),
        board(
            "
            OO
            OO
            OO
            OX
            "
        )
    );
}

#[test]
fn test_clean_non_adjacent_lines() {
    let field = playfield_from_text(
        "
        OO
        OO
        XX
        OX
        XX
        ",
        Tetrimino::empty(),
    )
    .unwrap();
    assert_eq!(field.find_complete_lines(), vec![0, 2]);

    let cleaned = field.clean_lines(&[0, 2]);
    assert_eq!(
        render(&cleaned),
        board(
            "
            OO
            OO
            OO
            OO
            OX
            "
        )
    );
}

#[test]
fn test_clean_nothing_keeps_board() {
    let field = playfield_from_text("OX/XO/XX", Tetrimino::empty()).unwrap();
    let cleaned = field.clone().clean_lines(&[]);
    assert_eq!(cleaned, field);
}

#[test]
fn test_clean_keeps_column_heights() {
    let field = playfield_from_text("XXX/OXO/XXX/XOX/XXX", Tetrimino::empty()).unwrap();
    let rows = field.find_complete_lines();
    assert_eq!(rows, vec![0, 2, 4]);
    let cleaned = field.clean_lines(&rows);
    assert!(cleaned.board().iter().all(|column| column.len() == 5));
    assert_eq!(render(&cleaned), "OOO\nOOO\nOOO\nOXO\nXOX");
}

#[test]
fn test_consolidate_flat_piece() {
    let field = playfield_from_text(
        "
        OO
        OO
        OO
        OO
        OX
        ",
        flat_piece(),
    )
    .unwrap();

    let game = Game::from_playfield(field).consolidate_piece();
    assert_eq!(game.status(), Status::Scoring);
    assert!(game.playfield().piece().is_empty());
    assert_eq!(
        render(game.playfield()),
        board(
            "
            OO
            OO
            OO
            XX
            OX
            "
        )
    );
    assert_eq!(game.scoring_lines(), &[1usize]);
}

#[test]
fn test_consolidate_dot_piece() {
    let field = playfield_from_text(
        "
        OO
        OO
        OO
        XX
        OX
        ",
        dot_piece(),
    )
    .unwrap();

    let game = Game::from_playfield(field).consolidate_piece();
    assert_eq!(game.status(), Status::Scoring);
    assert_eq!(
        render(game.playfield()),
        board(
            "
            OO
            OO
            XO
            XX
            OX
            "
        )
    );
    assert_eq!(game.scoring_lines(), &[1usize]);
}

#[test]
fn test_landing_without_complete_rows() {
    let field = playfield_from_text(
        "
        OO
        OO
        OO
        XO
        OX
        ",
        dot_piece(),
    )
    .unwrap();

    let game = Game::from_playfield(field).consolidate_piece();
    assert_eq!(game.status(), Status::Scoring);
    assert_eq!(
        render(game.playfield()),
        board(
            "
            OO
            OO
            XO
            XO
            OX
            "
        )
    );
    assert!(game.scoring_lines().is_empty());
}

#[test]
fn test_validator_first_failure_wins() {
    // Out through the left wall and on top of a block at the same time.
    let field = playfield_from_text("OO/XO/XO/XO/XO", Tetrimino::empty()).unwrap();
    let piece = flat_piece().moved(Position::new(-1, -1));
    let proposed = field.with_piece(piece);

    assert_eq!(
        validate_lateral_position(proposed.clone()).unwrap_err(),
        Rejection::Boundaries
    );
    assert_eq!(validate_tick_position(proposed).unwrap_err(), Rejection::Touch);
}

#[test]
fn test_tick_refuses_floor() {
    let field = playfield_from_text("OO/OO", flat_piece().moved(Position::new(-5, 0))).unwrap();
    assert_eq!(
        validate_tick_position(field).unwrap_err(),
        Rejection::Boundaries
    );
}
