//! Text fixtures for boards
//!
//! A board is written as rows of `O` (empty) and `X` (filled), top row first:
//!
//! ```text
//! OO
//! OX
//! ```
//!
//! Rows may be separated by newlines or `/`. Any character other than `O`
//! reads as a filled cell. Fixture blocks are always red.

use crate::error::Error;
use crate::playfield::{Cell, Playfield};
use crate::position::Position;
use crate::tetrimino::Tetrimino;
use crate::types::Color;

const FIXTURE_COLOR: Color = Color::Red;

/// Strip indentation and inline spaces, keep line breaks
pub fn clean(text: &str) -> String {
    text.trim()
        .lines()
        .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Board as `O`/`X` text, top row first (the active piece is not drawn)
pub fn render(playfield: &Playfield) -> String {
    let board = playfield.board();
    (0..playfield.height())
        .rev()
        .map(|row| {
            board
                .iter()
                .map(|column| if column[row].is_some() { 'X' } else { 'O' })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse a text board and attach `piece`
pub fn playfield_from_text(text: &str, piece: Tetrimino) -> Result<Playfield, Error> {
    let cleaned = clean(text);
    let rows: Vec<&str> = cleaned
        .split(|c: char| c == '\n' || c == '/')
        .filter(|row| !row.is_empty())
        .collect();

    let width = match rows.first() {
        Some(row) => row.chars().count(),
        None => return Err(Error::EmptyFixture),
    };

    let mut columns: Vec<Vec<Cell>> = vec![Vec::with_capacity(rows.len()); width];
    // Bottom row first so row 0 lands at the floor.
    for (index, row) in rows.iter().enumerate().rev() {
        let found = row.chars().count();
        if found != width {
            return Err(Error::RaggedFixture {
                row: index,
                expected: width,
                found,
            });
        }
        for (column, ch) in columns.iter_mut().zip(row.chars()) {
            column.push(if ch == 'O' { None } else { Some(FIXTURE_COLOR) });
        }
    }

    Ok(Playfield::from_columns(columns, piece))
}

/// Two cells side by side in a size-2 box, lifted to row 4
pub fn flat_piece() -> Tetrimino {
    Tetrimino::from_cells(
        2,
        FIXTURE_COLOR,
        &[Position::new(0, 0), Position::new(0, 1)],
    )
    .moved(Position::new(4, 0))
}

/// A single cell in a size-2 box, lifted to row 4
pub fn dot_piece() -> Tetrimino {
    Tetrimino::from_cells(2, FIXTURE_COLOR, &[Position::new(0, 0)]).moved(Position::new(4, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_drops_indentation() {
        let text = "
            OO
            O X
        ";
        assert_eq!(clean(text), "OO\nOX");
    }

    #[test]
    fn parse_then_render() {
        let field = playfield_from_text("OOO\nXOO\nXXO", Tetrimino::empty()).unwrap();
        assert_eq!(field.width(), 3);
        assert_eq!(field.height(), 3);
        assert!(field.is_position_taken(Position::new(0, 0)));
        assert!(field.is_position_taken(Position::new(0, 1)));
        assert!(field.is_position_taken(Position::new(1, 0)));
        assert!(!field.is_position_taken(Position::new(2, 0)));
        assert_eq!(render(&field), "OOO\nXOO\nXXO");
    }

    #[test]
    fn slash_separated_rows() {
        let a = playfield_from_text("OO/OX", Tetrimino::empty()).unwrap();
        let b = playfield_from_text("OO\nOX", Tetrimino::empty()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn bad_fixtures_are_rejected() {
        assert_eq!(
            playfield_from_text("  ", Tetrimino::empty()).unwrap_err(),
            Error::EmptyFixture
        );
        assert_eq!(
            playfield_from_text("OO\nO", Tetrimino::empty()).unwrap_err(),
            Error::RaggedFixture {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_pieces() {
        let flat = flat_piece();
        assert_eq!(flat.size(), 2);
        assert_eq!(flat.origin(), Position::new(4, 0));
        assert_eq!(flat.positions(), &[Position::new(4, 0), Position::new(4, 1)]);
        assert_eq!(dot_piece().positions(), &[Position::new(4, 0)]);
    }
}
