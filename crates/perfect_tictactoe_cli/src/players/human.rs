//! Human player reading moves from a text stream.

use super::Player;
use anyhow::{Result, bail};
use perfect_tictactoe::{Game, Position};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Parses a 1-based `row col` pair such as `"2 3"`.
#[instrument(level = "debug")]
pub fn parse_move(line: &str) -> Option<Position> {
    let mut parts = line.split_whitespace().map(str::parse::<usize>);
    let (Some(Ok(row)), Some(Ok(col)), None) = (parts.next(), parts.next(), parts.next()) else {
        return None;
    };
    Position::from_coords(row.checked_sub(1)?, col.checked_sub(1)?)
}

/// Human player entering `row col` lines.
pub struct HumanPlayer<R> {
    name: String,
    input: R,
}

impl<R: BufRead> HumanPlayer<R> {
    /// Creates a new human player reading from `input`.
    pub fn new(name: impl Into<String>, input: R) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}

impl<R: BufRead> Player for HumanPlayer<R> {
    fn choose_move(&mut self, game: &Game, out: &mut dyn Write) -> Result<Position> {
        loop {
            write!(out, "Move: ")?;
            out.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("Input ended before a move was entered");
            }

            match parse_move(&line) {
                Some(position) if game.board().is_free(position) => return Ok(position),
                Some(position) => {
                    debug!(%position, "Square taken");
                    writeln!(out, "{position} is already taken.")?;
                }
                None => {
                    debug!(input = line.trim(), "Unreadable move");
                    writeln!(out, "Enter a row and a column between 1 and 3, e.g. \"2 2\".")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("1 1"), Some(Position::TopLeft));
        assert_eq!(parse_move("  2\t3\n"), Some(Position::MiddleRight));
        assert_eq!(parse_move("3 3"), Some(Position::BottomRight));
    }

    #[test]
    fn test_parse_move_rejects_out_of_range() {
        assert_eq!(parse_move("0 1"), None);
        assert_eq!(parse_move("4 1"), None);
        assert_eq!(parse_move("1"), None);
        assert_eq!(parse_move("1 2 3"), None);
        assert_eq!(parse_move("a b"), None);
        assert_eq!(parse_move("-1 2"), None);
    }

    #[test]
    fn test_reprompts_until_free_square() {
        let mut game = Game::new();
        game.make_move(Position::Center).unwrap();

        let mut human = HumanPlayer::new("You", Cursor::new("nonsense\n2 2\n1 3\n"));
        let mut out = Vec::new();
        let chosen = human.choose_move(&game, &mut out).unwrap();
        assert_eq!(chosen, Position::TopRight);

        let transcript = String::from_utf8(out).unwrap();
        assert_eq!(transcript.matches("Move: ").count(), 3);
        assert!(transcript.contains("Center is already taken."));
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        let mut human = HumanPlayer::new("You", Cursor::new(""));
        assert!(human.choose_move(&Game::new(), &mut Vec::new()).is_err());
    }
}
