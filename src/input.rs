//! Input adapter: typed text to game commands.
//!
//! The rules engine only accepts 0-based coordinates and rejects anything
//! out of range. Any 1-based numbering or clamping happens here, and only
//! when switched on in [`InputConfig`].

use crate::config::InputConfig;
use qubic_rules::Coordinate;
use tracing::{debug, instrument};

/// A parsed line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Claim a cell for the player to move.
    Move(Coordinate),
    /// Start a new game.
    Reset,
    /// Print the current snapshot again.
    Show,
    /// Print usage.
    Help,
    /// Leave the session.
    Quit,
}

/// Error parsing a line of input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// Nothing but whitespace.
    #[display("Empty input")]
    Empty,

    /// A move needs exactly three numbers.
    #[display("Expected three numbers, got {}", _0)]
    WrongArity(usize),

    /// A token that is neither a number nor a command.
    #[display("Not a number: {:?}", _0)]
    NotANumber(String),

    /// A number below the first index, with clamping off.
    #[display("Coordinate {} is below the first index", _0)]
    Negative(i64),
}

impl std::error::Error for InputError {}

/// Turns text into [`Command`]s for a board of a given size.
#[derive(Debug, Clone, Copy)]
pub struct InputAdapter {
    size: usize,
    settings: InputConfig,
}

impl InputAdapter {
    /// Creates an adapter for the given board size and settings.
    pub fn new(size: usize, settings: InputConfig) -> Self {
        Self { size, settings }
    }

    /// Parses one line.
    ///
    /// A move is three integers separated by whitespace and/or commas.
    /// Words `reset`, `show`, `help` and `quit` (and short forms) are
    /// commands.
    #[instrument(skip(self))]
    pub fn parse(&self, line: &str) -> Result<Command, InputError> {
        let tokens: Vec<&str> = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .collect();

        match tokens.as_slice() {
            [] => return Err(InputError::Empty),
            [word] => {
                if let Some(command) = keyword(word) {
                    return Ok(command);
                }
            }
            _ => {}
        }

        let numbers = tokens
            .iter()
            .map(|t| {
                t.parse::<i64>()
                    .map_err(|_| InputError::NotANumber((*t).to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        match numbers.as_slice() {
            [x, y, z] => {
                let coord = Coordinate::new(self.axis(*x)?, self.axis(*y)?, self.axis(*z)?);
                debug!(%coord, "Parsed move");
                Ok(Command::Move(coord))
            }
            other => Err(InputError::WrongArity(other.len())),
        }
    }

    /// Maps one typed number to a 0-based index.
    ///
    /// Values above the board are passed through; the rules engine rejects
    /// them.
    fn axis(&self, value: i64) -> Result<usize, InputError> {
        let base: i64 = if *self.settings.one_based() { 1 } else { 0 };
        let top = base.saturating_add(i64::try_from(self.size).unwrap_or(i64::MAX)) - 1;
        let value = if *self.settings.clamp() && self.size > 0 {
            value.clamp(base, top)
        } else {
            value
        };
        value
            .checked_sub(base)
            .and_then(|index| usize::try_from(index).ok())
            .ok_or(InputError::Negative(value))
    }
}

fn keyword(word: &str) -> Option<Command> {
    match word.to_ascii_lowercase().as_str() {
        "reset" | "r" | "new" => Some(Command::Reset),
        "show" | "s" | "board" => Some(Command::Show),
        "help" | "h" | "?" => Some(Command::Help),
        "quit" | "q" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter(one_based: bool, clamp: bool) -> InputAdapter {
        InputAdapter::new(4, InputConfig::new(one_based, clamp))
    }

    #[test]
    fn test_plain_zero_based_move() {
        assert_eq!(
            adapter(false, false).parse("1 2 3"),
            Ok(Command::Move(Coordinate::new(1, 2, 3)))
        );
    }

    #[test]
    fn test_commas_and_spaces() {
        assert_eq!(
            adapter(false, false).parse(" 0, 3 ,2 "),
            Ok(Command::Move(Coordinate::new(0, 3, 2)))
        );
    }

    #[test]
    fn test_keywords() {
        let a = adapter(false, false);
        assert_eq!(a.parse("reset"), Ok(Command::Reset));
        assert_eq!(a.parse("Q"), Ok(Command::Quit));
        assert_eq!(a.parse("?"), Ok(Command::Help));
        assert_eq!(a.parse("board"), Ok(Command::Show));
    }

    #[test]
    fn test_errors() {
        let a = adapter(false, false);
        assert_eq!(a.parse("   "), Err(InputError::Empty));
        assert_eq!(a.parse("1 2"), Err(InputError::WrongArity(2)));
        assert_eq!(a.parse("1 2 3 0"), Err(InputError::WrongArity(4)));
        assert_eq!(a.parse("1 two 3"), Err(InputError::NotANumber("two".into())));
        assert_eq!(a.parse("hello"), Err(InputError::NotANumber("hello".into())));
        assert_eq!(a.parse("-1 0 0"), Err(InputError::Negative(-1)));
    }

    #[test]
    fn test_out_of_range_passes_through_without_clamp() {
        assert_eq!(
            adapter(false, false).parse("4 0 0"),
            Ok(Command::Move(Coordinate::new(4, 0, 0)))
        );
    }

    #[test]
    fn test_one_based() {
        let a = adapter(true, false);
        assert_eq!(a.parse("1 1 4"), Ok(Command::Move(Coordinate::new(0, 0, 3))));
        assert_eq!(a.parse("0 1 1"), Err(InputError::Negative(0)));
    }

    #[test]
    fn test_extreme_numbers_do_not_panic() {
        let min = i64::MIN.to_string();
        let max = i64::MAX.to_string();

        assert_eq!(
            adapter(true, false).parse(&format!("{min} 1 1")),
            Err(InputError::Negative(i64::MIN))
        );
        assert_eq!(
            adapter(false, false).parse(&format!("0 {min} 0")),
            Err(InputError::Negative(i64::MIN))
        );
        assert_eq!(
            adapter(true, true).parse(&format!("{min} {max} 1")),
            Ok(Command::Move(Coordinate::new(0, 3, 0)))
        );
        assert_eq!(
            adapter(false, false).parse("99999999999999999999 0 0"),
            Err(InputError::NotANumber("99999999999999999999".into()))
        );
    }

    #[test]
    fn test_clamp_one_based() {
        assert_eq!(
            adapter(true, true).parse("0 9 -3"),
            Ok(Command::Move(Coordinate::new(0, 3, 0)))
        );
    }

    #[test]
    fn test_clamp_zero_based() {
        assert_eq!(
            adapter(false, true).parse("7 -2 3"),
            Ok(Command::Move(Coordinate::new(3, 0, 3)))
        );
    }
}
