use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Everything a player can do to a Play Nine round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Select(u8),
    Unselect(u8),
    Submit,
    Accept,
    Redraw,
    Reset,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseActionError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("'{0}' needs a digit")]
    MissingDigit(&'static str),
    #[error("'{0}' is not a digit")]
    InvalidDigit(String),
    #[error("unexpected argument '{0}'")]
    TrailingInput(String),
}

impl FromStr for Action {
    type Err = ParseActionError;

    /// Parses `select <d>`, `unselect <d>`, `submit`, `accept`, `redraw`
    /// and `reset`, case-insensitively. Out-of-range digits parse fine and
    /// are left for the round to ignore.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let command = words.next().ok_or(ParseActionError::Empty)?.to_ascii_lowercase();

        let action = match command.as_str() {
            "select" => Action::Select(parse_digit(words.next(), "select")?),
            "unselect" => Action::Unselect(parse_digit(words.next(), "unselect")?),
            "submit" => Action::Submit,
            "accept" => Action::Accept,
            "redraw" => Action::Redraw,
            "reset" => Action::Reset,
            _ => return Err(ParseActionError::UnknownCommand(command)),
        };

        match words.next() {
            Some(extra) => Err(ParseActionError::TrailingInput(extra.to_string())),
            None => Ok(action),
        }
    }
}

fn parse_digit(word: Option<&str>, command: &'static str) -> Result<u8, ParseActionError> {
    let word = word.ok_or(ParseActionError::MissingDigit(command))?;
    let magnitude = word.strip_prefix(|c: char| c == '-' || c == '+').unwrap_or(word);
    if magnitude.is_empty() || !magnitude.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseActionError::InvalidDigit(word.to_string()));
    }
    // Any number is accepted; ones that don't fit collapse to 0, which no round accepts
    Ok(word.parse::<u8>().unwrap_or(0))
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Select(d) => write!(f, "select {}", d),
            Action::Unselect(d) => write!(f, "unselect {}", d),
            Action::Submit => f.write_str("submit"),
            Action::Accept => f.write_str("accept"),
            Action::Redraw => f.write_str("redraw"),
            Action::Reset => f.write_str("reset"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("select 3".parse(), Ok(Action::Select(3)));
        assert_eq!("  UNSELECT   9 ".parse(), Ok(Action::Unselect(9)));
        assert_eq!("Submit".parse(), Ok(Action::Submit));
        assert_eq!("accept".parse(), Ok(Action::Accept));
        assert_eq!("redraw".parse(), Ok(Action::Redraw));
        assert_eq!("reset".parse(), Ok(Action::Reset));
    }

    #[test]
    fn test_out_of_range_digit_still_parses() {
        assert_eq!("select 12".parse(), Ok(Action::Select(12)));
        assert_eq!("select 300".parse(), Ok(Action::Select(0)));
        assert_eq!("select -1".parse(), Ok(Action::Select(0)));
        assert_eq!("unselect 99999999999999999999".parse(), Ok(Action::Unselect(0)));
        assert_eq!("select +4".parse(), Ok(Action::Select(4)));
    }

    #[test]
    fn test_signs_alone_are_not_digits() {
        assert_eq!("select -".parse::<Action>(), Err(ParseActionError::InvalidDigit("-".into())));
        assert_eq!(
            "select 3.5".parse::<Action>(),
            Err(ParseActionError::InvalidDigit("3.5".into()))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Action>(), Err(ParseActionError::Empty));
        assert_eq!(
            "jump".parse::<Action>(),
            Err(ParseActionError::UnknownCommand("jump".into()))
        );
        assert_eq!("select".parse::<Action>(), Err(ParseActionError::MissingDigit("select")));
        assert_eq!(
            "select x".parse::<Action>(),
            Err(ParseActionError::InvalidDigit("x".into()))
        );
        assert_eq!(
            "submit now".parse::<Action>(),
            Err(ParseActionError::TrailingInput("now".into()))
        );
    }

    #[test]
    fn test_display_parses_back() {
        let action = Action::Unselect(4);
        assert_eq!(action.to_string().parse(), Ok(action));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ParseActionError::InvalidDigit("x".into()).to_string(), "'x' is not a digit");
        assert_eq!(ParseActionError::MissingDigit("select").to_string(), "'select' needs a digit");
    }
}
