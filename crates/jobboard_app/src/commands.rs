//! Parsing of the interactive commands that drive the demo session.

use std::str::FromStr;

use thiserror::Error;

/// One line of user input, resolved to a session command. Card numbers are
/// 1-based and refer to the currently visible cards, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Click the tab with the given label.
    Tab(String),
    /// Click the Interview button on the n-th visible card.
    Interview(usize),
    /// Click the Rejected button on the n-th visible card.
    Reject(usize),
    /// Click the delete control on the n-th visible card.
    Delete(usize),
    /// Re-print the page.
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command {0:?}; try `help`")]
    UnknownCommand(String),
    #[error("`{0}` expects a card number, e.g. `{0} 2`")]
    MissingCardNumber(&'static str),
    #[error("invalid card number {0:?}")]
    InvalidCardNumber(String),
    #[error("`tab` expects a tab label, e.g. `tab Interview`")]
    MissingTabLabel,
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let head = words.next().unwrap_or_default().to_ascii_lowercase();
        let rest: Vec<&str> = words.collect();

        match head.as_str() {
            "tab" => {
                if rest.is_empty() {
                    Err(ParseError::MissingTabLabel)
                } else {
                    Ok(Command::Tab(rest.join(" ")))
                }
            }
            "interview" => parse_card_number("interview", &rest).map(Command::Interview),
            "reject" | "rejected" => parse_card_number("reject", &rest).map(Command::Reject),
            "delete" => parse_card_number("delete", &rest).map(Command::Delete),
            "show" => Ok(Command::Show),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(ParseError::UnknownCommand(head)),
        }
    }
}

fn parse_card_number(command: &'static str, rest: &[&str]) -> Result<usize, ParseError> {
    let raw = rest.first().ok_or(ParseError::MissingCardNumber(command))?;
    match raw.parse::<usize>() {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(ParseError::InvalidCardNumber(raw.to_string())),
    }
}
