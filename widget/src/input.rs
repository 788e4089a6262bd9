//! Line-oriented input for the terminal session.
//!
//! A plain line is typed into the input field and submitted, like pressing
//! Enter. Lines starting with `/` are commands; `//` escapes a leading slash.

use crate::types::{Filter, ParseFilterError};
use thiserror::Error;

/// Help shown for `/help`
pub const HELP: &str = "\
Type a line and press Enter to add it. Start it with // to add text
beginning with a slash.
  /draft TEXT        put TEXT in the input field without adding it
  /add               add the current draft
  /toggle N          flip item N (as numbered in the list)
  /delete N          remove item N
  /filter all|active|completed
  /state             print the current view as JSON
  /help              show this help
  /quit              leave";

/// A parsed line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Type the text into the draft and press Enter
    Enter(String),
    /// Replace the draft without submitting
    Draft(String),
    /// Press the add control
    Submit,
    /// Toggle the item at this 1-based display position
    Toggle(usize),
    /// Delete the item at this 1-based display position
    Delete(usize),
    /// Select a filter
    Filter(Filter),
    /// Print the view as JSON
    Dump,
    /// Print help
    Help,
    /// End the session
    Quit,
}

/// Why a line could not be turned into a [`Command`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// `/something` that is not a command
    #[error("unknown command '/{0}' (try /help)")]
    UnknownCommand(String),

    /// Command given without its argument
    #[error("/{0} needs an argument")]
    MissingArgument(&'static str),

    /// Position that is not a positive number
    #[error("'{0}' is not an item number")]
    InvalidPosition(String),

    /// Position past the end of the displayed list
    #[error("there is no item {0} in the list")]
    NoSuchItem(usize),

    /// Unrecognized filter name
    #[error(transparent)]
    Filter(#[from] ParseFilterError),
}

/// Parse one line of user input.
///
/// # Errors
///
/// Returns an [`InputError`] for unknown commands, missing arguments and
/// malformed positions or filter names. Resolving a position against the
/// list happens later.
pub fn parse_line(line: &str) -> Result<Command, InputError> {
    let line = line.trim_end_matches(['\r', '\n']);

    let indent = line.len() - line.trim_start().len();
    let Some(command) = line[indent..].strip_prefix('/') else {
        return Ok(Command::Enter(line.to_string()));
    };

    if command.starts_with('/') {
        return Ok(Command::Enter(format!("{}{command}", &line[..indent])));
    }

    // Only the single separator is dropped from the raw argument
    let (name, raw) = command
        .split_once(char::is_whitespace)
        .unwrap_or((command, ""));
    let argument = raw.trim();

    match name {
        "draft" => Ok(Command::Draft(raw.to_string())),
        "add" => Ok(Command::Submit),
        "toggle" => position("toggle", argument).map(Command::Toggle),
        "delete" => position("delete", argument).map(Command::Delete),
        "filter" => {
            if argument.is_empty() {
                return Err(InputError::MissingArgument("filter"));
            }
            Ok(Command::Filter(argument.parse()?))
        },
        "state" => Ok(Command::Dump),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(InputError::UnknownCommand(other.to_string())),
    }
}

fn position(command: &'static str, argument: &str) -> Result<usize, InputError> {
    if argument.is_empty() {
        return Err(InputError::MissingArgument(command));
    }
    match argument.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(InputError::InvalidPosition(argument.to_string())),
    }
}
