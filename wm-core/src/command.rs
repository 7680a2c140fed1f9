use crate::task_name::{TaskName, TaskNameError};
use std::str::FromStr;
use strum_macros::{EnumIter, EnumString};
use thiserror::Error;

/// First token of a session line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString)]
pub enum Keyword {
    #[strum(serialize = "mk")]
    Make,
    #[strum(serialize = "ls")]
    List,
    #[strum(serialize = "help", serialize = "?")]
    Help,
    #[strum(serialize = "q")]
    Quit,
}

impl Keyword {
    /// Usage line shown in the command list and in error hints.
    pub fn usage(self) -> &'static str {
        match self {
            Keyword::Make => "mk <task_name> - create the task folder and its starter file",
            Keyword::List => "ls - list today's tasks",
            Keyword::Help => "help - show this list",
            Keyword::Quit => "q - quit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Make(TaskName),
    List,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("no command given")]
    Empty,
    #[error("input is not valid UTF-8")]
    NotUtf8,
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("`mk` needs a task name")]
    MissingTaskName,
    #[error("`{keyword}` takes {expected}, got: {extra}")]
    UnexpectedArguments {
        keyword: String,
        expected: &'static str,
        extra: String,
    },
    #[error(transparent)]
    InvalidTaskName(#[from] TaskNameError),
}

impl CommandError {
    /// The keyword whose usage should be shown with this error, if any.
    pub fn hint(&self) -> Option<Keyword> {
        match self {
            CommandError::MissingTaskName | CommandError::InvalidTaskName(_) => {
                Some(Keyword::Make)
            }
            CommandError::UnexpectedArguments { keyword, .. } => Keyword::from_str(keyword).ok(),
            CommandError::Empty | CommandError::NotUtf8 | CommandError::Unknown(_) => None,
        }
    }
}

impl Command {
    /// Splits a line on whitespace and matches it against the known command shapes.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut tokens = line.split_whitespace();
        let Some(first) = tokens.next() else {
            return Err(CommandError::Empty);
        };
        let keyword =
            Keyword::from_str(first).map_err(|_| CommandError::Unknown(first.to_string()))?;
        let rest: Vec<&str> = tokens.collect();

        match keyword {
            Keyword::Make => match rest.as_slice() {
                [] => Err(CommandError::MissingTaskName),
                [name] => Ok(Command::Make(TaskName::parse(name)?)),
                [_, extra @ ..] => Err(unexpected(first, "exactly one task name", extra)),
            },
            Keyword::List if rest.is_empty() => Ok(Command::List),
            Keyword::Help if rest.is_empty() => Ok(Command::Help),
            Keyword::Quit if rest.is_empty() => Ok(Command::Quit),
            _ => Err(unexpected(first, "no arguments", &rest)),
        }
    }
}

fn unexpected(keyword: &str, expected: &'static str, extra: &[&str]) -> CommandError {
    CommandError::UnexpectedArguments {
        keyword: keyword.to_string(),
        expected,
        extra: extra.join(" "),
    }
}
