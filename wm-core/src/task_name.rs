//! Validation of operator-supplied task names.
//!
//! A task name becomes both a folder name and the stem of a file name, so it
//! must be a single, portable path component. The same rule is applied on
//! every host so a tree created on one system can be copied to another.
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use thiserror::Error;

/// Leaves room for `.{extension}` within a 255-byte file name.
pub const MAX_TASK_NAME_LEN: usize = 200;

const RESERVED_DEVICE_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskNameError {
    #[error("task name is empty")]
    Empty,
    #[error("`{0}` is not a valid task name")]
    DotName(String),
    #[error("task name `{name}` contains the forbidden character {ch:?}")]
    ForbiddenChar { name: String, ch: char },
    #[error("task name `{0}` must not end with a dot or a space")]
    TrailingDotOrSpace(String),
    #[error("`{0}` is a reserved device name")]
    Reserved(String),
    #[error("task name is longer than {MAX_TASK_NAME_LEN} bytes")]
    TooLong,
}

/// A task name that is safe to use as a single folder and file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskName(String);

impl TaskName {
    pub fn parse(input: &str) -> Result<Self, TaskNameError> {
        static FORBIDDEN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r#"[<>:"/\\|?*\x00-\x1F\x7F]"#).expect("valid regex"));

        if input.is_empty() {
            return Err(TaskNameError::Empty);
        }
        if input == "." || input == ".." {
            return Err(TaskNameError::DotName(input.to_string()));
        }
        if input.len() > MAX_TASK_NAME_LEN {
            return Err(TaskNameError::TooLong);
        }
        if let Some(m) = FORBIDDEN.find(input) {
            let ch = m.as_str().chars().next().unwrap_or_default();
            return Err(TaskNameError::ForbiddenChar {
                name: input.to_string(),
                ch,
            });
        }
        if input.ends_with('.') || input.ends_with(' ') {
            return Err(TaskNameError::TrailingDotOrSpace(input.to_string()));
        }
        let stem = input.split('.').next().unwrap_or(input);
        if RESERVED_DEVICE_NAMES
            .iter()
            .any(|r| r.eq_ignore_ascii_case(stem))
        {
            return Err(TaskNameError::Reserved(input.to_string()));
        }
        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
