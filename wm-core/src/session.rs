//! Session state machine: one line of operator input in, one `Reply` out.
//!
//! The session owns the day directory resolved at startup and never recomputes it.
//! Malformed input and per-task filesystem failures are replies, not errors, so the
//! caller can report them and keep reading.
use crate::command::{Command, CommandError, Keyword};
use crate::task_name::TaskName;
use crate::workspace::{TaskRef, Workspace};
use anyhow::Result;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

#[derive(Debug)]
pub enum Reply {
    Created(TaskRef),
    Listed(Vec<String>),
    Help(Vec<&'static str>),
    Farewell,
    Malformed(CommandError),
    Failed { task: TaskName, error: anyhow::Error },
    /// Today's folder could not be read.
    ListFailed { dir: PathBuf, error: anyhow::Error },
    /// Input received after the session terminated.
    Ignored,
}

pub struct Session<'a> {
    workspace: &'a Workspace,
    today_dir: PathBuf,
    state: SessionState,
}

impl<'a> Session<'a> {
    /// Ensures the day directory exists and starts a running session on it.
    pub fn start(workspace: &'a Workspace) -> Result<Self> {
        let today_dir = workspace.ensure_today_dir()?;
        tracing::info!("session started in {}", today_dir.display());
        Ok(Self {
            workspace,
            today_dir,
            state: SessionState::Running,
        })
    }

    pub fn today_dir(&self) -> &Path {
        &self.today_dir
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    /// Usage lines for every command, in display order.
    pub fn command_list() -> Vec<&'static str> {
        Keyword::iter().map(Keyword::usage).collect()
    }

    pub fn handle_line(&mut self, line: &str) -> Reply {
        if !self.is_running() {
            return Reply::Ignored;
        }
        match Command::parse(line) {
            Ok(command) => self.execute(command),
            Err(error) => {
                tracing::debug!("malformed input {line:?}: {error}");
                Reply::Malformed(error)
            }
        }
    }

    /// Same as `handle_line` for a raw line read from the terminal. Bytes that are not
    /// valid UTF-8 are malformed input.
    pub fn handle_bytes(&mut self, line: &[u8]) -> Reply {
        match std::str::from_utf8(line) {
            Ok(line) => self.handle_line(line),
            Err(_) if !self.is_running() => Reply::Ignored,
            Err(error) => {
                tracing::debug!("malformed input {line:?}: {error}");
                Reply::Malformed(CommandError::NotUtf8)
            }
        }
    }

    /// End of input terminates the session the same way `q` does.
    pub fn end_of_input(&mut self) -> Reply {
        if !self.is_running() {
            return Reply::Ignored;
        }
        self.execute(Command::Quit)
    }

    fn execute(&mut self, command: Command) -> Reply {
        match command {
            Command::Quit => {
                self.state = SessionState::Terminated;
                tracing::info!("session terminated");
                Reply::Farewell
            }
            Command::Help => Reply::Help(Self::command_list()),
            Command::List => match self.workspace.list_tasks(&self.today_dir) {
                Ok(names) => Reply::Listed(names),
                Err(error) => {
                    tracing::warn!("listing {} failed: {error:#}", self.today_dir.display());
                    Reply::ListFailed {
                        dir: self.today_dir.clone(),
                        error,
                    }
                }
            },
            Command::Make(task) => match self.workspace.ensure_task(&self.today_dir, &task) {
                Ok(task_ref) => Reply::Created(task_ref),
                Err(error) => {
                    tracing::warn!("creating task {task} failed: {error:#}");
                    Reply::Failed { task, error }
                }
            },
        }
    }
}
