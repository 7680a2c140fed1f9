pub mod command;
pub mod config;
pub mod paths;
pub mod session;
pub mod task_name;
pub mod workspace;

#[cfg(test)]
mod tests;

pub use command::{Command, CommandError, Keyword};
pub use config::Config;
pub use session::{Reply, Session, SessionState};
pub use task_name::{TaskName, TaskNameError};
pub use workspace::{TaskRef, Workspace};
