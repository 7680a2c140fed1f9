//! The `Workspace` struct: creates the date-partitioned tree and the task folders inside it.
use crate::config::Config;
use crate::paths::{date_fragment, task_dir, task_file, today_dir};
use crate::task_name::TaskName;
use anyhow::{Context, Result, bail};
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// The central struct for all filesystem operations.
#[derive(Debug)]
pub struct Workspace {
    pub config: Config,
}

/// What `ensure_task` found or created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRef {
    pub name: TaskName,
    pub dir: PathBuf,
    pub file: PathBuf,
    pub created_dir: bool,
    pub created_file: bool,
}

impl TaskRef {
    /// `true` when nothing had to be created.
    pub fn already_existed(&self) -> bool {
        !self.created_dir && !self.created_file
    }
}

impl Workspace {
    /// Creates a new `Workspace` instance with a specific `Config`.
    ///
    /// This also ensures that the work root directory exists.
    pub fn with_config(config: Config) -> Result<Self> {
        let work_root = config.work_root();
        fs::create_dir_all(&work_root)
            .with_context(|| format!("creating work root {}", work_root.display()))?;
        Ok(Self { config })
    }

    /// Path of the session's day directory, `{work_root}/YYYY/MM/DD`. Nothing is created.
    pub fn today_dir(&self) -> PathBuf {
        today_dir(&self.config.work_root(), self.config.reference_date)
    }

    /// Ensures the day directory and any missing ancestors exist, and returns its path.
    ///
    /// Calling this again on the same day touches nothing.
    pub fn ensure_today_dir(&self) -> Result<PathBuf> {
        let path = self.today_dir();
        if path.is_dir() {
            return Ok(path);
        }
        if path.exists() {
            bail!("{} exists but is not a directory", path.display());
        }
        fs::create_dir_all(&path)
            .with_context(|| format!("creating day directory {}", path.display()))?;
        tracing::debug!(
            "created day directory {} for {}",
            path.display(),
            date_fragment(self.config.reference_date)
        );
        Ok(path)
    }

    /// Ensures `{base}/{name}/` and the empty starter file `{name}.{ext}` inside it exist.
    ///
    /// `base` must already exist; only the task folder itself is created. Existing files are
    /// never truncated or rewritten.
    pub fn ensure_task(&self, base: &Path, name: &TaskName) -> Result<TaskRef> {
        let dir = task_dir(base, name.as_str());
        let created_dir = if dir.is_dir() {
            false
        } else if dir.exists() {
            bail!("{} exists but is not a directory", dir.display());
        } else {
            match fs::create_dir(&dir) {
                Ok(()) => true,
                Err(e) if e.kind() == ErrorKind::AlreadyExists && dir.is_dir() => false,
                Err(e) => {
                    return Err(e)
                        .with_context(|| format!("creating task folder {}", dir.display()));
                }
            }
        };
        if created_dir {
            tracing::debug!("created task folder {}", dir.display());
        }

        let file = task_file(&dir, name.as_str(), &self.config.task_file_extension);
        let created_file = if file.is_file() {
            false
        } else if file.exists() {
            bail!("{} exists but is not a regular file", file.display());
        } else {
            match OpenOptions::new().write(true).create_new(true).open(&file) {
                Ok(_) => true,
                Err(e) if e.kind() == ErrorKind::AlreadyExists && file.is_file() => false,
                Err(e) => {
                    return Err(e)
                        .with_context(|| format!("creating task file {}", file.display()));
                }
            }
        };
        if created_file {
            tracing::debug!("created task file {}", file.display());
        }

        Ok(TaskRef {
            name: name.clone(),
            dir,
            file,
            created_dir,
            created_file,
        })
    }

    /// Names of the task folders under `base`, sorted.
    pub fn list_tasks(&self, base: &Path) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(base).with_context(|| format!("reading {}", base.display()))? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }
}
