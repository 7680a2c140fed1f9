use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};

use crate::paths::work_root;

pub const DEFAULT_WORK_DIR: &str = "work";
pub const DEFAULT_TASK_FILE_EXTENSION: &str = "txt";

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory that contains the work root. Defaults to the current directory.
    pub root: PathBuf,
    /// Name of the folder holding the `YYYY/MM/DD` tree (e.g. `work`).
    pub work_dir_name: String,
    /// Extension of the starter file created inside every task folder, without the dot.
    pub task_file_extension: String,
    /// The day this session works in. Read once from the local clock and never rolled over,
    /// so a session left open past midnight keeps writing into the day it started in.
    pub reference_date: NaiveDate,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    root: Option<PathBuf>,
    work_dir: Option<String>,
    task_file_extension: Option<String>,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native) and apply defaults.
    ///
    /// A config file that cannot be read or parsed is reported through `tracing` and ignored.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_else(|e| {
            tracing::warn!("ignoring config file: {e:#}");
            FileConfig::default()
        });
        Self::from_file_config(file_config)
    }

    fn from_file_config(file_config: FileConfig) -> Result<Self> {
        let root = match file_config.root {
            Some(root) => root,
            None => Self::default_root()?,
        };
        let work_dir_name = file_config
            .work_dir
            .filter(|w| !w.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_WORK_DIR.to_string());
        let task_file_extension = file_config
            .task_file_extension
            .as_deref()
            .map(Self::normalize_extension)
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| DEFAULT_TASK_FILE_EXTENSION.to_string());

        Ok(Self {
            root,
            work_dir_name,
            task_file_extension,
            reference_date: Local::now().date_naive(),
        })
    }

    /// `{root}/{work_dir_name}`
    pub fn work_root(&self) -> PathBuf {
        work_root(&self.root, &self.work_dir_name)
    }

    fn default_root() -> Result<PathBuf> {
        std::env::current_dir().context("resolving the current directory")
    }

    /// `".txt"` and `"txt"` are the same extension.
    fn normalize_extension(ext: &str) -> String {
        ext.trim().trim_start_matches('.').to_string()
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("workmanager")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("workmanager").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            tracing::debug!("reading config from {}", path.display());
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn candidates_prioritize_xdg_then_native() {
        if let Some(b) = BaseDirs::new() {
            let expected_xdg = b
                .home_dir()
                .join(".config")
                .join("workmanager")
                .join("config.toml");
            let expected_native = b.config_dir().join("workmanager").join("config.toml");
            let c = Config::config_file_paths();
            assert_eq!(c.first(), Some(&expected_xdg));
            assert_eq!(c.get(1), Some(&expected_native));
        }
    }

    #[test]
    fn parse_file_accepts_all_keys() {
        let toml = r#"
            root = "/tmp/projects"
            work_dir = "tasks"
            task_file_extension = ".md"
        "#;
        let fc = Config::parse_file(toml).unwrap();
        assert_eq!(fc.root.as_deref(), Some(Path::new("/tmp/projects")));
        assert_eq!(fc.work_dir.as_deref(), Some("tasks"));

        let config = Config::from_file_config(fc).unwrap();
        assert_eq!(config.task_file_extension, "md");
        assert_eq!(config.work_root(), Path::new("/tmp/projects").join("tasks"));
    }

    #[test]
    fn empty_file_falls_back_to_defaults() {
        let fc = Config::parse_file("").unwrap();
        let config = Config::from_file_config(fc).unwrap();
        assert_eq!(config.work_dir_name, DEFAULT_WORK_DIR);
        assert_eq!(config.task_file_extension, DEFAULT_TASK_FILE_EXTENSION);
        assert_eq!(config.root, std::env::current_dir().unwrap());
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let toml = r#"
            work_dir = "  "
            task_file_extension = "."
        "#;
        let config = Config::from_file_config(Config::parse_file(toml).unwrap()).unwrap();
        assert_eq!(config.work_dir_name, "work");
        assert_eq!(config.task_file_extension, "txt");
    }

    #[test]
    fn parse_file_rejects_wrong_types() {
        assert!(Config::parse_file("work_dir = 3").is_err());
    }
}
