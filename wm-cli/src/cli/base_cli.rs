use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;
use wm_core::Config;

use crate::render::ColorMode;

/// wm — date-partitioned work folders
///
/// Without TASKS, starts an interactive session in today's folder
/// (`mk <task_name>` to create a task, `q` to quit).
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct BaseCli {
    /// Directory that contains the `work` folder. Defaults to the config file value,
    /// then to the current directory.
    #[arg(long, env = "WM_ROOT")]
    pub root: Option<PathBuf>,
    /// Work in the folder of this day instead of today (e.g. `--date 2020-03-05`).
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// Prints today's folder and exits.
    #[arg(long, short, conflicts_with = "tasks")]
    pub path: bool,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
    /// Log what is created on stderr.
    #[arg(long, short)]
    pub verbose: bool,
    /// Task folders to create under today's folder, without starting a session
    /// (e.g. `wm SD-1234 SD-5678`).
    #[arg()]
    pub tasks: Vec<String>,
}

impl BaseCli {
    pub fn new() -> Self {
        BaseCli::parse()
    }

    /// Loads the config file and lets command-line values take precedence.
    pub fn load_config(&self) -> Result<Config> {
        let config = Config::load()?;
        Ok(self.apply(config))
    }

    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(root) = &self.root {
            config.root = root.clone();
        }
        if let Some(date) = self.date {
            config.reference_date = date;
        }
        config
    }
}
