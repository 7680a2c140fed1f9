use crate::Config;
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

/// Test helper to create a default `Config` for testing purposes.
///
/// This is the single source of truth for test configuration.
/// If you add a field to `Config`, you only need to update it here.
pub fn mk_config(tmp_dir: PathBuf, reference_date: Option<NaiveDate>) -> Config {
    Config {
        root: tmp_dir,
        work_dir_name: "work".to_string(),
        task_file_extension: "txt".to_string(),
        reference_date: reference_date.unwrap_or(Local::now().date_naive()),
    }
}
