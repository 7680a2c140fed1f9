use chrono::NaiveDate;
use std::path::{Path, PathBuf};

pub fn year_folder_name(date: NaiveDate) -> String {
    format!("{}", date.format("%Y"))
}

pub fn month_folder_name(date: NaiveDate) -> String {
    format!("{}", date.format("%m"))
}

pub fn day_folder_name(date: NaiveDate) -> String {
    format!("{}", date.format("%d"))
}

/// Partition fragment for a day, month and day zero-padded: `/2015/06/01`.
pub fn date_fragment(date: NaiveDate) -> String {
    format!(
        "/{}/{}/{}",
        year_folder_name(date),
        month_folder_name(date),
        day_folder_name(date)
    )
}

pub fn work_root(root: &Path, work_dir_name: &str) -> PathBuf {
    root.join(work_dir_name)
}

/// `{work_root}/YYYY/MM/DD`
pub fn today_dir(work_root: &Path, date: NaiveDate) -> PathBuf {
    work_root
        .join(year_folder_name(date))
        .join(month_folder_name(date))
        .join(day_folder_name(date))
}

pub fn task_dir(today_dir: &Path, task_name: &str) -> PathBuf {
    today_dir.join(task_name)
}

/// `{task_dir}/{task_name}.{extension}`
pub fn task_file(task_dir: &Path, task_name: &str, extension: &str) -> PathBuf {
    task_dir.join(format!("{task_name}.{extension}"))
}
