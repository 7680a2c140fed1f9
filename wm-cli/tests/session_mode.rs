use chrono::NaiveDate;
use clap::Parser;
use std::fs;
use std::io::{BufRead, Cursor, Read};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wm_cli::{BaseCli, CliModeResult, RenderOptions, Renderer, WmCli, run_session};
use wm_core::{Config, Workspace};

fn mk_workspace(tmp: &TempDir) -> Workspace {
    let config = Config {
        root: tmp.path().to_path_buf(),
        work_dir_name: "work".to_string(),
        task_file_extension: "txt".to_string(),
        reference_date: NaiveDate::from_ymd_opt(2020, 3, 5).unwrap(),
    };
    Workspace::with_config(config).unwrap()
}

fn plain() -> Renderer {
    Renderer::new(Some(RenderOptions { use_color: false }))
}

fn run(workspace: &Workspace, input: &str) -> String {
    let mut out = Vec::new();
    run_session(workspace, &plain(), Cursor::new(input), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn run_bytes(workspace: &Workspace, input: &[u8]) -> String {
    let mut out = Vec::new();
    run_session(workspace, &plain(), Cursor::new(input), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn tree(root: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for entry in fs::read_dir(root).unwrap() {
        let p = entry.unwrap().path();
        if p.is_dir() {
            out.extend(tree(&p));
        }
        out.push(p);
    }
    out.sort();
    out
}

#[test]
fn mk_twice_then_quit() {
    let tmp = TempDir::new().unwrap();
    let ws = mk_workspace(&tmp);

    let output = run(&ws, "mk SD-1111\nmk SD-1111\nq\n");

    let work = tmp.path().join("work");
    let day = work.join("2020/03/05");
    assert_eq!(
        tree(&work),
        vec![
            work.join("2020"),
            work.join("2020/03"),
            day.clone(),
            day.join("SD-1111"),
            day.join("SD-1111/SD-1111.txt"),
        ]
    );
    assert_eq!(fs::read_to_string(day.join("SD-1111/SD-1111.txt")).unwrap(), "");

    assert!(output.starts_with("Creating directories...\n"));
    assert!(output.contains(&format!("{}\n", day.display())));
    assert!(output.contains("COMMANDS:"));
    assert_eq!(output.matches("created..").count(), 2);
    assert!(output.ends_with("> bye bye\n"));
}

#[test]
fn mk_without_name_reprompts() {
    let tmp = TempDir::new().unwrap();
    let ws = mk_workspace(&tmp);

    let output = run(&ws, "mk\nmk SD-1\nq\n");

    assert!(output.contains("error: `mk` needs a task name\nusage: mk <task_name>"));
    assert_eq!(output.matches("created..").count(), 1);
    assert!(output.ends_with("bye bye\n"));
}

#[test]
fn unknown_command_and_empty_line_touch_nothing() {
    let tmp = TempDir::new().unwrap();
    let ws = mk_workspace(&tmp);

    let output = run(&ws, "foo\n\n   \nq\n");

    assert!(output.contains("error: unknown command `foo`"));
    assert_eq!(output.matches("error: no command given").count(), 2);
    assert!(output.contains("Type `help` to see the commands."));
    let day = tmp.path().join("work/2020/03/05");
    assert!(tree(&day).is_empty());
    assert!(output.ends_with("bye bye\n"));
}

#[test]
fn invalid_task_name_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let ws = mk_workspace(&tmp);

    let output = run(&ws, "mk ../outside\nq\n");

    assert!(output.contains("forbidden character '/'"));
    assert!(!tmp.path().join("work/2020/03/outside").exists());
    assert!(tree(&tmp.path().join("work/2020/03/05")).is_empty());
}

#[test]
fn end_of_input_says_goodbye() {
    let tmp = TempDir::new().unwrap();
    let ws = mk_workspace(&tmp);

    let output = run(&ws, "mk SD-7");

    assert!(tmp.path().join("work/2020/03/05/SD-7/SD-7.txt").is_file());
    assert!(output.ends_with("> \nbye bye\n"));
}

#[test]
fn lines_after_quit_are_not_read() {
    let tmp = TempDir::new().unwrap();
    let ws = mk_workspace(&tmp);

    run(&ws, "q\nmk SD-8\n");

    assert!(!tmp.path().join("work/2020/03/05/SD-8").exists());
}

#[test]
fn ls_lists_created_tasks() {
    let tmp = TempDir::new().unwrap();
    let ws = mk_workspace(&tmp);

    let output = run(&ws, "ls\nmk B\nmk A\nls\nq\n");

    assert!(output.contains("> No tasks yet.\n"));
    assert!(output.contains("> A\nB\n"));
}

#[test]
fn failed_task_is_reported_and_session_continues() {
    let tmp = TempDir::new().unwrap();
    let ws = mk_workspace(&tmp);
    let day = ws.ensure_today_dir().unwrap();
    fs::write(day.join("SD-9"), "").unwrap();

    let output = run(&ws, "mk SD-9\nmk SD-10\nq\n");

    assert!(output.contains("error: could not create SD-9:"));
    assert!(day.join("SD-10/SD-10.txt").is_file());
    assert!(output.ends_with("bye bye\n"));
}

#[test]
fn today_dir_failure_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let ws = mk_workspace(&tmp);
    let month = tmp.path().join("work/2020/03");
    fs::create_dir_all(&month).unwrap();
    fs::write(month.join("05"), "").unwrap();

    let mut out = Vec::new();
    let result = run_session(&ws, &plain(), Cursor::new("q\n"), &mut out);
    assert!(result.is_err());
    assert!(!String::from_utf8(out).unwrap().contains("bye bye"));
}

#[test]
fn batch_mode_creates_tasks_without_session() {
    let tmp = TempDir::new().unwrap();
    let ws = mk_workspace(&tmp);
    let cli = BaseCli::try_parse_from(["wm", "--color", "never", "SD-1", "SD-2"]).unwrap();
    let wm = WmCli::new(cli, ws);

    let mut out = Vec::new();
    let result = wm.batch_mode(&mut out).unwrap();

    assert!(matches!(result, CliModeResult::Finish));
    let day = tmp.path().join("work/2020/03/05");
    assert!(day.join("SD-1/SD-1.txt").is_file());
    assert!(day.join("SD-2/SD-2.txt").is_file());
    assert_eq!(String::from_utf8(out).unwrap().matches("created..").count(), 2);
}

#[test]
fn batch_mode_reports_invalid_names() {
    let tmp = TempDir::new().unwrap();
    let ws = mk_workspace(&tmp);
    let cli = BaseCli::try_parse_from(["wm", "--color", "never", "ok", "a:b"]).unwrap();
    let wm = WmCli::new(cli, ws);

    let mut out = Vec::new();
    let err = wm.batch_mode(&mut out).unwrap_err();

    assert_eq!(err.to_string(), "1 of 2 tasks could not be created");
    assert!(tmp.path().join("work/2020/03/05/ok/ok.txt").is_file());
    assert!(String::from_utf8(out).unwrap().contains("error: could not create a:b"));
}

#[test]
fn path_mode_prints_today_dir() {
    let tmp = TempDir::new().unwrap();
    let ws = mk_workspace(&tmp);
    let cli = BaseCli::try_parse_from(["wm", "--color", "never", "--path"]).unwrap();
    let wm = WmCli::new(cli, ws);

    let mut out = Vec::new();
    assert!(matches!(wm.path_mode(&mut out).unwrap(), CliModeResult::Finish));
    let day = tmp.path().join("work/2020/03/05");
    assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", day.display()));
    assert!(day.is_dir());
}

#[test]
fn invalid_utf8_line_reprompts() {
    let tmp = TempDir::new().unwrap();
    let ws = mk_workspace(&tmp);

    let output = run_bytes(&ws, b"mk \xff\xfe\nmk SD-1\nq\n");

    assert!(output.contains("error: input is not valid UTF-8"));
    assert!(output.contains("Type `help` to see the commands."));
    assert!(tmp.path().join("work/2020/03/05/SD-1/SD-1.txt").is_file());
    assert_eq!(output.matches("created..").count(), 1);
    assert!(output.ends_with("> bye bye\n"));
}

#[test]
fn ls_reports_missing_day_folder() {
    let tmp = TempDir::new().unwrap();
    let ws = mk_workspace(&tmp);
    let day = tmp.path().join("work/2020/03/05");

    let mut out = Vec::new();
    let input = Cursor::new("ls\nq\n");
    // remove today's folder once the session has created it
    let mut session_input = RemoveBeforeRead {
        inner: input,
        dir: day.clone(),
    };
    run_session(&ws, &plain(), &mut session_input, &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    assert!(output.contains(&format!("error: could not list {}:", day.display())));
    assert!(!output.contains("No tasks yet."));
    assert!(output.ends_with("> bye bye\n"));
}

/// Deletes `dir` on the first read, after the session created it.
struct RemoveBeforeRead<R> {
    inner: R,
    dir: PathBuf,
}

impl<R: Read> Read for RemoveBeforeRead<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.inner.read(buf)
    }
}

impl<R: BufRead> BufRead for RemoveBeforeRead<R> {
    fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
        if self.dir.exists() {
            fs::remove_dir_all(&self.dir)?;
        }
        self.inner.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.inner.consume(amt)
    }
}
