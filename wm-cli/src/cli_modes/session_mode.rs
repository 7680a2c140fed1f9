use crate::render::Renderer;
use anyhow::Result;
use std::io::{BufRead, Write};
use wm_core::{Reply, Session, Workspace};

/// Runs an interactive session: ensures today's folder, then reads commands from `input`
/// until `q` or end of input.
///
/// Only a failure to create today's folder (or to read/write the terminal) ends the
/// session with an error. Malformed commands and failed tasks are reported and the
/// prompt comes back.
pub fn run_session<R: BufRead, W: Write>(
    workspace: &Workspace,
    renderer: &Renderer,
    mut input: R,
    out: &mut W,
) -> Result<()> {
    renderer.print_info(out, "Creating directories...")?;
    let mut session = Session::start(workspace)?;
    renderer.print_path(out, session.today_dir())?;
    renderer.print_commands(out, &Session::command_list())?;

    let mut line = Vec::new();
    while session.is_running() {
        renderer.print_prompt(out)?;
        line.clear();
        let reply = if input.read_until(b'\n', &mut line)? == 0 {
            writeln!(out)?;
            session.end_of_input()
        } else {
            session.handle_bytes(&line)
        };
        print_reply(renderer, out, reply)?;
    }
    Ok(())
}

fn print_reply<W: Write>(renderer: &Renderer, out: &mut W, reply: Reply) -> Result<()> {
    match reply {
        Reply::Created(task) => renderer.print_created(out, &task)?,
        Reply::Listed(names) => renderer.print_tasks(out, &names)?,
        Reply::Help(usages) => renderer.print_commands(out, &usages)?,
        Reply::Farewell => renderer.print_farewell(out)?,
        Reply::Malformed(error) => {
            renderer.print_error(out, &error.to_string())?;
            match error.hint() {
                Some(keyword) => renderer.print_hint(out, keyword.usage())?,
                None => renderer.print_info(out, "Type `help` to see the commands.")?,
            }
        }
        Reply::Failed { task, error } => {
            renderer.print_error(out, &format!("could not create {task}: {error:#}"))?;
        }
        Reply::ListFailed { dir, error } => {
            renderer.print_error(out, &format!("could not list {}: {error:#}", dir.display()))?;
        }
        Reply::Ignored => {}
    }
    Ok(())
}
