use super::{CliModeResult, run_session};
use crate::{BaseCli, RenderOptions, render::Renderer, render::use_color};
use anyhow::{Result, bail};
use std::io::{self, Write};
use wm_core::{TaskName, Workspace};

pub struct WmCli {
    cli: BaseCli,
    renderer: Renderer,
    workspace: Workspace,
}
impl WmCli {
    pub fn new(cli: BaseCli, workspace: Workspace) -> Self {
        let renderer = Renderer::new(Some(RenderOptions {
            use_color: use_color(cli.color),
        }));
        WmCli {
            cli,
            renderer,
            workspace,
        }
    }

    pub fn run(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        if let CliModeResult::Finish = self.path_mode(&mut out)? {
            return Ok(());
        };

        if let CliModeResult::Finish = self.batch_mode(&mut out)? {
            return Ok(());
        };

        let stdin = io::stdin();
        run_session(&self.workspace, &self.renderer, stdin.lock(), &mut out)
    }

    pub fn path_mode<W: Write>(&self, out: &mut W) -> Result<CliModeResult> {
        if !self.cli.path {
            return Ok(CliModeResult::NothingToDo);
        }
        let today = self.workspace.ensure_today_dir()?;
        self.renderer.print_path(out, &today)?;
        Ok(CliModeResult::Finish)
    }

    /// Creates every task named on the command line. Invalid names and failed tasks are
    /// reported one by one; the run fails at the end if any of them did.
    pub fn batch_mode<W: Write>(&self, out: &mut W) -> Result<CliModeResult> {
        if self.cli.tasks.is_empty() {
            return Ok(CliModeResult::NothingToDo);
        }
        let today = self.workspace.ensure_today_dir()?;
        let mut failed = 0;
        for raw in &self.cli.tasks {
            let created = TaskName::parse(raw)
                .map_err(anyhow::Error::from)
                .and_then(|name| self.workspace.ensure_task(&today, &name));
            match created {
                Ok(task) => {
                    self.renderer.print_created(out, &task)?;
                    self.renderer.print_path(out, &task.dir)?;
                }
                Err(error) => {
                    failed += 1;
                    self.renderer
                        .print_error(out, &format!("could not create {raw}: {error:#}"))?;
                }
            }
        }
        if failed > 0 {
            bail!("{failed} of {} tasks could not be created", self.cli.tasks.len());
        }
        Ok(CliModeResult::Finish)
    }
}
