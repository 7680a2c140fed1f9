use super::theme::OneDark;
use std::io::{self, Write};
use std::path::Path;
use termimad::{MadSkin, crossterm::style::Stylize};
use wm_core::TaskRef;

#[derive(Clone)]
pub struct RenderOptions {
    pub use_color: bool,
}

/// Every method writes to the given writer so sessions can be rendered into a buffer.
pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: OneDark::default_onedark_skin(),
            opts: config.unwrap_or(RenderOptions { use_color: true }),
        }
    }

    pub fn print_md<W: Write + ?Sized>(&self, out: &mut W, md: &str) -> io::Result<()> {
        write!(out, "{}", self.skin.term_text(md))
    }

    pub fn print_info<W: Write + ?Sized>(&self, out: &mut W, message: &str) -> io::Result<()> {
        if self.opts.use_color {
            self.print_md(out, message)
        } else {
            writeln!(out, "{message}")
        }
    }

    pub fn print_path<W: Write + ?Sized>(&self, out: &mut W, path: &Path) -> io::Result<()> {
        let path = path.display().to_string();
        if self.opts.use_color {
            writeln!(out, "{}", path.with(OneDark::CYAN))
        } else {
            writeln!(out, "{path}")
        }
    }

    pub fn print_commands<W: Write + ?Sized>(
        &self,
        out: &mut W,
        usages: &[&str],
    ) -> io::Result<()> {
        if self.opts.use_color {
            let mut md = String::from("\n**COMMANDS:**\n");
            for usage in usages {
                md.push_str(&format!("* `{usage}`\n"));
            }
            self.print_md(out, &md)
        } else {
            writeln!(out, "\nCOMMANDS:")?;
            for usage in usages {
                writeln!(out, "{usage}")?;
            }
            writeln!(out)
        }
    }

    pub fn print_created<W: Write + ?Sized>(&self, out: &mut W, task: &TaskRef) -> io::Result<()> {
        if self.opts.use_color {
            writeln!(out, "{}", "created..".with(OneDark::GREEN))?;
        } else {
            writeln!(out, "created..")?;
        }
        tracing::debug!(
            "task {} at {} (new folder: {}, new file: {})",
            task.name,
            task.file.display(),
            task.created_dir,
            task.created_file
        );
        Ok(())
    }

    pub fn print_tasks<W: Write + ?Sized>(&self, out: &mut W, names: &[String]) -> io::Result<()> {
        if names.is_empty() {
            return self.print_info(out, "No tasks yet.");
        }
        for name in names {
            if self.opts.use_color {
                writeln!(out, "{}", name.as_str().with(OneDark::YELLOW))?;
            } else {
                writeln!(out, "{name}")?;
            }
        }
        Ok(())
    }

    pub fn print_error<W: Write + ?Sized>(&self, out: &mut W, message: &str) -> io::Result<()> {
        let line = format!("error: {message}");
        if self.opts.use_color {
            writeln!(out, "{}", line.with(OneDark::RED))
        } else {
            writeln!(out, "{line}")
        }
    }

    pub fn print_hint<W: Write + ?Sized>(&self, out: &mut W, usage: &str) -> io::Result<()> {
        let line = format!("usage: {usage}");
        if self.opts.use_color {
            writeln!(out, "{}", line.with(OneDark::COMMENT))
        } else {
            writeln!(out, "{line}")
        }
    }

    pub fn print_prompt<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "> ")?;
        out.flush()
    }

    pub fn print_farewell<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "bye bye")
    }
}
