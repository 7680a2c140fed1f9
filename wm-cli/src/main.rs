use anyhow::Result;
use std::process::ExitCode;
use wm_cli::{BaseCli, WmCli, logging};
use wm_core::Workspace;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("wm: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = BaseCli::new();
    logging::init(cli.verbose);
    let config = cli.load_config()?;
    let workspace = Workspace::with_config(config)?;
    let wm_cli = WmCli::new(cli, workspace);
    wm_cli.run()
}
