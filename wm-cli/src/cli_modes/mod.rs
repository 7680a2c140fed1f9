mod cli_mode;
mod session_mode;
mod wm_cli;

pub use cli_mode::CliModeResult;
pub use session_mode::run_session;
pub use wm_cli::WmCli;
