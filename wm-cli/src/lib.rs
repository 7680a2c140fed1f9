mod cli;
mod cli_modes;
pub mod logging;
mod render;

pub use cli::BaseCli;
pub use cli_modes::{CliModeResult, WmCli, run_session};
pub use render::{ColorMode, RenderOptions, Renderer};
