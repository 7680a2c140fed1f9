mod base_cli;

pub use base_cli::BaseCli;
