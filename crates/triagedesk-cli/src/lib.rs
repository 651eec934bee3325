mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;

pub use args::{Cli, Commands, OutputFormat};
pub use commands::run;
