//! CLI module
//!
//! Command-line interface for inspecting pagination output.
//!
//! # Commands
//!
//! - `summary` - Print the page summary for a request
//! - `url` - Print the URL of a given page
//! - `config` - Print the effective configuration

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, PageArgs};
pub use runner::Runner;
