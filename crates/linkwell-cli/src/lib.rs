//! Linkwell CLI library.
//!
//! Argument parsing, configuration, and command execution for the `linkwell`
//! binary. Commands drive the URL tool suite directly; the `ask` command
//! routes free text through the workflow layer.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
