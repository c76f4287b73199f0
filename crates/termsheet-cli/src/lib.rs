//! Termsheet CLI library
//!
//! Command definitions and execution for the `termsheet` binary.

#![warn(missing_docs)]

pub mod cli;
pub mod commands;
pub mod error;

pub use cli::{Cli, Command};
pub use error::{CliError, Result};
