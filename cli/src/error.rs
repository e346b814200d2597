//! Error type for command dispatch and execution.

use std::io;

use subcmd_core::{OrderError, ParseError};
use thiserror::Error;

/// Errors that end a command run.
///
/// Declaration and parse errors from the core crate pass through unchanged
/// so their messages reach the user as-is.
#[derive(Debug, Error)]
pub enum CliError {
    /// No command is registered under the requested name.
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    /// A command declared its options or arguments out of order.
    #[error(transparent)]
    Order(#[from] OrderError),

    /// The command line did not match the command's schema.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Writing command output failed.
    #[error("output error: {0}")]
    Io(#[from] io::Error),

    /// A command handler reported a failure.
    #[error("{0}")]
    Failed(String),
}

/// Convenience alias for results with [`CliError`].
pub type Result<T> = std::result::Result<T, CliError>;
