//! Sub-command dispatch on top of `subcmd-core`.
//!
//! - [`Command`] — the trait a sub-command handler implements.
//! - [`Cli`] — registry of handler factories that dispatches an argument
//!   vector to the handler named by `argv[1]`.
//! - [`HelpCommand`] — the always-present `help` command, listing
//!   commands or showing one command's usage.
//!
//! Handlers write to the output stream they are given and return an exit
//! code; failures come back as [`CliError`] for the caller to present.

mod command;
mod error;
mod help;
mod registry;

pub use command::Command;
pub use error::{CliError, Result};
pub use help::{HELP_COMMAND, HelpCommand};
pub use registry::{Cli, CommandFactory};
