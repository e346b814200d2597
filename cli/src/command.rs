//! The trait every sub-command implements.

use std::io::Write;

use subcmd_core::{CommandSchema, Invocation, OrderError};

use crate::Result;

/// A sub-command handler.
///
/// The dispatcher creates a fresh handler per run, calls
/// [`configure`](Command::configure) to collect its schema, binds the schema
/// to the command-line tokens and calls [`execute`](Command::execute).
///
/// # Examples
///
/// ```
/// use std::io::Write;
///
/// use subcmd_cli::{Command, Result};
/// use subcmd_core::{ArgumentSpec, CommandSchema, Invocation, OrderError};
///
/// struct Echo;
///
/// impl Command for Echo {
///     fn description(&self) -> String {
///         "Print a word".to_string()
///     }
///
///     fn configure(&self, schema: &mut CommandSchema) -> std::result::Result<(), OrderError> {
///         schema.declare_argument(ArgumentSpec::required("word", "Word to print"))
///     }
///
///     fn execute(&self, input: &mut Invocation, out: &mut dyn Write) -> Result<i32> {
///         let word = input.argument_value("word")?.unwrap_or_default();
///         writeln!(out, "{word}")?;
///         Ok(0)
///     }
/// }
/// ```
pub trait Command {
    /// One-line summary shown in the command list.
    fn description(&self) -> String;

    /// Declares options and arguments. The default declares nothing.
    fn configure(&self, schema: &mut CommandSchema) -> std::result::Result<(), OrderError> {
        let _ = schema;
        Ok(())
    }

    /// Detailed help text, given the rendered usage.
    fn help(&self, usage: &str) -> String {
        format!("{}\n\n{usage}", self.description())
    }

    /// Runs the command and returns its exit code.
    fn execute(&self, input: &mut Invocation, out: &mut dyn Write) -> Result<i32>;
}
