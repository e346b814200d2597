//! The built-in `help` command.

use std::io::Write;

use subcmd_core::{ArgumentSpec, CommandSchema, Invocation, OrderError};

use crate::{Cli, Command, Result};

/// Name the built-in help command is dispatched under.
pub const HELP_COMMAND: &str = "help";

/// Lists commands, or prints detailed help for one of them.
///
/// ```text
/// app help          # list of commands
/// app help <name>   # help and usage for <name>
/// ```
#[derive(Debug)]
pub struct HelpCommand<'a> {
    cli: &'a Cli,
}

impl<'a> HelpCommand<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self { cli }
    }

    fn list(&self, program: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "List of commands:")?;
        for (name, description) in self.cli.descriptions()? {
            writeln!(out, "  {name} - {description}")?;
        }
        writeln!(
            out,
            "\nTo get detailed help for a command, run '{program} help <command name>'"
        )?;
        Ok(())
    }
}

impl Command for HelpCommand<'_> {
    fn description(&self) -> String {
        "Show help".to_string()
    }

    fn configure(&self, schema: &mut CommandSchema) -> std::result::Result<(), OrderError> {
        schema.declare_argument(ArgumentSpec::optional(
            "command",
            "Command name to show help for",
        ))
    }

    fn help(&self, usage: &str) -> String {
        format!(
            "The help command can be used to get instructions on how to run any of the configured commands.\n\n{usage}"
        )
    }

    fn execute(&self, input: &mut Invocation, out: &mut dyn Write) -> Result<i32> {
        let program = input.context().program.clone();
        match input.argument_value("command")?.map(str::to_string) {
            Some(name) => {
                let help = self.cli.command_help(&program, &name)?;
                writeln!(out, "{help}")?;
            }
            None => self.list(&program, out)?,
        }
        Ok(0)
    }
}
