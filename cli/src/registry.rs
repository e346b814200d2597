//! Command registry and dispatch by name.

use std::fmt;
use std::io::Write;

use subcmd_core::{CommandSchema, Invocation, InvocationContext};
use tracing::{debug, warn};

use crate::help::{HELP_COMMAND, HelpCommand};
use crate::{CliError, Command, Result};

/// Builds a fresh handler for one run.
pub type CommandFactory = Box<dyn Fn() -> Box<dyn Command>>;

/// Registered sub-commands, in registration order.
///
/// A `help` command is always available and is not part of the registered
/// set; registering another command named `help` has no effect.
///
/// # Examples
///
/// ```
/// use std::io::Write;
///
/// use subcmd_cli::{Cli, Command, Result};
/// use subcmd_core::Invocation;
///
/// #[derive(Default)]
/// struct Ping;
///
/// impl Command for Ping {
///     fn description(&self) -> String {
///         "Reply with pong".to_string()
///     }
///
///     fn execute(&self, _input: &mut Invocation, out: &mut dyn Write) -> Result<i32> {
///         writeln!(out, "pong")?;
///         Ok(0)
///     }
/// }
///
/// let mut cli = Cli::new();
/// cli.register::<Ping>("ping");
///
/// let mut out = Vec::new();
/// let code = cli.run(["app", "ping"], &mut out).unwrap();
/// assert_eq!(code, 0);
/// assert_eq!(String::from_utf8(out).unwrap(), "pong\n");
/// ```
#[derive(Default)]
pub struct Cli {
    program: Option<String>,
    commands: Vec<(String, CommandFactory)>,
}

impl Cli {
    /// Creates a registry holding only the built-in `help` command.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the program name shown in usage and help text.
    ///
    /// Without it the file name of `argv[0]` is used.
    pub fn with_program(mut self, program: &str) -> Self {
        self.program = Some(program.to_string());
        self
    }

    /// Registers a factory under `name`, replacing any earlier entry of that
    /// name in place.
    pub fn add<F>(&mut self, name: &str, factory: F) -> &mut Self
    where
        F: Fn() -> Box<dyn Command> + 'static,
    {
        if name == HELP_COMMAND {
            warn!(command = name, "Ignoring registration shadowing the built-in help command");
            return self;
        }

        let factory: CommandFactory = Box::new(factory);
        match self.commands.iter_mut().find(|(existing, _)| existing == name) {
            Some(entry) => entry.1 = factory,
            None => self.commands.push((name.to_string(), factory)),
        }
        self
    }

    /// Registers a command type constructed with [`Default`].
    pub fn register<C>(&mut self, name: &str) -> &mut Self
    where
        C: Command + Default + 'static,
    {
        self.add(name, || Box::new(C::default()))
    }

    /// Names of all commands, `help` first.
    pub fn command_names(&self) -> Vec<&str> {
        std::iter::once(HELP_COMMAND)
            .chain(self.commands.iter().map(|(name, _)| name.as_str()))
            .collect()
    }

    /// Creates the handler registered under `name`.
    pub fn instantiate(&self, name: &str) -> Result<Box<dyn Command + '_>> {
        if name == HELP_COMMAND {
            return Ok(Box::new(HelpCommand::new(self)));
        }
        let (_, factory) = self
            .commands
            .iter()
            .find(|(registered, _)| registered == name)
            .ok_or_else(|| CliError::UnknownCommand(name.to_string()))?;
        Ok(factory())
    }

    /// Dispatches `argv` and returns the command's exit code.
    ///
    /// `argv[0]` is the program path and `argv[1]` the sub-command name,
    /// defaulting to `help` when absent or empty. Command output goes to
    /// `out`.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::UnknownCommand`] for unregistered names, and
    /// whatever the command's configuration or execution fails with.
    pub fn run<I, S>(&self, argv: I, out: &mut dyn Write) -> Result<i32>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut context = InvocationContext::from_argv(argv);
        if let Some(program) = &self.program {
            context.program = program.clone();
        }
        if context.subcommand.is_empty() {
            context.subcommand = HELP_COMMAND.to_string();
        }

        debug!(command = %context.subcommand, tokens = ?context.tokens, "Dispatching command");
        let command = self.instantiate(&context.subcommand)?;
        let mut input = configure(command.as_ref(), context)?;
        let code = command.execute(&mut input, out)?;
        debug!(command = %input.context().subcommand, code, "Command finished");
        Ok(code)
    }

    /// Detailed help for `name`, with usage naming `program name`.
    pub fn command_help(&self, program: &str, name: &str) -> Result<String> {
        let command = self.instantiate(name)?;
        let input = configure(
            command.as_ref(),
            InvocationContext::new(program, name, Vec::new()),
        )?;
        Ok(command.help(&input.usage()))
    }

    /// `(name, description)` for every command, `help` first.
    pub fn descriptions(&self) -> Result<Vec<(String, String)>> {
        self.command_names()
            .into_iter()
            .map(|name| -> Result<(String, String)> {
                let command = self.instantiate(name)?;
                Ok((name.to_string(), command.description()))
            })
            .collect()
    }
}

impl fmt::Debug for Cli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cli")
            .field("program", &self.program)
            .field("commands", &self.command_names())
            .finish()
    }
}

fn configure(command: &dyn Command, context: InvocationContext) -> Result<Invocation> {
    let mut schema = CommandSchema::new();
    command.configure(&mut schema)?;
    Ok(Invocation::with_schema(context, schema))
}
