//! A command's schema bound to the tokens it was invoked with.
//!
//! [`Invocation`] is what a command handler holds: it declares options and
//! arguments through it, and reads values back from it. Tokens are parsed on
//! the first value access and the result is kept for the lifetime of the
//! invocation, even if more declarations are made afterwards.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    ArgumentSpec, CommandSchema, OptionSpec, OptionValue, OrderError, ParseError, ParsedValues,
    parse, render_usage,
};

/// Where a command was invoked from and with which tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationContext {
    /// Program name as shown in usage text
    pub program: String,
    /// Sub-command name
    pub subcommand: String,
    /// Tokens following the sub-command name
    pub tokens: Vec<String>,
}

impl InvocationContext {
    pub fn new(program: &str, subcommand: &str, tokens: Vec<String>) -> Self {
        Self {
            program: program.to_string(),
            subcommand: subcommand.to_string(),
            tokens,
        }
    }

    /// Splits a full argument vector.
    ///
    /// Index 0 is the program path (reduced to its file name), index 1 the
    /// sub-command, the rest are tokens. Missing entries become empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use subcmd_core::InvocationContext;
    ///
    /// let ctx = InvocationContext::from_argv(["/usr/bin/app", "copy", "-f", "a"]);
    /// assert_eq!(ctx.program, "app");
    /// assert_eq!(ctx.subcommand, "copy");
    /// assert_eq!(ctx.tokens, vec!["-f", "a"]);
    /// ```
    pub fn from_argv<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut argv = argv.into_iter().map(Into::<String>::into);
        let program = argv.next().map(|p| program_name(&p)).unwrap_or_default();
        let subcommand = argv.next().unwrap_or_default();
        Self {
            program,
            subcommand,
            tokens: argv.collect(),
        }
    }
}

/// File name component of a program path, or the path itself if it has none.
pub fn program_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

#[derive(Debug, Clone, Default)]
enum ParseState {
    #[default]
    Unparsed,
    Parsed(ParsedValues),
}

/// Schema plus raw tokens, parsed lazily and at most once.
///
/// # Examples
///
/// ```
/// use subcmd_core::*;
///
/// let ctx = InvocationContext::new("app", "greet", vec!["-l".into(), "bob".into()]);
/// let mut input = Invocation::new(ctx);
/// input.declare_option(OptionSpec::flag("loud", 'l', "Shout")).unwrap();
/// input.declare_argument(ArgumentSpec::required("name", "Who")).unwrap();
///
/// assert!(input.flag("loud").unwrap());
/// assert_eq!(input.argument_value("name").unwrap(), Some("bob"));
/// ```
#[derive(Debug, Clone)]
pub struct Invocation {
    context: InvocationContext,
    schema: CommandSchema,
    state: ParseState,
}

impl Invocation {
    pub fn new(context: InvocationContext) -> Self {
        Self::with_schema(context, CommandSchema::new())
    }

    /// Binds an already-built schema.
    pub fn with_schema(context: InvocationContext, schema: CommandSchema) -> Self {
        Self {
            context,
            schema,
            state: ParseState::Unparsed,
        }
    }

    pub fn context(&self) -> &InvocationContext {
        &self.context
    }

    pub fn schema(&self) -> &CommandSchema {
        &self.schema
    }

    /// See [`CommandSchema::declare_option`].
    pub fn declare_option(&mut self, option: OptionSpec) -> Result<(), OrderError> {
        self.schema.declare_option(option)
    }

    /// See [`CommandSchema::declare_argument`].
    pub fn declare_argument(&mut self, argument: ArgumentSpec) -> Result<(), OrderError> {
        self.schema.declare_argument(argument)
    }

    /// Whether the tokens have been parsed yet.
    pub fn is_parsed(&self) -> bool {
        matches!(self.state, ParseState::Parsed(_))
    }

    /// Parsed values, parsing the tokens on first call.
    ///
    /// A failed parse leaves the invocation unparsed.
    pub fn parsed(&mut self) -> Result<&ParsedValues, ParseError> {
        if let ParseState::Unparsed = self.state {
            let values = parse(&self.schema, &self.context.tokens)?;
            self.state = ParseState::Parsed(values);
        }
        match &self.state {
            ParseState::Parsed(values) => Ok(values),
            ParseState::Unparsed => unreachable!("state set above"),
        }
    }

    /// Value of a declared option.
    pub fn option_value(&mut self, name: &str) -> Result<Option<&OptionValue>, ParseError> {
        Ok(self.parsed()?.option(name))
    }

    /// Value of a positional argument, `None` if it received no token.
    pub fn argument_value(&mut self, name: &str) -> Result<Option<&str>, ParseError> {
        Ok(self.parsed()?.argument(name))
    }

    /// See [`ParsedValues::flag`].
    pub fn flag(&mut self, name: &str) -> Result<bool, ParseError> {
        Ok(self.parsed()?.flag(name))
    }

    /// Usage text for this invocation's program and sub-command.
    pub fn usage(&self) -> String {
        render_usage(&self.schema, &self.context.program, &self.context.subcommand)
    }
}
