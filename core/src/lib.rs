//! Option/argument schema, token parser and usage renderer for sub-commands.
//!
//! This crate is the engine behind a sub-command CLI:
//!
//! - [`CommandSchema`] — ordered option and positional argument
//!   declarations for one command, with ordering rules enforced as they
//!   are added.
//! - [`parse`] — turns the tokens following the sub-command name into
//!   [`ParsedValues`].
//! - [`render_usage`] — renders the schema as help text.
//! - [`Invocation`] — a schema bound to its tokens, parsed lazily on first
//!   access and cached afterwards.
//!
//! Only single-token `-x` and `--name` options are understood. There is no
//! flag clustering, no `--name=value` and no `--` terminator.
//!
//! # Example
//!
//! ```
//! use subcmd_core::*;
//!
//! let argv = ["/usr/bin/app", "copy", "-f", "--mode", "0600", "a.txt"];
//! let mut input = Invocation::new(InvocationContext::from_argv(argv));
//! input.declare_option(OptionSpec::flag("force", 'f', "Overwrite")).unwrap();
//! input.declare_option(OptionSpec::required_value("mode", 'm', "0644", "Mode")).unwrap();
//! input.declare_argument(ArgumentSpec::required("src", "Source")).unwrap();
//! input.declare_argument(ArgumentSpec::optional("dest", "Destination")).unwrap();
//!
//! assert!(input.flag("force").unwrap());
//! assert_eq!(input.option_value("mode").unwrap(), Some(&OptionValue::from("0600")));
//! assert_eq!(input.argument_value("src").unwrap(), Some("a.txt"));
//! assert_eq!(input.argument_value("dest").unwrap(), None);
//! assert!(input.usage().starts_with("Usage:\n  app copy [options] <src> [dest]\n"));
//! ```

mod error;
mod invocation;
mod parse;
mod schema;
mod types;
mod usage;

pub use error::{OrderError, ParseError};
pub use invocation::{Invocation, InvocationContext, program_name};
pub use parse::{ParsedValues, is_option_token, parse};
pub use schema::CommandSchema;
pub use types::*;
pub use usage::render_usage;
