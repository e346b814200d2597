//! Usage text rendering.
//!
//! The layout is fixed:
//!
//! ```text
//! Usage:
//!   <program> <subcommand> [options] <required> [optional]
//! options:
//!   -s, --name: help [default]
//!
//! arguments:
//!   name - help
//! ```
//!
//! The `options:` and `arguments:` blocks only appear when something was
//! declared for them.

use std::fmt::Write;

use crate::{ArgumentSpec, CommandSchema, OptionSpec};

/// Renders usage text for `schema` as invoked by `program subcommand`.
///
/// Pure over the schema; never parses anything.
///
/// # Examples
///
/// ```
/// use subcmd_core::*;
///
/// let mut schema = CommandSchema::new();
/// schema.declare_option(OptionSpec::flag("help", 'h', "show help")).unwrap();
/// schema.declare_argument(ArgumentSpec::optional("topic", "Topic to show")).unwrap();
///
/// assert_eq!(
///     render_usage(&schema, "app", "doc"),
///     "Usage:\n  app doc [options] [topic]\n\
///      options:\n  -h, --help: show help [false]\n\
///      \narguments:\n  topic - Topic to show\n",
/// );
/// ```
pub fn render_usage(schema: &CommandSchema, program: &str, subcommand: &str) -> String {
    let mut out = format!("Usage:\n  {program} {subcommand} ");
    if schema.has_options() {
        out.push_str("[options] ");
    }
    let synopsis: Vec<String> = schema.arguments().iter().map(synopsis_entry).collect();
    out.push_str(&synopsis.join(" "));

    if schema.has_options() {
        out.push_str("\noptions:\n");
        for option in schema.options() {
            option_line(&mut out, option);
        }
    }

    if schema.has_arguments() {
        out.push_str("\narguments:\n");
        for argument in schema.arguments() {
            let _ = writeln!(out, "  {} - {}", argument.name, argument.help);
        }
    }

    out
}

fn synopsis_entry(argument: &ArgumentSpec) -> String {
    if argument.required {
        format!("<{}>", argument.name)
    } else {
        format!("[{}]", argument.name)
    }
}

fn option_line(out: &mut String, option: &OptionSpec) {
    // Writing to a String cannot fail.
    let _ = writeln!(
        out,
        "  -{}, --{}: {} [{}]",
        option.short, option.name, option.help, option.default
    );
}
