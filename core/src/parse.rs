//! Single-pass parser turning raw tokens into option and argument values.
//!
//! Parsing runs in two phases that never interleave:
//!
//! 1. **Options.** Leading tokens shaped like `-x` or `--name` are resolved
//!    against the declared options. The first token that is not
//!    option-shaped ends this phase.
//! 2. **Arguments.** Remaining tokens are handed to the declared positional
//!    arguments in order. Anything left over is discarded.
//!
//! Once phase two starts, option-shaped tokens are plain argument values.
//!
//! # Examples
//!
//! ```
//! use subcmd_core::*;
//!
//! let mut schema = CommandSchema::new();
//! schema.declare_option(OptionSpec::flag("verbose", 'v', "Print more")).unwrap();
//! schema.declare_argument(ArgumentSpec::required("file", "Input file")).unwrap();
//!
//! let values = parse(&schema, &["-v", "input.txt"]).unwrap();
//! assert!(values.flag("verbose"));
//! assert_eq!(values.argument("file"), Some("input.txt"));
//! ```

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{CommandSchema, OptionKind, OptionValue, ParseError};

// Word characters are ASCII only; `-é` is not an option token.
static OPTION_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:-(?P<short>[0-9A-Za-z_])|--(?P<long>[0-9A-Za-z_]+))$")
        .expect("static regex must compile")
});

/// Returns `true` if `token` is shaped like an option (`-x` or `--name`).
///
/// # Examples
///
/// ```
/// use subcmd_core::is_option_token;
///
/// assert!(is_option_token("-v"));
/// assert!(is_option_token("--verbose"));
/// assert!(!is_option_token("-"));
/// assert!(!is_option_token("-vx"));
/// assert!(!is_option_token("--out=file"));
/// assert!(!is_option_token("file.txt"));
/// ```
pub fn is_option_token(token: &str) -> bool {
    OPTION_TOKEN.is_match(token)
}

/// Name carried by an option-shaped token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OptionName<'a> {
    Short(char),
    Long(&'a str),
}

fn option_name(token: &str) -> Option<OptionName<'_>> {
    let caps = OPTION_TOKEN.captures(token)?;
    if let Some(short) = caps.name("short") {
        return short.as_str().chars().next().map(OptionName::Short);
    }
    caps.name("long").map(|long| OptionName::Long(long.as_str()))
}

/// Result of parsing a token sequence against a [`CommandSchema`].
///
/// `options` holds every declared option, set to its default unless the
/// command line overrode it. `arguments` holds only the arguments that
/// received a token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedValues {
    /// Option name → value
    pub options: BTreeMap<String, OptionValue>,
    /// Argument name → value
    pub arguments: BTreeMap<String, String>,
}

impl ParsedValues {
    /// Value of a declared option, or `None` if no such option exists.
    pub fn option(&self, name: &str) -> Option<&OptionValue> {
        self.options.get(name)
    }

    /// Value of a positional argument, or `None` if it received no token.
    pub fn argument(&self, name: &str) -> Option<&str> {
        self.arguments.get(name).map(String::as_str)
    }

    /// Whether an option is set; unknown names read as unset.
    pub fn flag(&self, name: &str) -> bool {
        self.option(name).is_some_and(OptionValue::is_set)
    }
}

/// Parses `tokens` against `schema`.
///
/// `tokens` excludes the program path and the sub-command name.
///
/// # Errors
///
/// - [`ParseError::UnknownOption`] when an option-shaped token in the
///   option phase matches no declared option.
/// - [`ParseError::MissingArgument`] when a required argument has no token
///   left.
///
/// # Examples
///
/// A value-taking option swallows the next token even if it looks like an
/// option:
///
/// ```
/// use subcmd_core::*;
///
/// let mut schema = CommandSchema::new();
/// schema.declare_option(OptionSpec::required_value("out", 'o', "", "Output")).unwrap();
/// schema.declare_option(OptionSpec::flag("name", 'n', "Name")).unwrap();
///
/// let values = parse(&schema, &["--out", "--name"]).unwrap();
/// assert_eq!(values.option("out"), Some(&OptionValue::from("--name")));
/// assert_eq!(values.option("name"), Some(&OptionValue::Bool(false)));
/// ```
pub fn parse<S: AsRef<str>>(schema: &CommandSchema, tokens: &[S]) -> Result<ParsedValues, ParseError> {
    let mut values = ParsedValues::default();
    for option in schema.options() {
        values
            .options
            .insert(option.name.clone(), option.default.clone());
    }

    let mut rest = tokens.iter().map(|t| t.as_ref()).peekable();

    while let Some(token) = rest.next_if(|t| is_option_token(t)) {
        let option = match option_name(token) {
            Some(OptionName::Short(short)) => schema.find_option_by_short(short),
            Some(OptionName::Long(long)) => schema.find_option_by_long(long),
            None => None,
        }
        .ok_or_else(|| ParseError::UnknownOption(token.to_string()))?;

        let value = match option.kind {
            OptionKind::Bool => Some(OptionValue::Bool(true)),
            OptionKind::RequiredValue => Some(
                rest.next()
                    .map(OptionValue::from)
                    .unwrap_or_else(|| option.default.clone()),
            ),
            OptionKind::OptionalValue => {
                if rest.peek().is_some_and(|next| is_option_token(next)) {
                    None
                } else {
                    Some(
                        rest.next()
                            .map(OptionValue::from)
                            .unwrap_or_else(|| option.default.clone()),
                    )
                }
            }
        };

        match value {
            Some(value) => {
                debug!(option = %option.name, %value, "Parsed option");
                values.options.insert(option.name.clone(), value);
            }
            None => debug!(option = %option.name, "Option left at default"),
        }
    }

    for argument in schema.arguments() {
        match rest.next() {
            Some(token) => {
                debug!(argument = %argument.name, value = token, "Parsed argument");
                values
                    .arguments
                    .insert(argument.name.clone(), token.to_string());
            }
            None if argument.required => {
                return Err(ParseError::MissingArgument(argument.name.clone()));
            }
            None => {}
        }
    }

    let discarded: Vec<&str> = rest.collect();
    if !discarded.is_empty() {
        debug!(tokens = ?discarded, "Discarding unused trailing tokens");
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArgumentSpec, OptionSpec};

    fn schema_with(options: Vec<OptionSpec>, arguments: Vec<ArgumentSpec>) -> CommandSchema {
        let mut schema = CommandSchema::new();
        for option in options {
            schema.declare_option(option).unwrap();
        }
        for argument in arguments {
            schema.declare_argument(argument).unwrap();
        }
        schema
    }

    #[test]
    fn test_option_token_grammar() {
        assert!(is_option_token("-v"));
        assert!(is_option_token("-9"));
        assert!(is_option_token("-_"));
        assert!(is_option_token("--dry_run2"));

        assert!(!is_option_token(""));
        assert!(!is_option_token("-"));
        assert!(!is_option_token("--"));
        assert!(!is_option_token("-ab"));
        assert!(!is_option_token("---x"));
        assert!(!is_option_token("--dry-run"));
        assert!(!is_option_token("--out=x"));
        assert!(!is_option_token("-é"));
        assert!(!is_option_token(" -v"));
    }

    #[test]
    fn test_bool_option_and_required_argument() {
        let schema = schema_with(
            vec![OptionSpec::flag("verbose", 'v', "")],
            vec![ArgumentSpec::required("file", "")],
        );

        let values = parse(&schema, &["-v", "input.txt"]).unwrap();
        assert_eq!(values.options.len(), 1);
        assert_eq!(values.option("verbose"), Some(&OptionValue::Bool(true)));
        assert_eq!(values.arguments.len(), 1);
        assert_eq!(values.argument("file"), Some("input.txt"));
    }

    #[test]
    fn test_defaults_present_when_absent() {
        let schema = schema_with(
            vec![
                OptionSpec::flag("verbose", 'v', ""),
                OptionSpec::optional_value("color", 'c', "red", ""),
            ],
            vec![ArgumentSpec::optional("name", "")],
        );

        let values = parse::<&str>(&schema, &[]).unwrap();
        assert_eq!(values.option("verbose"), Some(&OptionValue::Bool(false)));
        assert_eq!(values.option("color"), Some(&OptionValue::from("red")));
        assert!(values.arguments.is_empty());
        assert_eq!(values.argument("name"), None);
    }

    #[test]
    fn test_long_and_short_resolution() {
        let schema = schema_with(
            vec![
                OptionSpec::flag("all", 'a', ""),
                OptionSpec::flag("brief", 'b', ""),
            ],
            vec![],
        );

        let values = parse(&schema, &["--all", "-b"]).unwrap();
        assert!(values.flag("all"));
        assert!(values.flag("brief"));

        let err = parse(&schema, &["-x"]).unwrap_err();
        assert_eq!(err, ParseError::UnknownOption("-x".to_string()));

        // Short names are not matched by the long form and vice versa
        let err = parse(&schema, &["--a"]).unwrap_err();
        assert_eq!(err, ParseError::UnknownOption("--a".to_string()));
        // `-all` is not option-shaped, so it ends the option phase
        let values = parse(&schema, &["-all"]).unwrap();
        assert!(!values.flag("all"));
    }

    #[test]
    fn test_optional_value_stops_at_option_token() {
        let schema = schema_with(
            vec![OptionSpec::optional_value("color", 'c', "red", "")],
            vec![ArgumentSpec::optional("name", "")],
        );

        let err = parse(&schema, &["--color", "--other"]).unwrap_err();
        assert_eq!(err, ParseError::UnknownOption("--other".to_string()));
    }

    #[test]
    fn test_optional_value_consumes_plain_token() {
        let schema = schema_with(
            vec![
                OptionSpec::optional_value("color", 'c', "red", ""),
                OptionSpec::flag("loud", 'l', ""),
            ],
            vec![ArgumentSpec::optional("name", "")],
        );

        let values = parse(&schema, &["-c", "blue", "bob"]).unwrap();
        assert_eq!(values.option("color"), Some(&OptionValue::from("blue")));
        assert_eq!(values.argument("name"), Some("bob"));

        let values = parse(&schema, &["-c", "-l", "bob"]).unwrap();
        assert_eq!(values.option("color"), Some(&OptionValue::from("red")));
        assert!(values.flag("loud"));
        assert_eq!(values.argument("name"), Some("bob"));

        let values = parse(&schema, &["-c"]).unwrap();
        assert_eq!(values.option("color"), Some(&OptionValue::from("red")));
    }

    #[test]
    fn test_optional_value_keeps_earlier_value_before_option_token() {
        let schema = schema_with(
            vec![
                OptionSpec::optional_value("color", 'c', "red", ""),
                OptionSpec::flag("loud", 'l', ""),
            ],
            vec![],
        );

        let values = parse(&schema, &["-c", "blue", "-c", "-l"]).unwrap();
        assert_eq!(values.option("color"), Some(&OptionValue::from("blue")));
    }

    #[test]
    fn test_required_value_is_greedy() {
        let schema = schema_with(
            vec![
                OptionSpec::required_value("out", 'o', "a.out", ""),
                OptionSpec::flag("name", 'n', ""),
            ],
            vec![ArgumentSpec::optional("file", "")],
        );

        let values = parse(&schema, &["--out", "--name"]).unwrap();
        assert_eq!(values.option("out"), Some(&OptionValue::from("--name")));
        assert!(!values.flag("name"));
        assert!(values.arguments.is_empty());
    }

    #[test]
    fn test_required_value_without_token_falls_back_to_default() {
        let schema = schema_with(
            vec![OptionSpec::required_value("out", 'o', "a.out", "")],
            vec![],
        );

        let values = parse(&schema, &["-o", "first", "-o"]).unwrap();
        assert_eq!(values.option("out"), Some(&OptionValue::from("a.out")));
    }

    #[test]
    fn test_missing_required_argument() {
        let schema = schema_with(vec![], vec![ArgumentSpec::required("file", "")]);

        let err = parse::<&str>(&schema, &[]).unwrap_err();
        assert_eq!(err, ParseError::MissingArgument("file".to_string()));
    }

    #[test]
    fn test_option_tokens_after_first_argument_are_values() {
        let schema = schema_with(
            vec![OptionSpec::flag("verbose", 'v', "")],
            vec![
                ArgumentSpec::required("src", ""),
                ArgumentSpec::optional("dest", ""),
            ],
        );

        let values = parse(&schema, &["a.txt", "-v", "--unknown"]).unwrap();
        assert!(!values.flag("verbose"));
        assert_eq!(values.argument("src"), Some("a.txt"));
        assert_eq!(values.argument("dest"), Some("-v"));
    }

    #[test]
    fn test_trailing_tokens_are_discarded() {
        let schema = schema_with(vec![], vec![ArgumentSpec::optional("one", "")]);

        let values = parse(&schema, &["x", "y", "z"]).unwrap();
        assert_eq!(values.arguments.len(), 1);
        assert_eq!(values.argument("one"), Some("x"));
    }

    #[test]
    fn test_bare_dash_ends_option_phase() {
        let schema = schema_with(
            vec![OptionSpec::flag("verbose", 'v', "")],
            vec![ArgumentSpec::required("input", "")],
        );

        let values = parse(&schema, &["-", "-v"]).unwrap();
        assert_eq!(values.argument("input"), Some("-"));
        assert!(!values.flag("verbose"));
    }

    #[test]
    fn test_accepts_owned_tokens() {
        let schema = schema_with(vec![], vec![ArgumentSpec::required("file", "")]);
        let tokens = vec!["readme.md".to_string()];

        let values = parse(&schema, &tokens).unwrap();
        assert_eq!(values.argument("file"), Some("readme.md"));
    }

    #[test]
    fn test_parsed_values_serialize() {
        let schema = schema_with(
            vec![OptionSpec::flag("verbose", 'v', "")],
            vec![ArgumentSpec::required("file", "")],
        );

        let values = parse(&schema, &["-v", "input.txt"]).unwrap();
        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "options": { "verbose": true },
                "arguments": { "file": "input.txt" }
            })
        );
    }
}
