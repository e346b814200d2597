//! Declaration types for command options and positional arguments.
//!
//! This module defines the data model a command uses to describe what it
//! accepts on the command line. The types derive [`serde`] traits so a
//! handler can dump its declarations or parsed values as JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How an option treats the token that follows it.
///
/// # Examples
///
/// ```
/// use subcmd_core::OptionKind;
///
/// assert!(!OptionKind::Bool.takes_value());
/// assert!(OptionKind::RequiredValue.takes_value());
/// assert!(OptionKind::OptionalValue.takes_value());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionKind {
    /// Switch; presence sets the value to `true`.
    Bool,
    /// Always consumes the next token, whatever it looks like.
    RequiredValue,
    /// Consumes the next token only if it is not option-shaped.
    OptionalValue,
}

impl OptionKind {
    /// Returns `true` for kinds that may consume a value token.
    pub fn takes_value(self) -> bool {
        !matches!(self, Self::Bool)
    }
}

/// Value held by an option, either its default or what was parsed.
///
/// Serializes untagged, so `Bool(true)` becomes `true` and
/// `Text("red".into())` becomes `"red"`.
///
/// # Examples
///
/// ```
/// use subcmd_core::OptionValue;
///
/// let v = OptionValue::from("red");
/// assert_eq!(v.as_str(), Some("red"));
/// assert_eq!(v.to_string(), "red");
///
/// let b = OptionValue::from(false);
/// assert_eq!(b.as_bool(), Some(false));
/// assert_eq!(b.to_string(), "false");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Boolean value.
    Bool(bool),
    /// String value.
    Text(String),
}

impl OptionValue {
    /// Returns the boolean, if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Text(_) => None,
        }
    }

    /// Returns the string, if this is a text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Bool(_) => None,
            Self::Text(s) => Some(s),
        }
    }

    /// Truthiness as a handler would test it: `true`, or any non-empty text.
    pub fn is_set(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Text(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Declaration of a command option.
///
/// An option has a long name (matched as `--name`), a single-character short
/// name (matched as `-s`), a [`OptionKind`], a default value and help text.
///
/// Use [`flag`](OptionSpec::flag), [`required_value`](OptionSpec::required_value)
/// or [`optional_value`](OptionSpec::optional_value) to build one.
///
/// # Examples
///
/// ```
/// use subcmd_core::{OptionKind, OptionSpec, OptionValue};
///
/// let verbose = OptionSpec::flag("verbose", 'v', "Print more");
/// assert_eq!(verbose.kind, OptionKind::Bool);
/// assert_eq!(verbose.default, OptionValue::Bool(false));
///
/// let out = OptionSpec::required_value("out", 'o', "out.txt", "Output file");
/// assert_eq!(out.default, OptionValue::from("out.txt"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSpec {
    /// Long name, without the leading `--`
    pub name: String,
    /// Short name, without the leading `-`
    pub short: char,
    /// How the following token is treated
    pub kind: OptionKind,
    /// Value used when the option is absent or gets no value
    pub default: OptionValue,
    /// Help text shown in usage output
    pub help: String,
}

impl OptionSpec {
    /// Creates an option from all of its parts.
    pub fn new(
        name: &str,
        short: char,
        kind: OptionKind,
        default: impl Into<OptionValue>,
        help: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            short,
            kind,
            default: default.into(),
            help: help.to_string(),
        }
    }

    /// Creates a boolean switch defaulting to `false`.
    pub fn flag(name: &str, short: char, help: &str) -> Self {
        Self::new(name, short, OptionKind::Bool, false, help)
    }

    /// Creates an option that always consumes the following token.
    pub fn required_value(
        name: &str,
        short: char,
        default: impl Into<OptionValue>,
        help: &str,
    ) -> Self {
        Self::new(name, short, OptionKind::RequiredValue, default, help)
    }

    /// Creates an option whose value may be omitted.
    pub fn optional_value(
        name: &str,
        short: char,
        default: impl Into<OptionValue>,
        help: &str,
    ) -> Self {
        Self::new(name, short, OptionKind::OptionalValue, default, help)
    }

    /// Replaces the default value.
    pub fn with_default(mut self, default: impl Into<OptionValue>) -> Self {
        self.default = default.into();
        self
    }
}

/// Declaration of a positional argument.
///
/// # Examples
///
/// ```
/// use subcmd_core::ArgumentSpec;
///
/// let file = ArgumentSpec::required("file", "File to read");
/// assert!(file.required);
///
/// let topic = ArgumentSpec::optional("topic", "Help topic");
/// assert!(!topic.required);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentSpec {
    /// Name used to look the value up
    pub name: String,
    /// Whether parsing fails when no token is left for it
    pub required: bool,
    /// Help text shown in usage output
    pub help: String,
}

impl ArgumentSpec {
    /// Creates a positional argument.
    pub fn new(name: &str, required: bool, help: &str) -> Self {
        Self {
            name: name.to_string(),
            required,
            help: help.to_string(),
        }
    }

    /// Creates a required positional argument.
    pub fn required(name: &str, help: &str) -> Self {
        Self::new(name, true, help)
    }

    /// Creates an optional positional argument.
    pub fn optional(name: &str, help: &str) -> Self {
        Self::new(name, false, help)
    }
}
