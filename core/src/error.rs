//! Error types for schema declaration and token parsing.
//!
//! Declaration mistakes surface as [`OrderError`] when a command configures
//! itself; bad command lines surface as [`ParseError`] on first value access.

use thiserror::Error;

/// Declaration-order violations raised by [`CommandSchema`](crate::CommandSchema).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// An option was declared after at least one argument.
    #[error("option '{option}' must be declared before all arguments")]
    OptionAfterArgument { option: String },

    /// A required argument followed an optional one.
    #[error("required argument '{argument}' must be placed in front of optional arguments")]
    RequiredAfterOptional { argument: String },
}

/// Failures raised while parsing a raw token sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// An option-shaped token matched no declared option.
    #[error("unknown option '{0}'")]
    UnknownOption(String),

    /// No token was left for a required argument.
    #[error("argument '{0}' is required")]
    MissingArgument(String),
}
