//! Ordered option and argument declarations for one command.
//!
//! [`CommandSchema`] enforces two ordering rules while it is built:
//! every option comes before every argument, and required arguments come
//! before optional ones.
//!
//! Names are not checked for uniqueness. Declaring two options or two
//! arguments with the same name is a caller error: option lookups resolve
//! to the first declaration while parsed values are keyed by name, so the
//! later declaration's entry wins in the result maps.
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
//! // Too late for options now
//! let err = schema.declare_option(OptionSpec::flag("quiet", 'q', "")).unwrap_err();
//! assert!(matches!(err, OrderError::OptionAfterArgument { .. }));
//! ```

use serde::{Deserialize, Serialize};

use crate::{ArgumentSpec, OptionSpec, OrderError};

/// Declared options and positional arguments of a command, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSchema {
    options: Vec<OptionSpec>,
    arguments: Vec<ArgumentSpec>,
}

impl CommandSchema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an option declaration.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::OptionAfterArgument`] once any argument has been
    /// declared.
    pub fn declare_option(&mut self, option: OptionSpec) -> Result<(), OrderError> {
        if !self.arguments.is_empty() {
            return Err(OrderError::OptionAfterArgument {
                option: option.name,
            });
        }
        self.options.push(option);
        Ok(())
    }

    /// Appends a positional argument declaration.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::RequiredAfterOptional`] when `argument` is
    /// required and the previously declared argument is not.
    ///
    /// # Examples
    ///
    /// ```
    /// use subcmd_core::*;
    ///
    /// let mut schema = CommandSchema::new();
    /// schema.declare_argument(ArgumentSpec::optional("topic", "")).unwrap();
    /// assert_eq!(
    ///     schema.declare_argument(ArgumentSpec::required("page", "")),
    ///     Err(OrderError::RequiredAfterOptional { argument: "page".into() }),
    /// );
    /// ```
    pub fn declare_argument(&mut self, argument: ArgumentSpec) -> Result<(), OrderError> {
        if argument.required && self.arguments.last().is_some_and(|prev| !prev.required) {
            return Err(OrderError::RequiredAfterOptional {
                argument: argument.name,
            });
        }
        self.arguments.push(argument);
        Ok(())
    }

    /// Declared options, in declaration order.
    pub fn options(&self) -> &[OptionSpec] {
        &self.options
    }

    /// Declared arguments, in declaration order.
    pub fn arguments(&self) -> &[ArgumentSpec] {
        &self.arguments
    }

    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }

    pub fn has_arguments(&self) -> bool {
        !self.arguments.is_empty()
    }

    /// Finds the first option declared with the given short name.
    pub fn find_option_by_short(&self, short: char) -> Option<&OptionSpec> {
        self.options.iter().find(|o| o.short == short)
    }

    /// Finds the first option declared with the given long name.
    pub fn find_option_by_long(&self, name: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|o| o.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_then_arguments_in_order() {
        let mut schema = CommandSchema::new();
        schema
            .declare_option(OptionSpec::flag("verbose", 'v', ""))
            .unwrap();
        schema
            .declare_option(OptionSpec::required_value("out", 'o', "", ""))
            .unwrap();
        schema
            .declare_argument(ArgumentSpec::required("src", ""))
            .unwrap();
        schema
            .declare_argument(ArgumentSpec::required("dest", ""))
            .unwrap();
        schema
            .declare_argument(ArgumentSpec::optional("mode", ""))
            .unwrap();
        schema
            .declare_argument(ArgumentSpec::optional("extra", ""))
            .unwrap();

        assert_eq!(schema.options().len(), 2);
        let names: Vec<&str> = schema.arguments().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["src", "dest", "mode", "extra"]);
    }

    #[test]
    fn test_option_after_argument_rejected() {
        let mut schema = CommandSchema::new();
        schema
            .declare_argument(ArgumentSpec::optional("topic", ""))
            .unwrap();

        let err = schema
            .declare_option(OptionSpec::flag("help", 'h', ""))
            .unwrap_err();
        assert_eq!(
            err,
            OrderError::OptionAfterArgument {
                option: "help".to_string()
            }
        );
        assert!(!schema.has_options());
    }

    #[test]
    fn test_required_after_optional_rejected() {
        let mut schema = CommandSchema::new();
        schema
            .declare_argument(ArgumentSpec::required("a", ""))
            .unwrap();
        schema
            .declare_argument(ArgumentSpec::optional("b", ""))
            .unwrap();

        let err = schema
            .declare_argument(ArgumentSpec::required("c", ""))
            .unwrap_err();
        assert_eq!(
            err,
            OrderError::RequiredAfterOptional {
                argument: "c".to_string()
            }
        );
        assert_eq!(schema.arguments().len(), 2);
    }

    #[test]
    fn test_duplicate_names_are_accepted() {
        let mut schema = CommandSchema::new();
        schema
            .declare_option(OptionSpec::flag("all", 'a', "first"))
            .unwrap();
        schema
            .declare_option(OptionSpec::flag("all", 'A', "second"))
            .unwrap();

        assert_eq!(schema.options().len(), 2);
        assert_eq!(schema.find_option_by_long("all").unwrap().help, "first");
        assert_eq!(schema.find_option_by_short('A').unwrap().help, "second");
        assert!(schema.find_option_by_short('x').is_none());
    }
}
