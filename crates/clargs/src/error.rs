//! Error types for registration, parsing and value retrieval.
//!
//! The `Display` output of every variant is the diagnostic shown to users, so
//! the wording here is stable.

use thiserror::Error;

/// A declaration rejected by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("Option or flag with short name '{0}' is already specified")]
    ShortNameTaken(char),

    #[error("Option or flag with name '{0}' is already specified")]
    LongNameTaken(String),

    #[error("Names cannot contain spaces ({0})")]
    NameWithSpaces(String),

    #[error("Long name '{0}' is too short")]
    LongNameTooShort(String),

    #[error("Short name '{0}' must be an ASCII letter")]
    InvalidShortName(char),

    #[error(
        "Invalid number of values for option {name}. Specify more than 1 values for vector option, or use option"
    )]
    VectorArityTooSmall { name: String, arity: usize },
}

/// Why a call to `Parser::parse` did not produce `Args`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Parser has {} registration error(s); refusing to parse", .errors.len())]
    InvalidRegistry { errors: Vec<RegistrationError> },

    /// `-h`/`--help` was given. Carries the rendered help text.
    #[error("{0}")]
    HelpRequested(String),

    #[error("Option {0} requires a value")]
    OptionRequiresValue(String),

    #[error("Option {0} is required")]
    OptionRequired(String),

    #[error("Invalid number of values for option {name}, expected {expected}")]
    InvalidNumberOfValues { name: String, expected: usize },

    #[error("Positional argument {0} is required")]
    PositionalRequired(String),

    #[error("List {0} is required")]
    ListRequired(String),
}

impl ParseError {
    /// Whether this is the help short-circuit rather than a real failure.
    pub fn is_help(&self) -> bool {
        matches!(self, Self::HelpRequested(_))
    }
}

/// A failed lookup on parsed `Args`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Error getting value. Option {0} was not given")]
    NotGiven(String),

    #[error("Error getting positional. {0} was not given")]
    PositionalNotGiven(String),

    #[error("Positional index {index} is out of range ({len} positionals)")]
    PositionalIndexOutOfRange { index: usize, len: usize },

    #[error("Cannot convert '{value}' given for {name} to {target}")]
    Conversion {
        name: String,
        value: String,
        target: &'static str,
    },
}

pub type ParseResult<T> = Result<T, ParseError>;
pub type QueryResult<T> = Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_stable() {
        assert_eq!(
            RegistrationError::ShortNameTaken('f').to_string(),
            "Option or flag with short name 'f' is already specified"
        );
        assert_eq!(
            ParseError::InvalidNumberOfValues {
                name: "foo".to_string(),
                expected: 4
            }
            .to_string(),
            "Invalid number of values for option foo, expected 4"
        );
        assert_eq!(
            ParseError::InvalidRegistry {
                errors: vec![RegistrationError::LongNameTooShort("f".to_string())]
            }
            .to_string(),
            "Parser has 1 registration error(s); refusing to parse"
        );
    }

    #[test]
    fn help_is_not_a_real_failure() {
        assert!(ParseError::HelpRequested(String::new()).is_help());
        assert!(!ParseError::OptionRequired("foo".to_string()).is_help());
    }
}
