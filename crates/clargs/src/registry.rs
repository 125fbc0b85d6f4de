//! Argument declarations and the checks run when they are added.

use crate::error::RegistrationError;
use crate::spec::{ArgKind, ArgumentSpec};

/// Long name of the flag every parser registers on construction.
pub const HELP_LONG: &str = "help";
const HELP_SHORT: char = 'h';
const HELP_DESCRIPTION: &str = "print this help message";

/// The declared arguments of one program.
///
/// Declarations that break a naming rule are not inserted; the error is kept
/// and [`Parser::parse`](crate::Parser::parse) refuses to run afterwards.
#[derive(Debug, Clone)]
pub struct Parser {
    description: String,
    specs: Vec<ArgumentSpec>,
    list: Option<ArgumentSpec>,
    errors: Vec<RegistrationError>,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Create a parser with only the built-in `-h, --help` flag.
    pub fn new() -> Self {
        Self {
            description: String::new(),
            specs: vec![ArgumentSpec::new(
                Some(HELP_SHORT),
                HELP_LONG,
                HELP_DESCRIPTION,
                ArgKind::Flag,
            )],
            list: None,
            errors: Vec::new(),
        }
    }

    /// Program description shown at the top of the help text.
    pub fn add_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = description.into();
        self
    }

    /// Declare a presence-only flag.
    pub fn add_flag(
        &mut self,
        short: Option<char>,
        long: impl Into<String>,
        description: impl Into<String>,
    ) -> &mut Self {
        self.register(ArgumentSpec::new(
            short,
            long,
            description,
            ArgKind::Flag,
        ))
    }

    /// Declare an option taking one value.
    ///
    /// A non-empty `default_value` is what the option resolves to when it is
    /// not given on the command line.
    pub fn add_option(
        &mut self,
        short: Option<char>,
        long: impl Into<String>,
        description: impl Into<String>,
        required: bool,
        default_value: impl Into<String>,
    ) -> &mut Self {
        self.register(ArgumentSpec::new(
            short,
            long,
            description,
            ArgKind::Option {
                required,
                default_value: default_value.into(),
            },
        ))
    }

    /// Declare an option taking exactly `arity` values. `arity` must be at least 2.
    pub fn add_vec_option(
        &mut self,
        short: Option<char>,
        long: impl Into<String>,
        description: impl Into<String>,
        arity: usize,
        required: bool,
    ) -> &mut Self {
        let long = long.into();
        if arity < 2 {
            self.reject(RegistrationError::VectorArityTooSmall { name: long, arity });
            return self;
        }
        self.register(ArgumentSpec::new(
            short,
            long,
            description,
            ArgKind::VectorOption { required, arity },
        ))
    }

    /// Declare the next positional. Positions follow declaration order.
    pub fn add_positional(
        &mut self,
        long: impl Into<String>,
        description: impl Into<String>,
    ) -> &mut Self {
        self.register(ArgumentSpec::new(
            None,
            long,
            description,
            ArgKind::Positional,
        ))
    }

    /// Declare the catch-all for positionals past the declared ones.
    ///
    /// There is a single slot; a second call replaces the first.
    pub fn add_positional_list(
        &mut self,
        long: impl Into<String>,
        description: impl Into<String>,
        required: bool,
    ) -> &mut Self {
        self.list = Some(ArgumentSpec::new(
            None,
            long,
            description,
            ArgKind::PositionalList { required },
        ));
        self
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Every declaration except the positional list, in declaration order.
    pub fn specs(&self) -> &[ArgumentSpec] {
        &self.specs
    }

    pub fn flags(&self) -> impl Iterator<Item = &ArgumentSpec> {
        self.of_kind(|k| matches!(k, ArgKind::Flag))
    }

    pub fn options(&self) -> impl Iterator<Item = &ArgumentSpec> {
        self.of_kind(|k| matches!(k, ArgKind::Option { .. }))
    }

    pub fn vec_options(&self) -> impl Iterator<Item = &ArgumentSpec> {
        self.of_kind(|k| matches!(k, ArgKind::VectorOption { .. }))
    }

    pub fn positionals(&self) -> impl Iterator<Item = &ArgumentSpec> {
        self.of_kind(|k| matches!(k, ArgKind::Positional))
    }

    pub fn positional_list(&self) -> Option<&ArgumentSpec> {
        self.list.as_ref()
    }

    /// Whether any declaration was rejected.
    pub fn errors_occurred(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn registration_errors(&self) -> &[RegistrationError] {
        &self.errors
    }

    fn of_kind(&self, pred: fn(&ArgKind) -> bool) -> impl Iterator<Item = &ArgumentSpec> {
        self.specs.iter().filter(move |s| pred(&s.kind))
    }

    fn register(&mut self, spec: ArgumentSpec) -> &mut Self {
        match self.validate(&spec) {
            Ok(()) => {
                tracing::trace!(name = %spec.long, "registered argument");
                self.specs.push(spec);
            }
            Err(err) => self.reject(err),
        }
        self
    }

    fn reject(&mut self, err: RegistrationError) {
        tracing::warn!("{err}");
        self.errors.push(err);
    }

    fn validate(&self, spec: &ArgumentSpec) -> Result<(), RegistrationError> {
        if let Some(short) = spec.short {
            if self.specs.iter().any(|s| s.short == Some(short)) {
                return Err(RegistrationError::ShortNameTaken(short));
            }
        }
        if self.specs.iter().any(|s| s.long == spec.long) {
            return Err(RegistrationError::LongNameTaken(spec.long.clone()));
        }
        if spec.long.chars().any(char::is_whitespace) {
            return Err(RegistrationError::NameWithSpaces(spec.long.clone()));
        }
        if spec.long.chars().count() < 2 {
            return Err(RegistrationError::LongNameTooShort(spec.long.clone()));
        }
        if let Some(short) = spec.short {
            if !short.is_ascii_alphabetic() {
                return Err(RegistrationError::InvalidShortName(short));
            }
        }
        Ok(())
    }
}
