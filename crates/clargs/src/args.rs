//! The result of a successful parse.

use serde::Serialize;

use crate::convert::FromArg;
use crate::error::{QueryError, QueryResult};
use crate::spec::is_named;

/// Resolved state of a declared flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlagMatch {
    pub name: String,
    pub short: Option<char>,
    pub status: bool,
}

/// Resolved state of a declared single-value option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionMatch {
    pub name: String,
    pub short: Option<char>,
    /// Value from the command line, or the non-empty default.
    pub value: Option<String>,
    /// Whether the value came from the command line.
    pub explicit: bool,
}

/// Resolved state of a declared vector option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VecOptionMatch {
    pub name: String,
    pub short: Option<char>,
    pub values: Vec<String>,
}

/// One bare value, in command-line order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionalMatch {
    /// Declared name, or `None` for values captured by the positional list.
    pub name: Option<String>,
    pub value: String,
}

/// Parsed arguments.
///
/// Names may be given as the long name or, for flags and options, as the
/// one-character short name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Args {
    pub(crate) program_name: String,
    pub(crate) flags: Vec<FlagMatch>,
    pub(crate) options: Vec<OptionMatch>,
    pub(crate) vec_options: Vec<VecOptionMatch>,
    pub(crate) positionals: Vec<PositionalMatch>,
    pub(crate) list_name: Option<String>,
    pub(crate) unknown_switches: Vec<String>,
}

fn convert<T: FromArg>(name: &str, raw: &str) -> QueryResult<T> {
    T::from_arg(raw).ok_or_else(|| QueryError::Conversion {
        name: name.to_string(),
        value: raw.to_string(),
        target: std::any::type_name::<T>(),
    })
}

impl Args {
    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    /// Whether a flag is set, an option or vector option has a value, or a
    /// positional with that name was filled.
    pub fn is_present(&self, name: &str) -> bool {
        self.flags
            .iter()
            .any(|f| f.status && is_named(&f.name, f.short, name))
            || self.value(name).is_some()
            || self.values(name).is_some()
            || self
                .positionals
                .iter()
                .any(|p| p.name.as_deref() == Some(name))
            || (self.list_name.as_deref() == Some(name) && !self.list_values().is_empty())
    }

    /// Whether a flag, option or vector option was given on the command line.
    ///
    /// Unlike [`is_present`](Self::is_present) this ignores option defaults.
    pub fn is_explicit(&self, name: &str) -> bool {
        self.flags
            .iter()
            .any(|f| f.status && is_named(&f.name, f.short, name))
            || self
                .options
                .iter()
                .any(|o| o.explicit && is_named(&o.name, o.short, name))
            || self.values(name).is_some()
    }

    /// Raw value of a single-value option.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| is_named(&o.name, o.short, name))
            .and_then(|o| o.value.as_deref())
            .filter(|v| !v.is_empty())
    }

    /// Raw values of a vector option.
    pub fn values(&self, name: &str) -> Option<&[String]> {
        self.vec_options
            .iter()
            .find(|o| is_named(&o.name, o.short, name))
            .map(|o| o.values.as_slice())
            .filter(|v| !v.is_empty())
    }

    /// Value of a single-value option converted to `T`.
    pub fn get_value<T: FromArg>(&self, name: &str) -> QueryResult<T> {
        let raw = self
            .value(name)
            .ok_or_else(|| QueryError::NotGiven(name.to_string()))?;
        convert(name, raw)
    }

    /// Values of a vector option, each converted to `T`.
    pub fn get_vec_values<T: FromArg>(&self, name: &str) -> QueryResult<Vec<T>> {
        let raw = self
            .values(name)
            .ok_or_else(|| QueryError::NotGiven(name.to_string()))?;
        raw.iter().map(|v| convert(name, v)).collect()
    }

    /// Number of bare values, declared positionals and list captures together.
    pub fn num_positionals(&self) -> usize {
        self.positionals.len()
    }

    /// Bare value at a 0-based position.
    pub fn get_positional<T: FromArg>(&self, index: usize) -> QueryResult<T> {
        let p = self
            .positionals
            .get(index)
            .ok_or(QueryError::PositionalIndexOutOfRange {
                index,
                len: self.positionals.len(),
            })?;
        let label = p.name.clone().unwrap_or_else(|| format!("positional {index}"));
        convert(&label, &p.value)
    }

    /// Value of the declared positional called `name`.
    pub fn get_positional_by_name<T: FromArg>(&self, name: &str) -> QueryResult<T> {
        let p = self
            .positionals
            .iter()
            .find(|p| p.name.as_deref() == Some(name))
            .ok_or_else(|| QueryError::PositionalNotGiven(name.to_string()))?;
        convert(name, &p.value)
    }

    /// Every bare value from `start` (inclusive) on, in command-line order.
    pub fn get_all_positionals<T: FromArg>(&self, start: usize) -> QueryResult<Vec<T>> {
        (start..self.positionals.len())
            .map(|idx| self.get_positional(idx))
            .collect()
    }

    /// Only the values captured by the positional list.
    pub fn get_positional_list<T: FromArg>(&self) -> QueryResult<Vec<T>> {
        let name = self.list_name.as_deref().unwrap_or_default();
        self.list_values()
            .into_iter()
            .map(|v| convert(name, v))
            .collect()
    }

    /// Switch-shaped tokens no declaration claimed, in command-line order.
    pub fn unknown_switches(&self) -> &[String] {
        &self.unknown_switches
    }

    pub fn flags(&self) -> &[FlagMatch] {
        &self.flags
    }

    pub fn options(&self) -> &[OptionMatch] {
        &self.options
    }

    pub fn vec_options(&self) -> &[VecOptionMatch] {
        &self.vec_options
    }

    pub fn positionals(&self) -> &[PositionalMatch] {
        &self.positionals
    }

    fn list_values(&self) -> Vec<&str> {
        self.positionals
            .iter()
            .filter(|p| p.name.is_none())
            .map(|p| p.value.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Args {
        Args {
            program_name: "prog".to_string(),
            flags: vec![FlagMatch {
                name: "verbose".to_string(),
                short: Some('v'),
                status: true,
            }],
            options: vec![
                OptionMatch {
                    name: "count".to_string(),
                    short: Some('c'),
                    value: Some("abc".to_string()),
                    explicit: true,
                },
                OptionMatch {
                    name: "input".to_string(),
                    short: None,
                    value: Some("in.txt".to_string()),
                    explicit: false,
                },
                OptionMatch {
                    name: "output".to_string(),
                    short: Some('o'),
                    value: None,
                    explicit: false,
                },
            ],
            vec_options: vec![VecOptionMatch {
                name: "pos".to_string(),
                short: Some('p'),
                values: vec!["1".to_string(), "-2.5".to_string()],
            }],
            positionals: vec![
                PositionalMatch {
                    name: Some("name".to_string()),
                    value: "ada".to_string(),
                },
                PositionalMatch {
                    name: None,
                    value: "a.txt".to_string(),
                },
            ],
            list_name: Some("files".to_string()),
            unknown_switches: Vec::new(),
        }
    }

    #[test]
    fn presence_by_long_and_short_name() {
        let args = sample();
        assert!(args.is_present("verbose"));
        assert!(args.is_present("v"));
        assert!(args.is_present("input"));
        assert!(!args.is_present("output"));
        assert!(!args.is_present("o"));
        assert!(args.is_present("p"));
        assert!(args.is_present("name"));
        assert!(args.is_present("files"));
        assert!(!args.is_present("missing"));
    }

    #[test]
    fn defaults_are_present_but_not_explicit() {
        let args = sample();
        assert!(args.is_present("input"));
        assert!(!args.is_explicit("input"));
        assert!(args.is_explicit("count"));
        assert_eq!(args.get_value::<String>("input").unwrap(), "in.txt");
    }

    #[test]
    fn missing_and_malformed_values_are_errors() {
        let args = sample();
        assert_eq!(
            args.get_value::<i32>("output"),
            Err(QueryError::NotGiven("output".to_string()))
        );
        assert!(matches!(
            args.get_value::<i32>("count"),
            Err(QueryError::Conversion { ref value, .. }) if value == "abc"
        ));
        assert!(args.get_vec_values::<i32>("pos").is_err());
        assert_eq!(args.get_vec_values::<f64>("p").unwrap(), vec![1.0, -2.5]);
    }

    #[test]
    fn positional_lookups() {
        let args = sample();
        assert_eq!(args.num_positionals(), 2);
        assert_eq!(args.get_positional::<String>(0).unwrap(), "ada");
        assert_eq!(args.get_positional_by_name::<String>("name").unwrap(), "ada");
        assert_eq!(
            args.get_positional::<String>(2),
            Err(QueryError::PositionalIndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            args.get_positional_by_name::<String>("files"),
            Err(QueryError::PositionalNotGiven("files".to_string()))
        );
        assert_eq!(
            args.get_all_positionals::<String>(1).unwrap(),
            vec!["a.txt".to_string()]
        );
        assert!(args.get_all_positionals::<String>(5).unwrap().is_empty());
        assert_eq!(
            args.get_positional_list::<String>().unwrap(),
            vec!["a.txt".to_string()]
        );
    }

    #[test]
    fn default_args_are_empty() {
        let args = Args::default();
        assert_eq!(args.num_positionals(), 0);
        assert!(!args.is_present("help"));
        assert!(args.get_positional_list::<String>().unwrap().is_empty());
    }
}
