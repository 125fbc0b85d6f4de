//! Serializable declaration model for `clargs` parsers.
//!
//! A `ParserSchema` describes the arguments of one program as JSON, so a
//! parser can be declared without writing Rust, and an existing parser can
//! be exported. The built-in `-h, --help` flag is implicit and never appears
//! in a schema.

use clargs::registry::HELP_LONG;
use clargs::{ArgKind, ArgumentSpec, Parser};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct FlagDef {
    pub long: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short: Option<char>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub help: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct OptionDef {
    pub long: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short: Option<char>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub help: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub default_value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct VecOptionDef {
    pub long: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short: Option<char>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub help: String,
    #[serde(default)]
    pub required: bool,
    pub arity: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct PositionalDef {
    pub long: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub help: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct ListDef {
    pub long: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub help: String,
    #[serde(default)]
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct ParserSchema {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<FlagDef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionDef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vec_options: Vec<VecOptionDef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub positionals: Vec<PositionalDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positional_list: Option<ListDef>,
}

impl ParserSchema {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Declare every argument of the schema on a fresh parser.
    ///
    /// Rejected declarations stay recorded on the returned parser; check
    /// [`Parser::errors_occurred`].
    pub fn build(&self) -> Parser {
        let mut parser = Parser::new();
        parser.add_description(self.description.as_str());
        for f in &self.flags {
            parser.add_flag(f.short, f.long.as_str(), f.help.as_str());
        }
        for o in &self.options {
            parser.add_option(
                o.short,
                o.long.as_str(),
                o.help.as_str(),
                o.required,
                o.default_value.as_str(),
            );
        }
        for v in &self.vec_options {
            parser.add_vec_option(v.short, v.long.as_str(), v.help.as_str(), v.arity, v.required);
        }
        for p in &self.positionals {
            parser.add_positional(p.long.as_str(), p.help.as_str());
        }
        if let Some(list) = &self.positional_list {
            parser.add_positional_list(list.long.as_str(), list.help.as_str(), list.required);
        }
        parser
    }

    /// Describe the accepted declarations of `parser`.
    pub fn from_parser(parser: &Parser) -> Self {
        let mut schema = Self {
            description: parser.description().to_string(),
            ..Default::default()
        };
        for spec in parser.specs() {
            schema.push_spec(spec);
        }
        schema.positional_list = parser.positional_list().map(|l| ListDef {
            long: l.long.clone(),
            help: l.description.clone(),
            required: l.kind.required(),
        });
        schema
    }

    fn push_spec(&mut self, spec: &ArgumentSpec) {
        let long = spec.long.clone();
        let help = spec.description.clone();
        match &spec.kind {
            ArgKind::Flag if spec.long == HELP_LONG => {}
            ArgKind::Flag => self.flags.push(FlagDef {
                long,
                short: spec.short,
                help,
            }),
            ArgKind::Option {
                required,
                default_value,
            } => self.options.push(OptionDef {
                long,
                short: spec.short,
                help,
                required: *required,
                default_value: default_value.clone(),
            }),
            ArgKind::VectorOption { required, arity } => self.vec_options.push(VecOptionDef {
                long,
                short: spec.short,
                help,
                required: *required,
                arity: *arity,
            }),
            ArgKind::Positional => self.positionals.push(PositionalDef { long, help }),
            ArgKind::PositionalList { .. } => {}
        }
    }
}
