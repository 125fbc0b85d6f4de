//! Declared argument shapes.

/// What kind of argument a spec declares, with the fields only that kind has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgKind {
    /// Presence-only switch.
    Flag,
    /// Switch followed by exactly one value.
    Option {
        required: bool,
        default_value: String,
    },
    /// Switch followed by exactly `arity` values (`arity >= 2`).
    VectorOption { required: bool, arity: usize },
    /// Bare value, identified by declaration order.
    Positional,
    /// Catch-all for bare values past the declared positionals.
    PositionalList { required: bool },
}

impl ArgKind {
    pub fn required(&self) -> bool {
        match self {
            Self::Flag => false,
            Self::Option { required, .. }
            | Self::VectorOption { required, .. }
            | Self::PositionalList { required } => *required,
            Self::Positional => true,
        }
    }

    /// Whether the argument is introduced by `--long` / `-s` on the command line.
    pub fn is_switch(&self) -> bool {
        matches!(
            self,
            Self::Flag | Self::Option { .. } | Self::VectorOption { .. }
        )
    }
}

/// One declared argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentSpec {
    pub short: Option<char>,
    pub long: String,
    pub description: String,
    pub kind: ArgKind,
}

impl ArgumentSpec {
    pub fn new(
        short: Option<char>,
        long: impl Into<String>,
        description: impl Into<String>,
        kind: ArgKind,
    ) -> Self {
        Self {
            short,
            long: long.into(),
            description: description.into(),
            kind,
        }
    }

    /// Whether `token` names this argument on the command line.
    ///
    /// Options and vector options match `--long` or `-s` exactly. Flags also
    /// match a bundled run of short flags such as `-fbz`. Positionals never
    /// match a token by name.
    pub fn matches(&self, token: &str) -> bool {
        if !self.kind.is_switch() {
            return false;
        }
        if token.strip_prefix("--") == Some(self.long.as_str()) {
            return true;
        }
        let Some(short) = self.short else {
            return false;
        };
        match self.kind {
            ArgKind::Flag => short_run(token).is_some_and(|run| run.contains(short)),
            _ => is_exact_short(token, short),
        }
    }

    /// `-s, --long` as shown in help and diagnostics.
    pub fn display_switches(&self) -> String {
        match self.short {
            Some(short) => format!("-{short}, --{}", self.long),
            None => format!("    --{}", self.long),
        }
    }
}

/// Whether `name` refers to an argument by its long name or its short alias.
pub(crate) fn is_named(long: &str, short: Option<char>, name: &str) -> bool {
    if long == name {
        return true;
    }
    let mut chars = name.chars();
    matches!((short, chars.next(), chars.next()), (Some(s), Some(c), None) if s == c)
}

fn is_exact_short(token: &str, short: char) -> bool {
    let Some(rest) = token.strip_prefix('-') else {
        return false;
    };
    let mut chars = rest.chars();
    chars.next() == Some(short) && chars.next().is_none()
}

/// The letters of a single-dash short flag run (`-fbz` -> `fbz`).
pub(crate) fn short_run(token: &str) -> Option<&str> {
    let run = token.strip_prefix('-')?;
    if run.is_empty() || run.starts_with('-') {
        return None;
    }
    run.chars()
        .all(|c| c.is_ascii_alphabetic())
        .then_some(run)
}

/// Whether `token` looks like a switch: `-` or `--` followed by letters only.
///
/// Negative numbers (`-20`, `-1.5`), a lone `-` or `--`, and names with
/// punctuation such as `--dry-run` are not switch-shaped, so they can be used
/// as values.
pub fn is_switch_shaped(token: &str) -> bool {
    let rest = token
        .strip_prefix("--")
        .or_else(|| token.strip_prefix('-'));
    match rest {
        Some(rest) => !rest.is_empty() && rest.chars().all(|c| c.is_ascii_alphabetic()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flag(short: Option<char>, long: &str) -> ArgumentSpec {
        ArgumentSpec::new(short, long, "", ArgKind::Flag)
    }

    fn option(short: Option<char>, long: &str) -> ArgumentSpec {
        ArgumentSpec::new(
            short,
            long,
            "",
            ArgKind::Option {
                required: false,
                default_value: String::new(),
            },
        )
    }

    #[test]
    fn flag_matches_long_and_bundled_short() {
        let f = flag(Some('f'), "foo");
        assert!(f.matches("--foo"));
        assert!(f.matches("-f"));
        assert!(f.matches("-bfz"));
        assert!(!f.matches("--foobar"));
        assert!(!f.matches("-bz"));
        assert!(!f.matches("--f"));
        assert!(!f.matches("foo"));
        assert!(!f.matches("-f1"));
    }

    #[test]
    fn long_only_flag_ignores_short_runs() {
        let f = flag(None, "bar");
        assert!(f.matches("--bar"));
        assert!(!f.matches("-bar"));
        assert!(!f.matches("-b"));
    }

    #[test]
    fn option_requires_exact_short() {
        let o = option(Some('o'), "output");
        assert!(o.matches("-o"));
        assert!(o.matches("--output"));
        assert!(!o.matches("-vo"));
        assert!(!o.matches("-oo"));
    }

    #[test]
    fn positionals_never_match_tokens() {
        let p = ArgumentSpec::new(None, "input", "", ArgKind::Positional);
        assert!(!p.matches("--input"));
        assert!(!p.matches("input"));
    }

    #[test]
    fn is_named_accepts_short_alias() {
        assert!(is_named("foo", Some('f'), "foo"));
        assert!(is_named("foo", Some('f'), "f"));
        assert!(!is_named("foo", Some('f'), "fo"));
        assert!(!is_named("foo", None, "f"));
    }

    #[test]
    fn switch_shape() {
        assert!(is_switch_shaped("-f"));
        assert!(is_switch_shaped("--foo"));
        assert!(is_switch_shaped("-fbz"));
        assert!(!is_switch_shaped("-20"));
        assert!(!is_switch_shaped("-1.5"));
        assert!(!is_switch_shaped("-"));
        assert!(!is_switch_shaped("--"));
        assert!(!is_switch_shaped("---x"));
        assert!(!is_switch_shaped("--dry-run"));
        assert!(!is_switch_shaped("value"));
    }
}
