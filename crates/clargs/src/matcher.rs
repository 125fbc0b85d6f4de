//! Turning a token list into [`Args`].
//!
//! Matching runs in fixed stages: flags, the help short-circuit, options,
//! vector options, positionals. Each stage only looks at tokens no earlier
//! stage has claimed, so a token is never used twice.

use crate::args::{Args, FlagMatch, OptionMatch, PositionalMatch, VecOptionMatch};
use crate::error::{ParseError, ParseResult};
use crate::registry::{HELP_LONG, Parser};
use crate::session::ParseSession;
use crate::spec::{ArgKind, ArgumentSpec, is_switch_shaped};

impl Parser {
    /// Parse `tokens`; `tokens[0]` is the program name.
    ///
    /// Fails immediately if any declaration was rejected. The first problem
    /// found ends parsing. A `-h`/`--help` token yields
    /// [`ParseError::HelpRequested`] with the rendered help text.
    pub fn parse<S: AsRef<str>>(&self, tokens: &[S]) -> ParseResult<Args> {
        if self.errors_occurred() {
            return Err(ParseError::InvalidRegistry {
                errors: self.registration_errors().to_vec(),
            });
        }

        let tokens: Vec<String> = tokens.iter().map(|t| t.as_ref().to_string()).collect();
        let mut session = ParseSession::new(&tokens);
        tracing::debug!(tokens = session.len(), "parsing arguments");

        let flags = match_flags(self, &mut session);
        if flags.iter().any(|f| f.name == HELP_LONG && f.status) {
            return Err(ParseError::HelpRequested(self.help(session.program_name())));
        }
        let options = match_options(self, &mut session)?;
        let vec_options = match_vec_options(self, &mut session)?;
        let (positionals, unknown_switches) = match_positionals(self, &session)?;

        Ok(Args {
            program_name: session.program_name().to_string(),
            flags,
            options,
            vec_options,
            positionals,
            list_name: self.positional_list().map(|l| l.long.clone()),
            unknown_switches,
        })
    }

    /// Parse the arguments of the current process.
    pub fn parse_env(&self) -> ParseResult<Args> {
        let tokens: Vec<String> = std::env::args().collect();
        self.parse(&tokens)
    }

    /// Parse the current process arguments, exiting on failure.
    ///
    /// Help text goes to stdout with exit code 0; any other failure prints its
    /// diagnostic to stderr and exits with code 2.
    pub fn parse_or_exit(&self) -> Args {
        match self.parse_env() {
            Ok(args) => args,
            Err(ParseError::HelpRequested(text)) => {
                print!("{text}");
                std::process::exit(0);
            }
            Err(err) => {
                for reg in self.registration_errors() {
                    eprintln!("{reg}");
                }
                eprintln!("{err}");
                std::process::exit(2);
            }
        }
    }
}

fn match_flags(parser: &Parser, session: &mut ParseSession<'_>) -> Vec<FlagMatch> {
    let mut hits = Vec::new();
    let flags: Vec<FlagMatch> = parser
        .flags()
        .map(|spec| {
            let mut status = false;
            for (idx, token) in session.unclaimed() {
                if spec.matches(token) {
                    status = true;
                    hits.push(idx);
                }
            }
            FlagMatch {
                name: spec.long.clone(),
                short: spec.short,
                status,
            }
        })
        .collect();

    // A bundle like `-fbz` is matched by several flags, so tokens are only
    // claimed once every flag has looked at them.
    for idx in hits {
        session.occupy(idx);
    }
    tracing::debug!(
        set = flags.iter().filter(|f| f.status).count(),
        "matched flags"
    );
    flags
}

/// Find the next unclaimed occurrence of `spec` at or after `from`.
fn next_occurrence(session: &ParseSession<'_>, spec: &ArgumentSpec, from: usize) -> Option<usize> {
    (from..session.len()).find(|&idx| {
        !session.is_occupied(idx) && session.token(idx).is_some_and(|t| spec.matches(t))
    })
}

fn match_options(
    parser: &Parser,
    session: &mut ParseSession<'_>,
) -> ParseResult<Vec<OptionMatch>> {
    let mut out = Vec::new();
    for spec in parser.options() {
        let ArgKind::Option {
            required,
            default_value,
        } = &spec.kind
        else {
            continue;
        };

        let mut given: Option<String> = None;
        let mut at = 1;
        while let Some(idx) = next_occurrence(session, spec, at) {
            if !session.is_value_candidate(idx + 1) {
                return Err(ParseError::OptionRequiresValue(spec.long.clone()));
            }
            let value = session.token(idx + 1).unwrap_or_default();
            tracing::trace!(name = %spec.long, value, "option value");
            given = Some(value.to_string());
            session.occupy(idx);
            session.occupy(idx + 1);
            at = idx + 2;
        }

        if *required && given.is_none() {
            return Err(ParseError::OptionRequired(spec.long.clone()));
        }

        let explicit = given.is_some();
        let value = given.or_else(|| (!default_value.is_empty()).then(|| default_value.clone()));
        out.push(OptionMatch {
            name: spec.long.clone(),
            short: spec.short,
            value,
            explicit,
        });
    }
    tracing::debug!(options = out.len(), "matched options");
    Ok(out)
}

fn match_vec_options(
    parser: &Parser,
    session: &mut ParseSession<'_>,
) -> ParseResult<Vec<VecOptionMatch>> {
    let mut out = Vec::new();
    for spec in parser.vec_options() {
        let ArgKind::VectorOption { required, arity } = spec.kind else {
            continue;
        };

        let mut values: Vec<String> = Vec::new();
        let mut at = 1;
        while let Some(idx) = next_occurrence(session, spec, at) {
            // The window must fit inside the token list; a huge arity can't.
            let end = arity
                .checked_add(idx + 1)
                .filter(|&end| end <= session.len());
            let Some(end) = end else {
                return Err(ParseError::InvalidNumberOfValues {
                    name: spec.long.clone(),
                    expected: arity,
                });
            };
            let window = idx + 1..end;
            if !window.clone().all(|i| session.is_value_candidate(i)) {
                return Err(ParseError::InvalidNumberOfValues {
                    name: spec.long.clone(),
                    expected: arity,
                });
            }
            values = window
                .clone()
                .filter_map(|i| session.token(i))
                .map(str::to_string)
                .collect();
            session.occupy(idx);
            for i in window {
                session.occupy(i);
            }
            at = end;
        }

        if required && values.is_empty() {
            return Err(ParseError::OptionRequired(spec.long.clone()));
        }

        out.push(VecOptionMatch {
            name: spec.long.clone(),
            short: spec.short,
            values,
        });
    }
    tracing::debug!(vec_options = out.len(), "matched vector options");
    Ok(out)
}

fn match_positionals(
    parser: &Parser,
    session: &ParseSession<'_>,
) -> ParseResult<(Vec<PositionalMatch>, Vec<String>)> {
    let mut bare: Vec<&str> = Vec::new();
    let mut unknown: Vec<String> = Vec::new();
    for (_, token) in session.unclaimed() {
        if is_switch_shaped(token) {
            unknown.push(token.to_string());
        } else {
            bare.push(token);
        }
    }
    if !unknown.is_empty() {
        tracing::debug!(?unknown, "unrecognized switches");
    }

    let mut bare = bare.into_iter();
    let mut out = Vec::new();
    for spec in parser.positionals() {
        let Some(value) = bare.next() else {
            return Err(ParseError::PositionalRequired(spec.long.clone()));
        };
        out.push(PositionalMatch {
            name: Some(spec.long.clone()),
            value: value.to_string(),
        });
    }

    let declared = out.len();
    out.extend(bare.map(|value| PositionalMatch {
        name: None,
        value: value.to_string(),
    }));

    if let Some(list) = parser.positional_list() {
        if list.kind.required() && out.len() == declared {
            return Err(ParseError::ListRequired(list.long.clone()));
        }
    }
    tracing::debug!(positionals = out.len(), "matched positionals");
    Ok((out, unknown))
}
