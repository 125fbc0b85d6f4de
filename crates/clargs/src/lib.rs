//! Declarative command-line argument parsing.
//!
//! Declare flags, single-value options, fixed-arity vector options and
//! positionals on a [`Parser`], then turn argv into [`Args`]:
//!
//! ```
//! use clargs::Parser;
//!
//! let mut parser = Parser::new();
//! parser
//!     .add_flag(Some('v'), "verbose", "print extra stuff")
//!     .add_option(Some('o'), "output", "output file name", false, "out.txt")
//!     .add_vec_option(Some('p'), "pos", "xyz coordinates", 3, false)
//!     .add_positional("input", "input file name");
//!
//! let args = parser
//!     .parse(&["prog", "-v", "-p", "1", "-2", "3", "in.txt"])
//!     .unwrap();
//! assert!(args.is_present("verbose"));
//! assert_eq!(args.get_value::<String>("output").unwrap(), "out.txt");
//! assert_eq!(args.get_vec_values::<i32>("pos").unwrap(), vec![1, -2, 3]);
//! assert_eq!(args.get_positional_by_name::<String>("input").unwrap(), "in.txt");
//! ```
//!
//! Declarations that break a naming rule are recorded instead of panicking;
//! check [`Parser::errors_occurred`] or let [`Parser::parse`] report them.

pub mod args;
pub mod convert;
pub mod error;
mod help;
mod matcher;
pub mod registry;
pub mod session;
pub mod spec;

pub use args::Args;
pub use convert::FromArg;
pub use error::{ParseError, ParseResult, QueryError, QueryResult, RegistrationError};
pub use registry::Parser;
pub use spec::{ArgKind, ArgumentSpec, is_switch_shaped};
