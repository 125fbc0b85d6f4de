mod check;
mod demo;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clargs::{Args, ParseError};
use clargs_schema::ParserSchema;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt};

use crate::check::{check_schema, load_schema};

/// Exit code for arguments rejected by the parser under test.
const EXIT_PARSE_FAILED: u8 = 2;

#[derive(Parser)]
#[command(name = "clargs")]
#[command(version, about = "Try out clargs argument declarations", long_about = None)]
#[command(disable_help_subcommand = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse tokens against a JSON schema and print the result as JSON
    Parse(ParseArgs),

    /// Print the help text a schema produces
    Help(HelpArgs),

    /// Check a schema for rejected declarations
    Check(CheckArgs),

    /// Parse tokens with the built-in demo declarations
    Demo(DemoArgs),
}

#[derive(Parser)]
struct ParseArgs {
    /// Path to the JSON schema
    #[arg(short, long, value_name = "FILE")]
    schema: PathBuf,

    /// Pretty-print the JSON result
    #[arg(long)]
    pretty: bool,

    /// Tokens to parse, program name first (after `--`)
    #[arg(last = true, value_name = "TOKENS")]
    tokens: Vec<String>,
}

#[derive(Parser)]
struct HelpArgs {
    /// Path to the JSON schema
    #[arg(short, long, value_name = "FILE")]
    schema: PathBuf,

    /// Program name shown in the usage line (default: schema file stem)
    #[arg(long, value_name = "NAME")]
    program: Option<String>,
}

#[derive(Parser)]
struct CheckArgs {
    /// Path to the JSON schema
    #[arg(short, long, value_name = "FILE")]
    schema: PathBuf,

    /// Only output JSON (no human-readable output)
    #[arg(long)]
    json: bool,

    /// Print the normalized schema of the accepted declarations
    #[arg(long)]
    print: bool,
}

#[derive(Parser)]
struct DemoArgs {
    /// Tokens to parse, without the program name (after `--`)
    #[arg(last = true, value_name = "TOKENS")]
    tokens: Vec<String>,
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse(args) => parse_command(args),
        Commands::Help(args) => help_command(args),
        Commands::Check(args) => check_command(args),
        Commands::Demo(args) => demo_command(args),
    }
}

fn program_name(schema: &Path) -> String {
    schema
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "prog".to_string())
}

/// Print the outcome of a failed parse the way a real program would.
fn report_failure(parser: &clargs::Parser, err: ParseError) -> ExitCode {
    match err {
        ParseError::HelpRequested(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        err => {
            for reg in parser.registration_errors() {
                eprintln!("{reg}");
            }
            eprintln!("{err}");
            ExitCode::from(EXIT_PARSE_FAILED)
        }
    }
}

fn parse_command(args: ParseArgs) -> Result<ExitCode> {
    tracing::debug!("executing parse command");

    let parser = load_schema(&args.schema)?.build();
    let mut tokens = args.tokens;
    if tokens.is_empty() {
        tokens.push(program_name(&args.schema));
    }

    let parsed: Args = match parser.parse(&tokens) {
        Ok(parsed) => parsed,
        Err(err) => return Ok(report_failure(&parser, err)),
    };

    let json = if args.pretty {
        serde_json::to_string_pretty(&parsed)
    } else {
        serde_json::to_string(&parsed)
    }
    .context("failed to serialize parse result")?;
    println!("{json}");
    Ok(ExitCode::SUCCESS)
}

fn help_command(args: HelpArgs) -> Result<ExitCode> {
    let parser = load_schema(&args.schema)?.build();
    let program = args
        .program
        .unwrap_or_else(|| program_name(&args.schema));
    print!("{}", parser.help(&program));
    Ok(ExitCode::SUCCESS)
}

fn check_command(args: CheckArgs) -> Result<ExitCode> {
    tracing::debug!("executing check command");

    let report = check_schema(&args.schema)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        eprintln!("Schema: {}", report.schema);
        eprintln!(
            "Accepted: {} flag(s), {} option(s), {} vector option(s), {} positional(s)",
            report.flags, report.options, report.vec_options, report.positionals
        );
        if let Some(list) = &report.positional_list {
            eprintln!("Positional list: {list}");
        }
        if report.is_ok() {
            eprintln!("\nOK");
        } else {
            eprintln!("\nRejected declarations:");
            for err in &report.errors {
                eprintln!("  - {err}");
            }
        }
    }

    if args.print {
        let schema = load_schema(&args.schema)?;
        let normalized = ParserSchema::from_parser(&schema.build());
        println!("{}", normalized.to_json_pretty()?);
    }

    Ok(if report.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn demo_command(args: DemoArgs) -> Result<ExitCode> {
    let parser = demo::parser();
    let mut tokens = vec![demo::PROGRAM.to_string()];
    tokens.extend(args.tokens);

    match parser.parse(&tokens) {
        Ok(parsed) => {
            print!("{}", demo::report(&parsed)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => Ok(report_failure(&parser, err)),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
