use anyhow::Result;
use clargs::{Args, Parser};

pub const PROGRAM: &str = "clargs-demo";

/// The declarations behind `clargs demo`.
pub fn parser() -> Parser {
    let mut parser = Parser::new();
    parser
        .add_description("Program for testing the small library for handling arguments")
        .add_flag(Some('c'), "count", "count something awesome")
        .add_flag(None, "verbose", "print extra stuff")
        .add_option(Some('i'), "input", "input file name", false, "in.txt")
        .add_option(None, "output", "output file name", true, "")
        .add_vec_option(Some('p'), "pos", "position's xyz coordinates", 3, false)
        .add_positional("name", "your name")
        .add_positional("last", "your last name")
        .add_positional_list("FILES", "list of files", false);
    parser
}

/// Human-readable summary of what the demo parser resolved.
pub fn report(args: &Args) -> Result<String> {
    let mut out = String::new();
    if args.is_present("count") {
        out.push_str("You can count on me!\n");
    }
    if args.is_present("verbose") {
        out.push_str("Being verbose.\n");
    }

    let input: String = args.get_value("input")?;
    let output: String = args.get_value("output")?;
    out.push_str(&format!("input: {input}\noutput: {output}\n"));

    if args.is_present("pos") {
        let pos: Vec<f64> = args.get_vec_values("pos")?;
        let pos: Vec<String> = pos.iter().map(f64::to_string).collect();
        out.push_str(&format!("pos: {}\n", pos.join(", ")));
    }

    let name: String = args.get_positional_by_name("name")?;
    let last: String = args.get_positional_by_name("last")?;
    out.push_str(&format!("name: {name} {last}\n"));

    let files: Vec<String> = args.get_positional_list()?;
    if !files.is_empty() {
        out.push_str(&format!("files: {}\n", files.join(", ")));
    }
    Ok(out)
}
