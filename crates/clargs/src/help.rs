//! Help text rendering.

use crate::registry::Parser;
use crate::spec::{ArgKind, ArgumentSpec};

fn format_left(spec: &ArgumentSpec) -> String {
    match &spec.kind {
        ArgKind::Flag => spec.display_switches(),
        ArgKind::Option { .. } => format!("{} VALUE", spec.display_switches()),
        ArgKind::VectorOption { arity, .. } => {
            format!("{} {arity} VALUES", spec.display_switches())
        }
        ArgKind::Positional => spec.long.clone(),
        ArgKind::PositionalList { .. } => format!("{}...", spec.long),
    }
}

fn format_help(spec: &ArgumentSpec) -> String {
    let mut out = spec.description.trim().to_string();
    if let ArgKind::Option { default_value, .. } = &spec.kind {
        if !default_value.is_empty() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&format!("[default: {default_value}]"));
        }
    }
    out
}

fn push_section(out: &mut String, title: &str, specs: &[&ArgumentSpec]) {
    if specs.is_empty() {
        return;
    }
    out.push_str(&format!("\n{title}:\n"));
    let rows: Vec<(String, String)> = specs
        .iter()
        .map(|s| (format_left(s), format_help(s)))
        .collect();
    let width = rows
        .iter()
        .map(|(l, _)| l.chars().count())
        .max()
        .unwrap_or(0);
    for (left, help) in rows {
        if help.is_empty() {
            out.push_str(&format!("  {left}\n"));
        } else {
            out.push_str(&format!("  {left:width$}  {help}\n"));
        }
    }
}

impl Parser {
    /// One-line usage summary: required switches and the positionals.
    pub fn usage(&self, program_name: &str) -> String {
        let mut out = format!("Usage: {program_name} [FLAGS] [OPTIONS]");
        for spec in self.options().chain(self.vec_options()) {
            match spec.kind {
                ArgKind::Option { required: true, .. } => {
                    out.push_str(&format!(" --{} VALUE", spec.long));
                }
                ArgKind::VectorOption {
                    required: true,
                    arity,
                } => {
                    out.push_str(&format!(" --{} {arity} VALUES", spec.long));
                }
                _ => {}
            }
        }
        for spec in self.positionals() {
            out.push_str(&format!(" <{}>", spec.long));
        }
        if let Some(list) = self.positional_list() {
            if list.kind.required() {
                out.push_str(&format!(" <{}>...", list.long));
            } else {
                out.push_str(&format!(" [{}]...", list.long));
            }
        }
        out
    }

    /// Full help text: description, usage and one section per argument kind.
    pub fn help(&self, program_name: &str) -> String {
        let mut out = String::new();
        if !self.description().trim().is_empty() {
            out.push_str(self.description().trim_end());
            out.push_str("\n\n");
        }
        out.push_str(&self.usage(program_name));
        out.push('\n');

        let flags: Vec<&ArgumentSpec> = self.flags().collect();
        let (required, optional): (Vec<&ArgumentSpec>, Vec<&ArgumentSpec>) = self
            .options()
            .chain(self.vec_options())
            .partition(|s| s.kind.required());
        let mut positionals: Vec<&ArgumentSpec> = self.positionals().collect();
        positionals.extend(self.positional_list());

        push_section(&mut out, "Flags", &flags);
        push_section(&mut out, "Required options", &required);
        push_section(&mut out, "Options", &optional);
        push_section(&mut out, "Positionals", &positionals);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_lists_every_section() {
        let mut parser = Parser::new();
        parser
            .add_description("Counts things")
            .add_flag(Some('c'), "count", "count something")
            .add_flag(None, "verbose", "print extra stuff")
            .add_option(Some('i'), "input", "input file name", false, "in.txt")
            .add_option(None, "output", "output file name", true, "")
            .add_vec_option(Some('p'), "pos", "xyz coordinates", 3, false)
            .add_positional("name", "your name")
            .add_positional_list("FILES", "list of files", true);

        let text = parser.help("prog");
        assert!(text.starts_with("Counts things\n\nUsage: prog [FLAGS] [OPTIONS] --output VALUE <name> <FILES>...\n"));
        assert!(text.contains("\nFlags:\n"));
        assert!(text.contains("-h, --help"));
        assert!(text.contains("    --verbose"));
        assert!(text.contains("\nRequired options:\n      --output VALUE"));
        assert!(text.contains("-i, --input VALUE"));
        assert!(text.contains("input file name [default: in.txt]"));
        assert!(text.contains("-p, --pos 3 VALUES"));
        assert!(text.contains("FILES..."));
    }

    #[test]
    fn empty_sections_are_omitted() {
        let text = Parser::new().help("prog");
        assert_eq!(
            text,
            "Usage: prog [FLAGS] [OPTIONS]\n\nFlags:\n  -h, --help  print this help message\n"
        );
    }

    #[test]
    fn rows_are_aligned() {
        let mut parser = Parser::new();
        parser.add_flag(Some('v'), "verbose", "talk more");
        let text = parser.help("prog");
        assert!(text.contains("  -h, --help     print this help message\n"));
        assert!(text.contains("  -v, --verbose  talk more\n"));
    }

    #[test]
    fn rows_align_on_non_ascii_names() {
        let mut parser = Parser::new();
        parser.add_flag(None, "größe", "bigger");

        let text = parser.help("prog");
        assert!(text.contains("\n  -h, --help   print this help message\n"), "{text}");
        assert!(text.contains("\n      --größe  bigger\n"), "{text}");
    }
}
