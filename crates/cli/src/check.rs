use anyhow::{Context, Result};
use clargs_schema::ParserSchema;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub schema: String,
    pub flags: usize,
    pub options: usize,
    pub vec_options: usize,
    pub positionals: usize,
    pub positional_list: Option<String>,
    pub errors: Vec<String>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

pub fn load_schema(path: &Path) -> Result<ParserSchema> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read schema: {}", path.display()))?;
    ParserSchema::from_json(&text)
        .with_context(|| format!("failed to parse schema JSON: {}", path.display()))
}

/// Build the schema's parser and report what it accepted and rejected.
pub fn check_schema(path: &Path) -> Result<CheckReport> {
    let schema = load_schema(path)?;
    let parser = schema.build();

    // Counts are of accepted declarations, so the built-in help flag is excluded.
    Ok(CheckReport {
        schema: path.display().to_string(),
        flags: parser.flags().count().saturating_sub(1),
        options: parser.options().count(),
        vec_options: parser.vec_options().count(),
        positionals: parser.positionals().count(),
        positional_list: parser.positional_list().map(|l| l.long.clone()),
        errors: parser
            .registration_errors()
            .iter()
            .map(ToString::to_string)
            .collect(),
    })
}
