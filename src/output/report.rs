use std::fmt::Write;

use crate::operations::registry::Queries;
use crate::parser::entry::ParsedStatement;

/// Build a markdown catalogue of every loaded statement.
pub fn build_catalog(queries: &Queries) -> String {
    let mut report = String::new();

    writeln!(report, "# sqlstash Statement Catalogue").unwrap();
    writeln!(report).unwrap();
    writeln!(report, "{} statements loaded.", queries.len()).unwrap();
    writeln!(report).unwrap();
    writeln!(report, "| Name | Kind | Parameters | Description |").unwrap();
    writeln!(report, "|------|------|------------|-------------|").unwrap();

    for statement in queries.iter() {
        writeln!(
            report,
            "| {} | {} | {} | {} |",
            statement.name(),
            statement.kind(),
            format_params(statement),
            format_description(statement)
        )
        .unwrap();
    }

    report
}

fn format_params(statement: &ParsedStatement) -> String {
    match statement.parameters() {
        Ok(params) if params.is_empty() => "-".to_string(),
        Ok(params) => params
            .iter()
            .map(|p| format!("`{p}`"))
            .collect::<Vec<_>>()
            .join(", "),
        Err(_) => "(unparseable)".to_string(),
    }
}

fn format_description(statement: &ParsedStatement) -> String {
    statement
        .description()
        .map(|d| d.replace('\n', " ").replace('|', "\\|"))
        .unwrap_or_default()
}
