use std::fmt;

use crate::classifier::header::{classify_header, NAME_MARKER};
use crate::classifier::statement_kind::StatementKind;
use crate::config::Config;
use crate::error::Result;
use crate::parser::fragments::FragmentIndex;
use crate::parser::params::{parse_params, ParameterSet};

/// Comment prefix recognised for description lines.
const COMMENT_MARKER: &str = "--";

/// Immutable result of parsing one annotated statement block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedStatement {
    name: String,
    kind: StatementKind,
    description: Option<String>,
    body: String,
    fragments: Option<FragmentIndex>,
}

impl ParsedStatement {
    /// Canonical (sigil-free, case-folded) name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Execution kind.
    pub fn kind(&self) -> StatementKind {
        self.kind
    }

    /// Leading comment lines, stripped and newline-joined.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// SQL body, newline-joined.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Fragment index; present only for [`StatementKind::SelectBuilt`].
    pub fn fragments(&self) -> Option<&FragmentIndex> {
        self.fragments.as_ref()
    }

    /// Every `%(name)s` parameter referenced anywhere in the body.
    pub fn parameters(&self) -> Result<ParameterSet> {
        let mut all = ParameterSet::new();
        for line in self.body.lines() {
            all.extend(parse_params(line)?);
        }
        Ok(all)
    }
}

/// Renders the statement back in its annotated source form.
impl fmt::Display for ParsedStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{NAME_MARKER} {}{}", self.name, self.kind.sigil())?;
        if let Some(description) = &self.description {
            for line in description.lines() {
                write!(f, "\n{COMMENT_MARKER} {line}")?;
            }
        }
        if !self.body.is_empty() {
            write!(f, "\n{}", self.body)?;
        }
        Ok(())
    }
}

/// Parse a single statement block (no blank lines inside).
pub fn parse_statement(block: &str, config: &Config) -> Result<ParsedStatement> {
    let lines: Vec<&str> = block.split('\n').collect();
    let header = classify_header(lines[0], config.uppercase_names)?;

    let comments: Vec<&str> = lines[1..]
        .iter()
        .take_while(|line| line.starts_with(COMMENT_MARKER))
        .map(|line| line.trim_matches('-').trim())
        .collect();
    let body_lines = &lines[1 + comments.len()..];

    let description = if comments.is_empty() {
        None
    } else {
        Some(comments.join("\n"))
    };

    let fragments = match header.kind {
        StatementKind::SelectBuilt => Some(FragmentIndex::build(body_lines)?),
        _ => None,
    };

    Ok(ParsedStatement {
        name: header.name,
        kind: header.kind,
        description,
        body: body_lines.join("\n"),
        fragments,
    })
}

/// Split a text blob on blank lines and parse every non-empty block.
///
/// Fails fast: the first malformed block aborts the whole batch.
pub fn parse_statements(text: &str, config: &Config) -> Result<Vec<ParsedStatement>> {
    text.split("\n\n")
        .map(|block| block.trim_matches('\n'))
        .filter(|block| !block.is_empty())
        .map(|block| parse_statement(block, config))
        .collect()
}
