use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Identifiers to interpolate into SQL text before execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifiers {
    /// Filled into `{}` (in order) or `{N}` (by index) placeholders.
    Positional(Vec<String>),
    /// Each `{name}` placeholder becomes the group's quoted identifiers, comma-separated.
    Named(BTreeMap<String, Vec<String>>),
}

impl Identifiers {
    /// True when there is nothing to substitute.
    pub fn is_empty(&self) -> bool {
        match self {
            Identifiers::Positional(list) => list.is_empty(),
            Identifiers::Named(groups) => groups.is_empty(),
        }
    }
}

impl From<Vec<String>> for Identifiers {
    fn from(list: Vec<String>) -> Self {
        Identifiers::Positional(list)
    }
}

impl From<BTreeMap<String, Vec<String>>> for Identifiers {
    fn from(groups: BTreeMap<String, Vec<String>>) -> Self {
        Identifiers::Named(groups)
    }
}

/// Replace `{}`/`{N}`/`{name}` placeholders with quoted identifiers.
///
/// `{{` and `}}` produce literal braces. Every identifier is passed through
/// `quote` before insertion.
pub fn substitute_identifiers<F>(
    sql: &str,
    identifiers: &Identifiers,
    mut quote: F,
) -> Result<String>
where
    F: FnMut(&str) -> Result<String>,
{
    let mut out = String::with_capacity(sql.len());
    let mut chars = sql.chars().peekable();
    let mut next_auto = 0usize;

    while let Some(ch) = chars.next() {
        match ch {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '{' => {
                let mut field = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    field.push(c);
                }
                if !closed {
                    return Err(Error::argument(
                        "unterminated identifier placeholder",
                        Some(&format!("{{{field}")),
                    ));
                }
                let field = field.trim();
                let rendered = match identifiers {
                    Identifiers::Positional(list) => {
                        let position = if field.is_empty() {
                            next_auto += 1;
                            next_auto - 1
                        } else {
                            field.parse::<usize>().map_err(|_| {
                                Error::argument(
                                    "named placeholder requires name-keyed identifiers",
                                    Some(field),
                                )
                            })?
                        };
                        let ident = list.get(position).ok_or_else(|| {
                            Error::argument(
                                "not enough identifiers for placeholder",
                                Some(&position.to_string()),
                            )
                        })?;
                        quote(ident)?
                    }
                    Identifiers::Named(groups) => {
                        let group = groups.get(field).ok_or_else(|| {
                            Error::argument("no identifier group for placeholder", Some(field))
                        })?;
                        group
                            .iter()
                            .map(|ident| quote(ident))
                            .collect::<Result<Vec<_>>>()?
                            .join(", ")
                    }
                };
                out.push_str(&rendered);
            }
            other => out.push(other),
        }
    }

    Ok(out)
}
