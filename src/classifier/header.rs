use crate::classifier::statement_kind::StatementKind;
use crate::error::{Error, Result};

/// Marker every statement block must start with.
pub const NAME_MARKER: &str = "-- name:";

/// Canonical name and kind read from a `-- name:` header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementHeader {
    /// Name with its sigil removed, case-folded per configuration.
    pub name: String,
    /// Kind selected by the sigil.
    pub kind: StatementKind,
}

/// Classify the first line of a statement block.
///
/// The identifier after `-- name:` is trimmed, uppercased when
/// `uppercase_names` is set, and checked for internal whitespace. Sigils are
/// checked in [`StatementKind::SIGILS`] order; the first one found anywhere in
/// the name decides the kind and every occurrence of it is removed.
pub fn classify_header(line: &str, uppercase_names: bool) -> Result<StatementHeader> {
    let Some(rest) = line.strip_prefix(NAME_MARKER) else {
        return Err(Error::parse(
            format!("statement does not start with \"{NAME_MARKER}\""),
            line,
        ));
    };

    let raw = rest.trim();
    if raw.is_empty() {
        return Err(Error::parse("statement name is empty", line));
    }
    if raw.chars().any(char::is_whitespace) {
        return Err(Error::parse("statement name has spaces", line));
    }

    let folded = if uppercase_names {
        raw.to_uppercase()
    } else {
        raw.to_string()
    };

    let (name, kind) = StatementKind::SIGILS
        .iter()
        .find(|(sigil, _)| folded.contains(sigil))
        .map_or((folded.clone(), StatementKind::Select), |(sigil, kind)| {
            (folded.replace(sigil, ""), *kind)
        });

    if name.is_empty() {
        return Err(Error::parse("statement name is empty", line));
    }

    Ok(StatementHeader { name, kind })
}
