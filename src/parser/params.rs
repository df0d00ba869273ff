use std::collections::BTreeSet;

use crate::error::{Error, Result};

/// Distinct parameter names referenced by one line.
pub type ParameterSet = BTreeSet<String>;

/// Extract the named `%(name)s` parameters referenced by a single line.
///
/// Opening markers (`%(`) and closing markers (`)s`) are collected in scan
/// order and paired positionally. A `)` not followed by `s` is ordinary text.
///
/// Returns an empty set when the line contains no `%(`.
///
/// # Errors
///
/// [`Error::Parse`] when the number of opening and closing markers differ,
/// or when a pair encloses an empty name.
pub fn parse_params(line: &str) -> Result<ParameterSet> {
    let mut params = ParameterSet::new();
    if !line.contains("%(") {
        return Ok(params);
    }

    let bytes = line.as_bytes();
    let mut starts = Vec::new();
    let mut ends = Vec::new();
    for (idx, &byte) in bytes.iter().enumerate() {
        let next = bytes.get(idx + 1).copied();
        match (byte, next) {
            (b'%', Some(b'(')) => starts.push(idx + 2),
            (b')', Some(b's')) => ends.push(idx),
            _ => {}
        }
    }

    if starts.len() != ends.len() {
        return Err(Error::parse(
            "parse error, parameter markers do not match",
            line,
        ));
    }

    for (&start, &end) in starts.iter().zip(&ends) {
        if end <= start {
            return Err(Error::parse(
                "parse error, no parameter name found between %(...)s",
                line,
            ));
        }
        params.insert(line[start..end].to_string());
    }

    Ok(params)
}
