use std::collections::{BTreeSet, HashSet};

use serde_json::Value;

use crate::error::{Error, Result};
use crate::operations::cursor::NamedArgs;
use crate::parser::fragments::FragmentIndex;
use crate::parser::params::ParameterSet;

/// SQL text assembled for one call, with the arguments to bind it with.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledQuery {
    /// Final SQL, selected lines in source order.
    pub sql: String,
    /// Supplied arguments plus a `null` for every referenced but unsupplied parameter.
    pub params: NamedArgs,
}

/// Assemble the SQL for a `SELECT_BUILT` statement from the supplied arguments.
///
/// Unconditional fragments are always selected; a parameter's fragments are
/// selected when the caller supplies it. Selected fragments are ordered by
/// position and their lines joined, each distinct line emitted once.
/// Lines are compared whole: a line that only occurs inside an earlier line
/// is still emitted.
///
/// Parameters referenced by a selected line but not supplied are bound to
/// `null` in the returned map. `args` itself is left untouched.
///
/// # Errors
///
/// [`Error::Argument`] when `strict` is set and an argument matches no fragment.
pub fn assemble(index: &FragmentIndex, args: &NamedArgs, strict: bool) -> Result<AssembledQuery> {
    let mut selected: BTreeSet<usize> = index.unconditional().iter().copied().collect();
    let mut required = ParameterSet::new();

    for key in args.keys() {
        let matches = index.lookup_param(key);
        if matches.is_empty() {
            if strict {
                return Err(Error::argument(
                    "named argument supplied which does not match a SQL clause",
                    Some(key.as_str()),
                ));
            }
            continue;
        }
        for &idx in matches {
            if selected.insert(idx) {
                if let Some(fragment) = index.get(idx) {
                    required.extend(fragment.params.iter().cloned());
                }
            }
        }
    }

    let mut params = args.clone();
    for name in required {
        params.entry(name).or_insert(Value::Null);
    }

    let mut fragments: Vec<_> = selected.iter().filter_map(|&idx| index.get(idx)).collect();
    fragments.sort_by_key(|fragment| fragment.position);

    let mut emitted: HashSet<&str> = HashSet::new();
    let lines: Vec<&str> = fragments
        .iter()
        .map(|fragment| fragment.line.as_str())
        .filter(|line| emitted.insert(*line))
        .collect();

    Ok(AssembledQuery {
        sql: lines.join("\n"),
        params,
    })
}
