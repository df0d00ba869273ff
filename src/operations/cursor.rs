use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CursorError;

/// Named arguments, ordered by name.
pub type NamedArgs = BTreeMap<String, Value>;

/// One fetched row.
pub type Row = Vec<Value>;

/// Parameters handed to the cursor for a single execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Params {
    /// Bound by position.
    Positional(Vec<Value>),
    /// Bound by `%(name)s` placeholder.
    Named(NamedArgs),
}

impl Params {
    /// True when no value is bound.
    pub fn is_empty(&self) -> bool {
        match self {
            Params::Positional(values) => values.is_empty(),
            Params::Named(map) => map.is_empty(),
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Params::Positional(Vec::new())
    }
}

/// Database cursor the prepared operations execute against.
///
/// Methods mirror a DB-API style cursor: execute, then fetch from the
/// pending result set.
pub trait Cursor {
    /// Execute one statement.
    fn execute(&mut self, sql: &str, params: &Params) -> Result<(), CursorError>;

    /// Execute one statement once per parameter set.
    fn execute_many(&mut self, sql: &str, batch: &[Params]) -> Result<(), CursorError>;

    /// Fetch the next row, if any.
    fn fetch_one(&mut self) -> Result<Option<Row>, CursorError>;

    /// Fetch up to `n` rows.
    fn fetch_many(&mut self, n: usize) -> Result<Vec<Row>, CursorError>;

    /// Fetch every remaining row.
    fn fetch_all(&mut self) -> Result<Vec<Row>, CursorError>;

    /// Invoke a stored procedure.
    fn call_proc(&mut self, name: &str, params: &Params) -> Result<(), CursorError>;

    /// Rows affected by the last execution, when the driver reports it.
    fn rows_affected(&self) -> Option<u64> {
        None
    }

    /// Quote `ident` for safe interpolation as a SQL identifier.
    ///
    /// `None` means the cursor has no quoting support.
    fn quote_identifier(&self, _ident: &str) -> Option<Result<String, CursorError>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn params_deserialize_from_array_or_object() {
        let positional: Params = serde_json::from_str("[1, \"a\"]").expect("array params");
        assert_eq!(positional, Params::Positional(vec![json!(1), json!("a")]));

        let named: Params = serde_json::from_str(r#"{"id": 7}"#).expect("object params");
        assert_eq!(
            named,
            Params::Named(NamedArgs::from([("id".to_string(), json!(7))]))
        );
    }

    #[test]
    fn default_params_are_empty() {
        assert!(Params::default().is_empty());
        assert!(!Params::Positional(vec![Value::Null]).is_empty());
    }
}
