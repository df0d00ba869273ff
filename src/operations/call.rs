use serde_json::Value;

use crate::builder::identifiers::Identifiers;
use crate::error::{Error, Result};
use crate::operations::cursor::{NamedArgs, Params, Row};

/// Arguments and options for one invocation of a prepared statement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Call {
    /// Positional arguments; ignored when named arguments are given.
    pub positional: Vec<Value>,
    /// Named arguments.
    pub named: NamedArgs,
    /// Parameter sets for a batched mutation.
    pub batch: Option<Vec<Params>>,
    /// Row limit: `None` fetches all, `1` one row, `N` up to `N` rows.
    pub limit: Option<usize>,
    /// Identifiers to quote into the SQL text.
    pub identifiers: Option<Identifiers>,
    /// Per-call override of [`crate::config::Config::log_query_params`].
    pub log_params: Option<bool>,
}

impl Call {
    /// Empty call: no arguments, all rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named argument.
    pub fn arg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.named.insert(name.into(), value.into());
        self
    }

    /// Replace the named arguments.
    pub fn named(mut self, args: NamedArgs) -> Self {
        self.named = args;
        self
    }

    /// Replace the positional arguments.
    pub fn positional(mut self, args: Vec<Value>) -> Self {
        self.positional = args;
        self
    }

    /// Execute as a batch over `batch`.
    pub fn many(mut self, batch: Vec<Params>) -> Self {
        self.batch = Some(batch);
        self
    }

    /// Limit the number of fetched rows.
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Quote these identifiers into the SQL text.
    pub fn identifiers(mut self, identifiers: impl Into<Identifiers>) -> Self {
        self.identifiers = Some(identifiers.into());
        self
    }

    /// Override parameter logging for this call.
    pub fn log_params(mut self, enabled: bool) -> Self {
        self.log_params = Some(enabled);
        self
    }

    /// Parameters to bind: named when any were given, positional otherwise.
    pub fn params(&self) -> Params {
        if self.named.is_empty() {
            Params::Positional(self.positional.clone())
        } else {
            Params::Named(self.named.clone())
        }
    }

    pub(crate) fn checked_limit(&self) -> Result<Option<usize>> {
        match self.limit {
            Some(0) => Err(Error::argument("row limit must be an integer >= 1", None)),
            other => Ok(other),
        }
    }
}

/// What a prepared statement returned.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutput {
    /// A mutation completed.
    Done {
        /// Rows affected, when the cursor reports it.
        rows_affected: Option<u64>,
    },
    /// Single-row fetch (`limit == 1`).
    Row(Option<Row>),
    /// Multi-row fetch.
    Rows(Vec<Row>),
}

impl QueryOutput {
    /// Flatten into a list of rows.
    pub fn into_rows(self) -> Vec<Row> {
        match self {
            QueryOutput::Done { .. } => Vec::new(),
            QueryOutput::Row(row) => row.into_iter().collect(),
            QueryOutput::Rows(rows) => rows,
        }
    }
}
