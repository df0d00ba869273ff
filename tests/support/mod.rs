#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::PathBuf;

use sqlstash::config::Config;
use sqlstash::error::CursorError;
use sqlstash::operations::cursor::{Cursor, Params, Row};
use sqlstash::operations::registry::Queries;

pub(crate) fn fixture_path(fixture: &str) -> PathBuf {
    PathBuf::from("tests/fixtures").join(fixture)
}

pub(crate) fn read_fixture_sql(fixture: &str) -> String {
    std::fs::read_to_string(fixture_path(fixture)).expect("fixture SQL should be readable")
}

pub(crate) fn load_fixture_queries(fixture: &str, config: Config) -> Queries {
    Queries::from_files(&[fixture_path(fixture)], config).expect("fixture SQL should load")
}

/// Everything a [`RecordingCursor`] was asked to do.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Recorded {
    Execute(String, Params),
    ExecuteMany(String, Vec<Params>),
    CallProc(String, Params),
    FetchOne,
    FetchMany(usize),
    FetchAll,
}

/// In-memory cursor that records calls and serves canned rows.
#[derive(Debug, Default)]
pub(crate) struct RecordingCursor {
    pub calls: Vec<Recorded>,
    pub rows: VecDeque<Row>,
    pub rows_affected: Option<u64>,
    pub quoting: bool,
    pub fail_execute: Option<String>,
    pub fail_quote: Option<String>,
}

impl RecordingCursor {
    pub(crate) fn with_rows(rows: Vec<Row>) -> Self {
        Self {
            rows: rows.into(),
            ..Self::default()
        }
    }

    pub(crate) fn with_quoting(mut self) -> Self {
        self.quoting = true;
        self
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self {
            fail_execute: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub(crate) fn executed_sql(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Recorded::Execute(sql, _)
                | Recorded::ExecuteMany(sql, _)
                | Recorded::CallProc(sql, _) => Some(sql.as_str()),
                _ => None,
            })
            .collect()
    }

    fn check(&self) -> Result<(), CursorError> {
        match &self.fail_execute {
            Some(message) => Err(message.clone().into()),
            None => Ok(()),
        }
    }
}

impl Cursor for RecordingCursor {
    fn execute(&mut self, sql: &str, params: &Params) -> Result<(), CursorError> {
        self.calls
            .push(Recorded::Execute(sql.to_string(), params.clone()));
        self.check()
    }

    fn execute_many(&mut self, sql: &str, batch: &[Params]) -> Result<(), CursorError> {
        self.calls
            .push(Recorded::ExecuteMany(sql.to_string(), batch.to_vec()));
        self.check()
    }

    fn fetch_one(&mut self) -> Result<Option<Row>, CursorError> {
        self.calls.push(Recorded::FetchOne);
        Ok(self.rows.pop_front())
    }

    fn fetch_many(&mut self, n: usize) -> Result<Vec<Row>, CursorError> {
        self.calls.push(Recorded::FetchMany(n));
        let take = n.min(self.rows.len());
        Ok(self.rows.drain(..take).collect())
    }

    fn fetch_all(&mut self) -> Result<Vec<Row>, CursorError> {
        self.calls.push(Recorded::FetchAll);
        Ok(self.rows.drain(..).collect())
    }

    fn call_proc(&mut self, name: &str, params: &Params) -> Result<(), CursorError> {
        self.calls
            .push(Recorded::CallProc(name.to_string(), params.clone()));
        self.check()
    }

    fn rows_affected(&self) -> Option<u64> {
        self.rows_affected
    }

    fn quote_identifier(&self, ident: &str) -> Option<Result<String, CursorError>> {
        if let Some(message) = &self.fail_quote {
            return Some(Err(message.clone().into()));
        }
        self.quoting
            .then(|| Ok(format!("\"{}\"", ident.replace('"', "\"\""))))
    }
}
