//! Execution strategies, one per [`StatementKind`].
//!
//! Every strategy resolves the final SQL text and parameters, optionally
//! interpolates quoted identifiers, hands the statement to the cursor and
//! fetches according to the call's row limit. Cursor failures are logged with
//! the statement name and final SQL, then returned as [`Error::Execution`].

use tracing::{debug, error, info};

use crate::builder::assembler::assemble;
use crate::builder::identifiers::substitute_identifiers;
use crate::classifier::statement_kind::StatementKind;
use crate::config::Config;
use crate::error::{CursorError, Error, Result};
use crate::operations::call::{Call, QueryOutput};
use crate::operations::cursor::{Cursor, Params};
use crate::parser::entry::ParsedStatement;

/// Run `statement` against `cursor` with the given call arguments.
pub fn execute<C>(
    statement: &ParsedStatement,
    cursor: &mut C,
    call: &Call,
    config: &Config,
) -> Result<QueryOutput>
where
    C: Cursor + ?Sized,
{
    let limit = call.checked_limit()?;
    let kind = statement.kind();
    if call.batch.is_some()
        && !matches!(kind, StatementKind::Mutate | StatementKind::MutateReturning)
    {
        return Err(Error::argument(
            "batched execution is only supported for mutations",
            Some(statement.name()),
        ));
    }

    info!(statement = statement.name(), kind = %kind, "executing statement");

    let (mut sql, params) = match (kind, statement.fragments()) {
        (StatementKind::SelectBuilt, Some(index)) => {
            let assembled = assemble(index, &call.named, config.strict_parse)?;
            (assembled.sql, Params::Named(assembled.params))
        }
        _ => (statement.body().to_string(), call.params()),
    };

    if let Some(identifiers) = call.identifiers.as_ref().filter(|ids| !ids.is_empty()) {
        sql = substitute_identifiers(&sql, identifiers, |ident| {
            quote_identifier(&*cursor, statement.name(), &sql, ident)
        })?;
    }

    log_query(statement.name(), &sql, &params, call, config);

    let name = statement.name();
    let outcome = match (kind, call.batch.as_deref()) {
        (StatementKind::CallProcedure, _) => cursor.call_proc(&sql, &params),
        (_, Some(batch)) => cursor.execute_many(&sql, batch),
        _ => cursor.execute(&sql, &params),
    };
    delegate(name, &sql, outcome)?;

    if !kind.returns_rows() {
        return Ok(QueryOutput::Done {
            rows_affected: cursor.rows_affected(),
        });
    }

    let output = match limit {
        None => QueryOutput::Rows(delegate(name, &sql, cursor.fetch_all())?),
        Some(1) => QueryOutput::Row(delegate(name, &sql, cursor.fetch_one())?),
        Some(n) => QueryOutput::Rows(delegate(name, &sql, cursor.fetch_many(n))?),
    };
    Ok(output)
}

fn quote_identifier<C>(cursor: &C, statement: &str, sql: &str, ident: &str) -> Result<String>
where
    C: Cursor + ?Sized,
{
    match cursor.quote_identifier(ident) {
        None => Err(Error::Capability(
            "identifier quoting is not supported by this cursor".to_string(),
        )),
        Some(outcome) => delegate(statement, sql, outcome),
    }
}

fn log_query(name: &str, sql: &str, params: &Params, call: &Call, config: &Config) {
    debug!(statement = name, sql, "final SQL");
    if call.log_params.unwrap_or(config.log_query_params) {
        match &call.batch {
            Some(batch) => info!(statement = name, params = ?batch, "query arguments"),
            None => info!(statement = name, params = ?params, "query arguments"),
        }
    }
}

fn delegate<T>(name: &str, sql: &str, outcome: std::result::Result<T, CursorError>) -> Result<T> {
    outcome.map_err(|source| {
        error!(
            statement = name,
            error = %source,
            "exception raised while executing statement\n____\n{sql}\n____"
        );
        Error::Execution {
            statement: name.to_string(),
            sql: sql.to_string(),
            source,
        }
    })
}
