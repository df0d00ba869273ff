//! Load files of named, annotated SQL statements into typed prepared operations.
#![warn(missing_docs)]

/// Per-call SQL assembly and identifier interpolation.
pub mod builder;
/// Statement header classification and statement kinds.
pub mod classifier;
/// Explicit configuration threaded through parsing and execution.
pub mod config;
/// Error taxonomy and crate `Result` alias.
pub mod error;
/// Reading statement files from disk.
pub mod loader;
/// Cursor interface, call surface, execution strategies and the statement registry.
pub mod operations;
/// Markdown catalogue generation.
pub mod output;
/// Statement block, fragment and parameter parsing.
pub mod parser;

pub use classifier::statement_kind::StatementKind;
pub use config::Config;
pub use error::{Error, ErrorKind, Result};
pub use operations::call::{Call, QueryOutput};
pub use operations::cursor::{Cursor, NamedArgs, Params, Row};
pub use operations::registry::Queries;
pub use parser::entry::ParsedStatement;
