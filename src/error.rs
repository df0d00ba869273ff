//! Error taxonomy shared by loading, parsing, assembly and execution.

use std::path::PathBuf;

use thiserror::Error;

/// Boxed error produced by a [`crate::operations::cursor::Cursor`] implementation.
pub type CursorError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Every failure `sqlstash` can report.
#[derive(Error, Debug)]
pub enum Error {
    /// A declared source file could not be found or read.
    #[error("could not load SQL file {}: {source}", path.display())]
    Load {
        /// Path that failed to load.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Malformed statement header or parameter token.
    #[error("{message}: \"{line}\"")]
    Parse {
        /// What was wrong.
        message: String,
        /// The offending line, verbatim.
        line: String,
    },

    /// Call-time arguments that do not fit the statement.
    #[error("{message}{}", key.as_deref().map(|k| format!(": {k}")).unwrap_or_default())]
    Argument {
        /// What was wrong.
        message: String,
        /// Offending argument name, when there is one.
        key: Option<String>,
    },

    /// The cursor lacks a capability the call asked for.
    #[error("capability not supported: {0}")]
    Capability(String),

    /// The cursor failed while executing or fetching.
    #[error("statement {statement} failed: {source}")]
    Execution {
        /// Canonical name of the statement.
        statement: String,
        /// Final SQL text handed to the cursor.
        sql: String,
        /// Error raised by the cursor.
        #[source]
        source: CursorError,
    },

    /// Configuration file could not be read or decoded.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Tag identifying the category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::Load`].
    Load,
    /// See [`Error::Parse`].
    Parse,
    /// See [`Error::Argument`].
    Argument,
    /// See [`Error::Capability`].
    Capability,
    /// See [`Error::Execution`].
    Execution,
    /// See [`Error::Config`].
    Config,
}

impl Error {
    /// Build a parse error naming the offending line.
    pub fn parse(message: impl Into<String>, line: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            line: line.into(),
        }
    }

    /// Build an argument error, optionally naming the offending key.
    pub fn argument(message: impl Into<String>, key: Option<&str>) -> Self {
        Self::Argument {
            message: message.into(),
            key: key.map(ToString::to_string),
        }
    }

    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Load { .. } => ErrorKind::Load,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::Argument { .. } => ErrorKind::Argument,
            Self::Capability(_) => ErrorKind::Capability,
            Self::Execution { .. } => ErrorKind::Execution,
            Self::Config(_) => ErrorKind::Config,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
