use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Settings threaded through parsing, assembly and execution.
///
/// Each [`crate::operations::registry::Queries`] owns its own copy, so
/// registries built with different settings never interfere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Reject named arguments that match no fragment of a built statement.
    pub strict_parse: bool,
    /// Uppercase statement names when parsing headers.
    pub uppercase_names: bool,
    /// Log bound parameter values at execution time.
    pub log_query_params: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict_parse: false,
            uppercase_names: true,
            log_query_params: true,
        }
    }
}

impl Config {
    /// Set [`Config::strict_parse`].
    pub fn with_strict_parse(mut self, strict: bool) -> Self {
        self.strict_parse = strict;
        self
    }

    /// Set [`Config::uppercase_names`].
    pub fn with_uppercase_names(mut self, uppercase: bool) -> Self {
        self.uppercase_names = uppercase;
        self
    }

    /// Set [`Config::log_query_params`].
    pub fn with_log_query_params(mut self, log: bool) -> Self {
        self.log_query_params = log;
        self
    }

    /// Decode a configuration from JSON. Missing keys keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(format!("invalid JSON: {e}")))
    }

    /// Read and decode a JSON configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;
        Self::from_json_str(&content)
    }
}
