use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use tracing::{info, warn};

use crate::builder::assembler::{assemble, AssembledQuery};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::loader;
use crate::operations::call::{Call, QueryOutput};
use crate::operations::cursor::{Cursor, NamedArgs};
use crate::operations::executor;
use crate::parser::entry::{parse_statements, ParsedStatement};

/// Named collection of prepared statements, dispatched by canonical name.
#[derive(Debug, Clone, Default)]
pub struct Queries {
    config: Config,
    statements: HashMap<String, ParsedStatement>,
    /// Canonical names in first-load order.
    names: Vec<String>,
}

impl Queries {
    /// Empty registry using `config`.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            statements: HashMap::new(),
            names: Vec::new(),
        }
    }

    /// Parse every statement in `text`.
    pub fn from_text(text: &str, config: Config) -> Result<Self> {
        let mut queries = Self::new(config);
        for statement in parse_statements(text, &queries.config)? {
            queries.add(statement);
        }
        info!("Found and loaded {} sql queries", queries.len());
        Ok(queries)
    }

    /// Load and parse the given statement files.
    pub fn from_files<P: AsRef<Path>>(paths: &[P], config: Config) -> Result<Self> {
        let text = loader::load_files(paths)?;
        Self::from_text(&text, config)
    }

    /// Register `statement`, replacing any statement with the same name.
    pub fn add(&mut self, statement: ParsedStatement) {
        let name = statement.name().to_string();
        if self.statements.insert(name.clone(), statement).is_some() {
            warn!(statement = %name, "duplicate statement name, keeping the last definition");
        } else {
            self.names.push(name);
        }
    }

    /// Configuration this registry was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Statement registered under `name`.
    pub fn get(&self, name: &str) -> Option<&ParsedStatement> {
        self.statements.get(name)
    }

    /// True when `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.statements.contains_key(name)
    }

    /// Available statement names, in load order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Statements in load order.
    pub fn iter(&self) -> impl Iterator<Item = &ParsedStatement> {
        self.names
            .iter()
            .filter_map(|name| self.statements.get(name))
    }

    /// Number of registered statements.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Execute the statement registered under `name`.
    pub fn call<C>(&self, name: &str, cursor: &mut C, call: &Call) -> Result<QueryOutput>
    where
        C: Cursor + ?Sized,
    {
        let statement = self.lookup(name)?;
        executor::execute(statement, cursor, call, &self.config)
    }

    /// Assemble a `SELECT_BUILT` statement without executing it.
    pub fn build(&self, name: &str, args: &NamedArgs) -> Result<AssembledQuery> {
        let statement = self.lookup(name)?;
        let index = statement
            .fragments()
            .ok_or_else(|| Error::argument("statement is not buildable", Some(statement.name())))?;
        assemble(index, args, self.config.strict_parse)
    }

    fn lookup(&self, name: &str) -> Result<&ParsedStatement> {
        self.get(name)
            .ok_or_else(|| Error::argument("unknown statement", Some(name)))
    }
}

impl fmt::Display for Queries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Queries({:?})", self.names)
    }
}
