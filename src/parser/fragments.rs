use std::collections::BTreeMap;

use crate::error::Result;
use crate::parser::params::{parse_params, ParameterSet};

/// Which lookup bucket a fragment is registered under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FragmentKey {
    /// The line references no parameter and is always included.
    Unconditional,
    /// The line is included when this parameter is supplied.
    Param(String),
}

/// One parameter-keyed slice of a buildable statement's body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Bucket this fragment belongs to.
    pub key: FragmentKey,
    /// Ordering key restoring source order after selection.
    pub position: usize,
    /// The source line, verbatim.
    pub line: String,
    /// Every parameter the line references.
    pub params: ParameterSet,
}

/// Line fragments of a `SELECT_BUILT` body and their lookup by key.
///
/// A line with `N` distinct parameters yields `N` fragments on consecutive
/// positions, so positions are a strictly increasing counter over fragments
/// and sorting by it reproduces source line order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentIndex {
    fragments: Vec<Fragment>,
    lookup: BTreeMap<FragmentKey, Vec<usize>>,
}

impl FragmentIndex {
    /// Build the index from body lines in source order.
    pub fn build<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        let mut index = Self::default();
        let mut position = 0usize;

        for line in lines {
            let line = line.as_ref();
            let params = parse_params(line)?;
            if params.is_empty() {
                index.push(FragmentKey::Unconditional, position, line, params);
                position += 1;
                continue;
            }
            for name in &params {
                index.push(
                    FragmentKey::Param(name.clone()),
                    position,
                    line,
                    params.clone(),
                );
                position += 1;
            }
        }

        Ok(index)
    }

    fn push(&mut self, key: FragmentKey, position: usize, line: &str, params: ParameterSet) {
        self.lookup
            .entry(key.clone())
            .or_default()
            .push(self.fragments.len());
        self.fragments.push(Fragment {
            key,
            position,
            line: line.to_string(),
            params,
        });
    }

    /// All fragments, in position order.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Fragment at `idx` in [`FragmentIndex::fragments`].
    pub fn get(&self, idx: usize) -> Option<&Fragment> {
        self.fragments.get(idx)
    }

    /// Indices of the fragments keyed under `key`.
    pub fn lookup(&self, key: &FragmentKey) -> &[usize] {
        self.lookup.get(key).map_or(&[][..], Vec::as_slice)
    }

    /// Indices of the fragments keyed under parameter `name`.
    pub fn lookup_param(&self, name: &str) -> &[usize] {
        self.lookup(&FragmentKey::Param(name.to_string()))
    }

    /// Indices of the parameter-free fragments.
    pub fn unconditional(&self) -> &[usize] {
        self.lookup(&FragmentKey::Unconditional)
    }

    /// Every parameter name some fragment is keyed under.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.lookup.keys().filter_map(|key| match key {
            FragmentKey::Param(name) => Some(name.as_str()),
            FragmentKey::Unconditional => None,
        })
    }

    /// True when `name` selects at least one fragment.
    pub fn has_param(&self, name: &str) -> bool {
        !self.lookup_param(name).is_empty()
    }

    /// Number of fragments.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// True when the body had no lines.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}
