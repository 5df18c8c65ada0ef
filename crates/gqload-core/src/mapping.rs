//! Field-to-argument name mapping.
//!
//! A mapping is supplied as `{ "field": "argument" }` pairs; resolution
//! goes the other way (given an argument, find the record field that
//! feeds it), so the reverse index is precomputed once per run.

use std::collections::HashMap;

/// Resolves which record field supplies each declared argument.
///
/// Arguments without an explicit mapping fall back to the field with the
/// same name.
#[derive(Debug, Clone, Default)]
pub struct FieldMapping {
    by_argument: HashMap<String, String>,
}

impl FieldMapping {
    /// Build from `field -> argument` pairs.
    pub fn new<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let by_argument = pairs
            .into_iter()
            .map(|(field, argument)| (argument, field))
            .collect();
        Self { by_argument }
    }

    /// The record field that supplies `argument`.
    pub fn resolve<'a>(&'a self, argument: &'a str) -> &'a str {
        self.by_argument
            .get(argument)
            .map(String::as_str)
            .unwrap_or(argument)
    }

    pub fn is_empty(&self) -> bool {
        self.by_argument.is_empty()
    }
}
