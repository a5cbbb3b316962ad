//! Shared run context

use std::collections::BTreeMap;

use serde_json::Value;

use crate::transform::TransformError;

/// Read-only key/value data shared by every transform during a run.
///
/// The engine hands the same context to each transform invocation and
/// never copies, filters, or extends it mid-run. Values are arbitrary
/// structured data (strings, numbers, booleans, nested maps/sequences).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    values: BTreeMap<String, Value>,
}

impl Context {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a raw value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Look up a string value. Returns `None` when the key is absent or
    /// holds a non-string value.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    /// Look up a string value, failing the way a transform should: an
    /// absent key and an ill-typed value are distinct, reportable errors.
    pub fn require_str(&self, key: &str) -> Result<&str, TransformError> {
        let value = self.get(key).ok_or_else(|| TransformError::MissingContext {
            key: key.to_string(),
        })?;
        value.as_str().ok_or_else(|| TransformError::ContextType {
            key: key.to_string(),
            expected: "string",
        })
    }

    /// Add an entry. Contexts are built once, before the run starts.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, Value)> for Context {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
