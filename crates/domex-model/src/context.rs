//! Evaluation context - the per-evaluation binding of root aliases

use domex_types::Value;
use indexmap::IndexMap;

/// Binding of root aliases (e.g. `"user"`) to the values paths start from.
///
/// A context belongs to one top-level evaluation. Build a fresh one for each
/// concurrent evaluation instead of sharing it between threads.
#[derive(Debug, Clone, Default)]
pub struct EvaluationContext {
    roots: IndexMap<String, Value>,
}

impl EvaluationContext {
    /// Create a new empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style root binding
    pub fn with_root(mut self, alias: impl Into<String>, value: impl Into<Value>) -> Self {
        self.roots.insert(alias.into(), value.into());
        self
    }

    /// Bind a root alias, replacing any previous binding
    pub fn set_root(&mut self, alias: impl Into<String>, value: Value) {
        self.roots.insert(alias.into(), value);
    }

    /// Look up a root alias.
    ///
    /// A root bound to `Value::Null` is present and yields `Some(&Value::Null)`.
    pub fn root(&self, alias: &str) -> Option<&Value> {
        self.roots.get(alias)
    }

    /// Remove a root binding
    pub fn remove_root(&mut self, alias: &str) -> Option<Value> {
        self.roots.shift_remove(alias)
    }

    /// Iterate over bound aliases in binding order
    pub fn roots(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.roots.iter().map(|(k, v)| (k.as_str(), v))
    }
}
