//! Variable environment for the calc evaluator.

use std::collections::BTreeMap;

/// Session-lifetime variable store.
///
/// Created empty, written only by assignment evaluation, read by variable
/// references. The language has no blocks, so one flat map covers the whole
/// session — there is no scope stack.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    bindings: BTreeMap<String, f64>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, replacing any previous binding.
    pub fn define(&mut self, name: &str, value: f64) {
        self.bindings.insert(name.to_string(), value);
    }

    /// Look up a variable. `None` means it was never assigned.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.bindings.get(name).copied()
    }
}
