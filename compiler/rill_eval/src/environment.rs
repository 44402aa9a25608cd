//! The runtime environment.
//!
//! One flat name-to-value map for the whole run. The language has no
//! functions, so there is exactly one live environment and never a frame
//! stack; lexical blocks affect compile-time visibility only (that is the
//! scope table's job, over in `rill_parse`).

use rustc_hash::FxHashMap;

use rill_ast::Name;

/// Mutable map from variable name to its current integer value.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    values: FxHashMap<Name, i64>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Environment::default()
    }

    /// Current value of `name`, if it has been assigned.
    #[inline]
    pub fn get(&self, name: Name) -> Option<i64> {
        self.values.get(&name).copied()
    }

    /// Bind or update `name`. Assignment is the only mutation the
    /// language has, so this covers both cases.
    #[inline]
    pub fn set(&mut self, name: Name, value: i64) {
        self.values.insert(name, value);
    }

    /// Whether `name` currently has a binding.
    pub fn contains(&self, name: Name) -> bool {
        self.values.contains_key(&name)
    }

    /// Number of live bindings.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
