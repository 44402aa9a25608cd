//! Compile-time scope table.
//!
//! A stack of visibility frames consulted while the tree is built: one
//! frame per lexical block, innermost-first lookup, seeded with a global
//! frame. Popped frames are archived so diagnostics could inspect them
//! later; archiving never affects lookup.
//!
//! Declaration policy: redeclaring a name that is already visible in any
//! active frame reuses the existing binding instead of shadowing it in
//! the innermost frame (the alternative, per-frame shadowing, would be
//! unobservable at runtime anyway since the runtime environment is flat).

use rustc_hash::FxHashSet;

use rill_ast::Name;

/// Stack of visibility frames.
pub struct ScopeStack {
    scopes: Vec<FxHashSet<Name>>,
    archived: Vec<FxHashSet<Name>>,
}

impl ScopeStack {
    /// Create a scope stack with the implicit global frame.
    pub fn new() -> Self {
        ScopeStack {
            scopes: vec![FxHashSet::default()],
            archived: Vec::new(),
        }
    }

    /// Open a new innermost frame (block entry).
    pub fn push(&mut self) {
        self.scopes.push(FxHashSet::default());
    }

    /// Close the innermost frame (block exit); its bindings become
    /// invisible to subsequent lookups.
    ///
    /// # Panics
    /// Panics if no frame is active.
    pub fn pop(&mut self) {
        assert!(!self.scopes.is_empty(), "pop with no active scope frame");
        if let Some(frame) = self.scopes.pop() {
            self.archived.push(frame);
        }
    }

    /// Find the canonical binding for `name`, scanning innermost-first.
    pub fn lookup(&self, name: Name) -> Option<Name> {
        self.scopes
            .iter()
            .rev()
            .find(|frame| frame.contains(&name))
            .map(|_| name)
    }

    /// Whether `name` is visible in any active frame.
    pub fn is_declared(&self, name: Name) -> bool {
        self.lookup(name).is_some()
    }

    /// Declare `name`, returning its canonical binding.
    ///
    /// If the name is already visible anywhere, the existing binding is
    /// returned and nothing is inserted; otherwise it is added to the
    /// innermost frame.
    ///
    /// # Panics
    /// Panics if no frame is active (a precondition violation: the global
    /// frame exists for the whole parse).
    pub fn declare(&mut self, name: Name) -> Name {
        assert!(
            !self.scopes.is_empty(),
            "declare with no active scope frame"
        );
        if let Some(existing) = self.lookup(name) {
            return existing;
        }
        if let Some(frame) = self.scopes.last_mut() {
            frame.insert(name);
        }
        name
    }

    /// Number of active frames (the global frame counts).
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Number of archived (popped) frames.
    pub fn archived_count(&self) -> usize {
        self.archived.len()
    }
}

impl Default for ScopeStack {
    fn default() -> Self {
        ScopeStack::new()
    }
}
