//! String interner for identifier names.
//!
//! Interning gives every distinct identifier a canonical [`Name`] so the
//! scope table and the runtime environment compare and hash a `u32`
//! instead of string contents. The whole pipeline is single-threaded, so
//! the interner needs no locking.

use rustc_hash::FxHashMap;
use std::fmt;

/// Canonical handle for an interned identifier.
///
/// Two `Name`s are equal iff the identifiers they were interned from are
/// equal. Resolve back to text with [`StringInterner::resolve`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Name(u32);

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

/// Map from identifier text to [`Name`] and back.
#[derive(Default)]
pub struct StringInterner {
    map: FxHashMap<Box<str>, Name>,
    strings: Vec<Box<str>>,
}

impl StringInterner {
    /// Create an empty interner.
    pub fn new() -> Self {
        StringInterner::default()
    }

    /// Intern a string, returning its canonical name.
    ///
    /// Interning the same text twice returns the same `Name`.
    pub fn intern(&mut self, text: &str) -> Name {
        if let Some(&name) = self.map.get(text) {
            return name;
        }
        // Identifier count is bounded by source size, which Span already
        // caps at u32::MAX bytes.
        let name = Name(u32::try_from(self.strings.len()).unwrap_or(u32::MAX));
        self.strings.push(text.into());
        self.map.insert(text.into(), name);
        name
    }

    /// Resolve a name back to its text.
    ///
    /// # Panics
    /// Panics if `name` was produced by a different interner.
    pub fn resolve(&self, name: Name) -> &str {
        &self.strings[name.0 as usize]
    }

    /// Number of distinct interned strings.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Whether nothing has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
