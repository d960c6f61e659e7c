//! Interned symbols.
//!
//! Nonterminal labels, part-of-speech tags, and word forms are all symbols:
//! immutable atoms that are cheap to clone, compare, and hash. A
//! [`SymbolTable`] deduplicates the backing storage so that repeated atoms
//! share one allocation and equality usually resolves on a pointer check.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// An immutable atom.
///
/// Equality is by content, with a pointer fast path for symbols that came
/// from the same table. Symbols from different tables still compare
/// correctly.
#[derive(Clone, Eq)]
pub struct Symbol(Arc<str>);

impl Symbol {
    /// Create a symbol directly, without interning.
    ///
    /// Prefer [`SymbolTable::intern`] when reading many atoms; direct
    /// construction is for one-off symbols such as debug renderings.
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self(text.into())
    }

    /// The atom text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

impl From<&str> for Symbol {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// Deduplicating store of symbols.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    atoms: HashSet<Arc<str>>,
}

impl SymbolTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern an atom, returning the shared symbol for it.
    pub fn intern(&mut self, text: &str) -> Symbol {
        if let Some(existing) = self.atoms.get(text) {
            return Symbol(Arc::clone(existing));
        }
        let atom: Arc<str> = Arc::from(text);
        self.atoms.insert(Arc::clone(&atom));
        Symbol(atom)
    }

    /// Number of distinct atoms interned so far.
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Whether no atoms have been interned.
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== TEST: intern_deduplicates ==========
    #[test]
    fn test_intern_deduplicates() {
        // GIVEN an empty table
        let mut table = SymbolTable::new();

        // WHEN the same atom is interned twice
        let a = table.intern("NP");
        let b = table.intern("NP");

        // THEN both symbols share storage and the table holds one atom
        assert!(Arc::ptr_eq(&a.0, &b.0));
        assert_eq!(table.len(), 1);
    }

    // ========== TEST: cross_table_equality ==========
    #[test]
    fn test_cross_table_equality() {
        // GIVEN two independent tables
        let mut t1 = SymbolTable::new();
        let mut t2 = SymbolTable::new();

        // WHEN the same atom is interned in each
        let a = t1.intern("VP");
        let b = t2.intern("VP");

        // THEN the symbols compare equal despite distinct storage
        assert_eq!(a, b);
        assert_ne!(a, t2.intern("NP"));
    }

    // ========== TEST: direct_construction ==========
    #[test]
    fn test_direct_construction() {
        let mut table = SymbolTable::new();
        let interned = table.intern("DT");
        let direct = Symbol::new("DT");
        assert_eq!(interned, direct);
        assert_eq!(direct.to_string(), "DT");
    }
}
