//! Constraint nodes and their arena identity.

use std::fmt;
use trellis_core::{Span, Symbol, Word};
use trellis_lang::Nonterminal;

/// Identity of a constraint node within its owning set.
///
/// Nodes live in an arena owned by the set; the id is an index into it.
/// Identity comparisons between constraints (the nuclear-family check, the
/// child-violation check) are id equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstraintId(u32);

impl ConstraintId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// The arena index.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ConstraintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

/// One node in a tree of constraints.
///
/// The shape (label, span, parent, children) is fixed at construction; only
/// the satisfaction flags mutate afterward, monotonically false to true.
/// `head_word` is present for lexicalized kinds, `nonterminal` for the
/// bracket kind.
#[derive(Debug, Clone)]
pub struct ConstraintNode {
    pub(crate) label: Symbol,
    pub(crate) span: Span,
    pub(crate) parent: Option<ConstraintId>,
    pub(crate) children: Vec<ConstraintId>,
    pub(crate) head_word: Option<Word>,
    pub(crate) nonterminal: Option<Nonterminal>,
    pub(crate) satisfied: bool,
    pub(crate) fully_satisfied: bool,
}

impl ConstraintNode {
    pub(crate) fn new(label: Symbol, span: Span, parent: Option<ConstraintId>) -> Self {
        Self {
            label,
            span,
            parent,
            children: Vec::new(),
            head_word: None,
            nonterminal: None,
            satisfied: false,
            fully_satisfied: false,
        }
    }

    /// The nonterminal label, or part-of-speech tag for leaves.
    pub fn label(&self) -> &Symbol {
        &self.label
    }

    /// The word span this node covers.
    pub fn span(&self) -> Span {
        self.span
    }

    /// The parent node, absent for the root.
    pub fn parent(&self) -> Option<ConstraintId> {
        self.parent
    }

    /// Child nodes in left-to-right order; empty for leaves.
    pub fn children(&self) -> &[ConstraintId] {
        &self.children
    }

    /// The inherited head word, for lexicalized kinds.
    pub fn head_word(&self) -> Option<&Word> {
        self.head_word.as_ref()
    }

    /// The decomposed label, for the bracket kind.
    pub fn nonterminal(&self) -> Option<&Nonterminal> {
        self.nonterminal.as_ref()
    }

    /// Whether this node corresponds to a preterminal.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Whether at least one item has matched this node.
    pub fn has_been_satisfied(&self) -> bool {
        self.satisfied
    }

    /// Whether this node and its entire subtree have been completed
    /// (bracket kind; permanently false elsewhere).
    pub fn is_fully_satisfied(&self) -> bool {
        self.fully_satisfied
    }
}

impl fmt::Display for ConstraintNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "label={}, span={}", self.label, self.span)?;
        if let Some(word) = &self.head_word {
            write!(f, ", head={word}")?;
        }
        write!(f, ", sat={}, fullySat={}", self.satisfied, self.fully_satisfied)
    }
}
