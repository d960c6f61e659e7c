//! Minimal chart items for unit tests.

use crate::{ConstraintId, Item};
use std::cell::Cell;
use trellis_core::{Span, Symbol, Word};

/// A hand-built derivation item.
pub(crate) struct TestItem {
    label: Symbol,
    span: Span,
    head_word: Option<Word>,
    constraint: Cell<Option<ConstraintId>>,
    children: Vec<TestItem>,
    head_index: usize,
}

impl TestItem {
    pub(crate) fn with_constraint(self, id: ConstraintId) -> Self {
        self.constraint.set(Some(id));
        self
    }
}

/// A preterminal item covering the word at `position`.
pub(crate) fn leaf_item(tag: &str, position: usize, head_word: Option<Word>) -> TestItem {
    TestItem {
        label: Symbol::new(tag),
        span: Span::point(position),
        head_word,
        constraint: Cell::new(None),
        children: Vec::new(),
        head_index: 0,
    }
}

/// An interior item with the given children, `head_index` selecting the
/// head child.
pub(crate) fn phrase_item(
    label: &str,
    span: Span,
    children: Vec<TestItem>,
    head_index: usize,
    head_word: Option<Word>,
) -> TestItem {
    assert!(head_index < children.len());
    TestItem {
        label: Symbol::new(label),
        span,
        head_word,
        constraint: Cell::new(None),
        children,
        head_index,
    }
}

impl Item for TestItem {
    fn label(&self) -> &Symbol {
        &self.label
    }

    fn span(&self) -> Span {
        self.span
    }

    fn is_preterminal(&self) -> bool {
        self.children.is_empty()
    }

    fn head_word(&self) -> Option<&Word> {
        self.head_word.as_ref()
    }

    fn constraint(&self) -> Option<ConstraintId> {
        self.constraint.get()
    }

    fn head_child(&self) -> Option<&dyn Item> {
        self.children.get(self.head_index).map(|c| c as &dyn Item)
    }

    fn left_children(&self) -> Vec<&dyn Item> {
        self.children[..self.head_index]
            .iter()
            .map(|c| c as &dyn Item)
            .collect()
    }

    fn right_children(&self) -> Vec<&dyn Item> {
        self.children[self.head_index + 1..]
            .iter()
            .map(|c| c as &dyn Item)
            .collect()
    }
}
