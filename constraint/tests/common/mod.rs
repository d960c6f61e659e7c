//! Shared test support: derivation items replayed from a reference tree.
#![allow(dead_code)]

use std::cell::Cell;
use trellis_constraint::{ConstraintId, ConstraintSet, Item};
use trellis_core::{Span, Symbol, Word};
use trellis_lang::LanguagePack;
use trellis_sexp::Sexp;

/// A derivation item mirroring one node of a reference tree.
pub struct ReplayItem {
    pub label: Symbol,
    pub span: Span,
    pub head_word: Option<Word>,
    pub constraint: Cell<Option<ConstraintId>>,
    pub children: Vec<ReplayItem>,
    pub head_index: usize,
}

impl ReplayItem {
    /// A free-standing preterminal item.
    pub fn leaf(tag: &str, position: usize, head_word: Option<Word>) -> Self {
        Self {
            label: Symbol::new(tag),
            span: Span::point(position),
            head_word,
            constraint: Cell::new(None),
            children: Vec::new(),
            head_index: 0,
        }
    }

    /// A free-standing interior item.
    pub fn phrase(
        label: &str,
        span: Span,
        children: Vec<ReplayItem>,
        head_index: usize,
        head_word: Option<Word>,
    ) -> Self {
        assert!(head_index < children.len());
        Self {
            label: Symbol::new(label),
            span,
            head_word,
            constraint: Cell::new(None),
            children,
            head_index,
        }
    }

    pub fn with_constraint(self, id: ConstraintId) -> Self {
        self.constraint.set(Some(id));
        self
    }
}

impl Item for ReplayItem {
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

/// Rebuild the derivation a reference tree describes, using the same pack
/// the constraint set was built with, so labels, spans, and head words all
/// line up.
pub fn replay_items(tree: &Sexp, lang: &LanguagePack) -> ReplayItem {
    let mut word_index = 0;
    build_item(tree, lang, &mut word_index)
}

fn build_item(tree: &Sexp, lang: &LanguagePack, word_index: &mut usize) -> ReplayItem {
    let treebank = lang.treebank();

    if treebank.is_preterminal(tree) {
        let word = treebank.make_word(tree).unwrap();
        let item = ReplayItem {
            label: word.tag.clone(),
            span: Span::point(*word_index),
            head_word: Some(word),
            constraint: Cell::new(None),
            children: Vec::new(),
            head_index: 0,
        };
        *word_index += 1;
        return item;
    }

    let items = tree.as_list().unwrap();
    let label = items[0].as_symbol().unwrap().clone();
    let start = *word_index;
    let children: Vec<ReplayItem> = items[1..]
        .iter()
        .map(|child| build_item(child, lang, word_index))
        .collect();
    let end = *word_index - 1;

    let child_labels: Vec<Symbol> = children.iter().map(|c| c.label.clone()).collect();
    let head_index = lang.head_finder().find_head(&label, &child_labels).unwrap();
    let head_word = children[head_index].head_word.clone();

    ReplayItem {
        label,
        span: Span::new(start, end),
        head_word,
        constraint: Cell::new(None),
        children,
        head_index,
    }
}

/// Attach every item bottom-up through `constraint_satisfying`, asserting
/// that each one finds its constraint.
pub fn attach_all(set: &mut dyn ConstraintSet, item: &ReplayItem, lang: &LanguagePack) {
    for child in &item.children {
        attach_all(set, child, lang);
    }
    let found = set
        .constraint_satisfying(item, lang)
        .expect("lookup misuse during replay");
    assert!(
        found.is_some(),
        "no satisfying constraint for {} at {}",
        item.label,
        item.span
    );
    item.constraint.set(found);
}
