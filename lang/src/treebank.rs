//! Treebank predicates.

use crate::{LangError, LangResult, Nonterminal};
use std::collections::HashMap;
use trellis_core::{Symbol, Word};
use trellis_sexp::Sexp;

/// Treebank-specific predicates over trees and labels.
///
/// The defaults follow Penn Treebank conventions: augmentation delimiters
/// `-`, `=`, `|`; base-NP label `NPB`; wildcard `*`. Other treebanks
/// configure these through the `with_*` constructors.
#[derive(Debug, Clone)]
pub struct Treebank {
    delimiters: Vec<char>,
    base_np: Symbol,
    wildcard: Symbol,
    /// Canonical replacements applied after augmentation stripping.
    aliases: HashMap<Symbol, Symbol>,
}

impl Default for Treebank {
    fn default() -> Self {
        Self {
            delimiters: vec!['-', '=', '|'],
            base_np: Symbol::new("NPB"),
            wildcard: Symbol::new("*"),
            aliases: HashMap::new(),
        }
    }
}

impl Treebank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the augmentation delimiter set.
    pub fn with_delimiters(mut self, delimiters: Vec<char>) -> Self {
        self.delimiters = delimiters;
        self
    }

    /// Replace the designated base-NP label.
    pub fn with_base_np(mut self, label: Symbol) -> Self {
        self.base_np = label;
        self
    }

    /// Add a canonical alias, e.g. collapsing `PRT|ADVP` to `PRT`.
    pub fn with_alias(mut self, from: Symbol, to: Symbol) -> Self {
        self.aliases.insert(from, to);
        self
    }

    /// Whether `tree` is a preterminal: a two-element list of symbols,
    /// `(TAG word)`.
    pub fn is_preterminal(&self, tree: &Sexp) -> bool {
        match tree.as_list() {
            Some([tag, word]) => tag.is_symbol() && word.is_symbol(),
            _ => false,
        }
    }

    /// Build the [`Word`] for a preterminal.
    pub fn make_word(&self, tree: &Sexp) -> LangResult<Word> {
        match tree.as_list() {
            Some([Sexp::Symbol(tag), Sexp::Symbol(form)]) => {
                Ok(Word::new(form.clone(), tag.clone()))
            }
            _ => Err(LangError::NotPreterminal(tree.to_string())),
        }
    }

    /// Decompose a label into base, augmentations, and index.
    ///
    /// Labels that begin with a delimiter character (`-LRB-`, `-NONE-`, ...)
    /// are treated as indivisible: the whole label is the base.
    pub fn parse_nonterminal(&self, label: &Symbol) -> LangResult<Nonterminal> {
        let text = label.as_str();
        if text.is_empty() {
            return Err(LangError::BadLabel(text.to_string()));
        }
        if text.starts_with(|c| self.delimiters.contains(&c)) {
            return Ok(Nonterminal::base(label.clone()));
        }

        let mut pieces = text.split(|c| self.delimiters.contains(&c));
        let base = pieces.next().expect("split yields at least one piece");
        let rest: Vec<&str> = pieces.collect();
        if rest.iter().any(|piece| piece.is_empty()) {
            return Err(LangError::BadLabel(text.to_string()));
        }

        let mut augmentations: Vec<Symbol> = Vec::with_capacity(rest.len());
        let mut index = None;
        for (i, piece) in rest.iter().enumerate() {
            if i == rest.len() - 1 {
                if let Ok(n) = piece.parse::<u32>() {
                    index = Some(n);
                    continue;
                }
            }
            augmentations.push(Symbol::new(*piece));
        }

        Ok(Nonterminal {
            base: if rest.is_empty() {
                label.clone()
            } else {
                Symbol::new(base)
            },
            augmentations,
            index,
        })
    }

    /// The canonical form of a label: augmentations and index stripped,
    /// then any configured alias applied.
    ///
    /// Labels that do not decompose (e.g. punctuation tags) canonicalize
    /// to themselves.
    pub fn canonical(&self, label: &Symbol) -> Symbol {
        if let Some(alias) = self.aliases.get(label) {
            return alias.clone();
        }
        let base = match self.parse_nonterminal(label) {
            Ok(nt) => nt.base,
            Err(_) => return label.clone(),
        };
        match self.aliases.get(&base) {
            Some(alias) => alias.clone(),
            None => base,
        }
    }

    /// Whether `label` is the designated base-NP label.
    pub fn is_base_np(&self, label: &Symbol) -> bool {
        *label == self.base_np
    }

    /// Whether `label` is the wildcard that subsumes every base.
    pub fn is_wildcard(&self, label: &Symbol) -> bool {
        *label == self.wildcard
    }
}
