//! Nonterminal label decomposition and subsumption.

use crate::Treebank;
use std::fmt;
use trellis_core::Symbol;

/// The decomposed form of a nonterminal label.
///
/// A treebank label such as `NP-SBJ-1` decomposes into the base `NP`, the
/// augmentations `[SBJ]`, and the index `1`. Labels with no augmentations
/// decompose to just their base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nonterminal {
    /// The unaugmented base label.
    pub base: Symbol,
    /// Augmentations, in order, without their delimiters.
    pub augmentations: Vec<Symbol>,
    /// Coindexation index, if the label carried one.
    pub index: Option<u32>,
}

impl Nonterminal {
    /// A bare nonterminal with no augmentations.
    pub fn base(base: Symbol) -> Self {
        Self {
            base,
            augmentations: Vec::new(),
            index: None,
        }
    }

    /// Whether this nonterminal subsumes `other`.
    ///
    /// A nonterminal X subsumes Y if their canonical bases are identical
    /// (or X's base is the wildcard) and every augmentation of X appears
    /// among Y's augmentations. Indices are not compared, so an unindexed
    /// label subsumes its indexed variants: `NP` subsumes `NP-SBJ`, and
    /// `NP-TMP` subsumes `NP-TMP-CLR-1`.
    pub fn subsumes(&self, other: &Nonterminal, treebank: &Treebank) -> bool {
        let this_base = treebank.canonical(&self.base);
        let other_base = treebank.canonical(&other.base);
        if !treebank.is_wildcard(&this_base) && this_base != other_base {
            return false;
        }
        self.augmentations
            .iter()
            .all(|aug| other.augmentations.contains(aug))
    }
}

impl fmt::Display for Nonterminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)?;
        for aug in &self.augmentations {
            write!(f, "-{aug}")?;
        }
        if let Some(index) = self.index {
            write!(f, "-{index}")?;
        }
        Ok(())
    }
}
