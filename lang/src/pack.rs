//! The language-pack context value.

use crate::{HeadFinder, RuleHeadFinder, Treebank};

/// Treebank predicates and head finding for one language/treebank.
///
/// Passed by reference into constraint construction and satisfaction calls.
/// Building one pack per treebank keeps sets for different languages from
/// contending on shared state.
pub struct LanguagePack {
    treebank: Treebank,
    head_finder: Box<dyn HeadFinder>,
}

impl LanguagePack {
    pub fn new(treebank: Treebank, head_finder: Box<dyn HeadFinder>) -> Self {
        Self {
            treebank,
            head_finder,
        }
    }

    pub fn treebank(&self) -> &Treebank {
        &self.treebank
    }

    pub fn head_finder(&self) -> &dyn HeadFinder {
        self.head_finder.as_ref()
    }
}

impl Default for LanguagePack {
    /// Penn Treebank defaults with a leftmost-child head finder.
    fn default() -> Self {
        Self::new(Treebank::default(), Box::new(RuleHeadFinder::default()))
    }
}
