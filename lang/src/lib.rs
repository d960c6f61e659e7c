//! Trellis Language Pack
//!
//! Treebank-specific knowledge, bundled as an explicit context value instead
//! of process-global state:
//! - Treebank predicates (preterminal detection, label canonicalization)
//! - Nonterminal label decomposition and subsumption
//! - Head finding over local trees
//!
//! Constraint construction and satisfaction take a [`LanguagePack`] by
//! reference, so sets built for different treebanks never share state.

mod error;
mod head;
mod nonterminal;
mod pack;
mod treebank;

pub use error::*;
pub use head::*;
pub use nonterminal::*;
pub use pack::*;
pub use treebank::*;
