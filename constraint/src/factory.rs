//! Selection of the concrete constraint-set kind.
//!
//! The driver names a kind in its configuration; the name resolves to a
//! [`SetKind`] once, at startup, and misconfigured names fall back to the
//! documented default with a diagnostic.

use crate::{
    BracketConstraintSet, ConstraintError, ConstraintResult, ConstraintSet, MatchPolicy,
    TreeConstraintSet,
};
use std::fmt;
use std::str::FromStr;
use trellis_lang::LanguagePack;
use trellis_sexp::Sexp;

/// The concrete constraint-set kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetKind {
    /// Exact unlexicalized tree constraints.
    Exact,
    /// Head-lexicalized tree constraints.
    Lexicalized,
    /// Head-lexicalized tree constraints comparing surface form and tag
    /// only.
    PartialLexicalized,
    /// Bracket (partial-tree) constraints.
    Bracket,
}

impl SetKind {
    /// The fallback kind used when a configured name does not resolve.
    pub const DEFAULT: SetKind = SetKind::Bracket;

    /// The canonical configuration name.
    pub fn name(&self) -> &'static str {
        match self {
            SetKind::Exact => "exact-tree",
            SetKind::Lexicalized => "lex-tree",
            SetKind::PartialLexicalized => "partial-lex-tree",
            SetKind::Bracket => "bracket",
        }
    }
}

impl fmt::Display for SetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SetKind {
    type Err = ConstraintError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "exact-tree" | "exact" | "unlex-tree" => Ok(SetKind::Exact),
            "lex-tree" | "lexicalized" => Ok(SetKind::Lexicalized),
            "partial-lex-tree" | "partial-lexicalized" => Ok(SetKind::PartialLexicalized),
            "bracket" | "partial-tree" => Ok(SetKind::Bracket),
            _ => Err(ConstraintError::UnknownKind(name.to_string())),
        }
    }
}

/// Resolve a configured kind name, falling back to [`SetKind::DEFAULT`]
/// with a diagnostic when the name is unknown.
pub fn select(name: &str) -> SetKind {
    match name.parse() {
        Ok(kind) => kind,
        Err(_) => {
            log::warn!(
                "unknown constraint set kind {name:?}; using {}",
                SetKind::DEFAULT
            );
            SetKind::DEFAULT
        }
    }
}

/// Build a constraint set of the given kind from a reference tree.
pub fn build(
    kind: SetKind,
    tree: &Sexp,
    lang: &LanguagePack,
) -> ConstraintResult<Box<dyn ConstraintSet>> {
    Ok(match kind {
        SetKind::Exact => Box::new(TreeConstraintSet::from_tree(
            tree,
            MatchPolicy::Exact,
            lang,
        )?),
        SetKind::Lexicalized => Box::new(TreeConstraintSet::from_tree(
            tree,
            MatchPolicy::Lexicalized,
            lang,
        )?),
        SetKind::PartialLexicalized => Box::new(TreeConstraintSet::from_tree(
            tree,
            MatchPolicy::PartialLexicalized,
            lang,
        )?),
        SetKind::Bracket => Box::new(BracketConstraintSet::from_tree(tree, lang)?),
    })
}

/// Build an empty constraint set of the given kind.
pub fn build_empty(kind: SetKind) -> Box<dyn ConstraintSet> {
    match kind {
        SetKind::Exact => Box::new(TreeConstraintSet::empty(MatchPolicy::Exact)),
        SetKind::Lexicalized => Box::new(TreeConstraintSet::empty(MatchPolicy::Lexicalized)),
        SetKind::PartialLexicalized => {
            Box::new(TreeConstraintSet::empty(MatchPolicy::PartialLexicalized))
        }
        SetKind::Bracket => Box::new(BracketConstraintSet::empty()),
    }
}
