//! Constraint error types.

use thiserror::Error;
use trellis_lang::LangError;

/// Result type for constraint operations.
pub type ConstraintResult<T> = Result<T, ConstraintError>;

/// Errors raised while building or querying constraint sets.
///
/// Ordinary satisfaction mismatches are not errors; they surface as
/// `false` / `None` and steer decoder pruning. Errors here are either
/// construction-time malformed input (fatal for the sentence) or misuse of
/// the API.
#[derive(Debug, Error)]
pub enum ConstraintError {
    /// An optional operation this set kind does not implement.
    #[error("operation not supported by this constraint set kind: {op}")]
    Unsupported { op: &'static str },

    /// A reference tree that is not a well-formed syntax tree.
    #[error("malformed reference tree: {0}")]
    MalformedTree(String),

    /// A treebank or head-finding failure during construction.
    #[error(transparent)]
    Lang(#[from] LangError),

    /// An interior item was looked up before its head child had an
    /// attached constraint.
    #[error("item has no attached head-child constraint")]
    UnattachedItem,

    /// A preterminal item's start position has no corresponding leaf.
    #[error("no leaf constraint at position {index} ({len} leaves)")]
    LeafIndexOutOfRange { index: usize, len: usize },

    /// A configuration name that maps to no set kind.
    #[error("unknown constraint set kind: {0:?}")]
    UnknownKind(String),
}

impl ConstraintError {
    pub fn unsupported(op: &'static str) -> Self {
        Self::Unsupported { op }
    }

    pub fn malformed(tree: impl Into<String>) -> Self {
        Self::MalformedTree(tree.into())
    }
}
