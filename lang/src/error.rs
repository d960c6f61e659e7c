//! Language-pack error types.

use thiserror::Error;

/// Errors raised by treebank predicates and head finding.
///
/// All of these surface at constraint-set construction time; a failed
/// construction is fatal for the sentence being decoded.
#[derive(Debug, Clone, Error)]
pub enum LangError {
    /// A tree position that should hold a preterminal does not.
    #[error("not a preterminal: {0}")]
    NotPreterminal(String),

    /// A nonterminal label that cannot be decomposed.
    #[error("unparseable nonterminal label: {0:?}")]
    BadLabel(String),

    /// A production with no children.
    #[error("empty right-hand side under {0}")]
    EmptyRhs(String),

    /// A head finder produced an index past the end of the production.
    #[error("head index {index} out of range for {arity} children under {label}")]
    HeadOutOfRange {
        label: String,
        index: usize,
        arity: usize,
    },

    /// A head finder could not determine a head child.
    #[error("no head child found under {0}")]
    NoHead(String),
}

/// Result type for language-pack operations.
pub type LangResult<T> = Result<T, LangError>;
