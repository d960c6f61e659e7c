//! The generic symbol/list tree.

use std::fmt;
use trellis_core::Symbol;

/// A symbolic expression: an interned atom or an ordered list of
/// subexpressions.
///
/// Syntax trees are lists whose first element is the node label, e.g.
/// `(S (NP (DT the) (NN dog)) (VP (VBD ran)))`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sexp {
    /// An atom.
    Symbol(Symbol),
    /// An ordered list of subexpressions.
    List(Vec<Sexp>),
}

impl Sexp {
    /// Build a list expression.
    pub fn list(items: Vec<Sexp>) -> Self {
        Sexp::List(items)
    }

    /// Build an atom expression.
    pub fn symbol(sym: Symbol) -> Self {
        Sexp::Symbol(sym)
    }

    /// The atom, if this expression is one.
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Sexp::Symbol(sym) => Some(sym),
            Sexp::List(_) => None,
        }
    }

    /// The list elements, if this expression is a list.
    pub fn as_list(&self) -> Option<&[Sexp]> {
        match self {
            Sexp::Symbol(_) => None,
            Sexp::List(items) => Some(items),
        }
    }

    /// Whether this expression is a list.
    pub fn is_list(&self) -> bool {
        matches!(self, Sexp::List(_))
    }

    /// Whether this expression is an atom.
    pub fn is_symbol(&self) -> bool {
        matches!(self, Sexp::Symbol(_))
    }
}

impl fmt::Display for Sexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sexp::Symbol(sym) => write!(f, "{sym}"),
            Sexp::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
        }
    }
}

impl From<Symbol> for Sexp {
    fn from(sym: Symbol) -> Self {
        Sexp::Symbol(sym)
    }
}
