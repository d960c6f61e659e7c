//! The decoder-facing item interface.

use crate::ConstraintId;
use trellis_core::{Span, Symbol, Word};

/// Capabilities a chart item must expose to be checked against constraints.
///
/// The decoder owns the item representation; this trait is the slice of it
/// the constraint subsystem consumes. After a successful
/// [`constraint_satisfying`](crate::ConstraintSet::constraint_satisfying)
/// lookup the decoder attaches the returned id to the item, which is how
/// later head-propagation lookups find their way back into the tree.
pub trait Item {
    /// The item's nonterminal label, or its part-of-speech tag for
    /// preterminal items.
    fn label(&self) -> &Symbol;

    /// The word span the item covers.
    fn span(&self) -> Span;

    /// Whether the item is a preterminal (covers exactly one word).
    fn is_preterminal(&self) -> bool;

    /// The item's head word. Only consulted by lexicalized constraint
    /// kinds; unlexicalized decoders may leave the default.
    fn head_word(&self) -> Option<&Word> {
        None
    }

    /// The constraint previously attached to this item, if any.
    fn constraint(&self) -> Option<ConstraintId>;

    /// The item's head child, absent for preterminal items.
    fn head_child(&self) -> Option<&dyn Item>;

    /// Children to the left of the head child, leftmost first.
    fn left_children(&self) -> Vec<&dyn Item>;

    /// Children to the right of the head child, leftmost first.
    fn right_children(&self) -> Vec<&dyn Item>;
}
