//! The constraint-set interface consumed by the decoder.

use crate::{ConstraintError, ConstraintId, ConstraintNode, ConstraintResult, Item};
use trellis_lang::LanguagePack;
use trellis_sexp::Sexp;

/// A set of parsing constraints built from one reference tree.
///
/// Every implementation in this family forms a tree of constraint nodes, so
/// the decoder can couple constraint checking tightly with its bottom-up
/// loop: preterminal items index the leaf list directly, and interior items
/// reach their constraint through their head child's attachment. One set
/// instance serves exactly one decoding run; satisfaction flags are never
/// rolled back, so instances must not be reused across independent decode
/// attempts.
pub trait ConstraintSet {
    /// Whether the constraints form a tree structure. Always true for this
    /// family; the decoder uses it to enable the coupled lookup path.
    fn has_tree_structure(&self) -> bool {
        true
    }

    /// Whether every chart item must be matched to a satisfying constraint
    /// (and discarded otherwise). Always true for this family.
    fn find_at_least_one_satisfying(&self) -> bool {
        true
    }

    /// Whether the decoder must additionally scan for violations on every
    /// item. False for this family: internal consistency is guaranteed by
    /// construction, and the bracket kind exposes per-node violation
    /// checks instead.
    fn find_no_violations(&self) -> bool {
        false
    }

    /// Number of constraint nodes in the set.
    fn len(&self) -> usize;

    /// Whether the set holds no constraints.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The root constraint, absent for an empty set.
    fn root(&self) -> Option<ConstraintId>;

    /// The leaf constraints, left to right, one per sentence word.
    fn leaves(&self) -> &[ConstraintId];

    /// Access a node by id.
    fn node(&self, id: ConstraintId) -> &ConstraintNode;

    /// Iterate over every node id in the set, root first.
    fn ids(&self) -> Box<dyn Iterator<Item = ConstraintId> + '_> {
        Box::new((0..self.len()).map(ConstraintId::new))
    }

    /// The constraint a decoder should treat as `id`'s parent when
    /// attaching the enclosing item. For exact-tree kinds this is the
    /// structural parent; the bracket kind keeps returning `id` itself
    /// until the node is fully satisfied.
    fn parent_of(&self, id: ConstraintId) -> Option<ConstraintId>;

    /// Whether `item` satisfies the constraint `id`, recording the match
    /// on success.
    fn is_satisfied_by(
        &mut self,
        id: ConstraintId,
        item: &dyn Item,
        lang: &LanguagePack,
    ) -> bool;

    /// Whether `item` satisfies only the local information of `id`
    /// (label/head-word or span containment, by kind), irrespective of the
    /// node's place in the tree.
    fn is_locally_satisfied_by(
        &self,
        id: ConstraintId,
        item: &dyn Item,
        lang: &LanguagePack,
    ) -> bool;

    /// Whether attaching `child_item` under the constraint `id` would
    /// violate the set.
    fn is_violated_by_child(&self, id: ConstraintId, child_item: &dyn Item) -> bool;

    /// Whether `item` violates the constraint `id` in isolation (optional
    /// operation; no kind in this family supports it on ordinary nodes).
    fn node_is_violated_by(
        &self,
        _id: ConstraintId,
        _item: &dyn Item,
    ) -> ConstraintResult<bool> {
        Err(ConstraintError::unsupported("node_is_violated_by"))
    }

    /// Whether `item` violates the set as a whole (optional operation; not
    /// supported by this family, see [`find_no_violations`]).
    ///
    /// [`find_no_violations`]: ConstraintSet::find_no_violations
    fn is_violated_by(&self, _item: &dyn Item) -> ConstraintResult<bool> {
        Err(ConstraintError::unsupported("is_violated_by"))
    }

    /// Find the one constraint `item` must satisfy, recording the match on
    /// success.
    ///
    /// Preterminal items index the leaf list by their start position; no
    /// tree search ever happens. Interior items take their head child's
    /// attached constraint, ask it for its parent, and test that single
    /// node; the caller is expected to attach the returned id to the item.
    /// A mismatch is `Ok(None)`. Errors are reserved for misuse: an
    /// interior item with no attached head-child constraint, or a
    /// preterminal position outside the sentence.
    fn constraint_satisfying(
        &mut self,
        item: &dyn Item,
        lang: &LanguagePack,
    ) -> ConstraintResult<Option<ConstraintId>> {
        if item.is_preterminal() {
            let index = item.span().start;
            let leaf = *self.leaves().get(index).ok_or_else(|| {
                ConstraintError::LeafIndexOutOfRange {
                    index,
                    len: self.leaves().len(),
                }
            })?;
            return Ok(self.is_satisfied_by(leaf, item, lang).then_some(leaf));
        }

        let head_constraint = item
            .head_child()
            .and_then(|head| head.constraint())
            .ok_or(ConstraintError::UnattachedItem)?;
        let Some(target) = self.parent_of(head_constraint) else {
            // The head child's constraint is the structural root; nothing
            // above it can be satisfied.
            return Ok(None);
        };
        Ok(self.is_satisfied_by(target, item, lang).then_some(target))
    }

    /// Render the constraint tree back into generic notation, with labels
    /// rewritten to carry spans (and head words, for lexicalized kinds).
    fn to_sexp(&self) -> Option<Sexp>;
}
