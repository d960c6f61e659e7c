//! Bracket (partial-tree) constraint sets.
//!
//! A [`BracketConstraintSet`] represents an underspecified reference tree: a
//! set of required brackets rather than a full derivation. Items are
//! admitted as long as they stay inside a bracket; a bracket completes once
//! an item matches it exactly and all its child brackets are complete.
//! Until then, parent-chasing keeps returning the same node, so a decoder
//! can keep attaching children to an open bracket.

use crate::{ConstraintError, ConstraintId, ConstraintNode, ConstraintResult, ConstraintSet, Item};
use trellis_core::{Span, Symbol};
use trellis_lang::{LangError, LanguagePack};
use trellis_sexp::Sexp;

/// Label of the synthetic root wrapped around the observed tree.
const ROOT_LABEL: &str = "*ROOT*";

/// A set of bracket constraints, wrapped in a synthetic root.
///
/// The synthetic root is a permanent ancestor of the observed tree's root:
/// satisfied by anything, violated by nothing, and never *fully* satisfied,
/// so the observed root's constraint stays reachable via parent-chasing for
/// the whole decoding run. It sits at arena index 0 and is part of the flat
/// node list.
pub struct BracketConstraintSet {
    nodes: Vec<ConstraintNode>,
    leaves: Vec<ConstraintId>,
}

impl BracketConstraintSet {
    /// An empty set.
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            leaves: Vec::new(),
        }
    }

    /// Build the bracket constraints for `tree`.
    pub fn from_tree(tree: &Sexp, lang: &LanguagePack) -> ConstraintResult<Self> {
        let mut set = Self::empty();

        // Reserve the synthetic root, then hang the observed tree off it.
        let root = ConstraintId::new(0);
        let mut root_node =
            ConstraintNode::new(Symbol::new(ROOT_LABEL), Span::point(0), None);
        root_node.satisfied = true;
        set.nodes.push(root_node);

        let mut word_index = 0;
        let observed = set.build(Some(root), tree, &mut word_index, lang)?;

        let observed_span = set.nodes[observed.index()].span;
        let root_node = &mut set.nodes[root.index()];
        root_node.children.push(observed);
        root_node.span = observed_span;
        Ok(set)
    }

    fn push(&mut self, node: ConstraintNode) -> ConstraintId {
        let id = ConstraintId::new(self.nodes.len());
        self.nodes.push(node);
        id
    }

    fn is_root(&self, id: ConstraintId) -> bool {
        id.index() == 0
    }

    fn build(
        &mut self,
        parent: Option<ConstraintId>,
        tree: &Sexp,
        word_index: &mut usize,
        lang: &LanguagePack,
    ) -> ConstraintResult<ConstraintId> {
        let treebank = lang.treebank();

        if treebank.is_preterminal(tree) {
            let word = treebank.make_word(tree)?;
            let mut node =
                ConstraintNode::new(word.tag.clone(), Span::point(*word_index), parent);
            node.nonterminal = Some(treebank.parse_nonterminal(&word.tag)?);
            *word_index += 1;
            let id = self.push(node);
            self.leaves.push(id);
            return Ok(id);
        }

        let items = tree
            .as_list()
            .ok_or_else(|| ConstraintError::malformed(tree.to_string()))?;
        let (first, rest) = items
            .split_first()
            .ok_or_else(|| ConstraintError::malformed(tree.to_string()))?;
        let label = first
            .as_symbol()
            .ok_or_else(|| ConstraintError::malformed(tree.to_string()))?;
        if rest.is_empty() {
            return Err(LangError::EmptyRhs(label.to_string()).into());
        }

        let start = *word_index;
        let mut node = ConstraintNode::new(label.clone(), Span::point(start), parent);
        node.nonterminal = Some(treebank.parse_nonterminal(label)?);
        let id = self.push(node);

        let mut children = Vec::with_capacity(rest.len());
        for child in rest {
            children.push(self.build(Some(id), child, word_index, lang)?);
        }
        let end = *word_index - 1;

        let node = &mut self.nodes[id.index()];
        node.children = children;
        node.span = Span::new(start, end);
        Ok(id)
    }

    fn span_ok(&self, id: ConstraintId, item: &dyn Item) -> bool {
        self.nodes[id.index()].span.contains(item.span())
    }

    fn label_matches(&self, id: ConstraintId, item: &dyn Item, lang: &LanguagePack) -> bool {
        let treebank = lang.treebank();
        let Ok(item_nt) = treebank.parse_nonterminal(item.label()) else {
            return false;
        };
        match self.nodes[id.index()].nonterminal.as_ref() {
            Some(nt) => nt.subsumes(&item_nt, treebank),
            None => false,
        }
    }

    fn all_children_fully_satisfied(&self, id: ConstraintId) -> bool {
        self.nodes[id.index()]
            .children
            .iter()
            .all(|child| self.nodes[child.index()].fully_satisfied)
    }

    /// Render the subtree rooted at `id` for inspection.
    pub fn node_to_sexp(&self, id: ConstraintId) -> Sexp {
        let node = &self.nodes[id.index()];
        let name = format!("{}-{}-{}", node.label, node.span.start, node.span.end);
        let mut items = Vec::with_capacity(node.children.len() + 1);
        items.push(Sexp::Symbol(Symbol::new(name)));
        for &child in &node.children {
            items.push(self.node_to_sexp(child));
        }
        Sexp::List(items)
    }
}

impl ConstraintSet for BracketConstraintSet {
    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn root(&self) -> Option<ConstraintId> {
        (!self.nodes.is_empty()).then(|| ConstraintId::new(0))
    }

    fn leaves(&self) -> &[ConstraintId] {
        &self.leaves
    }

    fn node(&self, id: ConstraintId) -> &ConstraintNode {
        &self.nodes[id.index()]
    }

    /// The node itself while it is still open; the structural parent once
    /// it has been fully satisfied. The synthetic root never completes, so
    /// parent-chasing never escapes the tree.
    fn parent_of(&self, id: ConstraintId) -> Option<ConstraintId> {
        let node = &self.nodes[id.index()];
        if node.fully_satisfied {
            node.parent
        } else {
            Some(id)
        }
    }

    fn is_locally_satisfied_by(
        &self,
        id: ConstraintId,
        item: &dyn Item,
        _lang: &LanguagePack,
    ) -> bool {
        if self.is_root(id) {
            return true;
        }
        self.span_ok(id, item)
    }

    fn is_satisfied_by(
        &mut self,
        id: ConstraintId,
        item: &dyn Item,
        lang: &LanguagePack,
    ) -> bool {
        if self.is_root(id) {
            return true;
        }

        if item.is_preterminal() {
            let node = &mut self.nodes[id.index()];
            node.satisfied = true;
            node.fully_satisfied = true;
            return true;
        }

        if !self.span_ok(id, item) {
            return false;
        }

        self.nodes[id.index()].satisfied = true;

        if self.nodes[id.index()].span.matches(item.span())
            && self.label_matches(id, item, lang)
            && self.all_children_fully_satisfied(id)
        {
            self.nodes[id.index()].fully_satisfied = true;
        }

        true
    }

    fn is_violated_by_child(&self, id: ConstraintId, child_item: &dyn Item) -> bool {
        if self.is_root(id) {
            return false;
        }
        if !self.span_ok(id, child_item) {
            return true;
        }
        // A child whose constraint's bracket is exactly the child's own
        // span must have completed that bracket before attaching higher.
        let Some(child_constraint) = child_item.constraint() else {
            return true;
        };
        let child_node = &self.nodes[child_constraint.index()];
        if child_node.span.matches(child_item.span()) {
            !child_node.fully_satisfied
        } else {
            false
        }
    }

    fn node_is_violated_by(
        &self,
        id: ConstraintId,
        _item: &dyn Item,
    ) -> ConstraintResult<bool> {
        if self.is_root(id) {
            return Ok(false);
        }
        Err(ConstraintError::unsupported("node_is_violated_by"))
    }

    fn to_sexp(&self) -> Option<Sexp> {
        self.root().map(|root| self.node_to_sexp(root))
    }
}
