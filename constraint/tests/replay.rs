//! Reconstruction round-trips: replaying a reference tree's own structure
//! as chart items must satisfy every constraint, for every set kind.

mod common;

use common::{attach_all, replay_items};
use trellis_constraint::{
    build, BracketConstraintSet, ConstraintId, ConstraintSet, MatchPolicy, SetKind,
    TreeConstraintSet,
};
use trellis_core::{Span, Symbol, SymbolTable};
use trellis_lang::{HeadRule, LanguagePack, RuleHeadFinder, ScanDirection, Treebank};
use trellis_sexp::{read_sexp, Sexp};

const SENTENCE: &str =
    "(S (NP-SBJ (DT the) (JJ old) (NN dog)) (VP (VBD barked) (ADVP (RB loudly))))";

fn english_heads() -> LanguagePack {
    let finder = RuleHeadFinder::default()
        .with_rule(
            Symbol::new("S"),
            HeadRule::new(ScanDirection::Left, vec![Symbol::new("VP")]),
        )
        .with_rule(
            Symbol::new("NP-SBJ"),
            HeadRule::new(ScanDirection::Right, vec![Symbol::new("NN")]),
        )
        .with_rule(
            Symbol::new("VP"),
            HeadRule::new(ScanDirection::Left, vec![Symbol::new("VBD")]),
        )
        .with_rule(
            Symbol::new("ADVP"),
            HeadRule::new(ScanDirection::Right, vec![Symbol::new("RB")]),
        );
    LanguagePack::new(Treebank::default(), Box::new(finder))
}

fn parse(text: &str) -> Sexp {
    let mut symbols = SymbolTable::new();
    read_sexp(text, &mut symbols).unwrap()
}

/// Walk the constraint tree from the root, checking the span partition
/// invariant at every interior node.
fn assert_span_partition(set: &dyn ConstraintSet, id: ConstraintId) {
    let node = set.node(id);
    if node.is_leaf() {
        assert!(node.span().is_point(), "leaf span must be a point");
        return;
    }
    let children = node.children();
    assert_eq!(
        set.node(children[0]).span().start,
        node.span().start,
        "first child must start the parent's span"
    );
    assert_eq!(
        set.node(*children.last().unwrap()).span().end,
        node.span().end,
        "last child must end the parent's span"
    );
    for pair in children.windows(2) {
        assert_eq!(
            set.node(pair[1]).span().start,
            set.node(pair[0]).span().end + 1,
            "sibling spans must be contiguous"
        );
    }
    for &child in children {
        assert_span_partition(set, child);
    }
}

// ========== TEST: span_partition_all_kinds ==========
#[test]
fn test_span_partition_all_kinds() {
    // GIVEN sets of every kind over the same sentence
    let tree = parse(SENTENCE);
    let lang = english_heads();

    for kind in [
        SetKind::Exact,
        SetKind::Lexicalized,
        SetKind::PartialLexicalized,
        SetKind::Bracket,
    ] {
        // WHEN the constraint tree is built
        let set = build(kind, &tree, &lang).unwrap();

        // THEN children partition every interior span exactly
        assert_span_partition(set.as_ref(), set.root().unwrap());

        // AND the leaves are the sentence positions, left to right
        assert_eq!(set.leaves().len(), 5);
        for (position, &leaf) in set.leaves().iter().enumerate() {
            assert_eq!(set.node(leaf).span(), Span::point(position));
        }
    }
}

// ========== TEST: replay_satisfies_exact_tree ==========
#[test]
fn test_replay_satisfies_exact_tree() {
    // GIVEN an exact-tree set and the derivation the tree itself describes
    let tree = parse(SENTENCE);
    let lang = english_heads();
    let mut set = TreeConstraintSet::from_tree(&tree, MatchPolicy::Exact, &lang).unwrap();
    let root_item = replay_items(&tree, &lang);

    // WHEN every item is attached bottom-up
    attach_all(&mut set, &root_item, &lang);

    // THEN every node has been satisfied
    for id in set.ids() {
        assert!(
            set.node(id).has_been_satisfied(),
            "unsatisfied node {}",
            set.node(id)
        );
    }

    // AND the root item resolved to the root constraint
    assert_eq!(root_item.constraint.get(), set.root());
}

// ========== TEST: replay_satisfies_lexicalized_trees ==========
#[test]
fn test_replay_satisfies_lexicalized_trees() {
    let tree = parse(SENTENCE);
    let lang = english_heads();

    for policy in [MatchPolicy::Lexicalized, MatchPolicy::PartialLexicalized] {
        let mut set = TreeConstraintSet::from_tree(&tree, policy, &lang).unwrap();
        let root_item = replay_items(&tree, &lang);

        attach_all(&mut set, &root_item, &lang);

        for id in set.ids() {
            assert!(
                set.node(id).has_been_satisfied(),
                "unsatisfied node {} under {:?}",
                set.node(id),
                policy
            );
        }
    }
}

// ========== TEST: replay_fully_satisfies_brackets ==========
#[test]
fn test_replay_fully_satisfies_brackets() {
    // GIVEN a bracket set over the sentence
    let tree = parse(SENTENCE);
    let lang = english_heads();
    let mut set = BracketConstraintSet::from_tree(&tree, &lang).unwrap();
    let root_item = replay_items(&tree, &lang);

    // WHEN the derivation is replayed bottom-up
    attach_all(&mut set, &root_item, &lang);

    // THEN every bracket is fully satisfied except the synthetic root
    let root = set.root().unwrap();
    for id in set.ids() {
        if id == root {
            assert!(set.node(id).has_been_satisfied());
            assert!(!set.node(id).is_fully_satisfied(), "synthetic root completed");
        } else {
            assert!(
                set.node(id).is_fully_satisfied(),
                "incomplete bracket {}",
                set.node(id)
            );
        }
    }
}

// ========== TEST: replay_via_factory_boxes ==========
#[test]
fn test_replay_via_factory_boxes() {
    // the factory's boxed sets drive the same replay end to end
    let tree = parse(SENTENCE);
    let lang = english_heads();

    for kind in [SetKind::Exact, SetKind::Bracket] {
        let mut set = build(kind, &tree, &lang).unwrap();
        let root_item = replay_items(&tree, &lang);
        attach_all(set.as_mut(), &root_item, &lang);
        assert!(root_item.constraint.get().is_some());
    }
}
