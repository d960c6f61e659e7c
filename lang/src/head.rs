//! Head finding over local trees.

use crate::{LangError, LangResult};
use std::collections::HashMap;
use trellis_core::Symbol;

/// Picks the head child of a production.
///
/// Implementations see one local tree at a time: the parent label and the
/// child labels in left-to-right order. The returned index is 0-based.
pub trait HeadFinder {
    /// The index of the head child among `children`.
    ///
    /// Errors on an empty right-hand side, and may error when no head can
    /// be determined at all.
    fn find_head(&self, label: &Symbol, children: &[Symbol]) -> LangResult<usize>;
}

/// Scan direction for a head rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDirection {
    /// Scan children left to right.
    Left,
    /// Scan children right to left.
    Right,
}

/// A head rule: scan the children in a direction, preferring labels in
/// priority order.
#[derive(Debug, Clone)]
pub struct HeadRule {
    pub direction: ScanDirection,
    /// Child labels to prefer, most preferred first. May be empty, in which
    /// case the scan-start child is the head.
    pub priorities: Vec<Symbol>,
}

impl HeadRule {
    pub fn new(direction: ScanDirection, priorities: Vec<Symbol>) -> Self {
        Self {
            direction,
            priorities,
        }
    }

    fn apply(&self, children: &[Symbol]) -> usize {
        let scan: Box<dyn Iterator<Item = usize>> = match self.direction {
            ScanDirection::Left => Box::new(0..children.len()),
            ScanDirection::Right => Box::new((0..children.len()).rev()),
        };
        let order: Vec<usize> = scan.collect();
        for wanted in &self.priorities {
            for &i in &order {
                if children[i] == *wanted {
                    return i;
                }
            }
        }
        order[0]
    }
}

/// Table-driven head finder.
///
/// One rule per parent label; unlisted parents fall back to a default rule.
/// The table shape is the standard one for treebank head heuristics and is
/// consulted exactly once per node, at constraint construction.
#[derive(Debug, Clone)]
pub struct RuleHeadFinder {
    rules: HashMap<Symbol, HeadRule>,
    default_rule: HeadRule,
}

impl Default for RuleHeadFinder {
    /// A leftmost-child head finder with no per-label rules.
    fn default() -> Self {
        Self {
            rules: HashMap::new(),
            default_rule: HeadRule::new(ScanDirection::Left, Vec::new()),
        }
    }
}

impl RuleHeadFinder {
    pub fn new(default_rule: HeadRule) -> Self {
        Self {
            rules: HashMap::new(),
            default_rule,
        }
    }

    /// Register the rule for a parent label.
    pub fn with_rule(mut self, label: Symbol, rule: HeadRule) -> Self {
        self.rules.insert(label, rule);
        self
    }
}

impl HeadFinder for RuleHeadFinder {
    fn find_head(&self, label: &Symbol, children: &[Symbol]) -> LangResult<usize> {
        if children.is_empty() {
            return Err(LangError::EmptyRhs(label.to_string()));
        }
        let rule = self.rules.get(label).unwrap_or(&self.default_rule);
        Ok(rule.apply(children))
    }
}
