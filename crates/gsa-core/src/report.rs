//! Traversal reports for CLI output

use std::collections::BTreeMap;

use serde::Serialize;

use crate::traversal::{in_order, in_order_alt, Order};
use crate::tree::Node;

/// Output of a single traversal along with the tree's dimensions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalReport {
    pub order: Order,
    pub node_count: usize,
    pub height: usize,
    pub values: Vec<i64>,
}

impl TraversalReport {
    pub fn run(order: Order, root: Option<&Node>) -> Self {
        Self {
            order,
            node_count: root.map_or(0, Node::node_count),
            height: root.map_or(0, Node::height),
            values: order.traverse(root),
        }
    }
}

/// Canonical in-order output side by side with the node-based variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub canonical: Vec<i64>,
    pub alternate: Vec<i64>,
    pub matches: bool,
    /// Values the alternate emits more often than the canonical walk, one
    /// entry per extra occurrence
    pub duplicated: Vec<i64>,
    /// Values the alternate emits less often than the canonical walk, one
    /// entry per missing occurrence
    pub missing: Vec<i64>,
}

/// Run both in-order traversals and describe where they disagree
pub fn compare_in_order(root: Option<&Node>) -> Comparison {
    let canonical = in_order(root);
    let alternate = in_order_alt(root);

    let mut balance: BTreeMap<i64, i64> = BTreeMap::new();
    for &val in &alternate {
        *balance.entry(val).or_default() += 1;
    }
    for &val in &canonical {
        *balance.entry(val).or_default() -= 1;
    }

    let mut duplicated = Vec::new();
    let mut missing = Vec::new();
    for (val, diff) in balance {
        let target = if diff > 0 { &mut duplicated } else { &mut missing };
        for _ in 0..diff.unsigned_abs() {
            target.push(val);
        }
    }

    let matches = canonical == alternate;
    tracing::debug!(
        matches,
        duplicated = duplicated.len(),
        missing = missing.len(),
        "compared in-order variants"
    );

    Comparison {
        canonical,
        alternate,
        matches,
        duplicated,
        missing,
    }
}
