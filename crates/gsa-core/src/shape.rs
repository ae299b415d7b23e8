//! Deterministic sample trees
//!
//! Every shape numbers its nodes so that a correct in-order walk yields
//! `1..=n`. That makes traversal output easy to eyeball and lets the CLI
//! show where the node-based in-order walk drifts from the canonical one.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GsaError, Result};
use crate::tree::Node;

/// Deepest perfect tree `Shape::Balanced` will build (about a million nodes)
pub const MAX_BALANCED_DEPTH: u32 = 20;

/// Longest chain the single-child shapes will build
pub const MAX_CHAIN_DEPTH: u32 = 1 << 20;

/// Sample tree shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Shape {
    /// Perfect tree, every level full
    #[default]
    Balanced,
    /// Each node's only child is its left child
    LeftChain,
    /// Each node's only child is its right child
    RightChain,
    /// Single-child path alternating left, right, left, ... from the root
    Zigzag,
}

impl Shape {
    pub const ALL: [Shape; 4] = [
        Shape::Balanced,
        Shape::LeftChain,
        Shape::RightChain,
        Shape::Zigzag,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Shape::Balanced => "balanced",
            Shape::LeftChain => "left-chain",
            Shape::RightChain => "right-chain",
            Shape::Zigzag => "zigzag",
        }
    }

    pub fn max_depth(self) -> u32 {
        match self {
            Shape::Balanced => MAX_BALANCED_DEPTH,
            Shape::LeftChain | Shape::RightChain | Shape::Zigzag => MAX_CHAIN_DEPTH,
        }
    }

    /// Build a tree of this shape with `depth` levels.
    ///
    /// Depth 0 is the absent tree. Depths above [`Shape::max_depth`] are
    /// rejected.
    pub fn build(self, depth: u32) -> Result<Option<Node>> {
        let max = self.max_depth();
        if depth > max {
            crate::bail_invalid!(
                "depth",
                format!("{} (maximum for {} is {})", depth, self, max)
            );
        }
        if depth == 0 {
            return Ok(None);
        }

        let root = match self {
            Shape::Balanced => balanced(1, (1_i64 << depth) - 1),
            Shape::LeftChain => left_chain(depth),
            Shape::RightChain => right_chain(depth),
            Shape::Zigzag => zigzag(depth),
        };
        tracing::debug!(shape = %self, depth, nodes = root.node_count(), "built sample tree");
        Ok(Some(root))
    }
}

// Depth is capped at MAX_BALANCED_DEPTH, so recursion stays shallow.
fn balanced(lo: i64, hi: i64) -> Node {
    let mid = lo + (hi - lo) / 2;
    let left = (lo < mid).then(|| balanced(lo, mid - 1));
    let right = (mid < hi).then(|| balanced(mid + 1, hi));
    Node::new(mid, left, right)
}

fn left_chain(depth: u32) -> Node {
    let mut node = Node::leaf(1);
    for val in 2..=i64::from(depth) {
        node = Node::leaf(val).with_left(node);
    }
    node
}

fn right_chain(depth: u32) -> Node {
    let depth = i64::from(depth);
    let mut node = Node::leaf(depth);
    for val in (1..depth).rev() {
        node = Node::leaf(val).with_right(node);
    }
    node
}

fn zigzag(depth: u32) -> Node {
    let n = depth as usize;

    // In-order position of each path index: a left-linked node follows its
    // subtree, a right-linked node precedes it.
    let mut sequence = VecDeque::from([n - 1]);
    for i in (0..n - 1).rev() {
        if i % 2 == 0 {
            sequence.push_back(i);
        } else {
            sequence.push_front(i);
        }
    }
    let mut rank = vec![0_i64; n];
    for (pos, &i) in sequence.iter().enumerate() {
        rank[i] = pos as i64 + 1;
    }

    let mut node = Node::leaf(rank[n - 1]);
    for i in (0..n - 1).rev() {
        node = if i % 2 == 0 {
            Node::leaf(rank[i]).with_left(node)
        } else {
            Node::leaf(rank[i]).with_right(node)
        };
    }
    node
}

impl FromStr for Shape {
    type Err = GsaError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "balanced" | "perfect" => Ok(Shape::Balanced),
            "left-chain" => Ok(Shape::LeftChain),
            "right-chain" => Ok(Shape::RightChain),
            "zigzag" => Ok(Shape::Zigzag),
            other => {
                let supported = Shape::ALL.map(Shape::as_str).join(", ");
                crate::bail_unsupported!("shape", other, supported)
            }
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
