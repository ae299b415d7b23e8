//! Iterative binary tree traversals
//!
//! Each traversal takes an optional root and returns the visited values in
//! order. None of them recurse: depth-first walks run on an explicit
//! [`Stack`], breadth-first on an explicit [`Queue`]. The three functions are
//! independent of one another.
//!
//! - `in_order`: frame-based in-order walk (canonical)
//! - `breadth_first`: level-order walk
//! - `in_order_alt`: node-based in-order walk with known duplicate and
//!   omitted emissions on some shapes
//! - `reference`: recursive definitions used for verification

mod bfs;
mod in_order;
mod in_order_alt;
pub mod queue;
pub mod reference;
pub mod stack;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GsaError;
use crate::tree::Node;

pub use bfs::breadth_first;
pub use in_order::in_order;
pub use in_order_alt::in_order_alt;
pub use queue::Queue;
pub use stack::{Frame, Stack};

/// Supported traversal orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Order {
    /// Frame-based in-order
    #[default]
    InOrder,
    /// Level order, left to right
    BreadthFirst,
    /// Node-based in-order, output kept as the algorithm produces it
    InOrderAlt,
}

impl Order {
    pub const ALL: [Order; 3] = [Order::InOrder, Order::BreadthFirst, Order::InOrderAlt];

    /// Run the traversal this order names
    pub fn traverse(self, root: Option<&Node>) -> Vec<i64> {
        match self {
            Order::InOrder => in_order(root),
            Order::BreadthFirst => breadth_first(root),
            Order::InOrderAlt => in_order_alt(root),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Order::InOrder => "in-order",
            Order::BreadthFirst => "breadth-first",
            Order::InOrderAlt => "in-order-alt",
        }
    }
}

impl FromStr for Order {
    type Err = GsaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "in-order" | "inorder" => Ok(Order::InOrder),
            "breadth-first" | "bfs" | "level-order" => Ok(Order::BreadthFirst),
            "in-order-alt" | "inorder-alt" => Ok(Order::InOrderAlt),
            other => {
                let supported = Order::ALL.map(Order::as_str).join(", ");
                crate::bail_unsupported!("order", other, supported)
            }
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
