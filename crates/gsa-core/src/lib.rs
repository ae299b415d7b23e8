//! gsa Core Library
//!
//! Iterative binary tree traversals driven by explicit stacks and queues,
//! plus the configuration, logging and reporting used by the `gsa` CLI.

pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod report;
pub mod shape;
pub mod traversal;
pub mod tree;

pub use traversal::{breadth_first, in_order, in_order_alt, Order};
pub use tree::Node;
