//! Binary tree node
//!
//! A node exclusively owns its subtrees through `Option<Box<Node>>`, so the
//! structure is acyclic and every node has at most one parent. Traversals
//! borrow nodes; they never take ownership.
//!
//! `Clone`, `PartialEq`, `Debug` and `Drop` are written with explicit stacks
//! so chains far deeper than the call stack can be copied, compared,
//! printed and freed.

use std::fmt;

use crate::traversal::Stack;

/// A binary tree node holding an integer value
pub struct Node {
    pub val: i64,
    pub left: Option<Box<Node>>,
    pub right: Option<Box<Node>>,
}

impl Node {
    /// Create a node with no children
    pub fn leaf(val: i64) -> Self {
        Self {
            val,
            left: None,
            right: None,
        }
    }

    /// Create a node with the given optional subtrees
    pub fn new(val: i64, left: Option<Node>, right: Option<Node>) -> Self {
        Self {
            val,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Attach `left` as the left subtree, replacing any existing one
    pub fn with_left(mut self, left: Node) -> Self {
        self.left = Some(Box::new(left));
        self
    }

    /// Attach `right` as the right subtree, replacing any existing one
    pub fn with_right(mut self, right: Node) -> Self {
        self.right = Some(Box::new(right));
        self
    }

    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of nodes in this subtree, including `self`
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.left());
            pending.extend(node.right());
        }
        count
    }

    /// Number of nodes on the longest root-to-leaf path (a leaf has height 1)
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending = vec![(self, 1)];
        while let Some((node, depth)) = pending.pop() {
            height = height.max(depth);
            pending.extend(node.left().map(|child| (child, depth + 1)));
            pending.extend(node.right().map(|child| (child, depth + 1)));
        }
        height
    }
}

enum CloneStep<'a> {
    Visit(&'a Node),
    Assemble {
        val: i64,
        has_left: bool,
        has_right: bool,
    },
}

impl Clone for Node {
    fn clone(&self) -> Self {
        let mut steps = Stack::from_item(CloneStep::Visit(self));
        let mut built: Stack<Node> = Stack::new();

        while !steps.is_empty() {
            match steps.pop() {
                CloneStep::Visit(node) => {
                    steps.push(CloneStep::Assemble {
                        val: node.val,
                        has_left: node.left.is_some(),
                        has_right: node.right.is_some(),
                    });
                    if let Some(right) = node.right() {
                        steps.push(CloneStep::Visit(right));
                    }
                    if let Some(left) = node.left() {
                        steps.push(CloneStep::Visit(left));
                    }
                }
                CloneStep::Assemble {
                    val,
                    has_left,
                    has_right,
                } => {
                    // Children finish in left-then-right order, so the right
                    // copy sits on top.
                    let right = has_right.then(|| built.pop());
                    let left = has_left.then(|| built.pop());
                    built.push(Node::new(val, left, right));
                }
            }
        }

        built.pop()
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.val != b.val {
                return false;
            }
            for pair in [(a.left(), b.left()), (a.right(), b.right())] {
                match pair {
                    (Some(x), Some(y)) => pending.push((x, y)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl Eq for Node {}

enum Piece<'a> {
    Node(Option<&'a Node>),
    Text(&'static str),
}

/// Renders as `val(left, right)`, with `_` for a missing child and bare
/// `val` for a leaf: `5(3(1, _), 8)`.
impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pieces = vec![Piece::Node(Some(self))];
        while let Some(piece) = pieces.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Node(None) => f.write_str("_")?,
                Piece::Node(Some(node)) if node.is_leaf() => write!(f, "{}", node.val)?,
                Piece::Node(Some(node)) => {
                    write!(f, "{}(", node.val)?;
                    pieces.push(Piece::Text(")"));
                    pieces.push(Piece::Node(node.right()));
                    pieces.push(Piece::Text(", "));
                    pieces.push(Piece::Node(node.left()));
                }
            }
        }
        Ok(())
    }
}

// Boxed children would otherwise drop recursively and overflow on long chains.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}
