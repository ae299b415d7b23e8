//! Recursive reference traversals
//!
//! Straightforward recursive definitions used to check the iterative
//! algorithms. They recurse once per tree level, so keep them to shallow
//! trees.

use crate::tree::Node;

/// Recursive in-order traversal
pub fn in_order_recursive(root: Option<&Node>) -> Vec<i64> {
    fn walk(node: Option<&Node>, out: &mut Vec<i64>) {
        if let Some(node) = node {
            walk(node.left(), out);
            out.push(node.val);
            walk(node.right(), out);
        }
    }

    let mut out = Vec::new();
    walk(root, &mut out);
    out
}

/// Values grouped by depth, left to right within each depth
pub fn levels(root: Option<&Node>) -> Vec<Vec<i64>> {
    fn walk(node: Option<&Node>, depth: usize, out: &mut Vec<Vec<i64>>) {
        if let Some(node) = node {
            if out.len() == depth {
                out.push(Vec::new());
            }
            out[depth].push(node.val);
            walk(node.left(), depth + 1, out);
            walk(node.right(), depth + 1, out);
        }
    }

    let mut out = Vec::new();
    walk(root, 0, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_order_recursive() {
        let tree = Node::new(2, Some(Node::leaf(1)), Some(Node::leaf(3)));
        assert_eq!(in_order_recursive(Some(&tree)), vec![1, 2, 3]);
        assert!(in_order_recursive(None).is_empty());
    }

    #[test]
    fn test_levels_groups_by_depth() {
        let tree = Node::new(
            1,
            Some(Node::leaf(2).with_left(Node::leaf(4))),
            Some(Node::leaf(3)),
        );
        assert_eq!(levels(Some(&tree)), vec![vec![1], vec![2, 3], vec![4]]);
        assert!(levels(None).is_empty());
    }
}
