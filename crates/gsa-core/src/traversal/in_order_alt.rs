use super::stack::Stack;
use crate::tree::Node;

/// Node-based in-order traversal using left-descent and backtracking.
///
/// Unlike `in_order` there are no frame tags: ancestors
/// are pushed as bare node references while descending left. The output is
/// kept exactly as this algorithm produces it, which differs from a true
/// in-order walk on some shapes:
///
/// - a node reached by descent that has a right child is emitted twice,
///   once on arrival and again before moving right;
/// - an ancestor popped while backtracking is skipped when it has no right
///   child, so a left chain `3 -> 2 -> 1` yields only `[1]`.
///
/// On perfect trees the output matches `in_order`. Use `in_order` when a
/// correct in-order sequence is required.
#[tracing::instrument(level = "debug", skip_all, fields(order = "in-order-alt"))]
pub fn in_order_alt(root: Option<&Node>) -> Vec<i64> {
    if root.is_none() {
        return Vec::new();
    }

    let mut stack: Stack<&Node> = Stack::new();
    let mut values = Vec::new();
    let mut cursor = root;

    while let Some(mut node) = cursor {
        // Go as far left as possible, remembering the path
        while let Some(left) = node.left() {
            stack.push(node);
            node = left;
        }
        values.push(node.val);

        // Backtrack until a node with a right subtree turns up
        let mut current = Some(node);
        while current.is_some_and(|n| n.right().is_none()) {
            current = stack.pop_or_none();
        }

        cursor = match current {
            Some(n) => {
                values.push(n.val);
                n.right()
            }
            None => None,
        };
    }

    tracing::debug!(emitted = values.len(), "traversal complete");
    values
}
