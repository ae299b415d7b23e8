use super::stack::{Frame, Stack};
use crate::tree::Node;

/// In-order traversal (left subtree, node, right subtree) driven by tagged
/// stack frames.
///
/// Expanding a `Process` frame pushes the right subtree, then the node's
/// `Emit` frame, then the left subtree, so the left side is popped first.
#[tracing::instrument(level = "debug", skip_all, fields(order = "in-order"))]
pub fn in_order(root: Option<&Node>) -> Vec<i64> {
    let Some(root) = root else {
        return Vec::new();
    };

    let mut stack = Stack::from_item(Frame::Process(root));
    let mut values = Vec::new();
    let mut peak = stack.len();

    while !stack.is_empty() {
        match stack.pop() {
            Frame::Emit(node) => values.push(node.val),
            Frame::Process(node) => {
                if let Some(right) = node.right() {
                    stack.push(Frame::Process(right));
                }
                stack.push(Frame::Emit(node));
                if let Some(left) = node.left() {
                    stack.push(Frame::Process(left));
                }
                peak = peak.max(stack.len());
            }
        }
    }

    tracing::debug!(emitted = values.len(), peak_stack = peak, "traversal complete");
    values
}
