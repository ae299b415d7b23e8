use super::queue::Queue;
use crate::tree::Node;

/// Breadth-first traversal: level by level from the root, left to right
/// within each level.
#[tracing::instrument(level = "debug", skip_all, fields(order = "breadth-first"))]
pub fn breadth_first(root: Option<&Node>) -> Vec<i64> {
    let Some(root) = root else {
        return Vec::new();
    };

    let mut queue = Queue::from_item(root);
    let mut values = Vec::new();
    let mut peak = queue.len();

    while let Some(node) = queue.dequeue() {
        values.push(node.val);
        if let Some(left) = node.left() {
            queue.enqueue(left);
        }
        if let Some(right) = node.right() {
            queue.enqueue(right);
        }
        peak = peak.max(queue.len());
    }

    tracing::debug!(emitted = values.len(), peak_queue = peak, "traversal complete");
    values
}
