//! FIFO queue backing the breadth-first traversal

use std::collections::VecDeque;

/// First-in, first-out sequence
#[derive(Debug)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Create a queue holding a single item
    pub fn from_item(item: T) -> Self {
        Self {
            items: VecDeque::from([item]),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove and return the front item. An empty queue yields `None`.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dequeue_is_fifo() {
        let mut queue = Queue::from_item('a');
        queue.enqueue('b');
        queue.enqueue('c');
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.dequeue(), Some('a'));
        assert_eq!(queue.dequeue(), Some('b'));
        assert_eq!(queue.dequeue(), Some('c'));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_dequeue_empty_is_none() {
        let mut queue: Queue<i64> = Queue::default();
        assert_eq!(queue.dequeue(), None);
        assert_eq!(queue.dequeue(), None);
    }
}
