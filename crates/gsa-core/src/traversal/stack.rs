//! LIFO stack backing the depth-first traversals

use crate::tree::Node;

/// Work item for the frame-based in-order traversal
#[derive(Debug, Clone, Copy)]
pub enum Frame<'a> {
    /// Expand this subtree
    Process(&'a Node),
    /// This node's value is ready to be emitted
    Emit(&'a Node),
}

/// Last-in, first-out sequence
#[derive(Debug)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create a stack holding a single item
    pub fn from_item(item: T) -> Self {
        Self { items: vec![item] }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the top item.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty. Traversals only pop after checking
    /// `is_empty`, so reaching this is a bug in the traversal itself.
    pub fn pop(&mut self) -> T {
        match self.items.pop() {
            Some(item) => item,
            None => panic!("pop on an empty stack"),
        }
    }

    /// Remove and return the top item, or `None` once the stack is exhausted
    pub fn pop_or_none(&mut self) -> Option<T> {
        self.items.pop()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
