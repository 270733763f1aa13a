//! Chain node: a shared data handle plus arena links to its neighbours.

use slotmap::new_key_type;
use std::rc::Rc;

new_key_type! {
    /// Generational index of a node inside its chain's arena.
    pub struct NodeKey;
}

/// A node never copies or frees the datum it points at; it only holds one
/// `Rc` handle to it. Sentinels carry no data and have one missing link.
#[derive(Debug)]
pub struct Node<T> {
    data: Option<Rc<T>>,
    pub(crate) prev: Option<NodeKey>,
    pub(crate) next: Option<NodeKey>,
}

impl<T> Node<T> {
    pub fn new() -> Self {
        Self {
            data: None,
            prev: None,
            next: None,
        }
    }

    pub fn data(&self) -> Option<&Rc<T>> {
        self.data.as_ref()
    }

    /// Replace the stored handle and return it.
    pub fn set_data(&mut self, data: Rc<T>) -> &Rc<T> {
        self.data.insert(data)
    }

    pub fn prev(&self) -> Option<NodeKey> {
        self.prev
    }

    pub fn next(&self) -> Option<NodeKey> {
        self.next
    }

    /// A sentinel carries no data and is linked on exactly one side. A
    /// detached node with no links at all is not a sentinel.
    pub fn is_sentinel(&self) -> bool {
        self.data.is_none() && (self.prev.is_none() != self.next.is_none())
    }

    pub(crate) fn into_data(self) -> Option<Rc<T>> {
        self.data
    }
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self::new()
    }
}
