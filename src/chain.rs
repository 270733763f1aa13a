//! Chain: a doubly linked list bounded by two permanent sentinel nodes.
//!
//! Nodes live in a per-chain `SlotMap` arena and link to each other by
//! generational key. The head and tail sentinels are allocated on
//! construction and never removed, so insertion and unlinking need no
//! boundary special cases: every element always has both neighbours.
//!
//! Invariants
//! - `head.next == tail` and `tail.prev == head` iff `len == 0`.
//! - Walking `next` from head reaches tail after exactly `len` elements, and
//!   walking `prev` from tail visits the same nodes in reverse.
//! - Elements are compared by `Rc` identity only.

use crate::error::{Error, Result};
use crate::node::{Node, NodeKey};
use slotmap::SlotMap;
use std::rc::Rc;

#[derive(Debug)]
pub struct Chain<T> {
    nodes: SlotMap<NodeKey, Node<T>>,
    head: NodeKey,
    tail: NodeKey,
    len: usize,
    index: usize,
    payload: Option<Rc<T>>,
}

impl<T> Chain<T> {
    /// Create an empty chain tagged with its bucket `index`.
    pub fn new(index: usize) -> Self {
        let mut nodes = SlotMap::with_capacity_and_key(2);
        let head = nodes.insert(Node::new());
        let tail = nodes.insert(Node::new());
        nodes[head].next = Some(tail);
        nodes[tail].prev = Some(head);
        Self {
            nodes,
            head,
            tail,
            len: 0,
            index,
            payload: None,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Auxiliary reference attached to the chain itself, unrelated to its
    /// elements.
    pub fn payload(&self) -> Option<&Rc<T>> {
        self.payload.as_ref()
    }

    pub fn set_payload(&mut self, data: Rc<T>) -> &Rc<T> {
        self.payload.insert(data)
    }

    pub fn take_payload(&mut self) -> Option<Rc<T>> {
        self.payload.take()
    }

    pub fn head(&self) -> NodeKey {
        self.head
    }

    pub fn tail(&self) -> NodeKey {
        self.tail
    }

    pub fn node(&self, key: NodeKey) -> Option<&Node<T>> {
        self.nodes.get(key)
    }

    /// Append `data` as the new last element. The same handle may be
    /// appended any number of times; each append is an independent element.
    pub fn append(&mut self, data: Rc<T>) -> NodeKey {
        let last = self.nodes[self.tail].prev.unwrap_or(self.head);
        let mut node = Node::new();
        node.set_data(data);
        node.prev = Some(last);
        node.next = Some(self.tail);
        let key = self.nodes.insert(node);
        self.nodes[last].next = Some(key);
        self.nodes[self.tail].prev = Some(key);
        self.len += 1;
        debug_assert!(self.linked(key));
        key
    }

    /// Constant-time link check around one node: each present neighbour
    /// points back at it, and only the sentinels lack a neighbour.
    fn linked(&self, key: NodeKey) -> bool {
        let Some(node) = self.nodes.get(key) else {
            return false;
        };
        let back = match node.prev {
            Some(p) => self.nodes.get(p).and_then(|n| n.next) == Some(key),
            None => key == self.head,
        };
        let forward = match node.next {
            Some(n) => self.nodes.get(n).and_then(|m| m.prev) == Some(key),
            None => key == self.tail,
        };
        back && forward
    }

    fn first_key(&self) -> Option<NodeKey> {
        self.nodes[self.head].next.filter(|&k| k != self.tail)
    }

    fn last_key(&self) -> Option<NodeKey> {
        self.nodes[self.tail].prev.filter(|&k| k != self.head)
    }

    pub fn first(&self) -> Result<&Rc<T>> {
        self.first_key()
            .and_then(|k| self.nodes.get(k))
            .and_then(Node::data)
            .ok_or(Error::Empty)
    }

    pub fn last(&self) -> Result<&Rc<T>> {
        self.last_key()
            .and_then(|k| self.nodes.get(k))
            .and_then(Node::data)
            .ok_or(Error::Empty)
    }

    /// Detach an element node and hand back its data. Sentinels and stale
    /// keys are ignored.
    fn unlink(&mut self, key: NodeKey) -> Option<Rc<T>> {
        let node = self.nodes.get(key)?;
        let (Some(prev), Some(next)) = (node.prev, node.next) else {
            return None;
        };
        self.nodes[prev].next = Some(next);
        self.nodes[next].prev = Some(prev);
        let node = self.nodes.remove(key)?;
        self.len -= 1;
        debug_assert!(self.linked(prev) && self.linked(next));
        node.into_data()
    }

    /// Remove the first element, scanning from the front, for which `pred`
    /// holds.
    pub fn remove_where<F>(&mut self, mut pred: F) -> Option<Rc<T>>
    where
        F: FnMut(&Rc<T>) -> bool,
    {
        let key = self.keys().find(|&k| {
            self.nodes
                .get(k)
                .and_then(Node::data)
                .map(&mut pred)
                .unwrap_or(false)
        })?;
        self.unlink(key)
    }

    /// Remove the first element whose handle is identical to `data`.
    /// Returns whether an element was removed; a miss leaves the chain
    /// untouched and is not an error.
    pub fn remove(&mut self, data: &Rc<T>) -> bool {
        self.remove_where(|d| Rc::ptr_eq(d, data)).is_some()
    }

    pub fn contains(&self, data: &Rc<T>) -> bool {
        self.iter().any(|d| Rc::ptr_eq(d, data))
    }

    pub fn pop_front(&mut self) -> Option<Rc<T>> {
        let key = self.first_key()?;
        self.unlink(key)
    }

    pub fn pop_back(&mut self) -> Option<Rc<T>> {
        let key = self.last_key()?;
        self.unlink(key)
    }

    /// Unlink every element; the sentinels stay.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    fn keys(&self) -> Keys<'_, T> {
        Keys {
            chain: self,
            cursor: self.first_key(),
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            chain: self,
            front: self.first_key(),
            back: self.last_key(),
            remaining: self.len,
        }
    }

    /// Walk the links in both directions and check them against `len` and
    /// the sentinel invariant.
    pub fn is_consistent(&self) -> bool {
        let (Some(head), Some(tail)) = (self.nodes.get(self.head), self.nodes.get(self.tail))
        else {
            return false;
        };
        if head.prev.is_some() || tail.next.is_some() || head.data().is_some() {
            return false;
        }
        let empty_links = head.next == Some(self.tail) && tail.prev == Some(self.head);
        if empty_links != (self.len == 0) {
            return false;
        }

        let mut forward = Vec::with_capacity(self.len);
        let mut cur = self.head;
        while let Some(next) = self.nodes.get(cur).and_then(|n| n.next) {
            if next == self.tail {
                break;
            }
            match self.nodes.get(next) {
                Some(n) if n.prev == Some(cur) && n.data().is_some() => forward.push(next),
                _ => return false,
            }
            if forward.len() > self.len {
                return false;
            }
            cur = next;
        }
        if forward.len() != self.len || tail.prev != Some(cur) {
            return false;
        }

        let mut cur = self.tail;
        for &expected in forward.iter().rev() {
            match self.nodes.get(cur).and_then(|n| n.prev) {
                Some(prev) if prev == expected => cur = prev,
                _ => return false,
            }
        }
        // Two sentinels plus the elements, nothing orphaned in the arena.
        self.nodes.len() == self.len + 2
    }
}

struct Keys<'a, T> {
    chain: &'a Chain<T>,
    cursor: Option<NodeKey>,
}

impl<'a, T> Iterator for Keys<'a, T> {
    type Item = NodeKey;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.cursor?;
        self.cursor = self
            .chain
            .nodes
            .get(key)
            .and_then(|n| n.next)
            .filter(|&k| k != self.chain.tail);
        Some(key)
    }
}

/// Front-to-back iterator over element handles.
pub struct Iter<'a, T> {
    chain: &'a Chain<T>,
    front: Option<NodeKey>,
    back: Option<NodeKey>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a Rc<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.chain.nodes.get(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        node.data()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.chain.nodes.get(self.back?)?;
        self.back = node.prev;
        self.remaining -= 1;
        node.data()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a Chain<T> {
    type Item = &'a Rc<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
