//! Per-source callback lists.
//!
//! Each list is a singly-linked list whose nodes live in an arena owned by
//! the registry. Released nodes go onto a free list and are reused by later
//! registrations, so node indices stay valid for the registry's lifetime.
//! That is what lets the dispatcher walk a list one node at a time while
//! callbacks register or unregister.

use alloc::vec::Vec;
use core::fmt;

/// An interrupt callback.
pub type Callback = fn();

/// Registry errors.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No memory for a new node; the registry is unchanged.
    AllocationFailure,
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailure => f.write_str("out of memory for callback node"),
        }
    }
}

#[derive(Debug, Copy, Clone)]
struct Node {
    /// `None` while the node sits on the free list.
    callback: Option<Callback>,
    next: Option<usize>,
}

/// Ordered callback list for one interrupt source.
///
/// The most recently registered callback runs first. The same callback may
/// be registered more than once; each registration needs its own
/// unregistration.
#[derive(Debug)]
pub struct Registry {
    nodes: Vec<Node>,
    head: Option<usize>,
    free: Option<usize>,
    len: usize,
}

impl Registry {
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
            free: None,
            len: 0,
        }
    }

    /// Add `callback` at the front of the list.
    pub fn register(&mut self, callback: Callback) -> Result<(), RegistryError> {
        let index = self.allocate(Node {
            callback: Some(callback),
            next: self.head,
        })?;

        self.head = Some(index);
        self.len += 1;
        Ok(())
    }

    /// Remove the first node holding `callback`.
    ///
    /// Returns whether a node was removed; an unknown callback is not an
    /// error.
    pub fn unregister(&mut self, callback: Callback) -> bool {
        let mut prev: Option<usize> = None;
        let mut cursor = self.head;

        while let Some(index) = cursor {
            let node = self.nodes[index];

            if node.callback.is_some_and(|cb| core::ptr::fn_addr_eq(cb, callback)) {
                match prev {
                    Some(p) => self.nodes[p].next = node.next,
                    None => self.head = node.next,
                }
                self.release(index);
                self.len -= 1;
                return true;
            }

            prev = Some(index);
            cursor = node.next;
        }

        false
    }

    /// Callbacks in list order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            registry: self,
            cursor: self.head,
        }
    }

    pub fn contains(&self, callback: Callback) -> bool {
        self.iter().any(|cb| core::ptr::fn_addr_eq(cb, callback))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes ever allocated, live or free.
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn head(&self) -> Option<usize> {
        self.head
    }

    /// Callback and successor of the node at `index`.
    ///
    /// Free nodes report no callback; out-of-range indices report neither.
    pub(crate) fn link(&self, index: usize) -> (Option<Callback>, Option<usize>) {
        self.nodes
            .get(index)
            .map_or((None, None), |node| (node.callback, node.next))
    }

    fn allocate(&mut self, node: Node) -> Result<usize, RegistryError> {
        if let Some(index) = self.free {
            self.free = self.nodes[index].next;
            self.nodes[index] = node;
            return Ok(index);
        }

        self.nodes
            .try_reserve(1)
            .map_err(|_| RegistryError::AllocationFailure)?;
        self.nodes.push(node);
        Ok(self.nodes.len() - 1)
    }

    fn release(&mut self, index: usize) {
        self.nodes[index] = Node {
            callback: None,
            next: self.free,
        };
        self.free = Some(index);
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a [`Registry`]'s callbacks.
pub struct Iter<'a> {
    registry: &'a Registry,
    cursor: Option<usize>,
}

impl Iterator for Iter<'_> {
    type Item = Callback;

    fn next(&mut self) -> Option<Callback> {
        while let Some(index) = self.cursor {
            let (callback, next) = self.registry.link(index);
            self.cursor = next;
            if callback.is_some() {
                return callback;
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    thread_local! {
        static CALLS: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
    }

    fn calls() -> Vec<&'static str> {
        CALLS.with_borrow_mut(core::mem::take)
    }

    fn run(registry: &Registry) {
        registry.iter().for_each(|callback| callback());
    }

    fn a() {
        CALLS.with_borrow_mut(|log| log.push("a"));
    }

    fn b() {
        CALLS.with_borrow_mut(|log| log.push("b"));
    }

    fn c() {
        CALLS.with_borrow_mut(|log| log.push("c"));
    }

    #[test]
    fn most_recent_runs_first() {
        let mut registry = Registry::new();
        registry.register(a).unwrap();
        registry.register(b).unwrap();

        run(&registry);
        assert_eq!(calls(), ["b", "a"]);

        assert!(registry.unregister(a));
        run(&registry);
        assert_eq!(calls(), ["b"]);
    }

    #[test]
    fn empty_registry_is_harmless() {
        let mut registry = Registry::new();
        run(&registry);
        assert!(!registry.unregister(a));
        assert!(registry.is_empty());
        assert!(calls().is_empty());
    }

    #[test]
    fn unknown_callback_leaves_list_alone() {
        let mut registry = Registry::new();
        registry.register(a).unwrap();
        registry.register(b).unwrap();

        assert!(!registry.unregister(c));
        assert_eq!(registry.len(), 2);
        run(&registry);
        assert_eq!(calls(), ["b", "a"]);
    }

    #[test]
    fn unregister_middle_and_tail() {
        let mut registry = Registry::new();
        registry.register(a).unwrap();
        registry.register(b).unwrap();
        registry.register(c).unwrap();

        assert!(registry.unregister(b));
        run(&registry);
        assert_eq!(calls(), ["c", "a"]);

        assert!(registry.unregister(a));
        run(&registry);
        assert_eq!(calls(), ["c"]);
    }

    #[test]
    fn duplicates_are_kept_until_each_is_removed() {
        let mut registry = Registry::new();
        registry.register(a).unwrap();
        registry.register(a).unwrap();

        assert!(registry.unregister(a));
        assert!(registry.contains(a));
        run(&registry);
        assert_eq!(calls(), ["a"]);

        assert!(registry.unregister(a));
        assert!(!registry.contains(a));
    }

    #[test]
    fn released_nodes_are_reused() {
        let mut registry = Registry::new();
        registry.register(a).unwrap();
        registry.register(b).unwrap();
        registry.unregister(a);
        registry.register(c).unwrap();

        assert_eq!(registry.capacity(), 2);
        run(&registry);
        assert_eq!(calls(), ["c", "b"]);
    }

    #[test]
    fn free_nodes_have_no_callback() {
        let mut registry = Registry::new();
        registry.register(a).unwrap();
        registry.unregister(a);

        assert_eq!(registry.head(), None);
        assert!(registry.link(0).0.is_none());
        assert!(matches!(registry.link(7), (None, None)));
    }
}
