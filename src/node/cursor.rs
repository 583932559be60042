use compare::{Compare, Natural};
use std::cmp::Ordering::*;
use std::ptr;

use super::{Link, LinkExt, Node};

/// A position within a map's in-order key sequence.
///
/// A cursor either points at an entry or sits one past the last entry (the
/// end position). It holds a reference to the tree's root rather than a path
/// of ancestors, so [`advance`](Cursor::advance) relocates the current node
/// by key before stepping to its successor.
///
/// Cursors compare equal when they point at the same node, never when they
/// merely point at equal keys. All end cursors compare equal, including end
/// cursors obtained from different maps.
///
/// Acquire through [`Map::cursor`](crate::map::Map::cursor) or
/// [`Map::find`](crate::map::Map::find).
pub struct Cursor<'a, K: 'a, V: 'a, C: 'a = Natural<K>> {
    root: &'a Link<K, V>,
    node: Option<&'a Node<K, V>>,
    cmp: &'a C,
}

impl<'a, K, V, C> Cursor<'a, K, V, C> {
    pub(crate) fn new(root: &'a Link<K, V>, node: Option<&'a Node<K, V>>, cmp: &'a C) -> Self {
        Cursor { root, node, cmp }
    }

    /// Checks if the cursor sits at the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bst::Map::new();
    /// assert!(map.cursor().is_end());
    ///
    /// map.insert(1, "a");
    /// assert!(!map.cursor().is_end());
    /// ```
    pub fn is_end(&self) -> bool { self.node.is_none() }

    /// Returns the entry the cursor points at, or `None` at the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bst::Map::new();
    /// map.insert(1, "a");
    ///
    /// assert_eq!(map.cursor().key_value(), Some((&1, &"a")));
    /// assert_eq!(map.find(&2).key_value(), None);
    /// ```
    pub fn key_value(&self) -> Option<(&'a K, &'a V)> {
        self.node.map(|node| (&node.key, &node.value))
    }
}

impl<'a, K, V, C> Cursor<'a, K, V, C> where C: Compare<K> {
    /// Steps the cursor to the in-order successor of its current entry.
    ///
    /// A cursor at the map's greatest key moves to the end position; a cursor
    /// already at the end stays there. Each step re-descends from the root,
    /// so advancing costs O(depth).
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bst::Map::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut cursor = map.find(&2);
    /// cursor.advance();
    /// assert_eq!(cursor.key_value(), Some((&3, &"c")));
    /// cursor.advance();
    /// assert!(cursor.is_end());
    /// ```
    pub fn advance(&mut self) {
        let key = match self.node {
            None => return,
            Some(node) => &node.key,
        };

        // The successor is the leftmost node of the right subtree when one
        // exists, and otherwise the last ancestor the walk turned left at.
        let mut succ = None;
        let mut walk = self.root.as_node_ref();

        while let Some(node) = walk {
            match self.cmp.compare(key, &node.key) {
                Less => {
                    succ = Some(node);
                    walk = node.left.as_node_ref();
                }
                Greater => walk = node.right.as_node_ref(),
                Equal => {
                    if let Some(mut node) = node.right.as_node_ref() {
                        while let Some(left) = node.left.as_node_ref() { node = left; }
                        succ = Some(node);
                    }
                    break;
                }
            }
        }

        self.node = succ;
    }
}

impl<'a, K, V, C> Clone for Cursor<'a, K, V, C> {
    fn clone(&self) -> Self { *self }
}

impl<'a, K, V, C> Copy for Cursor<'a, K, V, C> {}

impl<'a, K, V, C> PartialEq for Cursor<'a, K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        match (self.node, other.node) {
            (Some(l), Some(r)) => ptr::eq(l, r),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<'a, K, V, C> Eq for Cursor<'a, K, V, C> {}
