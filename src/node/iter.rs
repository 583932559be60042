use std::collections::VecDeque;

use self::visit::{Seen, Visit};
use super::{Link, LinkExt, Node};

pub trait NodeRef {
    type Item;
    fn item(self) -> Self::Item;
    fn left(&mut self) -> Option<Self> where Self: Sized;
    fn right(&mut self) -> Option<Self> where Self: Sized;
}

impl<'a, K, V> NodeRef for &'a Node<K, V> {
    type Item = (&'a K, &'a V);
    fn item(self) -> (&'a K, &'a V) { (&self.key, &self.value) }
    fn left(&mut self) -> Option<&'a Node<K, V>> { self.left.as_node_ref() }
    fn right(&mut self) -> Option<&'a Node<K, V>> { self.right.as_node_ref() }
}

impl<K, V> NodeRef for Box<Node<K, V>> {
    type Item = (K, V);
    fn item(self) -> (K, V) { let node = *self; (node.key, node.value) }
    fn left(&mut self) -> Link<K, V> { self.left.take() }
    fn right(&mut self) -> Link<K, V> { self.right.take() }
}

#[derive(Clone)]
pub struct Iter<N> where N: NodeRef {
    visits: VecDeque<Visit<N>>,
    size: usize,
}

impl<N> Iter<N> where N: NodeRef {
    pub fn new(root: Option<N>, size: usize) -> Iter<N> {
        Iter { visits: root.into_iter().map(Visit::new).collect(), size }
    }
}

impl<N> Iterator for Iter<N> where N: NodeRef {
    type Item = N::Item;

    fn next(&mut self) -> Option<N::Item> {
        loop {
            let op = match self.visits.back_mut() {
                None => return None,
                Some(visit) => match visit.seen() {
                    Seen::N | Seen::R => Op::Push(visit.left()),
                    Seen::L => Op::PopPush(visit.right()),
                    Seen::B => Op::Pop,
                }
            };

            match op {
                Op::Push(node_ref) =>
                    if let Some(node) = node_ref { self.visits.push_back(Visit::new(node)); },
                Op::PopPush(node_ref) => {
                    self.size -= 1;
                    let visit = self.visits.pop_back().unwrap();
                    if let Some(node) = node_ref { self.visits.push_back(Visit::new(node)); }
                    return Some(visit.item());
                }
                Op::Pop => {
                    self.size -= 1;
                    let visit = self.visits.pop_back().unwrap();
                    return Some(visit.item());
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

impl<N> DoubleEndedIterator for Iter<N> where N: NodeRef {
    fn next_back(&mut self) -> Option<N::Item> {
        loop {
            let op = match self.visits.front_mut() {
                None => return None,
                Some(visit) => match visit.seen() {
                    Seen::N | Seen::L => Op::Push(visit.right()),
                    Seen::R => Op::PopPush(visit.left()),
                    Seen::B => Op::Pop,
                }
            };

            match op {
                Op::Push(node_ref) =>
                    if let Some(node) = node_ref { self.visits.push_front(Visit::new(node)); },
                Op::PopPush(node_ref) => {
                    self.size -= 1;
                    let visit = self.visits.pop_front().unwrap();
                    if let Some(node) = node_ref { self.visits.push_front(Visit::new(node)); }
                    return Some(visit.item());
                }
                Op::Pop => {
                    self.size -= 1;
                    let visit = self.visits.pop_front().unwrap();
                    return Some(visit.item());
                }
            }
        }
    }
}

mod visit {
    #[derive(Clone)]
    pub struct Visit<N> where N: super::NodeRef {
        node: N,
        seen: Seen,
    }

    impl<N> Visit<N> where N: super::NodeRef {
        pub fn new(node: N) -> Visit<N> { Visit { node, seen: Seen::N } }

        pub fn left(&mut self) -> Option<N> {
            match self.seen {
                Seen::N => { self.seen = Seen::L; self.node.left() }
                Seen::R => { self.seen = Seen::B; self.node.left() }
                Seen::L | Seen::B => None,
            }
        }

        pub fn right(&mut self) -> Option<N> {
            match self.seen {
                Seen::N => { self.seen = Seen::R; self.node.right() }
                Seen::L => { self.seen = Seen::B; self.node.right() }
                Seen::R | Seen::B => None,
            }
        }

        pub fn item(self) -> N::Item { self.node.item() }

        pub fn seen(&self) -> Seen { self.seen }
    }

    // Which of a node's subtrees the traversal has already entered.
    #[derive(Clone, Copy)]
    pub enum Seen {
        N,
        L,
        R,
        B,
    }
}

enum Op<T> {
    Push(Option<T>),
    PopPush(Option<T>),
    Pop,
}
