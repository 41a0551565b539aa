mod iter;


use crate::balance::{Code, Rebalance, Rotation};
use log::trace;
use std::cmp::Ordering::*;
use std::mem;
use std::ops::Range;

pub use self::iter::Chars;

pub type Link = Option<Box<Node>>;

/// A node of an `EditTree`, holding one character of the sequence.
///
/// Nodes are only reachable through shared references, so they can be inspected (for example
/// by a visualizer) but never restructured from outside the tree.
#[derive(Clone, Debug)]
pub struct Node {
    data: char,
    left: Link,
    right: Link,
    // in-order position of this node within its own subtree
    rank: usize,
    height: isize,
    balance: Code,
}

impl Node {
    fn new(data: char) -> Self {
        Node { data: data, left: None, right: None, rank: 0, height: 0, balance: Code::Same }
    }

    /// Returns the node's character.
    pub fn data(&self) -> char { self.data }

    /// Returns the number of nodes in the node's left subtree.
    pub fn rank(&self) -> usize { self.rank }

    /// Returns the node's balance code.
    pub fn balance(&self) -> Code { self.balance }

    /// Returns the height of the subtree rooted at the node. A leaf has height 0.
    pub fn height(&self) -> isize { self.height }

    /// Returns a reference to the node's left child, if any.
    pub fn left(&self) -> Option<&Node> { self.left.as_deref() }

    /// Returns a reference to the node's right child, if any.
    pub fn right(&self) -> Option<&Node> { self.right.as_deref() }

    // Recompute the cached height and balance code from the children.
    fn update(&mut self) {
        let (left, right) = (height(&self.left), height(&self.right));
        self.height = left.max(right) + 1;
        self.balance = Code::from_heights(left, right);
    }

    fn is_unbalanced(&self) -> bool {
        (height(&self.left) - height(&self.right)).abs() > 1
    }
}

/// A snapshot of one node's augmented fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeInfo {
    pub data: char,
    pub rank: usize,
    pub balance: Code,
    pub height: isize,
}

impl<'a> From<&'a Node> for NodeInfo {
    fn from(node: &'a Node) -> NodeInfo {
        NodeInfo { data: node.data, rank: node.rank, balance: node.balance, height: node.height }
    }
}

pub fn height(link: &Link) -> isize { link.as_ref().map_or(-1, |node| node.height) }

// `node.right` becomes the local root
fn rotate_left(mut node: Box<Node>) -> Box<Node> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => return node,
    };

    trace!("rotating left: {:?} moves above {:?}", child.data, node.data);
    node.right = child.left.take();
    node.update();
    child.rank += node.rank + 1;
    child.left = Some(node);
    child.update();
    child
}

// `node.left` becomes the local root
fn rotate_right(mut node: Box<Node>) -> Box<Node> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => return node,
    };

    trace!("rotating right: {:?} moves above {:?}", child.data, node.data);
    node.left = child.right.take();
    node.rank -= child.rank + 1;
    node.update();
    child.right = Some(node);
    child.update();
    child
}

fn rotate(node: Box<Node>, rotation: Rotation) -> Box<Node> {
    match rotation {
        Rotation::Left => rotate_left(node),
        Rotation::Right => rotate_right(node),
    }
}

/// Refreshes the node after one of its subtrees grew or shrank by one level, rotating if the
/// subtrees now differ in height by two. Returns the new local root.
fn rebalance(mut node: Box<Node>, rotations: &mut usize) -> Box<Node> {
    node.update();
    if !node.is_unbalanced() { return node; }

    let heavy_child = match node.balance {
        Code::Left => node.left.as_ref(),
        Code::Same | Code::Right => node.right.as_ref(),
    };
    let plan = Rebalance::choose(node.balance, heavy_child.map_or(Code::Same, |child| child.balance));
    *rotations += plan.rotations();

    match plan {
        Rebalance::Single(rotation) => rotate(node, rotation),
        Rebalance::Double(first, second) => {
            let heavy = match second {
                Rotation::Left => &mut node.right,
                Rotation::Right => &mut node.left,
            };
            *heavy = heavy.take().map(|child| rotate(child, first));
            rotate(node, second)
        }
    }
}

/// Inserts `data` at in-order position `pos` of the subtree, which must be at most the
/// subtree's size. Returns the new root of the subtree.
pub fn insert(link: Link, pos: usize, data: char, rotations: &mut usize) -> Box<Node> {
    let mut node = match link {
        None => {
            debug_assert_eq!(pos, 0, "insertion point must be reached exactly");
            return Box::new(Node::new(data));
        }
        Some(node) => node,
    };

    if pos <= node.rank {
        node.rank += 1;
        node.left = Some(insert(node.left.take(), pos, data, rotations));
    } else {
        let pos = pos - node.rank - 1;
        node.right = Some(insert(node.right.take(), pos, data, rotations));
    }

    rebalance(node, rotations)
}

/// Removes the character at in-order position `pos` of the subtree, returning the subtree's
/// new root and the removed character.
///
/// A node with two children is kept in place and takes over its in-order successor's
/// character; the successor is removed from the right subtree instead.
///
/// Returns `(link, None)` unchanged if `link` is empty. Callers check `pos` against the size
/// first: descending toward a position past the end adjusts ranks along the way.
pub fn remove(link: Link, pos: usize, rotations: &mut usize) -> (Link, Option<char>) {
    let mut node = match link {
        None => return (None, None),
        Some(node) => node,
    };

    let removed = match pos.cmp(&node.rank) {
        Less => {
            node.rank -= 1;
            let (left, removed) = remove(node.left.take(), pos, rotations);
            node.left = left;
            removed
        }
        Greater => {
            let pos = pos - node.rank - 1;
            let (right, removed) = remove(node.right.take(), pos, rotations);
            node.right = right;
            removed
        }
        Equal => match (node.left.take(), node.right.take()) {
            (None, None) => return (None, Some(node.data)),
            (Some(child), None) | (None, Some(child)) => return (Some(child), Some(node.data)),
            (left, Some(right)) => {
                node.left = left;
                let (right, successor) = remove(Some(right), 0, rotations);
                node.right = right;
                successor.map(|successor| mem::replace(&mut node.data, successor))
            }
        },
    };

    (Some(rebalance(node, rotations)), removed)
}

/// Returns the character at in-order position `pos` of the subtree, if any.
pub fn get(mut link: &Link, mut pos: usize) -> Option<char> {
    while let Some(ref node) = *link {
        match pos.cmp(&node.rank) {
            Equal => return Some(node.data),
            Less => link = &node.left,
            Greater => {
                pos -= node.rank + 1;
                link = &node.right;
            }
        }
    }

    None
}

/// Appends to `out` the characters of the subtree whose absolute in-order indices fall in
/// `range`, where `offset` is the absolute index of the subtree's first character.
///
/// Only subtrees overlapping `range` are entered.
pub fn collect_range(link: &Link, offset: usize, range: &Range<usize>, out: &mut String) {
    let node = match *link {
        None => return,
        Some(ref node) => node,
    };

    let index = offset + node.rank;
    if range.start < index { collect_range(&node.left, offset, range, out); }
    if range.contains(&index) { out.push(node.data); }
    if index + 1 < range.end { collect_range(&node.right, index + 1, range, out); }
}

/// Builds a perfectly balanced subtree holding `chars` in order, in linear time.
pub fn build(chars: &[char]) -> Link {
    if chars.is_empty() { return None; }

    let mid = (chars.len() - 1) / 2;
    let mut node = Box::new(Node::new(chars[mid]));
    node.rank = mid;
    node.left = build(&chars[..mid]);
    node.right = build(&chars[mid + 1..]);
    node.update();
    Some(node)
}

/// Visits the subtree's nodes in pre-order.
pub fn pre_order<'a, F>(link: &'a Link, f: &mut F) where F: FnMut(&'a Node) {
    if let Some(ref node) = *link {
        f(node);
        pre_order(&node.left, f);
        pre_order(&node.right, f);
    }
}

/// Returns the subtree's size and whether every rank in it equals its left subtree's size.
pub fn ranks_consistent(link: &Link) -> (usize, bool) {
    match *link {
        None => (0, true),
        Some(ref node) => {
            let (left_size, left_ok) = ranks_consistent(&node.left);
            let (right_size, right_ok) = ranks_consistent(&node.right);
            (left_size + right_size + 1, left_ok && right_ok && node.rank == left_size)
        }
    }
}

/// Returns the subtree's true height and whether every node in it has a balance code matching
/// its children's true heights, a height difference of at most one and a correct cached
/// height.
pub fn balance_consistent(link: &Link) -> (isize, bool) {
    match *link {
        None => (-1, true),
        Some(ref node) => {
            let (left, left_ok) = balance_consistent(&node.left);
            let (right, right_ok) = balance_consistent(&node.right);
            let height = left.max(right) + 1;
            let ok = left_ok && right_ok
                && node.balance == Code::from_heights(left, right)
                && (left - right).abs() <= 1
                && node.height == height;
            (height, ok)
        }
    }
}

/// Returns the subtree's height by following the taller child, as told by the balance codes.
pub fn fast_height(mut link: &Link) -> isize {
    let mut height = -1;

    while let Some(ref node) = *link {
        height += 1;
        link = match node.balance {
            Code::Right => &node.right,
            Code::Left | Code::Same => &node.left,
        };
    }

    height
}

pub fn slow_height(link: &Link) -> isize {
    match *link {
        None => -1,
        Some(ref node) => slow_height(&node.left).max(slow_height(&node.right)) + 1,
    }
}

pub fn slow_size(link: &Link) -> usize {
    match *link {
        None => 0,
        Some(ref node) => slow_size(&node.left) + slow_size(&node.right) + 1,
    }
}
