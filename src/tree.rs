//! A height-balanced binary tree with rank, holding a sequence of characters.

use crate::error::{Error, Result};
use crate::node::{self, Chars, Link, Node, NodeInfo};
use log::debug;
use std::fmt::{self, Debug, Display};

/// A sequence of characters stored in an AVL tree whose nodes know their rank, the size of
/// their left subtree.
///
/// Positional insertion, deletion and lookup take O(log n) time, and extracting a range of
/// `length` characters takes O(log n + length) time, without ever materializing the whole
/// sequence.
///
/// The tree is not synchronized: rotations restructure nodes in place, so concurrent callers
/// must serialize access to a tree themselves, or hand another thread a clone.
pub struct EditTree {
    root: Link,
    size: usize,
    rotations: usize,
}

impl EditTree {
    /// Creates an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use edit_tree::EditTree;
    ///
    /// let tree = EditTree::new();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.to_string(), "");
    /// ```
    pub fn new() -> EditTree { EditTree { root: None, size: 0, rotations: 0 } }

    /// Returns the number of characters in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use edit_tree::EditTree;
    ///
    /// let tree = EditTree::from("abc");
    /// assert_eq!(tree.len(), 3);
    /// ```
    pub fn len(&self) -> usize { self.size }

    /// Checks if the tree is empty.
    pub fn is_empty(&self) -> bool { self.root.is_none() }

    /// Removes all characters from the tree. The rotation count is kept.
    pub fn clear(&mut self) {
        self.root = None;
        self.size = 0;
    }

    /// Returns the number of single rotations performed since the tree was created. A double
    /// rotation counts as two.
    ///
    /// # Examples
    ///
    /// ```
    /// use edit_tree::EditTree;
    ///
    /// let mut tree = EditTree::new();
    /// tree.push('a');
    /// tree.push('b');
    /// assert_eq!(tree.rotation_count(), 0);
    ///
    /// tree.push('c');
    /// assert_eq!(tree.rotation_count(), 1);
    /// assert_eq!(tree.rank_string(), "[b1, a0, c0]");
    /// ```
    pub fn rotation_count(&self) -> usize { self.rotations }

    /// Inserts `ch` so that it ends up at position `pos`, shifting later characters right.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if `pos > len()`, leaving the tree untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use edit_tree::EditTree;
    ///
    /// let mut tree = EditTree::from("abc");
    /// tree.insert(1, 'x').unwrap();
    /// assert_eq!(tree.to_string(), "axbc");
    /// assert!(tree.insert(5, 'y').is_err());
    /// ```
    pub fn insert(&mut self, pos: usize, ch: char) -> Result<()> {
        if pos > self.size { return Err(self.out_of_range(pos, 0)); }

        self.root = Some(node::insert(self.root.take(), pos, ch, &mut self.rotations));
        self.size += 1;
        debug!("inserted {:?} at {}: size {}, {} rotations", ch, pos, self.size, self.rotations);
        Ok(())
    }

    /// Appends `ch` to the end of the tree.
    pub fn push(&mut self, ch: char) {
        let pos = self.size;
        self.root = Some(node::insert(self.root.take(), pos, ch, &mut self.rotations));
        self.size += 1;
        debug!("appended {:?}: size {}, {} rotations", ch, self.size, self.rotations);
    }

    /// Removes and returns the character at position `pos`, shifting later characters left.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if `pos >= len()`, leaving the tree untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use edit_tree::EditTree;
    ///
    /// let mut tree = EditTree::from("axbc");
    /// assert_eq!(tree.delete(0), Ok('a'));
    /// assert_eq!(tree.to_string(), "xbc");
    /// assert!(tree.delete(3).is_err());
    /// ```
    pub fn delete(&mut self, pos: usize) -> Result<char> {
        if pos >= self.size { return Err(self.out_of_range(pos, 1)); }

        let (root, removed) = node::remove(self.root.take(), pos, &mut self.rotations);
        self.root = root;
        let removed = removed.ok_or_else(|| self.out_of_range(pos, 1))?;
        self.size -= 1;
        debug!("deleted {:?} at {}: size {}, {} rotations", removed, pos, self.size, self.rotations);
        Ok(removed)
    }

    /// Returns the character at position `pos`.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if `pos >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use edit_tree::EditTree;
    ///
    /// let tree = EditTree::from("abc");
    /// assert_eq!(tree.get(2), Ok('c'));
    /// assert!(tree.get(3).is_err());
    /// ```
    pub fn get(&self, pos: usize) -> Result<char> {
        if pos >= self.size { return Err(self.out_of_range(pos, 1)); }
        node::get(&self.root, pos).ok_or_else(|| self.out_of_range(pos, 1))
    }

    /// Returns the `length` characters starting at position `pos`.
    ///
    /// Only the nodes holding those characters, and the nodes on the paths to them, are
    /// visited.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` unless `pos` is a valid position and `pos + length` is at
    /// most `len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use edit_tree::EditTree;
    ///
    /// let tree = EditTree::from("axbc");
    /// assert_eq!(tree.get_range(1, 2).unwrap(), "xb");
    /// assert!(tree.get_range(2, 3).is_err());
    /// ```
    pub fn get_range(&self, pos: usize, length: usize) -> Result<String> {
        let end = match pos.checked_add(length) {
            Some(end) if pos < self.size && end <= self.size => end,
            _ => return Err(self.out_of_range(pos, length)),
        };

        let mut out = String::with_capacity(length);
        node::collect_range(&self.root, 0, &(pos..end), &mut out);
        Ok(out)
    }

    /// Returns an iterator over the tree's characters, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use edit_tree::EditTree;
    ///
    /// let tree = EditTree::from("abc");
    /// assert_eq!(tree.chars().collect::<String>(), "abc");
    /// assert_eq!(tree.chars().len(), 3);
    /// ```
    pub fn chars(&self) -> Chars<'_> { Chars::new(&self.root, self.size) }

    /// Returns the root node, if any, for read-only inspection of the tree's shape.
    pub fn root(&self) -> Option<&Node> { self.root.as_deref() }

    /// Returns the height of the tree in O(log n) time, trusting the balance codes. An empty
    /// tree has height -1.
    ///
    /// # Examples
    ///
    /// ```
    /// use edit_tree::EditTree;
    ///
    /// assert_eq!(EditTree::new().height(), -1);
    /// assert_eq!(EditTree::from("abcdefg").height(), 2);
    /// ```
    pub fn height(&self) -> isize { node::fast_height(&self.root) }

    /// Returns the height of the tree by visiting every node.
    pub fn slow_height(&self) -> isize { node::slow_height(&self.root) }

    /// Returns the number of nodes in the tree by visiting every node.
    pub fn slow_size(&self) -> usize { node::slow_size(&self.root) }

    /// Checks that every node's rank equals the size of its left subtree.
    pub fn rank_invariant_holds(&self) -> bool { node::ranks_consistent(&self.root).1 }

    /// Checks that every node's balance code and cached height agree with its children's
    /// actual heights, and that those heights differ by at most one.
    pub fn balance_invariant_holds(&self) -> bool { node::balance_consistent(&self.root).1 }

    /// Returns each node's character, rank, balance code and height, in pre-order.
    ///
    /// # Examples
    ///
    /// ```
    /// use edit_tree::{Code, EditTree};
    ///
    /// let tree = EditTree::from("ab");
    /// let dump = tree.debug_dump();
    /// assert_eq!(dump[0].data, 'a');
    /// assert_eq!(dump[0].balance, Code::Right);
    /// assert_eq!(dump[1].data, 'b');
    /// assert_eq!(dump[1].height, 0);
    /// ```
    pub fn debug_dump(&self) -> Vec<NodeInfo> {
        let mut dump = Vec::with_capacity(self.size);
        node::pre_order(&self.root, &mut |node| dump.push(NodeInfo::from(node)));
        dump
    }

    /// Returns the characters and ranks of the nodes in pre-order, as in `[b1, a0, c0]`.
    pub fn rank_string(&self) -> String {
        self.join_pre_order(|node, out| out.push_str(&format!("{}{}", node.data(), node.rank())))
    }

    /// Returns the characters, ranks and balance codes of the nodes in pre-order, as in
    /// `[b1/, a0=]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use edit_tree::EditTree;
    ///
    /// let mut tree = EditTree::from("abc");
    /// tree.insert(1, 'x').unwrap();
    /// assert_eq!(tree.debug_string(), "[b2/, a0\\, x0=, c0=]");
    /// ```
    pub fn debug_string(&self) -> String {
        self.join_pre_order(|node, out| {
            out.push_str(&format!("{}{}{}", node.data(), node.rank(), node.balance()))
        })
    }

    fn join_pre_order<F>(&self, mut f: F) -> String where F: FnMut(&Node, &mut String) {
        let mut out = String::from("[");
        node::pre_order(&self.root, &mut |node| {
            if out.len() > 1 { out.push_str(", "); }
            f(node, &mut out);
        });
        out.push(']');
        out
    }

    fn out_of_range(&self, pos: usize, len: usize) -> Error {
        Error::OutOfRange { pos: pos, len: len, size: self.size }
    }
}

impl Clone for EditTree {
    /// Copies every node, keeping the shape. The copy is a new tree, so its rotation count
    /// starts at zero.
    fn clone(&self) -> EditTree {
        EditTree { root: self.root.clone(), size: self.size, rotations: 0 }
    }
}

impl Default for EditTree {
    fn default() -> EditTree { EditTree::new() }
}

impl From<char> for EditTree {
    fn from(ch: char) -> EditTree {
        EditTree { root: node::build(&[ch]), size: 1, rotations: 0 }
    }
}

impl<'a> From<&'a str> for EditTree {
    /// Builds a perfectly balanced tree in linear time.
    fn from(s: &'a str) -> EditTree { s.chars().collect() }
}

impl From<String> for EditTree {
    fn from(s: String) -> EditTree { EditTree::from(&s[..]) }
}

impl FromIterator<char> for EditTree {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> EditTree {
        let chars: Vec<char> = iter.into_iter().collect();
        debug!("building a tree of {} characters", chars.len());
        EditTree { root: node::build(&chars), size: chars.len(), rotations: 0 }
    }
}

impl<'a> IntoIterator for &'a EditTree {
    type Item = char;
    type IntoIter = Chars<'a>;
    fn into_iter(self) -> Chars<'a> { self.chars() }
}

impl Display for EditTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for ch in self.chars() { write!(f, "{}", ch)?; }
        Ok(())
    }
}

impl Debug for EditTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.debug_string())
    }
}

impl PartialEq for EditTree {
    /// Compares the character sequences, regardless of shape.
    fn eq(&self, other: &EditTree) -> bool {
        self.size == other.size && self.chars().eq(other.chars())
    }
}

impl Eq for EditTree {}
