//! A height-balanced binary tree with rank, suitable as the buffer of a text editor.
//!
//! [`EditTree`] stores a sequence of characters in an AVL tree. Every node caches its rank
//! (the size of its left subtree), its height and a balance code, so that positional
//! operations route by rank instead of by a global index:
//!
//! - [`insert`](EditTree::insert), [`delete`](EditTree::delete) and [`get`](EditTree::get)
//!   take O(log n) time;
//! - [`get_range`](EditTree::get_range) takes O(log n + length) time;
//! - building from a string takes O(n) time.
//!
//! # Examples
//!
//! ```
//! use edit_tree::EditTree;
//!
//! let mut tree = EditTree::from("abc");
//! tree.insert(1, 'x').unwrap();
//! assert_eq!(tree.to_string(), "axbc");
//! assert_eq!(tree.get_range(1, 2).unwrap(), "xb");
//!
//! assert_eq!(tree.delete(0), Ok('a'));
//! assert_eq!(tree.to_string(), "xbc");
//!
//! assert!(tree.rank_invariant_holds());
//! assert!(tree.balance_invariant_holds());
//! ```

mod balance;
mod error;
mod node;
mod tree;

#[cfg(feature = "quickcheck")]
mod quickcheck;

pub use crate::balance::Code;
pub use crate::error::{Error, Result};
pub use crate::node::{Chars, Node, NodeInfo};
pub use crate::tree::EditTree;
