//! This crate exposes generic binary trees mostly for educational purposes.
//!
//! ## Binary Tree
//!
//! A binary tree is built from `Node`s. Each `Node` stores a value and owns at most two child
//! `Node`s, its left and right subtrees. A `Node` with no children is called a "leaf node". The
//! height of a tree is the number of `Node`s on the longest path from the root `Node` down to a
//! leaf `Node`, so an empty tree has a height of 0 and a lone root a height of 1.
//!
//! [`BinaryTree`] keeps no order between its values. It keeps itself short instead: new values
//! are placed below the shorter subtree at every step, and removed values are refilled from the
//! taller one.
//!
//! ## Binary Search Tree
//!
//! A [`BinarySearchTree`] uses the same nodes but maintains two invariants:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! Searching therefore takes `O(height)` instead of visiting every `Node`, and visiting the left
//! subtree, then the subtree root, then the right subtree yields the values in sorted order.
//! Nothing rebalances the tree, so inserting sorted values gives a tree whose height is its
//! length.
//!
//! ## Traversal
//!
//! Both trees implement [`TreeShape`], which answers shape queries and walks the tree in
//! preorder, inorder or postorder, either handing each value to a [`Visitor`] or through an
//! iterator.
//!
//! ## Dictionary
//!
//! [`BstMap`] is a [`Dictionary`] built on a [`BinarySearchTree`] of key-ordered [`Entry`]s.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod binary_tree;
pub mod error;
pub mod map;
pub mod node;
pub mod search_tree;
pub mod traverse;

pub use binary_tree::BinaryTree;
pub use error::TreeError;
pub use map::{BstMap, Dictionary, Entry};
pub use node::{Link, TreeNode};
pub use search_tree::BinarySearchTree;
pub use traverse::{Inorder, Postorder, Preorder, TreeShape, Visitor};
