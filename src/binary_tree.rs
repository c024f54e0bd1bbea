//! A general binary tree with no ordering between values.
//!
//! Values are placed to keep the tree short rather than sorted: [`add`][BinaryTree::add]
//! walks towards the shorter subtree at every node and [`remove`][BinaryTree::remove] refills
//! the hole left by a removed value from the taller subtree.
//!
//! # Examples
//!
//! ```
//! use bintree::{BinaryTree, TreeError, TreeShape};
//!
//! let mut tree = BinaryTree::new();
//! assert!(tree.is_empty());
//! assert_eq!(tree.root_data(), Err(TreeError::EmptyTree));
//!
//! tree.add(1);
//! tree.add(2);
//! tree.add(3);
//!
//! assert_eq!(tree.root_data(), Ok(&1));
//! assert_eq!(tree.num_nodes(), 3);
//! assert_eq!(tree.height(), 2);
//!
//! assert!(tree.remove(&2));
//! assert!(!tree.contains(&2));
//! assert!(!tree.remove(&4));
//!
//! tree.set_root_data(6).unwrap();
//! assert_eq!(tree.root_data(), Ok(&6));
//! ```

use std::mem;

use log::trace;

use crate::error::TreeError;
use crate::node::{height, Link, TreeNode};
use crate::traverse::{sealed, TreeShape};

/// A binary tree that keeps itself roughly balanced by height, without ordering its values.
///
/// Duplicates are allowed. Cloning produces a deep copy that shares no nodes with the original.
#[derive(Clone, Debug)]
pub struct BinaryTree<T> {
    root: Link<T>,
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BinaryTree<T> {
    /// Generates a new, empty `BinaryTree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Creates a tree with a single node holding `item`.
    pub fn with_root(item: T) -> Self {
        Self {
            root: Some(Box::new(TreeNode::new(item))),
        }
    }

    /// Creates a tree whose root holds `item` and whose subtrees are the nodes of `left` and
    /// `right`. Both trees are consumed so no node ends up with two owners.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{BinaryTree, TreeShape};
    ///
    /// let left = BinaryTree::with_root(2);
    /// let right: BinaryTree<_> = [3, 4].into_iter().collect();
    /// let tree = BinaryTree::from_parts(1, left, right);
    ///
    /// let preorder: Vec<_> = tree.preorder().copied().collect();
    /// assert_eq!(preorder, [1, 2, 3, 4]);
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn from_parts(item: T, left: BinaryTree<T>, right: BinaryTree<T>) -> Self {
        let mut root = TreeNode::new(item);
        root.set_left(left.root);
        root.set_right(right.root);
        Self {
            root: Some(Box::new(root)),
        }
    }

    /// The value stored at the root.
    ///
    /// Returns [`TreeError::EmptyTree`] if the tree has no nodes.
    pub fn root_data(&self) -> Result<&T, TreeError> {
        self.root
            .as_deref()
            .map(TreeNode::item)
            .ok_or(TreeError::EmptyTree)
    }

    /// Replaces the value stored at the root without changing the shape of the tree.
    ///
    /// Returns [`TreeError::EmptyTree`] if the tree has no nodes.
    pub fn set_root_data(&mut self, item: T) -> Result<(), TreeError> {
        let root = self.root.as_deref_mut().ok_or(TreeError::EmptyTree)?;
        root.set_item(item);
        Ok(())
    }

    /// Adds `item` as a new leaf. At each node the new leaf goes into the right subtree if the
    /// left one is strictly taller, otherwise into the left one.
    ///
    /// Always returns `true`.
    pub fn add(&mut self, item: T) -> bool {
        Self::balanced_add(&mut self.root, Box::new(TreeNode::new(item)));
        trace!("added value to binary tree");
        true
    }

    /// Removes one occurrence of `item`, returning whether it was found.
    ///
    /// The first match in a node, left subtree, right subtree search is removed. Its node is
    /// refilled with the value of its taller child, that child's node from its own taller child,
    /// and so on until a leaf is reached. That leaf is the node actually freed.
    pub fn remove(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        let removed = Self::remove_value(&mut self.root, item).is_some();
        if removed {
            trace!("removed value from binary tree");
        }
        removed
    }

    /// Returns `true` if any node holds a value equal to `item`.
    ///
    /// The tree is unordered so both subtrees may need to be searched; the left one is searched
    /// first.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        Self::find_node(&self.root, item).is_some()
    }

    /// Drops every node, leaving the tree empty.
    pub fn clear(&mut self) {
        self.root = None;
        trace!("cleared binary tree");
    }

    fn balanced_add(link: &mut Link<T>, new_node: Box<TreeNode<T>>) {
        match link {
            Some(node) => {
                if height(&node.left) > height(&node.right) {
                    Self::balanced_add(&mut node.right, new_node);
                } else {
                    Self::balanced_add(&mut node.left, new_node);
                }
            }
            None => *link = Some(new_node),
        }
    }

    /// Removes the first match for `target` under `link` and returns it.
    fn remove_value(link: &mut Link<T>, target: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let node = link.as_mut()?;
        if node.item == *target {
            return Self::move_values_up(link);
        }
        Self::remove_value(&mut node.left, target)
            .or_else(|| Self::remove_value(&mut node.right, target))
    }

    /// Removes the value at the top of `link` and shifts values up along the path of taller
    /// children to fill the gap. The leaf at the end of that path is freed.
    fn move_values_up(link: &mut Link<T>) -> Option<T> {
        let node = link.as_mut()?;
        let replacement = if height(&node.left) > height(&node.right) {
            Self::move_values_up(&mut node.left)
        } else {
            Self::move_values_up(&mut node.right)
        };

        match replacement {
            Some(item) => Some(mem::replace(&mut node.item, item)),
            // `node` is a leaf.
            None => link.take().map(|leaf| leaf.item),
        }
    }

    fn find_node<'a>(link: &'a Link<T>, target: &T) -> Option<&'a TreeNode<T>>
    where
        T: PartialEq,
    {
        let node = link.as_deref()?;
        if node.item == *target {
            return Some(node);
        }
        Self::find_node(&node.left, target).or_else(|| Self::find_node(&node.right, target))
    }
}

impl<T> sealed::Rooted<T> for BinaryTree<T> {
    fn link(&self) -> &Link<T> {
        &self.root
    }

    fn link_mut(&mut self, _: sealed::Token) -> &mut Link<T> {
        &mut self.root
    }
}

impl<T> TreeShape<T> for BinaryTree<T> {}

impl<T> FromIterator<T> for BinaryTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for BinaryTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}
