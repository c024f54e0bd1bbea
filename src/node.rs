//! The node type shared by [`BinaryTree`][crate::BinaryTree] and
//! [`BinarySearchTree`][crate::BinarySearchTree].
//!
//! A [`TreeNode`] exclusively owns its children. There are no parent pointers: a subtree can
//! only be moved from one slot to another, never shared, so cycles can't be built.
//!
//! # Examples
//!
//! ```
//! use bintree::TreeNode;
//!
//! let mut root = TreeNode::new(2);
//! root.set_left(Some(Box::new(TreeNode::new(1))));
//! root.set_right(Some(Box::new(TreeNode::new(3))));
//!
//! assert_eq!(root.left().map(TreeNode::item), Some(&1));
//! assert_eq!(root.height(), 2);
//! assert_eq!(root.num_nodes(), 3);
//!
//! // Moving a subtree out leaves the slot empty.
//! let right = root.take_right();
//! assert_eq!(right.as_deref().map(TreeNode::item), Some(&3));
//! assert!(root.right().is_none());
//! ```

/// An owned subtree. `None` is the empty slot below a leaf.
pub type Link<T> = Option<Box<TreeNode<T>>>;

/// A binary node holding a value and up to two owned children.
#[derive(Clone, Debug)]
pub struct TreeNode<T> {
    // Children are declared before `item` so a dropped node releases its subtrees before its
    // own value.
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
    pub(crate) item: T,
}

impl<T> TreeNode<T> {
    /// Creates a leaf holding `item`.
    pub fn new(item: T) -> Self {
        Self::with_children(item, None, None)
    }

    /// Creates a node holding `item` that takes ownership of the given subtrees.
    pub fn with_children(item: T, left: Link<T>, right: Link<T>) -> Self {
        Self { left, right, item }
    }

    /// The stored value.
    pub fn item(&self) -> &T {
        &self.item
    }

    /// Replaces the stored value, dropping the previous one.
    pub fn set_item(&mut self, item: T) {
        self.item = item;
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Moves `subtree` into the left slot. Whatever was there before is dropped; use
    /// [`take_left`][Self::take_left] first to keep it.
    pub fn set_left(&mut self, subtree: Link<T>) {
        self.left = subtree;
    }

    /// Moves `subtree` into the right slot. Whatever was there before is dropped; use
    /// [`take_right`][Self::take_right] first to keep it.
    pub fn set_right(&mut self, subtree: Link<T>) {
        self.right = subtree;
    }

    /// Detaches and returns the left subtree.
    pub fn take_left(&mut self) -> Link<T> {
        self.left.take()
    }

    /// Detaches and returns the right subtree.
    pub fn take_right(&mut self) -> Link<T> {
        self.right.take()
    }

    /// Returns `true` if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of levels in the subtree rooted here. A leaf has a height of 1.
    pub fn height(&self) -> usize {
        1 + height(&self.left).max(height(&self.right))
    }

    /// Number of nodes in the subtree rooted here, including this one.
    pub fn num_nodes(&self) -> usize {
        1 + num_nodes(&self.left) + num_nodes(&self.right)
    }
}

/// Height of a possibly empty subtree. An empty subtree has a height of 0.
pub(crate) fn height<T>(link: &Link<T>) -> usize {
    link.as_deref().map_or(0, TreeNode::height)
}

/// Number of nodes in a possibly empty subtree.
pub(crate) fn num_nodes<T>(link: &Link<T>) -> usize {
    link.as_deref().map_or(0, TreeNode::num_nodes)
}
