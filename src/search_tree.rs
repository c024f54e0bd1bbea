//! A Binary Search Tree over the shared [`TreeNode`] type.
//!
//! For every node, all values in its left subtree are less than its own value and all values in
//! its right subtree are greater. Duplicates are never stored. No rebalancing is done, so adding
//! values in sorted order produces a tree as tall as it has nodes.
//!
//! # Examples
//!
//! ```
//! use bintree::{BinarySearchTree, TreeShape};
//!
//! let mut tree = BinarySearchTree::new();
//! for x in [2, 4, 3, 1, 0] {
//!     assert!(tree.add(x));
//! }
//!
//! // Duplicates are rejected.
//! assert!(!tree.add(3));
//!
//! assert!(tree.contains(&0));
//! let sorted: Vec<_> = tree.inorder().copied().collect();
//! assert_eq!(sorted, [0, 1, 2, 3, 4]);
//!
//! assert!(tree.remove(&2));
//! assert!(!tree.contains(&2));
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

use log::trace;

use crate::node::{Link, TreeNode};
use crate::traverse::{sealed, TreeShape};

/// An unbalanced Binary Search Tree storing distinct values in sorted order.
///
/// It is a logic error for a value to be modified (for example by a
/// [`Visitor`][crate::Visitor]) in such a way that its ordering relative to the other values
/// changes. The behavior resulting from such a logic error is not specified, but it won't be
/// undefined behavior.
#[derive(Clone, Debug)]
pub struct BinarySearchTree<T> {
    root: Link<T>,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BinarySearchTree<T> {
    /// Generates a new, empty `BinarySearchTree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Creates a tree with a single node holding `item`.
    pub fn with_root(item: T) -> Self {
        Self {
            root: Some(Box::new(TreeNode::new(item))),
        }
    }

    /// Drops every node, leaving the tree empty.
    pub fn clear(&mut self) {
        self.root = None;
        trace!("cleared search tree");
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Adds `item` as a new leaf in its sorted position.
    ///
    /// Returns `false`, leaving the tree unchanged, if an equal value is already stored.
    pub fn add(&mut self, item: T) -> bool {
        let added = Self::ordered_insert(&mut self.root, item);
        if !added {
            trace!("rejected duplicate value");
        }
        added
    }

    /// Removes the value equal to `target`, returning whether it was found.
    ///
    /// A node with at most one child is replaced by that child. A node with two children takes
    /// the value of its inorder successor (the smallest value in its right subtree), and the
    /// successor's node is spliced out instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::{BinarySearchTree, TreeShape};
    ///
    /// let mut tree: BinarySearchTree<_> = [5, 3, 8, 7, 9].into_iter().collect();
    /// assert!(tree.remove(&5));
    ///
    /// // 7 was the smallest value to the right of 5, so it takes the root's place.
    /// assert_eq!(tree.root().map(|n| *n.item()), Some(7));
    /// assert!(!tree.remove(&5));
    /// ```
    pub fn remove<Q>(&mut self, target: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let removed = Self::remove_node(&mut self.root, target).is_some();
        if removed {
            trace!("removed value from search tree");
        }
        removed
    }

    /// Returns `true` if a value equal to `item` is stored. Only one subtree is searched at each
    /// level.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(item).is_some()
    }

    /// Returns the stored value equal to `item`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<String> = ["b", "a", "c"].iter().map(|s| s.to_string()).collect();
    ///
    /// assert_eq!(tree.get("a").map(String::as_str), Some("a"));
    /// assert_eq!(tree.get("z"), None);
    /// ```
    pub fn get<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Self::find(&self.root, item)
    }

    /// Mutable access to the stored value equal to `item`. Only handed out within the crate, where
    /// callers only touch data that doesn't take part in the ordering.
    pub(crate) fn get_mut<Q>(&mut self, item: &Q) -> Option<&mut T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Self::find_mut(&mut self.root, item)
    }

    fn ordered_insert(link: &mut Link<T>, item: T) -> bool {
        let node = match link {
            Some(node) => node,
            None => {
                *link = Some(Box::new(TreeNode::new(item)));
                return true;
            }
        };

        let added = match item.cmp(&node.item) {
            Ordering::Less => Self::ordered_insert(&mut node.left, item),
            Ordering::Equal => false,
            Ordering::Greater => Self::ordered_insert(&mut node.right, item),
        };

        if cfg!(debug_assertions) {
            if let Some(left) = node.left() {
                assert!(node.item > left.item);
            }
            if let Some(right) = node.right() {
                assert!(node.item < right.item);
            }
        }
        added
    }

    fn remove_node<Q>(link: &mut Link<T>, target: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node = link.as_mut()?;
        match target.cmp(node.item.borrow()) {
            Ordering::Less => Self::remove_node(&mut node.left, target),
            Ordering::Greater => Self::remove_node(&mut node.right, target),
            Ordering::Equal if node.left.is_some() && node.right.is_some() => {
                let successor = Self::remove_leftmost(&mut node.right)?;
                Some(mem::replace(&mut node.item, successor))
            }
            Ordering::Equal => {
                let removed = link.take()?;
                let TreeNode { left, right, item } = *removed;
                *link = left.or(right);
                Some(item)
            }
        }
    }

    /// Splices the leftmost node out of the subtree at `link` and returns its value.
    fn remove_leftmost(link: &mut Link<T>) -> Option<T> {
        let node = link.as_mut()?;
        if node.left.is_some() {
            return Self::remove_leftmost(&mut node.left);
        }
        let leftmost = link.take()?;
        let TreeNode { right, item, .. } = *leftmost;
        *link = right;
        Some(item)
    }

    fn find<'a, Q>(link: &'a Link<T>, target: &Q) -> Option<&'a T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node = link.as_deref()?;
        match target.cmp(node.item.borrow()) {
            Ordering::Less => Self::find(&node.left, target),
            Ordering::Equal => Some(&node.item),
            Ordering::Greater => Self::find(&node.right, target),
        }
    }

    fn find_mut<'a, Q>(link: &'a mut Link<T>, target: &Q) -> Option<&'a mut T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node = link.as_deref_mut()?;
        match target.cmp(node.item.borrow()) {
            Ordering::Less => Self::find_mut(&mut node.left, target),
            Ordering::Equal => Some(&mut node.item),
            Ordering::Greater => Self::find_mut(&mut node.right, target),
        }
    }
}

impl<T> sealed::Rooted<T> for BinarySearchTree<T> {
    fn link(&self) -> &Link<T> {
        &self.root
    }

    fn link_mut(&mut self, _: sealed::Token) -> &mut Link<T> {
        &mut self.root
    }
}

impl<T> TreeShape<T> for BinarySearchTree<T> {}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(items: &[i32]) -> BinarySearchTree<i32> {
        items.iter().copied().collect()
    }

    fn preorder(tree: &BinarySearchTree<i32>) -> Vec<i32> {
        tree.preorder().copied().collect()
    }

    fn inorder(tree: &BinarySearchTree<i32>) -> Vec<i32> {
        tree.inorder().copied().collect()
    }

    #[test]
    fn simple_scenario() {
        let mut tree = tree_of(&[2, 4, 3, 1, 0]);

        assert!(tree.contains(&0));

        let mut visited = Vec::new();
        tree.inorder_traverse(&mut |item: &mut i32| visited.push(*item));
        assert_eq!(visited, [0, 1, 2, 3, 4]);

        assert!(tree.remove(&2));
        assert!(!tree.contains(&2));
        assert_eq!(inorder(&tree), [0, 1, 3, 4]);
    }

    #[test]
    fn empty_tree() {
        let mut tree = BinarySearchTree::<i32>::new();

        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.num_nodes(), 0);
        assert!(!tree.contains(&1));
        assert!(!tree.remove(&1));
    }

    #[test]
    fn duplicate_add_is_rejected() {
        let mut tree = tree_of(&[5, 3, 8]);

        assert!(!tree.add(3));
        assert!(!tree.add(5));
        assert_eq!(tree.num_nodes(), 3);
        assert_eq!(preorder(&tree), [5, 3, 8]);
    }

    #[test]
    fn ascending_adds_make_a_chain() {
        let tree = tree_of(&[1, 2, 3, 4, 5]);

        assert_eq!(tree.height(), 5);
        assert_eq!(preorder(&tree), [1, 2, 3, 4, 5]);
        assert!(tree.root().and_then(TreeNode::left).is_none());
    }

    #[test]
    fn remove_leaf() {
        let mut tree = tree_of(&[5, 3, 7]);

        assert!(tree.remove(&7));
        assert_eq!(preorder(&tree), [5, 3]);
    }

    #[test]
    fn remove_with_only_right_child() {
        let mut tree = tree_of(&[5, 3, 7, 9]);

        assert!(tree.remove(&7));
        assert_eq!(preorder(&tree), [5, 3, 9]);
    }

    #[test]
    fn remove_with_only_left_child() {
        let mut tree = tree_of(&[5, 3, 7, 6]);

        assert!(tree.remove(&7));
        assert_eq!(preorder(&tree), [5, 3, 6]);
    }

    #[test]
    fn remove_with_two_children_uses_successor() {
        let mut tree = tree_of(&[5, 3, 8, 2, 6, 9, 7]);

        assert!(tree.remove(&5));

        // 6 is the leftmost value right of 5; its right child 7 takes its old place.
        assert_eq!(preorder(&tree), [6, 3, 2, 8, 7, 9]);
        assert_eq!(inorder(&tree), [2, 3, 6, 7, 8, 9]);
        assert_eq!(tree.num_nodes(), 6);
    }

    #[test]
    fn remove_root_until_empty() {
        let mut tree = tree_of(&[4, 2, 6, 1, 3, 5, 7]);

        while let Some(&root) = tree.root().map(TreeNode::item) {
            assert!(tree.remove(&root));
            assert!(!tree.contains(&root));
            let values = inorder(&tree);
            assert!(values.windows(2).all(|w| w[0] < w[1]));
        }
        assert!(tree.is_empty());
    }

    #[test]
    fn remove_absent_leaves_tree_unchanged() {
        let mut tree = tree_of(&[5, 3, 8]);

        assert!(!tree.remove(&4));
        assert_eq!(preorder(&tree), [5, 3, 8]);
        assert_eq!(tree.height(), 2);
    }

    #[test]
    fn borrowed_lookup() {
        let mut tree: BinarySearchTree<String> =
            ["pear", "apple", "fig"].iter().map(|s| s.to_string()).collect();

        assert!(tree.contains("fig"));
        assert_eq!(tree.get("apple").map(String::as_str), Some("apple"));
        assert!(tree.remove("pear"));
        assert!(!tree.contains("pear"));
    }

    #[test]
    fn get_mut_finds_value() {
        let mut tree = tree_of(&[5, 3, 8]);

        assert_eq!(tree.get_mut(&8).map(|v| *v), Some(8));
        assert!(tree.get_mut(&4).is_none());
    }

    #[test]
    fn clear_and_reuse() {
        let mut tree = tree_of(&[5, 3, 8]);
        tree.clear();

        assert!(tree.is_empty());
        assert_eq!(tree.num_nodes(), 0);
        assert!(tree.add(5));
        assert_eq!(tree.num_nodes(), 1);
    }

    #[test]
    fn clone_is_independent() {
        let mut original = tree_of(&[5, 3, 8]);
        let mut copy = original.clone();

        original.remove(&3);
        copy.add(10);

        assert_eq!(inorder(&original), [5, 8]);
        assert_eq!(inorder(&copy), [3, 5, 8, 10]);
    }

    #[test]
    fn with_root_then_add() {
        let mut tree = BinarySearchTree::with_root(10);
        tree.add(5);
        tree.add(15);

        assert_eq!(tree.height(), 2);
        let pre: Vec<_> = tree.preorder().copied().collect();
        let post: Vec<_> = tree.postorder().copied().collect();
        assert_eq!(pre, [10, 5, 15]);
        assert_eq!(post, [5, 15, 10]);
    }
}
