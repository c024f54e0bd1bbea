//! Traversal of trees built from [`TreeNode`]s.
//!
//! Two styles are offered for each of the three depth-first orders:
//!
//! * a callback style, where a [`Visitor`] is handed a mutable reference to every value, and
//! * an iterator style ([`Preorder`], [`Inorder`], [`Postorder`]) yielding shared references,
//!   which can stop early.
//!
//! Both are reached through the [`TreeShape`] trait, which every tree in this crate implements.
//!
//! # Examples
//!
//! ```
//! use bintree::{BinaryTree, TreeShape};
//!
//! let mut tree: BinaryTree<i32> = (1..=5).collect();
//!
//! // Callback style: double every value in place.
//! tree.preorder_traverse(&mut |item: &mut i32| *item *= 2);
//!
//! // Iterator style.
//! let preorder: Vec<_> = tree.preorder().copied().collect();
//! assert_eq!(preorder, [2, 4, 8, 6, 10]);
//!
//! // Stop after the first two values.
//! let first_two: Vec<_> = tree.inorder().take(2).collect();
//! assert_eq!(first_two, [&8, &4]);
//! ```

use crate::node::{self, Link, TreeNode};

/// A single-method capability invoked once per node during a traversal.
///
/// Any `FnMut(&mut T)` closure is a `Visitor`. Implement the trait directly when the visitor
/// needs to be a named type, for example to accumulate state.
///
/// ```
/// use bintree::{BinarySearchTree, TreeShape, Visitor};
///
/// #[derive(Default)]
/// struct Sum(i32);
///
/// impl Visitor<i32> for Sum {
///     fn visit(&mut self, item: &mut i32) {
///         self.0 += *item;
///     }
/// }
///
/// let mut tree: BinarySearchTree<i32> = [3, 1, 2].into_iter().collect();
/// let mut sum = Sum::default();
/// tree.inorder_traverse(&mut sum);
/// assert_eq!(sum.0, 6);
/// ```
pub trait Visitor<T> {
    /// Called with each value in traversal order. The value may be changed in place.
    fn visit(&mut self, item: &mut T);
}

impl<T, F> Visitor<T> for F
where
    F: FnMut(&mut T) + ?Sized,
{
    fn visit(&mut self, item: &mut T) {
        (*self)(item)
    }
}

pub(crate) mod sealed {
    use crate::node::Link;

    /// Proof that a call comes from inside this crate. Other crates can't build one.
    pub struct Token(pub(crate) ());

    /// Grants the traversal machinery access to a tree's root slot.
    pub trait Rooted<T> {
        /// The root slot.
        fn link(&self) -> &Link<T>;

        /// The root slot, mutably. Only callable with a [`Token`], so topology can only be
        /// changed through each tree's own operations.
        fn link_mut(&mut self, token: Token) -> &mut Link<T>;
    }
}

/// Shape queries and traversals shared by every tree in this crate.
///
/// None of these depend on how values are ordered, only on the shape of the tree, so
/// [`BinaryTree`][crate::BinaryTree] and [`BinarySearchTree`][crate::BinarySearchTree] get
/// identical semantics. Insertion and removal are deliberately not part of this trait: each tree
/// keeps its own invariants.
///
/// This trait is sealed and can't be implemented outside this crate. Other crates also can't
/// reach the root slot mutably, even through a generic bound:
///
/// ```compile_fail
/// use bintree::{BinarySearchTree, TreeNode, TreeShape};
///
/// fn relink<S: TreeShape<i32>>(tree: &mut S) {
///     *tree.link_mut() = Some(Box::new(TreeNode::new(5)));
/// }
///
/// let mut tree: BinarySearchTree<_> = [2, 1, 3].into_iter().collect();
/// relink(&mut tree);
/// ```
///
/// ```compile_fail
/// use bintree::{BinaryTree, TreeShape};
///
/// fn relink<S: TreeShape<i32>>(tree: &mut S) {
///     tree.link_mut(Default::default()).take();
/// }
///
/// relink(&mut BinaryTree::with_root(1));
/// ```
///
/// Read-only access is available through [`root`][TreeShape::root]:
///
/// ```
/// use bintree::{BinarySearchTree, TreeShape};
///
/// fn root_value<S: TreeShape<i32>>(tree: &S) -> Option<i32> {
///     tree.root().map(|n| *n.item())
/// }
///
/// let tree: BinarySearchTree<_> = [2, 1, 3].into_iter().collect();
/// assert_eq!(root_value(&tree), Some(2));
/// ```
pub trait TreeShape<T>: sealed::Rooted<T> {
    /// The root node, if the tree isn't empty.
    fn root(&self) -> Option<&TreeNode<T>> {
        self.link().as_deref()
    }

    /// Returns `true` if the tree has no nodes.
    fn is_empty(&self) -> bool {
        self.link().is_none()
    }

    /// Number of levels in the tree. An empty tree has a height of 0 and a lone root a height
    /// of 1.
    fn height(&self) -> usize {
        node::height(self.link())
    }

    /// Number of nodes in the tree.
    fn num_nodes(&self) -> usize {
        node::num_nodes(self.link())
    }

    /// Visits every value: node, then left subtree, then right subtree.
    fn preorder_traverse<V>(&mut self, visitor: &mut V)
    where
        V: Visitor<T> + ?Sized,
    {
        preorder(self.link_mut(sealed::Token(())), visitor);
    }

    /// Visits every value: left subtree, then node, then right subtree.
    fn inorder_traverse<V>(&mut self, visitor: &mut V)
    where
        V: Visitor<T> + ?Sized,
    {
        inorder(self.link_mut(sealed::Token(())), visitor);
    }

    /// Visits every value: left subtree, then right subtree, then node.
    fn postorder_traverse<V>(&mut self, visitor: &mut V)
    where
        V: Visitor<T> + ?Sized,
    {
        postorder(self.link_mut(sealed::Token(())), visitor);
    }

    /// An iterator over the values in preorder.
    fn preorder(&self) -> Preorder<'_, T> {
        Preorder::new(self.link())
    }

    /// An iterator over the values in inorder.
    fn inorder(&self) -> Inorder<'_, T> {
        Inorder::new(self.link())
    }

    /// An iterator over the values in postorder.
    fn postorder(&self) -> Postorder<'_, T> {
        Postorder::new(self.link())
    }
}

fn preorder<T, V>(link: &mut Link<T>, visitor: &mut V)
where
    V: Visitor<T> + ?Sized,
{
    if let Some(node) = link {
        visitor.visit(&mut node.item);
        preorder(&mut node.left, visitor);
        preorder(&mut node.right, visitor);
    }
}

fn inorder<T, V>(link: &mut Link<T>, visitor: &mut V)
where
    V: Visitor<T> + ?Sized,
{
    if let Some(node) = link {
        inorder(&mut node.left, visitor);
        visitor.visit(&mut node.item);
        inorder(&mut node.right, visitor);
    }
}

fn postorder<T, V>(link: &mut Link<T>, visitor: &mut V)
where
    V: Visitor<T> + ?Sized,
{
    if let Some(node) = link {
        postorder(&mut node.left, visitor);
        postorder(&mut node.right, visitor);
        visitor.visit(&mut node.item);
    }
}

/// Preorder iterator returned by [`TreeShape::preorder`].
#[derive(Clone, Debug)]
pub struct Preorder<'a, T> {
    stack: Vec<&'a TreeNode<T>>,
}

impl<'a, T> Preorder<'a, T> {
    fn new(root: &'a Link<T>) -> Self {
        Self {
            stack: root.as_deref().into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree is finished before it.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(&node.item)
    }
}

/// Inorder iterator returned by [`TreeShape::inorder`].
#[derive(Clone, Debug)]
pub struct Inorder<'a, T> {
    stack: Vec<&'a TreeNode<T>>,
}

impl<'a, T> Inorder<'a, T> {
    fn new(root: &'a Link<T>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root.as_deref());
        iter
    }

    /// Pushes `node` and all of its left descendants.
    fn push_left_spine(&mut self, mut node: Option<&'a TreeNode<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Inorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(&node.item)
    }
}

/// Postorder iterator returned by [`TreeShape::postorder`].
#[derive(Clone, Debug)]
pub struct Postorder<'a, T> {
    /// Each node is paired with whether its children have already been scheduled.
    stack: Vec<(&'a TreeNode<T>, bool)>,
}

impl<'a, T> Postorder<'a, T> {
    fn new(root: &'a Link<T>) -> Self {
        Self {
            stack: root.as_deref().map(|n| (n, false)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Postorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(&node.item);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }
    }
}
