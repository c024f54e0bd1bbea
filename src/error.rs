//! Errors reported by tree operations.

/// Errors triggered by operations that need a non-empty tree.
///
/// Absence of a value and duplicate insertion are not errors: they are reported through the
/// `bool` returned by `add`, `remove` and `contains`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError {
    /// The operation reads or replaces the root but the tree has no nodes.
    #[error("tree is empty")]
    EmptyTree,
}
