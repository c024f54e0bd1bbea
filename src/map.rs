//! A key/value dictionary stored in a [`BinarySearchTree`].
//!
//! # Examples
//!
//! ```
//! use bintree::{BstMap, Dictionary};
//!
//! let mut ages = BstMap::new();
//! assert!(ages.add("carol", 41));
//! assert!(ages.add("alice", 30));
//! assert!(ages.add("bob", 25));
//!
//! // Keys are unique; the old value is kept.
//! assert!(!ages.add("bob", 99));
//! assert_eq!(ages.get(&"bob"), Some(&25));
//!
//! let keys: Vec<_> = ages.iter().map(|(k, _)| *k).collect();
//! assert_eq!(keys, ["alice", "bob", "carol"]);
//!
//! assert!(ages.remove(&"alice"));
//! assert_eq!(ages.len(), 2);
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;

use crate::search_tree::BinarySearchTree;
use crate::traverse::TreeShape;

/// An abstract key/value store with unique keys.
pub trait Dictionary<K, V> {
    /// Returns `true` if there are no entries.
    fn is_empty(&self) -> bool;

    /// Number of entries.
    fn len(&self) -> usize;

    /// Stores `value` under `key`. Returns `false`, leaving the dictionary unchanged, if `key` is
    /// already present.
    fn add(&mut self, key: K, value: V) -> bool;

    /// Removes the entry for `key`, returning whether there was one.
    fn remove(&mut self, key: &K) -> bool;

    /// The value stored under `key`, if any.
    fn get(&self, key: &K) -> Option<&V>;

    /// Returns `true` if there is an entry for `key`.
    fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Removes every entry.
    fn clear(&mut self);
}

/// A key with its value. Entries compare by key alone so a tree of entries is ordered like a
/// tree of keys.
///
/// `Entry<K, V>` borrows as `K`. Its `Eq` and `Ord` agree with those of `K`, which is what lets a
/// [`BinarySearchTree`] of entries be searched with a bare key.
#[derive(Clone, Debug)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    /// Creates an entry.
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// The key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Replaces the value. The key can't be changed once the entry exists.
    pub fn set_value(&mut self, value: V) {
        self.value = value;
    }
}

impl<K: PartialEq, V> PartialEq for Entry<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Eq, V> Eq for Entry<K, V> {}

impl<K: Ord, V> PartialOrd for Entry<K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord, V> Ord for Entry<K, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl<K, V> Borrow<K> for Entry<K, V> {
    fn borrow(&self) -> &K {
        &self.key
    }
}

/// A [`Dictionary`] backed by a [`BinarySearchTree`] of [`Entry`]s.
#[derive(Clone, Debug)]
pub struct BstMap<K, V> {
    tree: BinarySearchTree<Entry<K, V>>,
}

impl<K, V> Default for BstMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> BstMap<K, V> {
    /// Generates a new, empty `BstMap`.
    pub fn new() -> Self {
        Self {
            tree: BinarySearchTree::new(),
        }
    }

    /// Iterates over the entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.tree.inorder().map(|entry| (&entry.key, &entry.value))
    }
}

impl<K: Ord, V> BstMap<K, V> {
    /// Mutable access to the value stored under `key`.
    ///
    /// ```
    /// use bintree::{BstMap, Dictionary};
    ///
    /// let mut map = BstMap::new();
    /// map.add(1, "one".to_string());
    ///
    /// if let Some(v) = map.get_mut(&1) {
    ///     v.push('!');
    /// }
    /// assert_eq!(map.get(&1).map(String::as_str), Some("one!"));
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.tree
            .get_mut::<K>(key)
            .map(|entry| &mut entry.value)
    }
}

impl<K: Ord, V> Dictionary<K, V> for BstMap<K, V> {
    fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    fn len(&self) -> usize {
        self.tree.num_nodes()
    }

    fn add(&mut self, key: K, value: V) -> bool {
        self.tree.add(Entry::new(key, value))
    }

    fn remove(&mut self, key: &K) -> bool {
        self.tree.remove::<K>(key)
    }

    fn get(&self, key: &K) -> Option<&V> {
        self.tree.get::<K>(key).map(Entry::value)
    }

    fn clear(&mut self) {
        self.tree.clear();
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for BstMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.add(key, value);
        }
        map
    }
}
