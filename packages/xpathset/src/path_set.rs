//! Immutable set of XPath expressions matching a document.
//!
//! A [`PathSet`] is filled exactly once, by the collector, while it is being
//! constructed. After that no method can change it: the mutating operations
//! of a regular set exist only to report [`XpathError::UnsupportedOperation`],
//! and they borrow the set immutably.

use std::collections::{btree_set, hash_set, BTreeSet, HashSet};
use std::fmt;

use roxmltree::{Document, Node};
use serde::{Serialize, Serializer};

use crate::collector::collect_paths;
use crate::error::{Result, XpathError};

/// Iteration order of a [`PathSet`], chosen at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathOrder {
    /// Arbitrary order, hash-backed.
    #[default]
    Unordered,
    /// Ascending lexicographic order of the path strings.
    Sorted,
}

#[derive(Debug, Clone)]
enum Paths {
    Unordered(HashSet<String>),
    Sorted(BTreeSet<String>),
}

/// An immutable set of the leaf element and attribute paths of a document.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use xpathset::PathSet;
///
/// let doc = Document::parse("<xml><with><one><element/></one></with></xml>").unwrap();
/// let set = PathSet::unordered(&doc);
///
/// assert_eq!(set.len(), 1);
/// assert!(set.contains("/xml/with/one/element"));
/// assert!(set.clear().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PathSet {
    paths: Paths,
}

impl PathSet {
    /// Build the set for a whole document.
    #[must_use]
    pub fn from_document(document: &Document<'_>, order: PathOrder) -> Self {
        Self::from_root(document.root(), order)
    }

    /// Build the set for the subtree below `root`.
    ///
    /// Paths start at the children of `root`; a node without children gives
    /// an empty set.
    #[must_use]
    pub fn from_root(root: Node<'_, '_>, order: PathOrder) -> Self {
        let paths = match order {
            PathOrder::Unordered => {
                let mut set = HashSet::new();
                collect_paths(root, &mut set);
                Paths::Unordered(set)
            }
            PathOrder::Sorted => {
                let mut set = BTreeSet::new();
                collect_paths(root, &mut set);
                Paths::Sorted(set)
            }
        };

        let set = Self { paths };
        tracing::debug!(paths = set.len(), order = ?order, "Collected paths");
        set
    }

    /// Build a set that iterates in lexicographic order.
    #[must_use]
    pub fn sorted(document: &Document<'_>) -> Self {
        Self::from_document(document, PathOrder::Sorted)
    }

    /// Build a set with arbitrary iteration order.
    #[must_use]
    pub fn unordered(document: &Document<'_>) -> Self {
        Self::from_document(document, PathOrder::Unordered)
    }

    /// The iteration order this set was built with.
    #[must_use]
    pub fn order(&self) -> PathOrder {
        match self.paths {
            Paths::Unordered(_) => PathOrder::Unordered,
            Paths::Sorted(_) => PathOrder::Sorted,
        }
    }

    /// Number of distinct paths.
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.paths {
            Paths::Unordered(set) => set.len(),
            Paths::Sorted(set) => set.len(),
        }
    }

    /// Whether the set holds no paths.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `path` is in the set.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        match &self.paths {
            Paths::Unordered(set) => set.contains(path),
            Paths::Sorted(set) => set.contains(path),
        }
    }

    /// Whether every one of `paths` is in the set.
    ///
    /// An empty input is trivially contained.
    pub fn contains_all<I, S>(&self, paths: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        paths.into_iter().all(|path| self.contains(path.as_ref()))
    }

    /// Iterate over the paths in this set's order.
    ///
    /// Every call starts a fresh pass over the same contents.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        match &self.paths {
            Paths::Unordered(set) => Iter::Unordered(set.iter()),
            Paths::Sorted(set) => Iter::Sorted(set.iter()),
        }
    }

    /// Snapshot of the paths, in iteration order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(str::to_string).collect()
    }

    // Mutating operations. All of them refuse, whatever the contents.

    /// Always fails: the set cannot grow.
    pub fn insert(&self, _path: impl Into<String>) -> Result<bool> {
        unsupported("insert")
    }

    /// Always fails: the set cannot grow.
    pub fn insert_all<I, S>(&self, _paths: I) -> Result<bool>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        unsupported("insert_all")
    }

    /// Always fails: the set cannot shrink.
    pub fn remove(&self, _path: &str) -> Result<bool> {
        unsupported("remove")
    }

    /// Always fails: the set cannot shrink.
    pub fn remove_all<I, S>(&self, _paths: I) -> Result<bool>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        unsupported("remove_all")
    }

    /// Always fails: the set cannot shrink.
    pub fn retain_all<I, S>(&self, _paths: I) -> Result<bool>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        unsupported("retain_all")
    }

    /// Always fails: the set cannot be emptied.
    pub fn clear(&self) -> Result<()> {
        unsupported("clear")
    }
}

fn unsupported<T>(operation: &'static str) -> Result<T> {
    Err(XpathError::UnsupportedOperation { operation })
}

/// Content equality; the iteration order mode is not compared.
impl PartialEq for PathSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|path| other.contains(path))
    }
}

impl Eq for PathSet {}

impl fmt::Display for PathSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, path) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(path)?;
        }
        Ok(())
    }
}

/// Serializes as a sequence of strings in iteration order.
impl Serialize for PathSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'a> IntoIterator for &'a PathSet {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the paths of a [`PathSet`].
#[derive(Debug, Clone)]
pub enum Iter<'a> {
    /// Pass over a hash-backed set.
    Unordered(hash_set::Iter<'a, String>),
    /// Pass over a sorted set.
    Sorted(btree_set::Iter<'a, String>),
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Unordered(iter) => iter.next().map(String::as_str),
            Self::Sorted(iter) => iter.next().map(String::as_str),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Unordered(iter) => iter.size_hint(),
            Self::Sorted(iter) => iter.size_hint(),
        }
    }
}

impl ExactSizeIterator for Iter<'_> {}
