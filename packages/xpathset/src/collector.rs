//! Leaf and attribute path collection.
//!
//! The walk visits a node and each of its following siblings in document
//! order. For every element it records one path per attribute, descends into
//! its children, and records the element's own path only when neither step
//! produced anything. Elements with attributes or element children are
//! therefore represented by their deeper paths alone.
//!
//! Non-element nodes (text, comments, processing instructions) are skipped:
//! they never produce a path and never make an element a non-leaf.

use std::iter;

use roxmltree::Node;

use crate::xml::{attribute_name, element_name, is_leaf_element};

/// Collect the paths below `root` into `paths`.
///
/// `root` is usually the document root, but any node works: its children
/// are walked with an empty prefix, so the first segment of every path is
/// the name of a child of `root`.
///
/// # Returns
/// `true` if at least one path was emitted
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use xpathset::collector::collect_paths;
///
/// let doc = Document::parse(r#"<xml><one a="1"/><two/></xml>"#).unwrap();
/// let mut paths: Vec<String> = Vec::new();
///
/// assert!(collect_paths(doc.root(), &mut paths));
/// assert_eq!(paths, vec!["/xml/one/@a", "/xml/two"]);
/// ```
pub fn collect_paths<E>(root: Node<'_, '_>, paths: &mut E) -> bool
where
    E: Extend<String>,
{
    match root.first_child() {
        Some(first) => collect_siblings(first, "", paths),
        None => false,
    }
}

/// Walk `first` and every sibling after it, emitting paths under `prefix`.
///
/// # Arguments
/// * `first` - First node of the sibling run
/// * `prefix` - Path of the parent element, empty at the top level
/// * `paths` - Output accumulator
///
/// # Returns
/// `true` if any node of the run contributed a path
pub fn collect_siblings<E>(first: Node<'_, '_>, prefix: &str, paths: &mut E) -> bool
where
    E: Extend<String>,
{
    let mut contributed = false;
    let mut current = Some(first);

    while let Some(node) = current {
        if node.is_element() {
            contributed |= collect_element(node, prefix, paths);
        }
        current = node.next_sibling();
    }

    contributed
}

/// Emit the paths for a single element and its subtree.
fn collect_element<E>(node: Node<'_, '_>, prefix: &str, paths: &mut E) -> bool
where
    E: Extend<String>,
{
    let path = format!("{prefix}/{}", element_name(node));

    let mut contributed = collect_attributes(node, &path, paths);

    if let Some(first_child) = node.first_child() {
        contributed |= collect_siblings(first_child, &path, paths);
    }

    debug_assert_eq!(
        !contributed,
        is_leaf_element(node),
        "only leaf elements lack deeper paths"
    );

    if !contributed {
        tracing::trace!(path = %path, "Leaf element");
        paths.extend(iter::once(path));
        contributed = true;
    }

    contributed
}

/// Emit one `@name` path per attribute of `node`.
fn collect_attributes<E>(node: Node<'_, '_>, path: &str, paths: &mut E) -> bool
where
    E: Extend<String>,
{
    let mut contributed = false;

    for attribute in node.attributes() {
        let attribute_path = format!("{path}/@{}", attribute_name(node, &attribute));
        tracing::trace!(path = %attribute_path, "Attribute");
        paths.extend(iter::once(attribute_path));
        contributed = true;
    }

    contributed
}
