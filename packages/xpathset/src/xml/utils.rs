//! XML utility functions for naming and navigating DOM nodes.

use roxmltree::{Attribute, Node};

/// Namespace URI permanently bound to the `xml` prefix.
const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Accept `qname` only if it is a plausible spelling of `local`.
///
/// Nodes expanded from entity references carry ranges that do not point at
/// their own markup, so the slice has to be checked before it is trusted.
fn written_qname<'input>(qname: Option<&'input str>, local: &str) -> Option<&'input str> {
    qname.filter(|name| {
        *name == local
            || name
                .strip_suffix(local)
                .and_then(|prefix| prefix.strip_suffix(':'))
                .is_some_and(|prefix| !prefix.is_empty())
    })
}

/// Rebuild `prefix:local` from the namespace in scope at `node`.
///
/// Only used when the source text cannot be sliced.
fn qualify(node: Node<'_, '_>, namespace: Option<&str>, local: &str) -> String {
    if namespace == Some(XML_NAMESPACE) {
        return format!("xml:{local}");
    }
    match namespace.and_then(|uri| node.lookup_prefix(uri)) {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}:{local}"),
        _ => local.to_string(),
    }
}

/// Slice the tag name that follows `<` at the start of an element's markup.
fn start_tag_name<'input>(node: Node<'_, 'input>) -> Option<&'input str> {
    let markup = node.document().input_text().get(node.range())?;
    let name = markup.strip_prefix('<')?;
    let end = name
        .find(|c: char| c.is_whitespace() || c == '/' || c == '>')
        .unwrap_or(name.len());
    name.get(..end)
}

/// Get the element name exactly as written, including its namespace prefix.
///
/// The name is taken from the source text, so a prefix is reported as
/// spelled even when several prefixes are bound to the same namespace.
///
/// # Arguments
/// * `node` - XML element node
///
/// # Returns
/// Qualified name (e.g., "dc:title"), or the local name when unprefixed
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use xpathset::xml::element_name;
///
/// let xml = r#"<root xmlns:dc="http://purl.org/dc/elements/1.1/"><dc:title/></root>"#;
/// let doc = Document::parse(xml).unwrap();
/// let title = doc.root_element().first_element_child().unwrap();
/// assert_eq!(element_name(title), "dc:title");
/// ```
pub fn element_name(node: Node<'_, '_>) -> String {
    let tag = node.tag_name();
    match written_qname(start_tag_name(node), tag.name()) {
        Some(name) => name.to_string(),
        None => qualify(node, tag.namespace(), tag.name()),
    }
}

/// Get an attribute name exactly as written, including its namespace prefix.
///
/// # Arguments
/// * `owner` - Element the attribute belongs to
/// * `attribute` - The attribute
///
/// # Returns
/// Qualified attribute name (e.g., "xml:lang")
pub fn attribute_name(owner: Node<'_, '_>, attribute: &Attribute<'_, '_>) -> String {
    let source = owner.document().input_text().get(attribute.range_qname());
    match written_qname(source, attribute.name()) {
        Some(name) => name.to_string(),
        None => qualify(owner, attribute.namespace(), attribute.name()),
    }
}

/// Get all element children of a node.
///
/// # Arguments
/// * `node` - Parent node
///
/// # Returns
/// Iterator over element children (excludes text nodes, comments, etc.)
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}

/// Check whether a node has at least one element child.
///
/// Text, comment and processing-instruction children do not count.
pub fn has_element_children(node: Node<'_, '_>) -> bool {
    element_children(node).next().is_some()
}

/// Check whether a node is a leaf element: an element with neither
/// attributes nor element children.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use xpathset::xml::is_leaf_element;
///
/// let doc = Document::parse(r#"<root><a>text</a><b x="1"/></root>"#).unwrap();
/// let mut children = doc.root_element().children();
/// assert!(is_leaf_element(children.next().unwrap()));
/// assert!(!is_leaf_element(children.next().unwrap()));
/// assert!(!is_leaf_element(doc.root_element()));
/// ```
pub fn is_leaf_element(node: Node<'_, '_>) -> bool {
    node.is_element() && node.attributes().next().is_none() && !has_element_children(node)
}
