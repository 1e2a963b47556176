//! Helpers for navigating Tableau REST API response documents.
//!
//! Tableau namespaces every element under `http://tableau.com/api`;
//! matching on the local tag name keeps the lookups namespace-agnostic
//! without threading a namespace map through every call.

use roxmltree::Node;

/// Find the first descendant element with the given local tag name.
pub fn find_descendant<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &str,
) -> Option<Node<'a, 'input>> {
    node.descendants()
        .find(|n| n.is_element() && n.tag_name().name() == tag)
}

/// Iterate over all descendant elements with the given local tag name,
/// in document order.
pub fn find_descendants<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.descendants()
        .filter(move |n| n.is_element() && n.tag_name().name() == tag)
}

/// Get an attribute value as an owned string.
pub fn attr(node: Node<'_, '_>, name: &str) -> Option<String> {
    node.attribute(name).map(|s| s.to_string())
}

/// Get the trimmed text content of a node, `None` if empty or absent.
pub fn text(node: Node<'_, '_>) -> Option<String> {
    node.text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}
