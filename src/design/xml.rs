//! Attribute and child lookup helpers over `roxmltree` nodes.

use crate::error::{MesherError, Result};
use glam::Vec3;
use roxmltree::Node;
use std::str::FromStr;

pub(crate) fn tag<'a>(node: &Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// First element child with the given tag.
pub(crate) fn child_by_name<'a, 'input>(
    node: &Node<'a, 'input>,
    name: &str,
) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && child.tag_name().name() == name)
}

/// Like [`child_by_name`], but a missing child is an error.
pub(crate) fn require_child<'a, 'input>(
    node: &Node<'a, 'input>,
    name: &str,
) -> Result<Node<'a, 'input>> {
    child_by_name(node, name).ok_or_else(|| MesherError::MissingElement {
        parent: tag(node).to_string(),
        element: name.to_string(),
    })
}

/// Element children with the given tag, in document order.
pub(crate) fn children_by_name<'a, 'input: 'a>(
    node: &Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children()
        .filter(move |child| child.is_element() && child.tag_name().name() == name)
}

pub(crate) fn attr<'a>(node: &Node<'a, '_>, name: &str) -> Result<&'a str> {
    node.attribute(name).ok_or_else(|| MesherError::MissingAttribute {
        element: tag(node).to_string(),
        attribute: name.to_string(),
    })
}

/// Parse a required attribute.
pub(crate) fn parse_attr<T: FromStr>(node: &Node, name: &str) -> Result<T> {
    let raw = attr(node, name)?;
    parse_value(node, name, raw)
}

/// Parse an optional attribute, falling back to `default` when absent.
/// A present but unparseable value is still an error.
pub(crate) fn parse_attr_or<T: FromStr>(node: &Node, name: &str, default: T) -> Result<T> {
    match node.attribute(name) {
        Some(raw) => parse_value(node, name, raw),
        None => Ok(default),
    }
}

/// Three float attributes as a vector.
pub(crate) fn parse_vec3(node: &Node, names: [&str; 3]) -> Result<Vec3> {
    Ok(Vec3::new(
        parse_attr(node, names[0])?,
        parse_attr(node, names[1])?,
        parse_attr(node, names[2])?,
    ))
}

fn parse_value<T: FromStr>(node: &Node, name: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| MesherError::InvalidAttribute {
            element: tag(node).to_string(),
            attribute: name.to_string(),
            value: raw.to_string(),
        })
}
