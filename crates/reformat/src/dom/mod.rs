// ABOUTME: DOM lookup and mutation helpers on top of dom_query's mutable tree.
// ABOUTME: Provides first-match lookup, explicit node moves, element and text node creation.

//! DOM utilities for the reformat pipeline.
//!
//! Every move in this crate goes through [`move_to_end`], which detaches the
//! node before re-attaching it, so a node never has more than one parent.

pub mod anchors;

use dom_query::{Document, NodeRef};

use crate::error::ReformatError;

/// Returns the first element named `tag` in document order.
pub fn first_element<'a>(doc: &'a Document, tag: &'static str) -> Result<NodeRef<'a>, ReformatError> {
    doc.select(tag)
        .nodes()
        .first()
        .cloned()
        .ok_or_else(|| ReformatError::missing(tag))
}

/// Detach `node` from wherever it is and append it as the last child of `parent`.
pub fn move_to_end(parent: &NodeRef, node: &NodeRef) {
    node.remove_from_parent();
    parent.append_child(node);
}

/// Create a detached element carrying an inline `style` attribute.
pub fn new_styled_element<'a>(doc: &'a Document, tag: &str, style: &str) -> NodeRef<'a> {
    let el = doc.tree.new_element(tag);
    el.set_attr("style", style);
    el
}

/// Append `text` as a new text node after the existing children of `parent`.
pub fn append_text(doc: &Document, parent: &NodeRef, text: &str) {
    let node = doc.tree.new_text(text);
    parent.append_child(&node);
}

/// Returns true if `node` is an element named `tag`.
pub fn is_element_named(node: &NodeRef, tag: &str) -> bool {
    node.is_element() && node.node_name().as_deref() == Some(tag)
}
