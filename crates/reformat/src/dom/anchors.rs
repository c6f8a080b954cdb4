// ABOUTME: Locates the structural nodes the pipeline needs before anything is mutated.
// ABOUTME: The first match in document order wins for every tag.

use dom_query::{Document, NodeRef};
use tracing::debug;

use super::first_element;
use crate::error::ReformatError;

/// Handles to the required nodes of an input document.
#[derive(Clone, Debug)]
pub struct Anchors<'a> {
    pub head: NodeRef<'a>,
    pub body: NodeRef<'a>,
    /// The metadata list (first `ul`).
    pub metadata: NodeRef<'a>,
    /// The entries container (first `dl`).
    pub entries: NodeRef<'a>,
    pub style: NodeRef<'a>,
}

impl<'a> Anchors<'a> {
    /// Locate every required node, failing on the first one that is absent.
    pub fn locate(doc: &'a Document) -> Result<Self, ReformatError> {
        let anchors = Self {
            body: first_element(doc, "body")?,
            head: first_element(doc, "head")?,
            metadata: first_element(doc, "ul")?,
            entries: first_element(doc, "dl")?,
            style: first_element(doc, "style")?,
        };
        debug!("located body, head, ul, dl and style");
        Ok(anchors)
    }
}
