// ABOUTME: Splits dt/dd entry pairs into ordered column containers and assembles the flex layout.
// ABOUTME: Covers bucket sizing, pair collection, link retargeting, dl replacement and column tagging.

//! Column partitioning for the entries list.
//!
//! Entries are `dt` elements in document order, each paired with the `dd`
//! that immediately follows it. They are sliced into `k` contiguous buckets
//! of `ceil(n / k)` entries; the last bucket takes whatever is left, which
//! may be fewer entries or none at all.

use std::ops::Range;

use dom_query::{Document, NodeRef, Selection};
use tracing::debug;

use crate::blocklist::drop_blocked;
use crate::dom::anchors::Anchors;
use crate::dom::{is_element_named, move_to_end, new_styled_element};
use crate::error::ReformatError;
use crate::options::Options;

/// Class added to each column container.
pub const COLUMN_CLASS: &str = "column";

/// Inline style of the row that holds the columns.
pub const WRAPPER_STYLE: &str = "display: flex; justify-content: space-between;";

/// A `dt` term and the `dd` detail that follows it.
#[derive(Clone, Debug)]
pub struct EntryPair<'a> {
    pub term: NodeRef<'a>,
    pub detail: NodeRef<'a>,
}

impl EntryPair<'_> {
    /// The `href` of the first anchor inside the term, if any.
    pub fn first_href(&self) -> Option<String> {
        Selection::from(self.term.clone())
            .select("a")
            .attr("href")
            .map(|v| v.to_string())
    }
}

/// The generated row wrapper and its column containers, in order.
#[derive(Clone)]
pub struct Layout<'a> {
    pub wrapper: NodeRef<'a>,
    pub columns: Vec<NodeRef<'a>>,
}

/// Contiguous index ranges for splitting `n` items into `k` buckets.
///
/// Always returns exactly `k` ranges (none when `k == 0`). Bounds are
/// clamped to `n`, so trailing buckets may be empty but never inverted.
pub fn bucket_ranges(n: usize, k: usize) -> Vec<Range<usize>> {
    if k == 0 {
        return Vec::new();
    }
    let size = n.div_ceil(k);
    (0..k)
        .map(|i| (i * size).min(n)..((i + 1) * size).min(n))
        .collect()
}

/// Inline style for one of `k` columns; three columns get 32% each.
pub fn column_style(k: usize) -> String {
    format!(
        "width: {}%; display: flex; flex-direction: column;",
        96 / k.max(1)
    )
}

/// Next element sibling of `node`, stepping over `skip` if it sits in between.
fn next_element_skipping<'a>(node: &NodeRef<'a>, skip: Option<&NodeRef>) -> Option<NodeRef<'a>> {
    let mut next = node.next_element_sibling();
    while let Some(sibling) = next {
        if skip.is_some_and(|s| s.id == sibling.id) {
            next = sibling.next_element_sibling();
        } else {
            return Some(sibling);
        }
    }
    None
}

/// Collects every `dt` in document order together with its `dd`.
///
/// The next element sibling of each `dt` must be a `dd`; otherwise the
/// document is rejected rather than guessing a pairing. `skip` names a node
/// that is about to be moved elsewhere (the metadata list), so it is not
/// treated as standing between a term and its detail.
pub fn collect_entries<'a>(
    doc: &'a Document,
    skip: Option<&NodeRef>,
) -> Result<Vec<EntryPair<'a>>, ReformatError> {
    doc.select("dt")
        .nodes()
        .iter()
        .enumerate()
        .map(|(index, term)| match next_element_skipping(term, skip) {
            Some(detail) if is_element_named(&detail, "dd") => Ok(EntryPair {
                term: term.clone(),
                detail,
            }),
            _ => Err(ReformatError::unpaired(index, &*term.text())),
        })
        .collect()
}

/// Sets `target` on every anchor inside `term`. Returns how many were set.
fn retarget_links(term: &NodeRef, target: &str) -> usize {
    let links = Selection::from(term.clone()).select("a");
    links.set_attr("target", target);
    links.length()
}

/// Moves every entry pair into one of `opts.columns` new, detached column
/// containers and returns them in order.
pub fn partition_entries<'a>(
    doc: &'a Document,
    entries: Vec<EntryPair<'a>>,
    opts: &Options,
) -> Vec<NodeRef<'a>> {
    let entries = drop_blocked(entries, opts);
    let ranges = bucket_ranges(entries.len(), opts.columns);
    let style = column_style(opts.columns);

    let mut columns = Vec::with_capacity(ranges.len());
    let mut retargeted = 0;
    for (index, range) in ranges.into_iter().enumerate() {
        let column = new_styled_element(doc, "div", &style);
        for entry in &entries[range.clone()] {
            retargeted += retarget_links(&entry.term, &opts.link_target);
            move_to_end(&column, &entry.term);
            move_to_end(&column, &entry.detail);
        }
        debug!(column = index, start = range.start, len = range.len(), "filled column");
        columns.push(column);
    }
    debug!(entries = entries.len(), links = retargeted, "partitioned entries");
    columns
}

/// Puts the columns into a flex row and swaps it in for the entries `dl`.
pub fn assemble_layout<'a>(
    doc: &'a Document,
    anchors: &Anchors<'a>,
    columns: Vec<NodeRef<'a>>,
) -> Layout<'a> {
    let wrapper = new_styled_element(doc, "div", WRAPPER_STYLE);
    for column in &columns {
        move_to_end(&wrapper, column);
    }
    anchors.entries.replace_with(&wrapper);
    debug!(columns = columns.len(), "replaced entries list with column layout");
    Layout { wrapper, columns }
}

/// Adds [`COLUMN_CLASS`] to each direct element child of the wrapper,
/// keeping any classes already present.
pub fn tag_columns(layout: &Layout) {
    let children = layout.wrapper.element_children();
    for child in &children {
        child.add_class(COLUMN_CLASS);
    }
    debug!(tagged = children.len(), "tagged columns");
}
