// ABOUTME: Library entry point for the tab-export reformatter.
// ABOUTME: Runs the pipeline that turns a flat dl export into a styled three-column page.

//! Tabsheet - reformats a saved-tabs HTML export into a column layout.
//!
//! The input is a document with a `dl` of `dt`/`dd` entry pairs, a `ul` of
//! browser metadata and a `style` element. The output puts the entries in
//! three flex columns, moves the metadata list to the bottom of the page as
//! a collapsible block, and appends the matching stylesheet.
//!
//! # Example
//!
//! ```
//! use tabsheet_reformat::{reformat_html, Options};
//!
//! let input = r#"<html><head><style></style></head><body>
//!     <ul><li>Chrome</li></ul>
//!     <dl><dt><a href="https://example.com">Example</a></dt><dd>saved</dd></dl>
//! </body></html>"#;
//!
//! let output = reformat_html(input, &Options::default()).unwrap();
//! assert!(output.contains(r#"target="_blank""#));
//! assert!(output.contains(r#"class="browser-data""#));
//! ```
//!
//! Running the pipeline on its own output is not supported: the `dl` it
//! looks for no longer exists after the first run.

pub mod blocklist;
pub mod columns;
pub mod dom;
pub mod error;
pub mod metadata;
pub mod options;
pub mod stylesheet;

use dom_query::Document;
use tracing::info;

pub use crate::columns::{bucket_ranges, EntryPair, Layout};
pub use crate::dom::anchors::Anchors;
pub use crate::error::ReformatError;
pub use crate::options::{Options, OptionsBuilder};

use crate::columns::{assemble_layout, collect_entries, partition_entries, tag_columns};
use crate::metadata::{make_collapsible, relocate_metadata};
use crate::stylesheet::inject_stylesheet;

/// Parses `html`, reformats it and serializes the result.
pub fn reformat_html(html: &str, opts: &Options) -> Result<String, ReformatError> {
    let doc = Document::from(html);
    reformat_document(&doc, opts)?;
    Ok(doc.html().to_string())
}

/// Reformats an already parsed document in place.
///
/// All structural checks run before the first mutation, so on error the
/// document is left untouched.
pub fn reformat_document(doc: &Document, opts: &Options) -> Result<(), ReformatError> {
    opts.validate()?;
    let anchors = Anchors::locate(doc)?;
    let entries = collect_entries(doc, Some(&anchors.metadata))?;

    relocate_metadata(&anchors);
    let columns = partition_entries(doc, entries, opts);
    let layout = assemble_layout(doc, &anchors, columns);
    inject_stylesheet(doc, &anchors);
    make_collapsible(doc, &anchors);
    tag_columns(&layout);

    info!(columns = layout.columns.len(), "reformatted document");
    Ok(())
}
