// ABOUTME: The fixed rule block appended to the page's existing <style> element.
// ABOUTME: Theme, hidden details, collapsible metadata states, link colors and column word-breaking.

use dom_query::Document;
use tracing::debug;

use crate::dom::anchors::Anchors;
use crate::dom::append_text;

/// Rules appended after whatever the style element already holds.
pub const STYLESHEET: &str = r#"
    body { font-family: Arial, sans-serif; color: #727272; max-width: 1000px; margin: auto; padding: 10px; background-color: black; }
    dt { font-size: 1.3em; font-weight: bold; }
    dd { display: none; }
    .browser-data {
        margin-top: 20px;
        border-top: 1px solid #ccc;
        padding-top: 10px;
        cursor: pointer;
    }
    .browser-data ul {
        margin: 0;
        padding: 0;
        list-style-type: none;
    }
    .browser-data li:not(:first-child) {
        display: none;
    }
    .browser-data.expanded li:not(:first-child) {
        display: block;
        margin-top: 5px;
    }
    .browser-data::after {
        content: ' ▼';
        font-size: 0.8em;
        vertical-align: middle;
    }
    .browser-data.expanded::after {
        content: ' ▲';
    }
    a { color: #727272; text-decoration: none; }
    a:hover { color: white; }
    .column {
        word-wrap: break-word;
        overflow-wrap: break-word;
        word-break: break-word;
        hyphens: auto;
    }
    dt, dd {
        margin-bottom: 10px;
    }
    "#;

/// Appends [`STYLESHEET`] to the first style element as a new text node.
pub fn inject_stylesheet(doc: &Document, anchors: &Anchors) {
    append_text(doc, &anchors.style, STYLESHEET);
    debug!(bytes = STYLESHEET.len(), "appended stylesheet rules");
}
