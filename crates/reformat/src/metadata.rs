// ABOUTME: Moves the metadata list to the end of <body> and makes it collapsible.
// ABOUTME: Assigns the browser-data class and adds a click-to-toggle script to <head>.

use dom_query::Document;
use tracing::debug;

use crate::dom::anchors::Anchors;
use crate::dom::{append_text, move_to_end};

/// Class that the stylesheet keys the collapsed state on.
pub const METADATA_CLASS: &str = "browser-data";

/// Class toggled on the metadata list by a click.
pub const EXPANDED_CLASS: &str = "expanded";

/// Client-side toggle. Binding waits for DOMContentLoaded because the
/// script lives in <head>, ahead of the list it targets.
pub fn toggle_script() -> String {
    format!(
        r#"
    document.addEventListener('DOMContentLoaded', function() {{
        document.querySelector('.{METADATA_CLASS}').addEventListener('click', function() {{
            this.classList.toggle('{EXPANDED_CLASS}');
        }});
    }});
    "#
    )
}

/// Detaches the metadata list and appends it as the last child of <body>.
pub fn relocate_metadata(anchors: &Anchors) {
    move_to_end(&anchors.body, &anchors.metadata);
    debug!("moved metadata list to end of body");
}

/// Assigns [`METADATA_CLASS`] to the metadata list and installs the toggle script.
pub fn make_collapsible(doc: &Document, anchors: &Anchors) {
    anchors.metadata.set_attr("class", METADATA_CLASS);

    let script = doc.tree.new_element("script");
    append_text(doc, &script, &toggle_script());
    anchors.head.append_child(&script);
    debug!("attached metadata toggle script");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::is_element_named;

    const SAMPLE_HTML: &str = r#"<!DOCTYPE html>
<html><head><style></style></head>
<body>
<h1>Saved</h1>
<ul class="old"><li>Chrome</li><li>Linux</li></ul>
<dl><dt><a href="https://a.test">A</a></dt><dd>a</dd></dl>
<p>footer</p>
</body></html>"#;

    #[test]
    fn test_relocate_makes_list_last_child() {
        let doc = Document::from(SAMPLE_HTML);
        let anchors = Anchors::locate(&doc).unwrap();
        relocate_metadata(&anchors);

        let last = anchors.body.last_child().unwrap();
        assert!(is_element_named(&last, "ul"));
        assert_eq!(doc.select("ul").length(), 1);
        assert_eq!(doc.select("p + ul").length(), 1);
    }

    #[test]
    fn test_make_collapsible_replaces_class_and_adds_script() {
        let doc = Document::from(SAMPLE_HTML);
        let anchors = Anchors::locate(&doc).unwrap();
        relocate_metadata(&anchors);
        make_collapsible(&doc, &anchors);

        assert_eq!(anchors.metadata.attr("class").as_deref(), Some(METADATA_CLASS));
        let scripts = doc.select("head > script");
        assert_eq!(scripts.length(), 1);
        let text = scripts.text().to_string();
        assert!(text.contains("document.querySelector('.browser-data')"));
        assert!(text.contains("this.classList.toggle('expanded');"));

        // The script goes to <head>, so the list stays last in <body>
        let last = anchors.body.last_child().unwrap();
        assert!(is_element_named(&last, "ul"));
    }
}
