// ABOUTME: Drops entries whose link host matches a blocklisted domain.
// ABOUTME: Unparseable or missing links are kept; dropped pairs are detached from the document.

use tracing::debug;
use url::Url;

use crate::columns::EntryPair;
use crate::options::Options;

/// Host of the entry's first link, when it is an absolute URL.
fn entry_host(entry: &EntryPair) -> Option<String> {
    let href = entry.first_href()?;
    let url = Url::parse(href.trim()).ok()?;
    url.host_str().map(str::to_string)
}

/// Removes blocklisted entries from the document and returns the rest in order.
pub fn drop_blocked<'a>(entries: Vec<EntryPair<'a>>, opts: &Options) -> Vec<EntryPair<'a>> {
    if opts.blocklist.is_empty() {
        return entries;
    }

    let (kept, blocked): (Vec<_>, Vec<_>) = entries.into_iter().partition(|entry| {
        !entry_host(entry).is_some_and(|host| opts.is_blocked_host(&host))
    });

    for entry in &blocked {
        entry.term.remove_from_parent();
        entry.detail.remove_from_parent();
    }
    debug!(kept = kept.len(), blocked = blocked.len(), "applied domain blocklist");
    kept
}
