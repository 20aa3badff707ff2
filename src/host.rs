use crate::compat::{String, ToString, Vec};
use crate::helpers::{prune_fragment, prune_query};
use crate::param_map::ParamMap;

/// Read access to the host's current navigation location.
///
/// The manager never touches ambient globals; it is handed one value
/// implementing this trait (and [`HistoryWriter`]) at construction.
pub trait LocationReader {
    /// Current absolute URL.
    fn href(&self) -> String;

    /// `scheme://host[:port]` of the current location.
    fn origin(&self) -> String;

    /// Search segment without its leading `?`, or `None` when absent.
    fn search(&self) -> Option<String>;

    /// Fragment without its leading `#`, or `None` when absent.
    fn hash(&self) -> Option<String>;

    /// The host document's current title, used when a history entry is
    /// pushed without an explicit title.
    fn document_title(&self) -> String;
}

/// Write access to the host's session history.
pub trait HistoryWriter {
    /// Push one new entry onto the history stack without navigating.
    /// `state` is the decoded parameter collection the entry was
    /// created from; `url` becomes the current location.
    fn push_state(&mut self, state: ParamMap, title: &str, url: &str);
}

/// One recorded history entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub state: ParamMap,
    pub title: String,
    pub url: String,
}

/// An in-memory host: a current URL plus a recorded history stack.
///
/// Behaves like a navigating browser window for both capabilities:
/// pushing a state makes its URL the current location. This keeps the
/// manager fully deterministic in tests and usable outside a real
/// browser environment.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    href: String,
    title: String,
    entries: Vec<HistoryEntry>,
}

impl MemoryHost {
    /// Create a host positioned at `href`, with an empty document title.
    pub fn new(href: &str) -> Self {
        Self {
            href: href.to_string(),
            title: String::new(),
            entries: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Replace the current location without recording a history entry,
    /// like an external navigation.
    pub fn set_href(&mut self, href: &str) {
        self.href = href.to_string();
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    /// All entries pushed so far, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn last_entry(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }
}

impl LocationReader for MemoryHost {
    fn href(&self) -> String {
        self.href.clone()
    }

    fn origin(&self) -> String {
        let after_scheme = self.href.find("://").map_or(0, |pos| pos + 3);
        let end = self.href[after_scheme..]
            .find(['/', '?', '#'])
            .map_or(self.href.len(), |pos| after_scheme + pos);
        self.href[..end].to_string()
    }

    fn search(&self) -> Option<String> {
        let (head, _) = prune_fragment(&self.href);
        prune_query(head).1.map(ToString::to_string)
    }

    fn hash(&self) -> Option<String> {
        prune_fragment(&self.href).1.map(ToString::to_string)
    }

    fn document_title(&self) -> String {
        self.title.clone()
    }
}

impl HistoryWriter for MemoryHost {
    fn push_state(&mut self, state: ParamMap, title: &str, url: &str) {
        self.href = url.to_string();
        self.entries.push(HistoryEntry {
            state,
            title: title.to_string(),
            url: url.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin() {
        assert_eq!(MemoryHost::new("https://a.dev/p?x=1").origin(), "https://a.dev");
        assert_eq!(MemoryHost::new("https://a.dev:8080/p").origin(), "https://a.dev:8080");
        assert_eq!(MemoryHost::new("https://a.dev#frag").origin(), "https://a.dev");
        assert_eq!(MemoryHost::new("https://a.dev").origin(), "https://a.dev");
    }

    #[test]
    fn test_search_ignores_fragment_query() {
        let host = MemoryHost::new("https://a.dev/p#/page?x=1");
        assert_eq!(host.search(), None);
        assert_eq!(host.hash(), Some("/page?x=1".into()));
    }

    #[test]
    fn test_search_and_hash() {
        let host = MemoryHost::new("https://a.dev/p?x=1#frag");
        assert_eq!(host.search(), Some("x=1".into()));
        assert_eq!(host.hash(), Some("frag".into()));
    }

    #[test]
    fn test_push_state_navigates() {
        let mut host = MemoryHost::new("https://a.dev/p");
        host.push_state(ParamMap::new(), "t", "https://a.dev/p?x=1");
        assert_eq!(host.href(), "https://a.dev/p?x=1");
        assert_eq!(host.entries().len(), 1);
    }
}
