use crate::compat::{String, ToString, Vec};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// application/x-www-form-urlencoded escape set.
/// ASCII alphanumerics and `-._~` pass through; space is handled
/// separately and serializes as `+`.
const FORM_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b' ');

/// An ordered multi-pair query string store.
///
/// Repeated keys are kept as independent entries, matching the platform
/// `URLSearchParams` model. Parsing accepts an optional leading `?`;
/// serializing produces a leading `?`, or the empty string when there
/// are no pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPairs {
    pairs: Vec<(String, String)>,
}

impl QueryPairs {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Parse from a query string (with or without leading `?`).
    /// Empty `&&` segments are skipped; a segment without `=` becomes a
    /// key with an empty value. Never fails: malformed percent escapes
    /// decode leniently.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut pairs = Vec::new();
        for piece in query.split('&') {
            if piece.is_empty() {
                continue;
            }
            let (key, value) = piece.split_once('=').unwrap_or((piece, ""));
            pairs.push((decode_component(key), decode_component(value)));
        }
        Self { pairs }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// First value stored under a key, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Add a new pair, keeping any existing pairs for the key.
    pub fn append(&mut self, key: &str, value: &str) {
        self.pairs.push((key.to_string(), value.to_string()));
    }

    /// Set a key to a single value: the first existing pair is
    /// overwritten in place, later pairs for the key are dropped.
    pub fn set(&mut self, key: &str, value: &str) {
        let Some(first) = self.pairs.iter().position(|(k, _)| k == key) else {
            self.pairs.push((key.to_string(), value.to_string()));
            return;
        };
        self.pairs[first].1 = value.to_string();
        let mut index = 0;
        self.pairs.retain(|(k, _)| {
            let keep = index <= first || k != key;
            index += 1;
            keep
        });
    }

    /// Delete every pair stored under a key. Absent keys are a no-op.
    pub fn delete_all(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize to a query string with leading `?`, or the empty
    /// string when there are no pairs.
    pub fn serialize(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }

        let mut out = String::from("?");
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                out.push('&');
            }
            encode_component_into(&mut out, key);
            out.push('=');
            encode_component_into(&mut out, value);
        }
        out
    }
}

impl From<&str> for QueryPairs {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

/// Percent-encode a component into the buffer, writing spaces as `+`.
fn encode_component_into(buffer: &mut String, input: &str) {
    buffer.reserve(input.len());
    for chunk in utf8_percent_encode(input, FORM_SET) {
        for c in chunk.chars() {
            buffer.push(if c == ' ' { '+' } else { c });
        }
    }
}

/// Decode a query component: `+` to space, then percent-decode with
/// lossy UTF-8 recovery.
fn decode_component(input: &str) -> String {
    let spaced = input.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
