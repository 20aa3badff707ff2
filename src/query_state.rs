use crate::compat::{String, ToString, Vec, format};
use crate::helpers::{prune_fragment, prune_query};
use crate::host::{HistoryWriter, LocationReader};
use crate::param_map::ParamMap;
use crate::query_pairs::QueryPairs;
use crate::value::ParamValue;

/// Construction options, immutable after construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryStateOptions {
    /// Read and write the query inside the fragment (`#/route?k=v`)
    /// instead of the standard search segment.
    pub use_hash_router: bool,
    /// Collapse repeated decoded keys into one array value instead of
    /// keeping only the last one.
    pub use_duplicates_as_arrays: bool,
}

/// One key or a sequence of keys, accepted by [`QueryState::remove`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keys {
    One(String),
    Many(Vec<String>),
}

impl IntoIterator for Keys {
    type Item = String;
    type IntoIter = <Vec<String> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Self::One(key) => Vec::from([key]).into_iter(),
            Self::Many(keys) => keys.into_iter(),
        }
    }
}

impl From<&str> for Keys {
    fn from(key: &str) -> Self {
        Self::One(key.to_string())
    }
}

impl From<String> for Keys {
    fn from(key: String) -> Self {
        Self::One(key)
    }
}

impl From<Vec<String>> for Keys {
    fn from(keys: Vec<String>) -> Self {
        Self::Many(keys)
    }
}

impl From<Vec<&str>> for Keys {
    fn from(keys: Vec<&str>) -> Self {
        Self::Many(keys.into_iter().map(ToString::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Keys {
    fn from(keys: [&str; N]) -> Self {
        Self::Many(keys.iter().map(ToString::to_string).collect())
    }
}

/// Manages the query-parameter state of the current location and keeps
/// session history in sync: every mutation pushes one new history
/// entry carrying the decoded collection as its state object.
///
/// Owns one host value providing location reads and history writes
/// (see [`LocationReader`] / [`HistoryWriter`]); the application
/// decides where the host comes from and how long the manager lives.
/// Every operation is synchronous and infallible.
#[derive(Debug, Clone)]
pub struct QueryState<H> {
    host: H,
    store: QueryPairs,
    use_hash_router: bool,
    use_duplicates_as_arrays: bool,
}

impl<H: LocationReader + HistoryWriter> QueryState<H> {
    /// Create a manager over `host` and immediately [`sync`](Self::sync)
    /// it with the current location.
    pub fn new(host: H, options: QueryStateOptions) -> Self {
        let mut state = Self {
            host,
            store: QueryPairs::new(),
            use_hash_router: options.use_hash_router,
            use_duplicates_as_arrays: options.use_duplicates_as_arrays,
        };
        state.sync();
        state
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host access, for embeddings where something else also
    /// navigates. Call [`sync`](Self::sync) afterwards to pick up an
    /// external location change.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Re-parse the live query segment, discarding in-memory state.
    /// Idempotent; no history mutation.
    pub fn sync(&mut self) {
        let query = self.current_query();
        self.store = QueryPairs::parse(&query);
    }

    /// Replace the entire collection with `values`.
    /// An empty `values` behaves as [`clear`](Self::clear); otherwise
    /// the store is rebuilt from scratch and a history entry is pushed
    /// with the original (pre-encoding) `values` as its state.
    pub fn set_all(&mut self, values: ParamMap, title: Option<&str>) {
        if values.is_empty() {
            self.clear(title);
            return;
        }

        let mut store = QueryPairs::new();
        for (key, value) in &values {
            let (stored_key, stored_value) = value.encode(key);
            store.append(&stored_key, &stored_value);
        }
        self.store = store;
        self.push_history(values, title);
    }

    /// Overwrite or insert each key in `values`, leaving keys absent
    /// from `values` untouched. Pushes a history entry even when
    /// `values` is empty.
    pub fn set(&mut self, values: ParamMap, title: Option<&str>) {
        for (key, value) in &values {
            let (stored_key, stored_value) = value.encode(key);
            self.store.set(&stored_key, &stored_value);
        }
        self.push_history(values, title);
    }

    /// Add a new stored instance for each key in `values` without
    /// disturbing existing instances, so a key can appear several
    /// times. Pushes a history entry afterwards.
    pub fn append(&mut self, values: ParamMap, title: Option<&str>) {
        for (key, value) in &values {
            let (stored_key, stored_value) = value.encode(key);
            self.store.append(&stored_key, &stored_value);
        }
        self.push_history(values, title);
    }

    /// Delete every stored instance of each named key, including its
    /// array-encoded form; absent keys are ignored. The reduced
    /// collection is then decoded and pushed as the new history state.
    pub fn remove(&mut self, keys: impl Into<Keys>, title: Option<&str>) {
        let keys: Keys = keys.into();
        for key in keys {
            self.store.delete_all(&key);
            self.store.delete_all(&ParamValue::array_key(&key));
        }
        let reduced = self.get_values();
        self.push_history(reduced, title);
    }

    /// Decode the current store to a [`ParamMap`], restoring array
    /// values from their encoded form. Repeated decoded keys collapse
    /// into one flattened array when `use_duplicates_as_arrays` is set;
    /// otherwise the last value wins. Pure read.
    pub fn get_values(&self) -> ParamMap {
        let mut values = ParamMap::new();
        for (stored_key, stored_value) in self.store.iter() {
            let (key, value) = ParamValue::decode(stored_key, stored_value);
            if self.use_duplicates_as_arrays {
                values.insert_merging(key, value);
            } else {
                values.insert(key, value);
            }
        }
        values
    }

    /// Remove all parameters: pushes an empty state at the base URL
    /// (the location minus its query segment) and resets the store.
    pub fn clear(&mut self, title: Option<&str>) {
        let base = self.compose_url("");
        let title = self.title_or_default(title);
        self.host.push_state(ParamMap::new(), &title, &base);
        self.store = QueryPairs::new();
    }

    /// Build an absolute URL for `path` (a leading `/` is added when
    /// missing) from the current origin, keeping the fragment route in
    /// hash-router mode, followed by the current serialized query.
    /// Pure function of the current state.
    pub fn build_link(&self, path: &str) -> String {
        let origin = self.host.origin();
        let query = self.store.serialize();
        let slash = if path.starts_with('/') { "" } else { "/" };

        if self.use_hash_router {
            if let Some(fragment) = self.host.hash() {
                let (route, _) = prune_query(&fragment);
                return format!("{origin}{slash}{path}#{route}{query}");
            }
        }
        format!("{origin}{slash}{path}{query}")
    }

    /// The query segment the manager owns: inside the fragment after
    /// its first `?` in hash-router mode, else the search segment.
    fn current_query(&self) -> String {
        if self.use_hash_router {
            self.host
                .hash()
                .and_then(|fragment| prune_query(&fragment).1.map(ToString::to_string))
                .unwrap_or_default()
        } else {
            self.host.search().unwrap_or_default()
        }
    }

    /// Current location with its query segment replaced by `query`
    /// (`?...` or empty). The query follows the fragment route in
    /// hash-router mode and precedes the fragment otherwise.
    fn compose_url(&self, query: &str) -> String {
        let href = self.host.href();
        let (head, fragment) = prune_fragment(&href);

        if self.use_hash_router {
            // the query always lives in the fragment, even when the
            // location had none yet
            if fragment.is_none() && query.is_empty() {
                return head.to_string();
            }
            let route = fragment.map_or("", |f| prune_query(f).0);
            return format!("{head}#{route}{query}");
        }

        let (base, _) = prune_query(head);
        match fragment {
            Some(fragment) => format!("{base}{query}#{fragment}"),
            None => format!("{base}{query}"),
        }
    }

    fn title_or_default(&self, title: Option<&str>) -> String {
        title.map_or_else(|| self.host.document_title(), ToString::to_string)
    }

    fn push_history(&mut self, state: ParamMap, title: Option<&str>) {
        let query = self.store.serialize();
        let url = self.compose_url(&query);
        let title = self.title_or_default(title);
        self.host.push_state(state, &title, &url);
    }
}
