#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod helpers;
mod host;
mod param_map;
mod query_pairs;
mod query_state;
mod value;

// Public API
pub use host::{HistoryEntry, HistoryWriter, LocationReader, MemoryHost};
pub use param_map::ParamMap;
pub use query_pairs::QueryPairs;
pub use query_state::{Keys, QueryState, QueryStateOptions};
pub use value::ParamValue;
