//! State store - the sorted key-value substrate under the query layer.
//!
//! All query capability above this layer is expressed as point access plus
//! ordered range scans, which is what a ledger state database offers
//! natively. Selector (rich) queries are an optional extra.
//!
//! ## Example
//!
//! ```
//! use bet_ledger::store::{InMemoryKvStore, KvStore};
//!
//! let store = InMemoryKvStore::new();
//! store.put("324636", br#"{"bet_id":"324636"}"#.to_vec()).unwrap();
//!
//! let entries = store.range_scan("", "").unwrap().collect_entries().unwrap();
//! assert_eq!(entries.len(), 1);
//! assert_eq!(store.open_cursors(), 0);
//! ```

mod in_memory;
mod store;

pub use in_memory::InMemoryKvStore;
pub use store::{KeyValue, KvStore, ScanCursor};
