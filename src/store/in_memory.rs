//! InMemoryKvStore - BTreeMap-backed substrate for testing and standalone use.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::{Map, Value};
use tracing::debug;

use super::{KeyValue, KvStore, ScanCursor};
use crate::error::{LedgerError, LedgerResult};

const NO_FAULT: usize = usize::MAX;

/// In-memory key-value store backed by a `BTreeMap`.
///
/// Clone-friendly via Arc; clones share storage. Cursors snapshot their range
/// when opened, so writes made while a cursor is open do not show up in it.
/// Rich queries are answered by a linear scan over every stored payload.
#[derive(Clone)]
pub struct InMemoryKvStore {
    storage: Arc<RwLock<BTreeMap<String, Vec<u8>>>>,
    open_cursors: Arc<AtomicUsize>,
    available: Arc<AtomicBool>,
    scan_fault_after: Arc<AtomicUsize>,
    rich_query: bool,
}

impl Default for InMemoryKvStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryKvStore {
    /// Create a new empty store with rich query support.
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(BTreeMap::new())),
            open_cursors: Arc::new(AtomicUsize::new(0)),
            available: Arc::new(AtomicBool::new(true)),
            scan_fault_after: Arc::new(AtomicUsize::new(NO_FAULT)),
            rich_query: true,
        }
    }

    /// A plain sorted map: point access and range scans only.
    pub fn without_rich_query() -> Self {
        Self {
            rich_query: false,
            ..Self::new()
        }
    }

    /// Number of cursors opened and not yet released.
    pub fn open_cursors(&self) -> usize {
        self.open_cursors.load(Ordering::SeqCst)
    }

    /// Number of stored entries. Fails like any other read when the store
    /// is offline.
    pub fn len(&self) -> LedgerResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> LedgerResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Take the store offline (or bring it back). While offline every call
    /// fails with `StoreUnavailable`.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Make every cursor opened from now on fail after yielding `n` entries.
    pub fn fail_scans_after(&self, n: Option<usize>) {
        self.scan_fault_after.store(n.unwrap_or(NO_FAULT), Ordering::SeqCst);
    }

    fn check_available(&self) -> LedgerResult<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(LedgerError::StoreUnavailable("store is offline".into()))
        }
    }

    fn read(&self) -> LedgerResult<RwLockReadGuard<'_, BTreeMap<String, Vec<u8>>>> {
        self.check_available()?;
        self.storage
            .read()
            .map_err(|_| LedgerError::StoreUnavailable("lock poisoned".into()))
    }

    fn write(&self) -> LedgerResult<RwLockWriteGuard<'_, BTreeMap<String, Vec<u8>>>> {
        self.check_available()?;
        self.storage
            .write()
            .map_err(|_| LedgerError::StoreUnavailable("lock poisoned".into()))
    }

    /// Wrap a snapshot in a cursor that counts itself open until dropped.
    fn open_cursor(&self, snapshot: Vec<KeyValue>) -> ScanCursor<'static> {
        let fault_after = self.scan_fault_after.load(Ordering::SeqCst);
        let open = self.open_cursors.clone();
        open.fetch_add(1, Ordering::SeqCst);

        let entries = snapshot.into_iter().map(Ok).enumerate().map_while(move |(i, entry)| {
            if i > fault_after {
                None
            } else if i == fault_after {
                Some(Err(LedgerError::StoreUnavailable(
                    "scan interrupted".into(),
                )))
            } else {
                Some(entry)
            }
        });

        ScanCursor::new(entries).on_release(move || {
            let remaining = open.fetch_sub(1, Ordering::SeqCst) - 1;
            debug!(remaining, "released in-memory cursor");
        })
    }
}

impl KvStore for InMemoryKvStore {
    fn put(&self, key: &str, value: Vec<u8>) -> LedgerResult<()> {
        let mut storage = self.write()?;
        storage.insert(key.to_string(), value);
        Ok(())
    }

    fn get(&self, key: &str) -> LedgerResult<Option<Vec<u8>>> {
        let storage = self.read()?;
        Ok(storage.get(key).cloned())
    }

    fn range_scan(&self, start: &str, end: &str) -> LedgerResult<ScanCursor<'_>> {
        let storage = self.read()?;

        // BTreeMap::range panics on an inverted range
        if !start.is_empty() && !end.is_empty() && start >= end {
            return Ok(self.open_cursor(Vec::new()));
        }

        let lower = if start.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Included(start)
        };
        let upper = if end.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Excluded(end)
        };

        let snapshot: Vec<KeyValue> = storage
            .range::<str, _>((lower, upper))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        drop(storage);

        Ok(self.open_cursor(snapshot))
    }

    fn rich_query(&self, query: &str) -> LedgerResult<ScanCursor<'_>> {
        if !self.rich_query {
            return Err(LedgerError::QueryUnsupported);
        }

        let selector = parse_selector(query)?;
        let storage = self.read()?;

        let snapshot: Vec<KeyValue> = storage
            .iter()
            .filter(|(key, value)| {
                let matched = payload_matches(value, &selector);
                if matched.is_none() {
                    debug!(key = %key, "skipping non-object payload in rich query");
                }
                matched.unwrap_or(false)
            })
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        drop(storage);

        Ok(self.open_cursor(snapshot))
    }

    fn supports_rich_query(&self) -> bool {
        self.rich_query
    }
}

/// Extract the `selector` object from a query document.
fn parse_selector(query: &str) -> LedgerResult<Map<String, Value>> {
    let document: Value = serde_json::from_str(query)
        .map_err(|e| LedgerError::InvalidQuery(format!("query is not JSON: {}", e)))?;

    match document.get("selector") {
        Some(Value::Object(selector)) => Ok(selector.clone()),
        Some(_) => Err(LedgerError::InvalidQuery(
            "selector must be an object".into(),
        )),
        None => Err(LedgerError::InvalidQuery("missing selector".into())),
    }
}

/// `None` if the payload is not a JSON object.
fn payload_matches(payload: &[u8], selector: &Map<String, Value>) -> Option<bool> {
    let record: Value = serde_json::from_slice(payload).ok()?;
    let record = record.as_object()?;
    Some(
        selector
            .iter()
            .all(|(field, expected)| record.get(field) == Some(expected)),
    )
}
