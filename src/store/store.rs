//! KvStore - the sorted key-value substrate everything else is built on.

use std::fmt;

use crate::error::{LedgerError, LedgerResult};

/// One stored entry: key plus raw value bytes.
pub type KeyValue = (String, Vec<u8>);

/// Sorted key-value storage with point access and ordered range scans.
///
/// Keys order lexicographically by their UTF-8 bytes. Rich (selector)
/// queries are optional: stores that cannot evaluate them keep the default
/// implementation, which fails with `QueryUnsupported`.
pub trait KvStore: Send + Sync {
    /// Insert or overwrite the value at `key`.
    fn put(&self, key: &str, value: Vec<u8>) -> LedgerResult<()>;

    /// Point lookup. `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> LedgerResult<Option<Vec<u8>>>;

    /// Open a cursor over `[start, end)` in ascending key order.
    /// An empty bound on either side is unbounded.
    fn range_scan(&self, start: &str, end: &str) -> LedgerResult<ScanCursor<'_>>;

    /// Evaluate a JSON selector query (`{"selector": {...}}`) over all
    /// stored payloads.
    fn rich_query(&self, _query: &str) -> LedgerResult<ScanCursor<'_>> {
        Err(LedgerError::QueryUnsupported)
    }

    fn supports_rich_query(&self) -> bool {
        false
    }
}

/// An open iterator handle on the store.
///
/// The handle is released exactly once when the cursor is dropped, whether
/// the consumer ran it to the end, stopped early, or bailed out on an error.
pub struct ScanCursor<'a> {
    entries: Box<dyn Iterator<Item = LedgerResult<KeyValue>> + Send + 'a>,
    release: Option<Box<dyn FnOnce() + Send + 'a>>,
}

impl<'a> ScanCursor<'a> {
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = LedgerResult<KeyValue>>,
        I::IntoIter: Send + 'a,
    {
        Self {
            entries: Box::new(entries.into_iter()),
            release: None,
        }
    }

    /// A cursor with nothing in it.
    pub fn empty() -> Self {
        Self::new(std::iter::empty())
    }

    /// Attach the action that frees the underlying handle.
    pub fn on_release<F>(mut self, release: F) -> Self
    where
        F: FnOnce() + Send + 'a,
    {
        self.release = Some(Box::new(release));
        self
    }

    /// Release the handle now instead of waiting for the cursor to drop.
    pub fn close(self) {}

    /// Drain the cursor into a vector, stopping at the first error.
    pub fn collect_entries(self) -> LedgerResult<Vec<KeyValue>> {
        self.collect()
    }
}

impl fmt::Debug for ScanCursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScanCursor")
            .field("open", &self.release.is_some())
            .finish_non_exhaustive()
    }
}

impl Iterator for ScanCursor<'_> {
    type Item = LedgerResult<KeyValue>;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }
}

impl Drop for ScanCursor<'_> {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}
