//! QueryEngine - point, range, predicate and full-scan queries over a KvStore.

use tracing::{debug, info, warn};

use super::selector::Selector;
use super::serializer::ResultSerializer;
use crate::bet::Bet;
use crate::config::LedgerConfig;
use crate::error::{LedgerError, LedgerResult};
use crate::key::{prefix_end, SchemaRegistry};
use crate::store::{KeyValue, KvStore, ScanCursor};

/// Runs queries against the store handle it was built with.
///
/// The engine holds no state of its own beyond the handle, its config and
/// the key layouts derived from it. Every cursor it opens is drained and
/// released before a call returns.
pub struct QueryEngine<S> {
    store: S,
    config: LedgerConfig,
    schemas: SchemaRegistry,
}

impl<S: KvStore> QueryEngine<S> {
    /// Engine over `store` with the default config.
    pub fn new(store: S) -> Self {
        Self::with_config(store, LedgerConfig::default())
    }

    /// Engine over `store`. The configured seed namespace is registered
    /// next to the built-in `BetIndex` layout.
    pub fn with_config(store: S, config: LedgerConfig) -> Self {
        let mut schemas = SchemaRegistry::default();
        match config.seed_schema() {
            Ok(schema) => schemas.register(schema),
            Err(err) => warn!(error = %err, "seed namespace not registered"),
        }
        Self {
            store,
            config,
            schemas,
        }
    }

    /// The underlying store handle.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Config the engine was built with.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Key layouts used to build range prefixes and decode keys.
    pub fn schemas(&self) -> &SchemaRegistry {
        &self.schemas
    }

    /// Serializer matching the configured strictness.
    pub fn serializer(&self) -> ResultSerializer {
        if self.config.strict_records {
            ResultSerializer::strict()
        } else {
            ResultSerializer::lenient()
        }
    }

    /// Unconditional upsert of raw bytes.
    pub fn put_record(&self, key: &str, value: Vec<u8>) -> LedgerResult<()> {
        if key.is_empty() {
            return Err(LedgerError::invalid_attribute(key, "key must not be empty"));
        }
        self.store.put(key, value)
    }

    /// Store a bet under its bet id. An existing bet with the same id is
    /// replaced.
    pub fn put_bet(&self, bet: &Bet) -> LedgerResult<()> {
        let bytes = bet.to_json()?;
        self.put_record(&bet.bet_id, bytes)?;
        info!(bet_id = %bet.bet_id, draw_id = %bet.draw_id, "placed bet");
        Ok(())
    }

    /// Raw bytes at `key`, or `None` when nothing is stored there.
    pub fn query_by_primary_key(&self, key: &str) -> LedgerResult<Option<Vec<u8>>> {
        let value = self.store.get(key)?;
        debug!(key, found = value.is_some(), "point query");
        Ok(value)
    }

    /// Every entry whose composite key lies under `namespace` and starts
    /// with the `leading` attribute values, in key order. A registered
    /// namespace rejects more leading values than it has attributes.
    pub fn query_by_range<A: AsRef<str>>(
        &self,
        namespace: &str,
        leading: &[A],
    ) -> LedgerResult<Vec<KeyValue>> {
        let start = self.schemas.prefix(namespace, leading)?;
        let end = prefix_end(&start).unwrap_or_default();
        let entries = drain(self.store.range_scan(&start, &end)?)?;
        debug!(namespace, start = %start, count = entries.len(), "range query");
        Ok(entries)
    }

    /// Records whose `attribute` equals `value`, in the order the store
    /// discovers them.
    pub fn query_by_predicate(&self, attribute: &str, value: &str) -> LedgerResult<Vec<KeyValue>> {
        let selector = Selector::equals(attribute, value)?;
        self.query_by_selector(&selector)
    }

    /// Records matching every condition of `selector`.
    pub fn query_by_selector(&self, selector: &Selector) -> LedgerResult<Vec<KeyValue>> {
        let query = selector.to_query_string()?;
        debug!(query = %query, "rich query");

        match self.store.rich_query(&query) {
            Ok(cursor) => drain(cursor),
            Err(LedgerError::QueryUnsupported) if self.config.predicate_fallback => {
                info!(query = %query, "store has no rich query, filtering a full scan");
                let mut matched = self.query_all()?;
                matched.retain(|(_, value)| selector.matches(value));
                Ok(matched)
            }
            Err(err) => Err(err),
        }
    }

    /// Every stored entry in key order.
    pub fn query_all(&self) -> LedgerResult<Vec<KeyValue>> {
        let entries = drain(self.store.range_scan("", "")?)?;
        debug!(count = entries.len(), "full scan");
        Ok(entries)
    }
}

/// Consume a cursor; it is released on return, success or not.
fn drain(cursor: ScanCursor<'_>) -> LedgerResult<Vec<KeyValue>> {
    cursor.collect_entries()
}
