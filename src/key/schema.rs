//! KeySchema - a named composite-key layout with a fixed attribute list.
//! SchemaRegistry - the layouts known for each namespace.

use std::collections::BTreeMap;

use super::{build_composite_key, partial_key, split_composite_key, validate_namespace};
use crate::error::{LedgerError, LedgerResult};

/// Namespace under which the demonstration bets are indexed.
pub const DEFAULT_BET_NAMESPACE: &str = "BetIndex";

/// Attribute layout of the bet index: game first, then bet id.
pub const BET_INDEX_ATTRIBUTES: &[&str] = &["game", "bet_id"];

/// A composite-key index: one namespace plus the ordered attribute names
/// every key in it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySchema {
    namespace: String,
    attributes: &'static [&'static str],
}

impl KeySchema {
    pub fn new(
        namespace: impl Into<String>,
        attributes: &'static [&'static str],
    ) -> LedgerResult<Self> {
        let namespace = namespace.into();
        validate_namespace(&namespace)?;
        Ok(Self {
            namespace,
            attributes,
        })
    }

    /// The `game, bet_id` index under the given namespace.
    pub fn bet_index(namespace: impl Into<String>) -> LedgerResult<Self> {
        Self::new(namespace, BET_INDEX_ATTRIBUTES)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn attributes(&self) -> &[&'static str] {
        self.attributes
    }

    /// Build a key; `values` must supply exactly one value per attribute.
    pub fn build<S: AsRef<str>>(&self, values: &[S]) -> LedgerResult<String> {
        if values.len() != self.attributes.len() {
            return Err(LedgerError::InvalidAttribute {
                value: values
                    .iter()
                    .map(|v| v.as_ref())
                    .collect::<Vec<_>>()
                    .join(","),
                reason: format!(
                    "{} expects {} attributes ({}), got {}",
                    self.namespace,
                    self.attributes.len(),
                    self.attributes.join(", "),
                    values.len()
                ),
            });
        }
        build_composite_key(&self.namespace, values)
    }

    /// Decode a key belonging to this schema into its attribute values.
    pub fn decode(&self, key: &str) -> LedgerResult<Vec<String>> {
        let (namespace, values) = split_composite_key(key)?;
        if namespace != self.namespace {
            return Err(LedgerError::malformed_key(
                key,
                format!("expected namespace {}, found {}", self.namespace, namespace),
            ));
        }
        if values.len() != self.attributes.len() {
            return Err(LedgerError::malformed_key(
                key,
                format!(
                    "expected {} attributes, found {}",
                    self.attributes.len(),
                    values.len()
                ),
            ));
        }
        Ok(values)
    }

    /// Scan prefix for all keys in this schema sharing the leading values.
    pub fn prefix<S: AsRef<str>>(&self, leading: &[S]) -> LedgerResult<String> {
        if leading.len() > self.attributes.len() {
            return Err(LedgerError::invalid_attribute(
                &self.namespace,
                format!("at most {} leading attributes", self.attributes.len()),
            ));
        }
        partial_key(&self.namespace, leading)
    }
}

/// Composite-key layouts by namespace.
///
/// Keys under a registered namespace are decoded and prefixed through its
/// schema, so attribute counts are enforced. Any other namespace falls back
/// to the layout-only codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaRegistry {
    schemas: BTreeMap<String, KeySchema>,
}

impl Default for SchemaRegistry {
    /// Registry holding the `BetIndex` layout.
    fn default() -> Self {
        Self::empty().with(KeySchema {
            namespace: DEFAULT_BET_NAMESPACE.to_string(),
            attributes: BET_INDEX_ATTRIBUTES,
        })
    }
}

impl SchemaRegistry {
    /// A registry with no layouts; every namespace is unchecked.
    pub fn empty() -> Self {
        Self {
            schemas: BTreeMap::new(),
        }
    }

    /// Add a layout, replacing any earlier one for the same namespace.
    pub fn register(&mut self, schema: KeySchema) {
        self.schemas.insert(schema.namespace.clone(), schema);
    }

    pub fn with(mut self, schema: KeySchema) -> Self {
        self.register(schema);
        self
    }

    pub fn get(&self, namespace: &str) -> Option<&KeySchema> {
        self.schemas.get(namespace)
    }

    /// Registered namespaces, sorted.
    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }

    /// Split `key`, enforcing the attribute count of its namespace when that
    /// namespace is registered.
    pub fn decode(&self, key: &str) -> LedgerResult<(String, Vec<String>)> {
        let (namespace, values) = split_composite_key(key)?;
        if let Some(schema) = self.get(&namespace) {
            if values.len() != schema.attributes.len() {
                return Err(LedgerError::malformed_key(
                    key,
                    format!(
                        "{} expects {} attributes ({}), found {}",
                        namespace,
                        schema.attributes.len(),
                        schema.attributes.join(", "),
                        values.len()
                    ),
                ));
            }
        }
        Ok((namespace, values))
    }

    /// Scan prefix for `namespace` narrowed by `leading` values. A registered
    /// namespace rejects more leading values than it has attributes.
    pub fn prefix<S: AsRef<str>>(&self, namespace: &str, leading: &[S]) -> LedgerResult<String> {
        match self.get(namespace) {
            Some(schema) => schema.prefix(leading),
            None => partial_key(namespace, leading),
        }
    }
}
