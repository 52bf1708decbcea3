//! Ledger configuration.
//!
//! Every field has a default, so an empty TOML document is a valid config:
//!
//! ```toml
//! strict_records = true
//! predicate_fallback = false
//! seed_namespace = "BetIndex"
//! seed_game = "4D"
//! ```

use serde::Deserialize;

use crate::error::LedgerResult;
use crate::key::{KeySchema, DEFAULT_BET_NAMESPACE};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LedgerConfig {
    /// Refuse to serialize a result set containing a non-JSON record.
    pub strict_records: bool,
    /// Answer predicate queries with a full scan when the store has no
    /// rich query support, instead of failing with `QueryUnsupported`.
    pub predicate_fallback: bool,
    /// Composite-key namespace the seed records are indexed under.
    pub seed_namespace: String,
    /// Game attribute of the seed records.
    pub seed_game: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            strict_records: true,
            predicate_fallback: false,
            seed_namespace: DEFAULT_BET_NAMESPACE.to_string(),
            seed_game: "4D".to_string(),
        }
    }
}

impl LedgerConfig {
    pub fn from_toml_str(source: &str) -> LedgerResult<Self> {
        let config: LedgerConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> LedgerResult<()> {
        self.seed_schema()?.build(&[self.seed_game.as_str(), "0"])?;
        Ok(())
    }

    /// Key layout for seeded bets.
    pub fn seed_schema(&self) -> LedgerResult<KeySchema> {
        KeySchema::bet_index(self.seed_namespace.clone())
    }

    pub fn with_predicate_fallback(mut self, enabled: bool) -> Self {
        self.predicate_fallback = enabled;
        self
    }

    pub fn with_strict_records(mut self, strict: bool) -> Self {
        self.strict_records = strict;
        self
    }
}
