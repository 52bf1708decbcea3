//! Queries - point lookups, composite-key range scans, selector queries, and
//! the JSON rendering of their result sets.
//!
//! ## Example
//!
//! ```
//! use bet_ledger::query::QueryEngine;
//! use bet_ledger::store::InMemoryKvStore;
//! use bet_ledger::Bet;
//!
//! let engine = QueryEngine::new(InMemoryKvStore::new());
//! engine.put_bet(&Bet {
//!     bet_id: "324636".into(),
//!     draw_id: "556578".into(),
//!     ..Bet::default()
//! }).unwrap();
//!
//! let matched = engine.query_by_predicate("draw_id", "556578").unwrap();
//! let payload = engine.serializer().serialize(&matched).unwrap();
//! assert!(payload.starts_with(br#"[{"Key":"324636","Record":{"#));
//! ```

mod engine;
mod selector;
mod serializer;

pub use engine::QueryEngine;
pub use selector::Selector;
pub use serializer::ResultSerializer;
