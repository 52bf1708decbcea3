//! bet_ledger - state-access layer for a lottery bet ledger.
//!
//! Bets are stored as JSON in a sorted key-value substrate ([`KvStore`]).
//! On top of it sit a composite-key codec ([`key`]), a query engine for point,
//! range and selector queries ([`QueryEngine`]), a serializer for result sets
//! ([`ResultSerializer`]), and an operation router ([`Router`]) that a host
//! runtime invokes by name with positional string arguments.
//!
//! ```
//! use bet_ledger::Router;
//!
//! let router = Router::in_memory();
//! let mut args = vec![""; 16];
//! args[1] = "324636"; // bet_id
//! args[9] = "556578"; // draw_id
//! router.invoke("placeBet", &args).unwrap();
//!
//! let hits = router.invoke("queryByDrawID", &["556578"]).unwrap().unwrap();
//! assert!(String::from_utf8(hits).unwrap().contains("324636"));
//! ```

mod bet;
mod config;
mod error;
pub mod key;
pub mod query;
pub mod router;
pub mod store;

pub use bet::{Bet, BET_FIELDS};
pub use config::LedgerConfig;
pub use error::{ErrorBody, ErrorKind, LedgerError, LedgerResult};
pub use key::{build_composite_key, decode_composite_key, KeySchema, SchemaRegistry};
pub use query::{QueryEngine, ResultSerializer, Selector};
pub use router::{Arity, Context, Payload, Response, Router};
pub use store::{InMemoryKvStore, KeyValue, KvStore, ScanCursor};
