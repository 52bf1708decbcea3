//! router - maps operation names and positional arguments onto the query
//! engine.
//!
//! ## Quick Start
//!
//! ```
//! use bet_ledger::router::Router;
//!
//! let router = Router::in_memory();
//! router.invoke::<&str>("init", &[]).unwrap();
//!
//! let all = router.invoke::<&str>("queryAllBets", &[]).unwrap().unwrap();
//! let parsed: serde_json::Value = serde_json::from_slice(&all).unwrap();
//! assert_eq!(parsed.as_array().unwrap().len(), 4);
//! ```
//!
//! ## Operations
//!
//! | Name | Args | Payload |
//! |---|---|---|
//! | `init` | none | none |
//! | `placeBet` | 16 bet fields | none |
//! | `queryBet` | key | raw record |
//! | `queryByBetID` | bet id | raw record |
//! | `queryByDrawID` | draw id | `[{Key, Record}]` |
//! | `queryAllBets` | none | `[{Key, Record}]` |
//! | `queryByRange` | namespace, leading attributes... | `[{Key, Record}]` |

mod context;
pub mod handlers;
mod response;
mod router;
pub mod seed;

pub use context::Context;
pub use response::{Response, STATUS_OK};
pub use router::{Arity, Payload, Router};

/// Register handler modules with a router.
///
/// Each module must export `OPERATION`, `ARITY` and `handle`.
///
/// ```ignore
/// let router = bet_ledger::register_operations!(
///     Router::new(engine),
///     handlers::place_bet,
///     handlers::query_bet,
/// );
/// ```
#[macro_export]
macro_rules! register_operations {
    ($router:expr, $( $($seg:ident)::+ ),+ $(,)?) => {
        $router
        $(
            .operation(
                $($seg)::+::OPERATION,
                $($seg)::+::ARITY,
                $($seg)::+::handle,
            )
        )+
    };
}
