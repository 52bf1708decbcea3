//! Router - operation table and dispatch.
//!
//! `Router<S>` holds a query engine and a set of named operations. Each
//! operation declares its arity; dispatch checks it before the handler runs,
//! so a call with the wrong number of arguments never touches the store.

use std::collections::HashMap;
use std::fmt;

use tracing::{info, warn};

use super::context::Context;
use super::handlers;
use super::response::Response;
use crate::config::LedgerConfig;
use crate::error::{LedgerError, LedgerResult};
use crate::query::QueryEngine;
use crate::store::{InMemoryKvStore, KvStore};

/// What a successful operation hands back: raw bytes, or nothing.
pub type Payload = Option<Vec<u8>>;

/// Number of positional arguments an operation takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match *self {
            Arity::Exact(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exact(n) => write!(f, "{}", n),
            Arity::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}

type Handler<S> = Box<dyn Fn(&Context<'_, S>) -> LedgerResult<Payload> + Send + Sync>;

struct Operation<S> {
    arity: Arity,
    handle: Handler<S>,
}

/// Maps operation names to handlers over one query engine.
pub struct Router<S> {
    engine: QueryEngine<S>,
    operations: HashMap<String, Operation<S>>,
}

impl Router<InMemoryKvStore> {
    /// A ledger over a fresh in-memory store with default config.
    pub fn in_memory() -> Self {
        Self::ledger(QueryEngine::new(InMemoryKvStore::new()))
    }
}

impl<S: KvStore + 'static> Router<S> {
    /// A router with no operations registered.
    pub fn new(engine: QueryEngine<S>) -> Self {
        Self {
            engine,
            operations: HashMap::new(),
        }
    }

    /// A router with every ledger operation registered.
    pub fn ledger(engine: QueryEngine<S>) -> Self {
        crate::register_operations!(
            Self::new(engine),
            handlers::init,
            handlers::place_bet,
            handlers::query_bet,
            handlers::query_by_bet_id,
            handlers::query_by_draw_id,
            handlers::query_all_bets,
            handlers::query_by_range,
        )
    }

    /// Ledger over `store` configured from `config`.
    pub fn with_config(store: S, config: LedgerConfig) -> Self {
        Self::ledger(QueryEngine::with_config(store, config))
    }

    /// Register an operation. Builder style; a later registration under the
    /// same name replaces the earlier one.
    pub fn operation<F>(mut self, name: &str, arity: Arity, handler: F) -> Self
    where
        F: Fn(&Context<'_, S>) -> LedgerResult<Payload> + Send + Sync + 'static,
    {
        self.operations.insert(
            name.to_string(),
            Operation {
                arity,
                handle: Box::new(handler),
            },
        );
        self
    }

    /// Run an operation by name.
    pub fn invoke<A: AsRef<str>>(&self, operation: &str, args: &[A]) -> LedgerResult<Payload> {
        info!(operation, args = args.len(), "invoking operation");

        let op = self
            .operations
            .get(operation)
            .ok_or_else(|| LedgerError::UnknownOperation(operation.to_string()))?;

        if !op.arity.accepts(args.len()) {
            return Err(LedgerError::BadArgumentCount {
                operation: operation.to_string(),
                expected: op.arity.to_string(),
                actual: args.len(),
            });
        }

        let args = args.iter().map(|a| a.as_ref().to_string()).collect();
        let ctx = Context::new(operation, args, &self.engine);
        (op.handle)(&ctx)
    }

    /// Run an operation and fold the outcome into a `Response`.
    pub fn handle<A: AsRef<str>>(&self, operation: &str, args: &[A]) -> Response {
        match self.invoke(operation, args) {
            Ok(payload) => Response::success(payload),
            Err(err) => {
                warn!(operation, kind = ?err.kind(), error = %err, "operation failed");
                Response::failure(&err)
            }
        }
    }

    /// Host start-up hook. Leaves state untouched.
    pub fn bootstrap(&self) -> Response {
        info!(operations = self.operations.len(), "initializing bet ledger");
        Response::success(None)
    }

    /// Registered operation names, sorted.
    pub fn operations(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.operations.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn engine(&self) -> &QueryEngine<S> {
        &self.engine
    }
}
