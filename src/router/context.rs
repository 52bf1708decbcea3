//! Context passed to operation handlers.
//!
//! Carries the operation name, its positional arguments, and the query
//! engine. Handlers reach everything they need through it.

use crate::query::QueryEngine;

/// The context passed to every operation handler.
///
/// Generic over `S` (the store type) so handlers run against whatever
/// `KvStore` the router was built with.
pub struct Context<'a, S> {
    /// The operation name being handled.
    operation: &'a str,
    /// Positional arguments, already arity-checked.
    args: Vec<String>,
    /// Engine over the router's store.
    engine: &'a QueryEngine<S>,
}

impl<'a, S> Context<'a, S> {
    /// Create a new context.
    pub(crate) fn new(operation: &'a str, args: Vec<String>, engine: &'a QueryEngine<S>) -> Self {
        Self {
            operation,
            args,
            engine,
        }
    }

    /// Name the operation was invoked by.
    pub fn operation(&self) -> &str {
        self.operation
    }

    /// Positional argument `index`. Arity is checked before a handler runs,
    /// so handlers index within their declared arity.
    pub fn arg(&self, index: usize) -> &str {
        self.args.get(index).map(String::as_str).unwrap_or_default()
    }

    /// All positional arguments.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The query engine.
    pub fn engine(&self) -> &QueryEngine<S> {
        self.engine
    }
}
