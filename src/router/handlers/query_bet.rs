use crate::error::{LedgerError, LedgerResult};
use crate::router::{Arity, Context, Payload};
use crate::store::KvStore;

pub const OPERATION: &str = "queryBet";
pub const ARITY: Arity = Arity::Exact(1);

/// Raw record stored at an arbitrary key (plain or composite).
pub fn handle<S: KvStore>(ctx: &Context<'_, S>) -> LedgerResult<Payload> {
    let key = ctx.arg(0);
    ctx.engine()
        .query_by_primary_key(key)?
        .map(Some)
        .ok_or_else(|| LedgerError::NotFound(key.to_string()))
}
