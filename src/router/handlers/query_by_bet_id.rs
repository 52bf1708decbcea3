use crate::error::{LedgerError, LedgerResult};
use crate::router::{Arity, Context, Payload};
use crate::store::KvStore;

pub const OPERATION: &str = "queryByBetID";
pub const ARITY: Arity = Arity::Exact(1);

/// Raw record of a placed bet. The bet id is its store key.
pub fn handle<S: KvStore>(ctx: &Context<'_, S>) -> LedgerResult<Payload> {
    let bet_id = ctx.arg(0);
    match ctx.engine().query_by_primary_key(bet_id)? {
        Some(record) => Ok(Some(record)),
        None => Err(LedgerError::NotFound(format!("bet {}", bet_id))),
    }
}
