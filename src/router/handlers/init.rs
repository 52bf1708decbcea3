use tracing::info;

use crate::error::LedgerResult;
use crate::router::{seed, Arity, Context, Payload};
use crate::store::KvStore;

pub const OPERATION: &str = "init";
pub const ARITY: Arity = Arity::Exact(0);

/// Load the demonstration bets.
pub fn handle<S: KvStore>(ctx: &Context<'_, S>) -> LedgerResult<Payload> {
    let keys = seed::seed(ctx.engine())?;
    info!(records = keys.len(), "seeded demonstration bets");
    Ok(None)
}
