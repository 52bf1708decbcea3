use crate::bet::{Bet, BET_FIELDS};
use crate::error::LedgerResult;
use crate::router::{Arity, Context, Payload};
use crate::store::KvStore;

pub const OPERATION: &str = "placeBet";
pub const ARITY: Arity = Arity::Exact(BET_FIELDS.len());

/// Store one bet, keyed by its bet id. Nothing is returned on success.
pub fn handle<S: KvStore>(ctx: &Context<'_, S>) -> LedgerResult<Payload> {
    let bet = Bet::from_args(ctx.args())?;
    ctx.engine().put_bet(&bet)?;
    Ok(None)
}
