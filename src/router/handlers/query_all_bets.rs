use crate::error::LedgerResult;
use crate::router::{Arity, Context, Payload};
use crate::store::KvStore;

pub const OPERATION: &str = "queryAllBets";
pub const ARITY: Arity = Arity::Exact(0);

pub fn handle<S: KvStore>(ctx: &Context<'_, S>) -> LedgerResult<Payload> {
    let engine = ctx.engine();
    let all = engine.query_all()?;
    engine.serializer().serialize(&all).map(Some)
}
