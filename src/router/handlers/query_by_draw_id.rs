use crate::error::LedgerResult;
use crate::router::{Arity, Context, Payload};
use crate::store::KvStore;

pub const OPERATION: &str = "queryByDrawID";
pub const ARITY: Arity = Arity::Exact(1);

pub const DRAW_ID_FIELD: &str = "draw_id";

/// `[{Key, Record}]` for every record whose `draw_id` equals the argument.
pub fn handle<S: KvStore>(ctx: &Context<'_, S>) -> LedgerResult<Payload> {
    let engine = ctx.engine();
    let matched = engine.query_by_predicate(DRAW_ID_FIELD, ctx.arg(0))?;
    engine.serializer().serialize(&matched).map(Some)
}
