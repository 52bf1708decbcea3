use crate::error::{LedgerError, LedgerResult};
use crate::router::{Arity, Context, Payload};
use crate::store::KvStore;

pub const OPERATION: &str = "queryByRange";
pub const ARITY: Arity = Arity::AtLeast(1);

/// Arguments: namespace, then any leading attribute values to narrow by
/// (e.g. `BetIndex 4D`).
pub fn handle<S: KvStore>(ctx: &Context<'_, S>) -> LedgerResult<Payload> {
    let Some((namespace, leading)) = ctx.args().split_first() else {
        return Err(LedgerError::BadArgumentCount {
            operation: OPERATION.into(),
            expected: ARITY.to_string(),
            actual: 0,
        });
    };
    let engine = ctx.engine();
    let entries = engine.query_by_range(namespace, leading)?;
    engine.serializer().serialize(&entries).map(Some)
}
