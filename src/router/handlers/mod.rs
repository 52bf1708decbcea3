//! Ledger operations, one module each.
//!
//! Every module exports:
//! - `OPERATION: &str` - the name callers invoke it by
//! - `ARITY: Arity` - how many positional arguments it takes
//! - `handle(ctx) -> LedgerResult<Payload>` - the handler

pub mod init;
pub mod place_bet;
pub mod query_all_bets;
pub mod query_bet;
pub mod query_by_bet_id;
pub mod query_by_draw_id;
pub mod query_by_range;
