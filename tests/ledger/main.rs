//! Ledger integration tests.

mod support;
mod failures;
mod place_bet;
mod queries;
