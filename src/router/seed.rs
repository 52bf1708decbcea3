//! Demonstration bets loaded by the `init` operation.

use tracing::debug;

use crate::bet::Bet;
use crate::error::LedgerResult;
use crate::query::QueryEngine;
use crate::store::KvStore;

/// Positional values of the demonstration bets, `game` left blank so the
/// configured game can be filled in.
const SEED_ROWS: [[&str; 16]; 4] = [
    [
        "010432899", "324636", "L/0040544/0000001", "2018-09-07 10:14:35", "36006",
        "B/0040544/0000001", "1111", "internet", "", "556578", "10.00", "5.00", "5.00", "SGD",
        "4D", "1.00",
    ],
    [
        "010432899", "324637", "L/0040544/0000002", "2018-09-07 10:15:35", "36007",
        "B/0040544/0000002", "0087", "internet", "", "556578", "24.00", "1.00", "1.00", "SGD",
        "4D1PG", "2.00",
    ],
    [
        "010432899", "324638", "L/0040544/0000003", "2018-09-07 10:15:21", "36008",
        "B/0040544/0000003", "8700", "internet", "", "556578", "2.00", "1.00", "1.00", "SGD",
        "4D1iG", "2.00",
    ],
    [
        "010432899", "324639", "L/0040544/0000004", "2018-09-07 10:15:48", "36009",
        "B/0040544/0000004", "123R", "internet", "", "556578", "10.00", "1.00", "-", "SGD",
        "4DR4B", "1.00",
    ],
];

/// The demonstration bets for `game`.
pub fn seed_bets(game: &str) -> LedgerResult<Vec<Bet>> {
    SEED_ROWS
        .iter()
        .map(|row| {
            let mut bet = Bet::from_args(&row[..])?;
            bet.game = game.to_string();
            Ok(bet)
        })
        .collect()
}

/// Write the demonstration bets under the configured bet index and return
/// the keys written, in insertion order.
pub fn seed<S: KvStore>(engine: &QueryEngine<S>) -> LedgerResult<Vec<String>> {
    let config = engine.config();
    let schema = config.seed_schema()?;

    let mut keys = Vec::with_capacity(SEED_ROWS.len());
    for bet in seed_bets(&config.seed_game)? {
        let key = schema.build(&[bet.game.as_str(), bet.bet_id.as_str()])?;
        engine.put_record(&key, bet.to_json()?)?;
        debug!(key = %key, "seeded bet");
        keys.push(key);
    }
    Ok(keys)
}
