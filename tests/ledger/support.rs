//! Shared fixtures for ledger tests.

use bet_ledger::{Bet, BET_FIELDS};
use serde_json::Value;

/// A demonstration literal with a doubled quote before
/// `account_number`, which makes it invalid JSON.
pub const CORRUPT_SEED_RECORD: &str = r#"{""account_number": "010432899", "bet_id": "324636", "bet_receipt": "L/0040544/0000001", "bet_date": "2018-09-07 10:14:35", "betslip_id": "36006", "betslip_receipt": "B/0040544/0000001", "pick": "1111", "betting_source": "internet", "game": "4D", "draw_id": "556578", "total_stake": "10.00", "big_stake": "5.00", "small_stake": "5.00", "currency": "SGD", "bet_type": "4D", "stake_per_line": "1.00" }"#;

/// Sixteen positional `placeBet` arguments with the given identity fields.
pub fn bet_args(bet_id: &str, draw_id: &str, pick: &str) -> Vec<String> {
    BET_FIELDS
        .iter()
        .map(|field| match *field {
            "bet_id" => bet_id.to_string(),
            "draw_id" => draw_id.to_string(),
            "pick" => pick.to_string(),
            "game" => "4D".to_string(),
            "total_stake" => "10.00".to_string(),
            other => format!("{}-{}", other, bet_id),
        })
        .collect()
}

pub fn parse_bet(payload: &[u8]) -> Bet {
    serde_json::from_slice(payload).expect("payload is a bet")
}

/// Parse a `[{Key, Record}]` payload.
pub fn parse_records(payload: &[u8]) -> Vec<Value> {
    match serde_json::from_slice(payload).expect("payload is JSON") {
        Value::Array(items) => items,
        other => panic!("expected array, got {}", other),
    }
}

pub fn record_keys(records: &[Value]) -> Vec<String> {
    records
        .iter()
        .map(|r| r["Key"].as_str().expect("Key is a string").to_string())
        .collect()
}
