//! Bet - the one record type this ledger stores.

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};

/// JSON field names in positional order; `placeBet` arguments follow it.
pub const BET_FIELDS: [&str; 16] = [
    "account_number",
    "bet_id",
    "bet_receipt",
    "bet_date",
    "betslip_id",
    "betslip_receipt",
    "pick",
    "betting_source",
    "game",
    "draw_id",
    "total_stake",
    "big_stake",
    "small_stake",
    "currency",
    "bet_type",
    "stake_per_line",
];

/// A single 4D bet. Every attribute, amounts included, is kept as the
/// string the caller supplied.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Bet {
    pub account_number: String,
    pub bet_id: String,
    pub bet_receipt: String,
    pub bet_date: String,
    pub betslip_id: String,
    pub betslip_receipt: String,
    pub pick: String,
    pub betting_source: String,
    pub game: String,
    pub draw_id: String,
    pub total_stake: String,
    pub big_stake: String,
    pub small_stake: String,
    pub currency: String,
    pub bet_type: String,
    pub stake_per_line: String,
}

impl Bet {
    /// Build a bet from exactly sixteen positional values.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> LedgerResult<Self> {
        let [
            account_number,
            bet_id,
            bet_receipt,
            bet_date,
            betslip_id,
            betslip_receipt,
            pick,
            betting_source,
            game,
            draw_id,
            total_stake,
            big_stake,
            small_stake,
            currency,
            bet_type,
            stake_per_line,
        ] = args
        else {
            return Err(LedgerError::BadArgumentCount {
                operation: "placeBet".into(),
                expected: BET_FIELDS.len().to_string(),
                actual: args.len(),
            });
        };

        let s = |v: &S| v.as_ref().to_string();
        Ok(Self {
            account_number: s(account_number),
            bet_id: s(bet_id),
            bet_receipt: s(bet_receipt),
            bet_date: s(bet_date),
            betslip_id: s(betslip_id),
            betslip_receipt: s(betslip_receipt),
            pick: s(pick),
            betting_source: s(betting_source),
            game: s(game),
            draw_id: s(draw_id),
            total_stake: s(total_stake),
            big_stake: s(big_stake),
            small_stake: s(small_stake),
            currency: s(currency),
            bet_type: s(bet_type),
            stake_per_line: s(stake_per_line),
        })
    }

    /// Values in `BET_FIELDS` order.
    pub fn to_args(&self) -> Vec<String> {
        vec![
            self.account_number.clone(),
            self.bet_id.clone(),
            self.bet_receipt.clone(),
            self.bet_date.clone(),
            self.betslip_id.clone(),
            self.betslip_receipt.clone(),
            self.pick.clone(),
            self.betting_source.clone(),
            self.game.clone(),
            self.draw_id.clone(),
            self.total_stake.clone(),
            self.big_stake.clone(),
            self.small_stake.clone(),
            self.currency.clone(),
            self.bet_type.clone(),
            self.stake_per_line.clone(),
        ]
    }

    pub fn to_json(&self) -> LedgerResult<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| LedgerError::MalformedRecord {
            key: self.bet_id.clone(),
            reason: e.to_string(),
        })
    }

    pub fn from_json(key: &str, bytes: &[u8]) -> LedgerResult<Self> {
        serde_json::from_slice(bytes).map_err(|e| LedgerError::MalformedRecord {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }
}
