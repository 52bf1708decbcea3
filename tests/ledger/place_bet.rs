//! placeBet round trips and overwrite behaviour.

use bet_ledger::{Bet, Router, BET_FIELDS};

use crate::support::{bet_args, parse_bet, parse_records};

#[test]
fn placed_bet_reads_back_field_for_field() {
    let router = Router::in_memory();
    let args = bet_args("324636", "556578", "1111");

    let payload = router.invoke("placeBet", &args).unwrap();
    assert!(payload.is_none());

    let stored = router.invoke("queryBet", &["324636"]).unwrap().unwrap();
    let bet = parse_bet(&stored);
    assert_eq!(bet.to_args(), args);
    assert_eq!(bet, Bet::from_args(&args).unwrap());
}

#[test]
fn query_by_bet_id_uses_bet_id_as_key() {
    let router = Router::in_memory();
    router
        .invoke("placeBet", &bet_args("324637", "556578", "0087"))
        .unwrap();

    let by_id = router.invoke("queryByBetID", &["324637"]).unwrap();
    let by_key = router.invoke("queryBet", &["324637"]).unwrap();
    assert_eq!(by_id, by_key);
    assert_eq!(parse_bet(&by_id.unwrap()).pick, "0087");
}

#[test]
fn values_are_stored_verbatim() {
    let router = Router::in_memory();
    let mut args = bet_args("1", "2", "3");
    args[10] = "not a number".into();
    args[12] = "-".into();
    args[6] = "quote \" and \\ backslash".into();
    router.invoke("placeBet", &args).unwrap();

    let bet = parse_bet(&router.invoke("queryBet", &["1"]).unwrap().unwrap());
    assert_eq!(bet.total_stake, "not a number");
    assert_eq!(bet.small_stake, "-");
    assert_eq!(bet.pick, "quote \" and \\ backslash");
}

#[test]
fn same_bet_id_overwrites() {
    let router = Router::in_memory();
    router
        .invoke("placeBet", &bet_args("324636", "556578", "1111"))
        .unwrap();
    router
        .invoke("placeBet", &bet_args("324636", "556579", "2222"))
        .unwrap();

    let bet = parse_bet(&router.invoke("queryBet", &["324636"]).unwrap().unwrap());
    assert_eq!(bet.pick, "2222");
    assert_eq!(bet.draw_id, "556579");

    let all = parse_records(&router.invoke::<&str>("queryAllBets", &[]).unwrap().unwrap());
    assert_eq!(all.len(), 1);

    let old_draw = parse_records(&router.invoke("queryByDrawID", &["556578"]).unwrap().unwrap());
    assert!(old_draw.is_empty());
}

#[test]
fn wrong_arity_does_not_mutate() {
    let router = Router::in_memory();
    let mut args = bet_args("324636", "556578", "1111");
    args.pop();
    assert_eq!(args.len(), BET_FIELDS.len() - 1);

    let response = router.handle("placeBet", &args);
    assert_eq!(response.status, 400);
    assert_eq!(
        response.error().unwrap().kind,
        bet_ledger::ErrorKind::BadArgumentCount
    );
    assert!(router.engine().store().is_empty().unwrap());
}
