//! Draw, range and full-scan queries.

use bet_ledger::{InMemoryKvStore, LedgerConfig, Router};
use serde_json::json;

use crate::support::{bet_args, parse_bet, parse_records, record_keys};

fn router_with_bets() -> Router<InMemoryKvStore> {
    let router = Router::in_memory();
    for (bet_id, draw_id, pick) in [
        ("324636", "556578", "1111"),
        ("324640", "556579", "4321"),
        ("324637", "556578", "0087"),
    ] {
        router
            .invoke("placeBet", &bet_args(bet_id, draw_id, pick))
            .unwrap();
    }
    router
}

#[test]
fn example_scenario() {
    let router = Router::in_memory();
    router
        .invoke("placeBet", &bet_args("324636", "556578", "1111"))
        .unwrap();

    let bet = parse_bet(&router.invoke("queryBet", &["324636"]).unwrap().unwrap());
    assert_eq!(bet.bet_id, "324636");
    assert_eq!(bet.pick, "1111");

    let hits = parse_records(&router.invoke("queryByDrawID", &["556578"]).unwrap().unwrap());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["Key"], "324636");
    assert_eq!(hits[0]["Record"]["pick"], "1111");

    let none = router.invoke("queryByDrawID", &["000000"]).unwrap().unwrap();
    assert_eq!(none, b"[]");
}

#[test]
fn draw_query_returns_exactly_the_matches() {
    let router = router_with_bets();
    let hits = parse_records(&router.invoke("queryByDrawID", &["556578"]).unwrap().unwrap());
    let mut keys = record_keys(&hits);
    keys.sort();
    assert_eq!(keys, vec!["324636", "324637"]);
    assert!(hits.iter().all(|h| h["Record"]["draw_id"] == "556578"));
}

#[test]
fn draw_query_cannot_be_widened_by_its_argument() {
    let router = router_with_bets();
    let hits = router
        .invoke("queryByDrawID", &[r#"556578"},"pick":{"$ne":""#])
        .unwrap()
        .unwrap();
    assert_eq!(hits, b"[]");
}

#[test]
fn full_scan_is_in_key_order() {
    let router = router_with_bets();
    let all = parse_records(&router.invoke::<&str>("queryAllBets", &[]).unwrap().unwrap());
    assert_eq!(record_keys(&all), vec!["324636", "324637", "324640"]);
    assert_eq!(router.engine().store().open_cursors(), 0);
}

#[test]
fn full_scan_of_empty_ledger() {
    let router = Router::in_memory();
    let all = router.invoke::<&str>("queryAllBets", &[]).unwrap().unwrap();
    assert_eq!(all, b"[]");
}

#[test]
fn range_query_over_seeded_index() {
    let router = router_with_bets();
    router.invoke::<&str>("init", &[]).unwrap();

    let index = parse_records(&router.invoke("queryByRange", &["BetIndex"]).unwrap().unwrap());
    assert_eq!(
        record_keys(&index),
        vec![
            "BetIndex~4D~324636~",
            "BetIndex~4D~324637~",
            "BetIndex~4D~324638~",
            "BetIndex~4D~324639~",
        ]
    );

    let narrowed = parse_records(
        &router
            .invoke("queryByRange", &["BetIndex", "4D", "324638"])
            .unwrap()
            .unwrap(),
    );
    assert_eq!(record_keys(&narrowed), vec!["BetIndex~4D~324638~"]);
    assert_eq!(narrowed[0]["Record"]["pick"], json!("8700"));

    let other_game = router.invoke("queryByRange", &["BetIndex", "5D"]).unwrap().unwrap();
    assert_eq!(other_game, b"[]");
}

#[test]
fn draw_query_falls_back_to_scan_when_configured() {
    let config = LedgerConfig::default().with_predicate_fallback(true);
    let router = Router::with_config(InMemoryKvStore::without_rich_query(), config);
    router
        .invoke("placeBet", &bet_args("1", "556578", "1111"))
        .unwrap();
    router
        .invoke("placeBet", &bet_args("2", "556579", "2222"))
        .unwrap();

    let hits = parse_records(&router.invoke("queryByDrawID", &["556578"]).unwrap().unwrap());
    assert_eq!(record_keys(&hits), vec!["1"]);
}
