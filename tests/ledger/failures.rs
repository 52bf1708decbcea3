//! Error surface: every failure is a structured response.

use bet_ledger::{ErrorKind, InMemoryKvStore, LedgerConfig, QueryEngine, Router};

use crate::support::bet_args;

#[test]
fn unknown_operation() {
    let router = Router::in_memory();
    let response = router.handle::<&str>("queryAllBet", &[]);
    assert_eq!(response.status, 404);
    let body = response.error().unwrap();
    assert_eq!(body.kind, ErrorKind::UnknownOperation);
    assert!(body.message.contains("queryAllBet"));
}

#[test]
fn point_query_miss_is_not_found() {
    let router = Router::in_memory();
    for op in ["queryBet", "queryByBetID"] {
        let err = router.invoke(op, &["nope"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound, "{}", op);
    }
}

#[test]
fn single_argument_queries_check_arity() {
    let router = Router::in_memory();
    for op in ["queryBet", "queryByBetID", "queryByDrawID"] {
        assert_eq!(
            router.invoke::<&str>(op, &[]).unwrap_err().kind(),
            ErrorKind::BadArgumentCount
        );
        assert_eq!(
            router.invoke(op, &["a", "b"]).unwrap_err().kind(),
            ErrorKind::BadArgumentCount
        );
    }
    assert_eq!(
        router.invoke::<&str>("queryByRange", &[]).unwrap_err().kind(),
        ErrorKind::BadArgumentCount
    );
}

#[test]
fn draw_query_without_rich_query_is_unsupported() {
    let router = Router::ledger(QueryEngine::new(InMemoryKvStore::without_rich_query()));
    router
        .invoke("placeBet", &bet_args("1", "556578", "1111"))
        .unwrap();

    let response = router.handle("queryByDrawID", &["556578"]);
    assert_eq!(response.status, 501);
    assert_eq!(response.error().unwrap().kind, ErrorKind::QueryUnsupported);

    // the plain scan still works on the same store
    let all = router.invoke::<&str>("queryAllBets", &[]);
    assert!(all.is_ok());
}

#[test]
fn draw_query_rejects_nothing_place_bet_accepts() {
    let router = Router::in_memory();
    let draw_id = "5565\n\u{0}78";
    router
        .invoke("placeBet", &bet_args("1", draw_id, "1111"))
        .unwrap();
    router
        .invoke("placeBet", &bet_args("2", "556578", "2222"))
        .unwrap();

    let hits = router.invoke("queryByDrawID", &[draw_id]).unwrap().unwrap();
    let hits: serde_json::Value = serde_json::from_slice(&hits).unwrap();
    assert_eq!(hits.as_array().unwrap().len(), 1);
    assert_eq!(hits[0]["Key"], "1");
    assert_eq!(hits[0]["Record"]["draw_id"], draw_id);
}

#[test]
fn range_query_rejects_more_values_than_the_index_has() {
    let router = Router::in_memory();
    router.invoke::<&str>("init", &[]).unwrap();

    let response = router.handle("queryByRange", &["BetIndex", "4D", "324636", "x", "y"]);
    assert_eq!(response.status, 400);
    assert_eq!(response.error().unwrap().kind, ErrorKind::InvalidAttribute);

    let exact = router
        .invoke("queryByRange", &["BetIndex", "4D", "324636"])
        .unwrap()
        .unwrap();
    let exact: serde_json::Value = serde_json::from_slice(&exact).unwrap();
    assert_eq!(exact.as_array().unwrap().len(), 1);
}

#[test]
fn configured_namespace_is_arity_checked() {
    let config = LedgerConfig {
        seed_namespace: "Lottery".into(),
        ..LedgerConfig::default()
    };
    let router = Router::with_config(InMemoryKvStore::new(), config);
    let err = router
        .invoke("queryByRange", &["Lottery", "4D", "1", "extra"])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidAttribute);
}

#[test]
fn separator_in_range_attribute_is_rejected() {
    let router = Router::in_memory();
    let err = router
        .invoke("queryByRange", &["BetIndex", "4~D"])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidAttribute);
}

#[test]
fn offline_store_is_unavailable() {
    let router = Router::in_memory();
    router.engine().store().set_available(false);

    let response = router.handle("placeBet", &bet_args("1", "2", "3"));
    assert_eq!(response.status, 503);
    assert_eq!(response.error().unwrap().kind, ErrorKind::StoreUnavailable);

    let err = router.invoke::<&str>("queryAllBets", &[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::StoreUnavailable);
}

#[test]
fn interrupted_scan_releases_cursor() {
    let router = Router::in_memory();
    router.invoke::<&str>("init", &[]).unwrap();
    router.engine().store().fail_scans_after(Some(2));

    let err = router.invoke::<&str>("queryAllBets", &[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::StoreUnavailable);
    assert_eq!(router.engine().store().open_cursors(), 0);
}
