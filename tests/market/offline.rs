use httpmock::Method::GET;
use qtquote_rs::{MarketHours, MarketIndex, MarketSnapshot, MarketStatus};

use crate::common::{MARKET_QUERY, client_for, fixture, gbk, index_record, mock_market, setup_server};

fn two_index_body() -> Vec<u8> {
    let mut body = gbk(&index_record("sh000001", "3051.23", "-12.34", "-0.40"));
    body.extend(gbk(&index_record("usDJI", "38996.39", "125.69", "0.32")));
    body
}

#[tokio::test]
async fn refresh_populates_exactly_the_returned_buckets() {
    let server = setup_server();
    let mock = mock_market(&server, &two_index_body());

    let client = client_for(&server);
    let mut market = MarketSnapshot::new(&client);
    assert!(market.board().index(MarketIndex::Shanghai).is_empty());

    let (ok, message) = market.refresh().await.ok();
    assert!(ok, "unexpected error: {message}");
    mock.assert();

    let board = market.board();
    let shanghai = board.index(MarketIndex::Shanghai);
    assert_eq!(shanghai.latest(), Some("3051.23"));
    assert_eq!(shanghai.change(), Some("-12.34"));
    assert_eq!(shanghai.percent(), Some("-0.40"));
    assert_eq!(board.index(MarketIndex::Dow).latest(), Some("38996.39"));

    for empty in [
        MarketIndex::Shenzhen,
        MarketIndex::ChiNext,
        MarketIndex::HongKong,
        MarketIndex::Sp500,
        MarketIndex::Nasdaq,
    ] {
        assert!(board.index(empty).is_empty(), "{empty:?} should be empty");
    }
}

#[tokio::test]
async fn next_fetch_replaces_the_board_wholesale() {
    let server = setup_server();
    let client = client_for(&server);
    let mut market = MarketSnapshot::new(&client);

    let mut first = mock_market(&server, &two_index_body());
    market.refresh().await;
    let before = market.board();
    first.delete();

    let _second = mock_market(
        &server,
        &gbk(&index_record("usIXIC", "16274.94", "-144.28", "-0.88")),
    );
    market.refresh().await;
    let after = market.board();

    // Readers holding the old board keep it.
    assert_eq!(before.index(MarketIndex::Shanghai).latest(), Some("3051.23"));
    assert!(after.index(MarketIndex::Shanghai).is_empty());
    assert!(after.index(MarketIndex::Dow).is_empty());
    assert_eq!(after.index(MarketIndex::Nasdaq).latest(), Some("16274.94"));
}

#[tokio::test]
async fn failed_refresh_keeps_board_and_reports_error() {
    let server = setup_server();
    let client = client_for(&server);
    let mut market = MarketSnapshot::new(&client);

    let mut good = mock_market(&server, &two_index_body());
    market.refresh().await;
    good.delete();

    let failing = server.mock(|when, then| {
        when.method(GET).path("/").query_param("q", MARKET_QUERY);
        then.status(500).body("oops");
    });
    market.refresh().await;
    failing.assert();

    let (ok, message) = market.ok();
    assert!(!ok);
    assert!(message.contains("500"), "message: {message}");
    assert_eq!(
        market.board().index(MarketIndex::Dow).latest(),
        Some("38996.39")
    );
}

#[tokio::test]
async fn success_clears_previous_error() {
    let server = setup_server();
    let client = client_for(&server);
    let mut market = MarketSnapshot::new(&client);

    let mut failing = server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(502);
    });
    assert!(!market.refresh().await.ok().0);
    failing.delete();

    let _good = mock_market(&server, &two_index_body());
    assert_eq!(market.refresh().await.ok(), (true, ""));
}

#[tokio::test]
async fn closed_flag_follows_configured_hours() {
    let server = setup_server();
    let _mock = mock_market(&server, &two_index_body());
    let client = client_for(&server);

    let mut open = MarketSnapshot::new(&client);
    assert!(!open.is_closed());
    open.refresh().await;
    assert!(!open.is_closed());

    let mut shanghai = MarketSnapshot::new(&client).hours(MarketHours::Shanghai);
    assert!(!shanghai.is_closed(), "not closed before the first fetch");
    shanghai.refresh().await;
    assert_eq!(
        shanghai.is_closed(),
        !MarketHours::Shanghai.is_open_at(chrono::Utc::now())
    );
}

#[tokio::test]
async fn offline_market_uses_recorded_fixture() {
    // Skip if the recorded fixture isn't present; run with `--features test-mode` and QT_RECORD=1 first.
    let Some(body) = fixture("market") else {
        eprintln!("skipping offline test: missing tests/fixtures/market.txt");
        return;
    };

    let server = setup_server();
    let _mock = mock_market(&server, &body);
    let client = client_for(&server);

    let mut market = MarketSnapshot::new(&client);
    assert!(market.refresh().await.ok().0);
    assert!(!market.board().index(MarketIndex::Shanghai).is_empty());
}
