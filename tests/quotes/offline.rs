use httpmock::Method::GET;
use qtquote_rs::{MarketSnapshot, Profile, QuoteBook};

use crate::common::{
    Session, client_for, fixture, gbk, index_record, mock_market, mock_quotes, record_with_width,
    setup_server, stock_record,
};

fn two_stock_body() -> Vec<u8> {
    gbk(&[
        stock_record("sh600519", "贵州茅台", "1700.00", "10.00", "25.76", "21355.35"),
        stock_record("sz000001", "平安银行", "10.50", "-0.12", "4.61", "2037.63"),
    ]
    .concat())
}

#[tokio::test]
async fn refresh_decodes_and_parses_gbk_body() {
    let server = setup_server();
    let mock = mock_quotes(&server, "sh600519,sz000001", &two_stock_body());

    let profile = Profile::with_tickers(["sh600519", "sz000001"]).unwrap();
    let mut quotes = QuoteBook::new(&client_for(&server), profile);

    let (ok, message) = quotes.refresh(&Session::OPEN).await.ok();
    assert!(ok, "unexpected error: {message}");
    mock.assert();

    let stocks = quotes.stocks().unwrap();
    assert_eq!(stocks.len(), 2);
    assert_eq!(stocks[0].name, "贵州茅台");
    assert_eq!(stocks[0].ticker, "sh600519");
    assert!(stocks[0].advancing);
    assert_eq!(stocks[1].name, "平安银行");
    assert_eq!(stocks[1].change, "-0.12");
    assert!(!stocks[1].advancing);
}

#[tokio::test]
async fn parses_by_code_not_by_request_order() {
    let server = setup_server();
    // Response order differs from request order.
    let body = gbk(&[
        stock_record("sz000001", "平安银行", "10.50", "-0.12", "4.61", "2037.63"),
        stock_record("sh600519", "贵州茅台", "1700.00", "10.00", "25.76", "21355.35"),
    ]
    .concat());
    let _mock = mock_quotes(&server, "sh600519,sz000001", &body);

    let profile = Profile::with_tickers(["sh600519", "sz000001"]).unwrap();
    let mut quotes = QuoteBook::new(&client_for(&server), profile);
    quotes.refresh(&Session::OPEN).await;

    let stocks = quotes.stocks().unwrap();
    assert_eq!(stocks[0].ticker, "sz000001");
    assert_eq!(stocks[0].name, "平安银行");
    assert_eq!(stocks[1].ticker, "sh600519");
    assert_eq!(stocks[1].last_trade, "1700.00");
}

#[tokio::test]
async fn truncated_record_does_not_poison_the_refresh() {
    let server = setup_server();
    let body = gbk(&[
        record_with_width("sh601318", "中国平安", &[(3, "41.20")], 12),
        stock_record("sz000001", "平安银行", "10.50", "-0.12", "4.61", "2037.63"),
    ]
    .concat());
    let _mock = mock_quotes(&server, "sh601318,sz000001", &body);

    let profile = Profile::with_tickers(["sh601318", "sz000001"]).unwrap();
    let mut quotes = QuoteBook::new(&client_for(&server), profile);

    assert_eq!(quotes.refresh(&Session::OPEN).await.ok(), (true, ""));
    let stocks = quotes.stocks().unwrap();
    assert_eq!(stocks.len(), 1);
    assert_eq!(stocks[0].ticker, "sz000001");
    assert_eq!(stocks[0].pe_ratio, "4.61");
}

#[tokio::test]
async fn decode_failure_keeps_previous_stocks() {
    let server = setup_server();
    let profile = Profile::with_tickers(["sh600519", "sz000001"]).unwrap();
    let mut quotes = QuoteBook::new(&client_for(&server), profile);

    let mut good = mock_quotes(&server, "sh600519,sz000001", &two_stock_body());
    quotes.refresh(&Session::OPEN).await;
    good.delete();

    let mut broken = two_stock_body();
    broken.push(0x81);
    let bad = mock_quotes(&server, "sh600519,sz000001", &broken);
    quotes.refresh(&Session::OPEN).await;
    bad.assert();

    let (ok, message) = quotes.ok();
    assert!(!ok);
    assert!(message.contains("GBK"), "message: {message}");
    assert_eq!(quotes.stocks().unwrap().len(), 2);
}

#[tokio::test]
async fn network_failure_keeps_previous_stocks_and_success_clears_error() {
    let server = setup_server();
    let profile = Profile::with_tickers(["sh600519"]).unwrap();
    let mut quotes = QuoteBook::new(&client_for(&server), profile);

    let body = gbk(&stock_record("sh600519", "贵州茅台", "1700.00", "10.00", "25.76", "21355.35"));
    let mut good = mock_quotes(&server, "sh600519", &body);
    quotes.refresh(&Session::OPEN).await;
    good.delete();

    let mut failing = server.mock(|when, then| {
        when.method(GET).path("/q=sh600519");
        then.status(500);
    });
    quotes.refresh(&Session::OPEN).await;
    assert!(!quotes.ok().0);
    assert_eq!(quotes.stocks().unwrap()[0].last_trade, "1700.00");
    failing.delete();

    let _good = mock_quotes(&server, "sh600519", &body);
    assert_eq!(quotes.refresh(&Session::OPEN).await.ok(), (true, ""));
}

#[tokio::test]
async fn market_snapshot_drives_the_gate() {
    let server = setup_server();
    let _market_mock = mock_market(
        &server,
        &gbk(&index_record("sh000001", "3051.23", "-12.34", "-0.40")),
    );
    let quotes_mock = mock_quotes(&server, "sh600519,sz000001", &two_stock_body());

    let client = client_for(&server);
    let mut market = MarketSnapshot::new(&client);
    let profile = Profile::with_tickers(["sh600519", "sz000001"]).unwrap();
    let mut quotes = QuoteBook::new(&client, profile);

    market.refresh().await;
    quotes.refresh(&market).await;
    quotes.refresh(&market).await;

    // Default hours never close, so every refresh goes out.
    quotes_mock.assert_hits(2);
}

#[tokio::test]
async fn offline_quotes_use_recorded_fixture() {
    // Skip if the recorded fixture isn't present; run with `--features test-mode` and QT_RECORD=1 first.
    let Some(body) = fixture("quotes_sh600519-sz000001") else {
        eprintln!("skipping offline test: missing tests/fixtures/quotes_sh600519-sz000001.txt");
        return;
    };

    let server = setup_server();
    let _mock = mock_quotes(&server, "sh600519,sz000001", &body);

    let profile = Profile::with_tickers(["sh600519", "sz000001"]).unwrap();
    let mut quotes = QuoteBook::new(&client_for(&server), profile);
    quotes.refresh(&Session::OPEN).await;

    let stocks = quotes.stocks().unwrap();
    let tickers: Vec<_> = stocks.iter().map(|s| s.ticker.as_str()).collect();
    assert!(tickers.contains(&"sh600519"));
    assert!(tickers.contains(&"sz000001"));
}
