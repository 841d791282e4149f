use std::time::Duration;

use finance_mcp_lib::alphavantage_api::{Client, Normalizer, ParseError};
use finance_mcp_lib::{FinanceError, IntradayPriceInput, IntradayPriceTool, OverviewTool, SymbolInput};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("../alphavantage_api/tests/fixtures/{}", name)).unwrap()
}

fn intraday_tool(server: &MockServer) -> IntradayPriceTool {
    let client = Client::with_base_url(&server.uri(), "test-key").unwrap();
    IntradayPriceTool::new(client, Normalizer::parallel(2, 2).unwrap())
}

fn input(symbol: &str, interval: &str) -> IntradayPriceInput {
    IntradayPriceInput {
        symbol: symbol.to_string(),
        interval: interval.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn intraday_end_to_end() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/query"))
        .and(query_param("function", "TIME_SERIES_INTRADAY"))
        .and(query_param("symbol", "MSFT"))
        .and(query_param("interval", "1min"))
        .and(query_param("extended_hours", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("intraday_1min.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let series = intraday_tool(&mock_server)
        .get(&IntradayPriceInput {
            extended_hours: Some(false),
            ..input(" msft", "1min")
        })
        .await
        .unwrap();

    assert_eq!(series.meta_data.symbol, "MSFT");
    let closes: Vec<f64> = series.time_series.iter().map(|b| b.close).collect();
    assert_eq!(closes, vec![380.30, 380.50, 380.60]);
}

#[tokio::test]
async fn invalid_input_never_reaches_upstream() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let tool = intraday_tool(&mock_server);
    assert!(matches!(
        tool.get(&input("   ", "1min")).await,
        Err(FinanceError::InvalidSymbol(_))
    ));
    assert!(matches!(
        tool.get(&input("IBM", "2min")).await,
        Err(FinanceError::InvalidParameter { .. })
    ));
}

#[tokio::test]
async fn rate_limit_note_is_retryable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("rate_limit_note.json")))
        .mount(&mock_server)
        .await;

    let err = intraday_tool(&mock_server)
        .get(&input("IBM", "5min"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        FinanceError::Parse(ParseError::UpstreamRateLimited(_))
    ));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn empty_series_reports_no_time_series_data() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("intraday_empty.json")))
        .mount(&mock_server)
        .await;

    let err = intraday_tool(&mock_server)
        .get(&input("ibm", "30min"))
        .await
        .unwrap_err();
    match err {
        FinanceError::Parse(ParseError::NoTimeSeriesData { symbol }) => assert_eq!(symbol, "IBM"),
        other => panic!("expected NoTimeSeriesData, got {:?}", other),
    }
}

#[tokio::test]
async fn bad_price_fails_whole_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("intraday_bad_price.json")))
        .mount(&mock_server)
        .await;

    let err = intraday_tool(&mock_server)
        .get(&input("AAPL", "5min"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("2024-01-15 19:55:00"));
}

#[tokio::test]
async fn slow_upstream_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(load_fixture("intraday_1min.json"))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-key")
        .unwrap()
        .with_timeout(Duration::from_millis(100));
    let tool = IntradayPriceTool::new(client, Normalizer::sequential());
    let err = tool.get(&input("MSFT", "1min")).await.unwrap_err();
    assert!(matches!(
        err,
        FinanceError::Api(finance_mcp_lib::alphavantage_api::Error::Timeout(_))
    ));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn overview_end_to_end() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/query"))
        .and(query_param("function", "OVERVIEW"))
        .and(query_param("symbol", "IBM"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("overview_ibm.json")))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-key").unwrap();
    let overview = OverviewTool::new(client, Normalizer::sequential())
        .get(&SymbolInput {
            symbol: "ibm".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(overview.exchange.as_deref(), Some("NYSE"));
}

#[tokio::test]
async fn overview_unknown_symbol() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-key").unwrap();
    let err = OverviewTool::new(client, Normalizer::sequential())
        .get(&SymbolInput {
            symbol: "zzzz".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        FinanceError::Parse(ParseError::NoDataForSymbol { ref symbol }) if symbol == "ZZZZ"
    ));
}
