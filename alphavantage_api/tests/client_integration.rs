use std::time::Duration;

use alphavantage_api::{Client, Error, Interval, IntradayQuery, Normalizer, OutputSize, OverviewQuery};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

async fn mount_status(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn get_intraday_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("intraday_1min.json");

    Mock::given(method("GET"))
        .and(path("/query"))
        .and(query_param("function", "TIME_SERIES_INTRADAY"))
        .and(query_param("symbol", "MSFT"))
        .and(query_param("interval", "1min"))
        .and(query_param("outputsize", "full"))
        .and(query_param("apikey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-key").unwrap();
    let query = IntradayQuery::new(" msft ", Interval::OneMinute).with_output_size(OutputSize::Full);
    let raw = client.get_intraday(&query).await.unwrap();

    let series = Normalizer::sequential()
        .normalize_intraday(&raw, "MSFT")
        .unwrap();
    assert_eq!(series.time_series.len(), 3);
    assert_eq!(series.meta_data.symbol, "MSFT");
}

#[tokio::test]
async fn get_overview_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/query"))
        .and(query_param("function", "OVERVIEW"))
        .and(query_param("symbol", "IBM"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("overview_ibm.json")))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "demo").unwrap();
    let raw = client.get_overview(&OverviewQuery::new("ibm")).await.unwrap();
    let overview = Normalizer::sequential()
        .normalize_overview(&raw, "IBM")
        .unwrap();
    assert_eq!(overview.name.as_deref(), Some("International Business Machines"));
}

#[tokio::test]
async fn upstream_error_in_200_is_not_a_transport_error() {
    let mock_server = MockServer::start().await;
    mount_status(&mock_server, 200, &load_fixture("rate_limit_note.json")).await;

    let client = Client::with_base_url(&mock_server.uri(), "demo").unwrap();
    let raw = client
        .get_intraday(&IntradayQuery::new("IBM", Interval::FiveMinutes))
        .await;
    assert!(raw.is_ok());
}

#[tokio::test]
async fn status_429_is_rate_limited() {
    let mock_server = MockServer::start().await;
    mount_status(&mock_server, 429, "slow down").await;

    let client = Client::with_base_url(&mock_server.uri(), "demo").unwrap();
    let err = client
        .get_intraday(&IntradayQuery::new("IBM", Interval::FiveMinutes))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::RateLimited));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn status_401_is_invalid_key() {
    let mock_server = MockServer::start().await;
    mount_status(&mock_server, 401, "").await;

    let client = Client::with_base_url(&mock_server.uri(), "wrong").unwrap();
    let err = client.get_overview(&OverviewQuery::new("IBM")).await.unwrap_err();
    assert!(matches!(err, Error::InvalidApiKey));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn status_403_is_forbidden() {
    let mock_server = MockServer::start().await;
    mount_status(&mock_server, 403, "").await;

    let client = Client::with_base_url(&mock_server.uri(), "demo").unwrap();
    let err = client.get_overview(&OverviewQuery::new("IBM")).await.unwrap_err();
    assert!(matches!(err, Error::Forbidden));
}

#[tokio::test]
async fn server_error_keeps_status_and_body() {
    let mock_server = MockServer::start().await;
    mount_status(&mock_server, 503, "Service Unavailable").await;

    let client = Client::with_base_url(&mock_server.uri(), "demo").unwrap();
    let err = client.get_overview(&OverviewQuery::new("IBM")).await.unwrap_err();
    match &err {
        Error::HttpStatus { status, body } => {
            assert_eq!(*status, 503);
            assert_eq!(body, "Service Unavailable");
        }
        other => panic!("expected HttpStatus, got {:?}", other),
    }
    assert!(err.is_retryable());
}

#[tokio::test]
async fn slow_response_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("{}")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "demo")
        .unwrap()
        .with_timeout(Duration::from_millis(100));
    let err = client.get_overview(&OverviewQuery::new("IBM")).await.unwrap_err();
    assert!(matches!(err, Error::Timeout(_)));
}

#[tokio::test]
async fn unreachable_host_is_request_failed() {
    let client = Client::with_base_url("http://127.0.0.1:1", "demo").unwrap();
    let err = client.get_overview(&OverviewQuery::new("IBM")).await.unwrap_err();
    assert!(matches!(err, Error::RequestFailed));
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let mock_server = MockServer::start().await;
    mount_status(&mock_server, 200, &"x".repeat(4096)).await;

    let client = Client::with_base_url(&mock_server.uri(), "demo")
        .unwrap()
        .with_max_body_bytes(1024);
    let err = client.get_overview(&OverviewQuery::new("IBM")).await.unwrap_err();
    assert!(matches!(err, Error::ResponseTooLarge { limit: 1024 }));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn body_at_the_limit_is_accepted() {
    let mock_server = MockServer::start().await;
    mount_status(&mock_server, 200, &"x".repeat(1024)).await;

    let client = Client::with_base_url(&mock_server.uri(), "demo")
        .unwrap()
        .with_max_body_bytes(1024);
    let body = client.get_overview(&OverviewQuery::new("IBM")).await.unwrap();
    assert_eq!(body.len(), 1024);
}
