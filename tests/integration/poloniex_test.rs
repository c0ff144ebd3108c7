//! Poloniex client against a mock HTTP server

use std::sync::Arc;
use std::time::{Duration, Instant};
use ticker_scout::exchange::{ExchangeClient, ExchangeError, PoloniexClient};
use ticker_scout::http::{HttpConfig, HttpRequester, ReqwestRequester};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TICKER_BODY: &str = r#"{
    "BTC_USDT": {"id": 121, "last": "100.0", "lowestAsk": "100.1", "highestBid": "99.9", "percentChange": "0.05", "isFrozen": "0"},
    "ETH_USDT": {"id": 149, "last": "2000", "lowestAsk": "2001", "highestBid": "1999", "percentChange": "-0.02", "isFrozen": "0"}
}"#;

fn requester(timeout: Duration) -> Arc<dyn HttpRequester> {
    let config = HttpConfig {
        timeout,
        ..HttpConfig::default()
    };
    Arc::new(ReqwestRequester::with_config(&config).unwrap())
}

fn client(server: &MockServer) -> PoloniexClient {
    PoloniexClient::with_base_url(server.uri(), requester(Duration::from_secs(5)), None)
}

async fn mount_ticker(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/public"))
        .and(query_param("command", "returnTicker"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

async fn mount_chart(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/public"))
        .and(query_param("command", "returnChartData"))
        .and(query_param("currencyPair", "BTC_USDT"))
        .and(query_param("period", "300"))
        .respond_with(template)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_symbol_price_end_to_end() {
    let server = MockServer::start().await;
    mount_ticker(&server, TICKER_BODY).await;
    mount_chart(
        &server,
        ResponseTemplate::new(200).set_body_string(r#"[{"date":1700000000,"open":80.0,"close":81.0}]"#),
    )
    .await;

    let price = client(&server).get_symbol_price("btc_usdt").await.unwrap();

    assert_eq!(price.symbol, "btc_usdt");
    assert_eq!(price.source, "Poloniex");
    assert_eq!(price.price.to_string(), "100.0");
    assert_eq!(price.percent_change_1h, Some(25.0));
    assert_eq!(price.percent_change_24h, 5.0);
}

#[tokio::test]
async fn test_error_envelope_with_ok_status() {
    let server = MockServer::start().await;
    mount_ticker(&server, r#"{"error":"Invalid command."}"#).await;

    let result = client(&server).get_symbol_price("BTC_USDT").await;
    assert!(matches!(result, Err(ExchangeError::Remote(msg)) if msg == "Invalid command."));
}

#[tokio::test]
async fn test_error_envelope_with_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/public"))
        .respond_with(ResponseTemplate::new(422).set_body_string(r#"{"error":"Invalid currency pair."}"#))
        .mount(&server)
        .await;

    let result = client(&server).get_symbol_price("BTC_USDT").await;
    assert!(matches!(result, Err(ExchangeError::Remote(_))));
}

#[tokio::test]
async fn test_chart_server_error_keeps_price() {
    let server = MockServer::start().await;
    mount_ticker(&server, TICKER_BODY).await;
    mount_chart(
        &server,
        ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"),
    )
    .await;

    let price = client(&server).get_symbol_price("BTC_USDT").await.unwrap();
    assert_eq!(price.price.to_string(), "100.0");
    assert_eq!(price.percent_change_24h, 5.0);
    assert_eq!(price.percent_change_1h, None);
}

#[tokio::test]
async fn test_chart_timeout_keeps_price() {
    let server = MockServer::start().await;
    mount_ticker(&server, TICKER_BODY).await;
    mount_chart(
        &server,
        ResponseTemplate::new(200)
            .set_body_string(r#"[{"date":1700000000,"open":"80.0"}]"#)
            .set_delay(Duration::from_secs(3)),
    )
    .await;

    let client = PoloniexClient::with_base_url(server.uri(), requester(Duration::from_millis(500)), None);
    let price = client.get_symbol_price("BTC_USDT").await.unwrap();
    assert_eq!(price.percent_change_1h, None);
    assert_eq!(price.percent_change_24h, 5.0);
}

#[tokio::test]
async fn test_unknown_symbol_over_http() {
    let server = MockServer::start().await;
    mount_ticker(&server, TICKER_BODY).await;
    Mock::given(method("GET"))
        .and(path("/public"))
        .and(query_param("command", "returnChartData"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&server)
        .await;

    let result = client(&server).get_symbol_price("xmr_btc").await;
    assert!(matches!(result, Err(ExchangeError::SymbolNotFound { .. })));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Bind then release an ephemeral port so nothing is listening on it
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = PoloniexClient::with_base_url(
        format!("http://{}", addr),
        requester(Duration::from_secs(2)),
        None,
    );
    let result = client.get_symbol_price("BTC_USDT").await;
    assert!(matches!(result, Err(ExchangeError::Transport(_))));
}

#[tokio::test]
async fn test_shared_requester_concurrent_calls() {
    let server = MockServer::start().await;
    mount_ticker(&server, TICKER_BODY).await;
    Mock::given(method("GET"))
        .and(path("/public"))
        .and(query_param("command", "returnChartData"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"[{"date":1700000000,"open":"1000"}]"#))
        .mount(&server)
        .await;

    let http = requester(Duration::from_secs(5));
    let a = PoloniexClient::with_base_url(server.uri(), http.clone(), None);
    let b = PoloniexClient::with_base_url(server.uri(), http, None);

    let (btc, eth) = tokio::join!(a.get_symbol_price("BTC_USDT"), b.get_symbol_price("ETH_USDT"));
    assert_eq!(btc.unwrap().percent_change_1h, Some(-90.0));
    assert_eq!(eth.unwrap().percent_change_1h, Some(100.0));
}

#[tokio::test]
async fn test_ticker_failure_does_not_wait_for_chart() {
    let server = MockServer::start().await;
    mount_ticker(&server, TICKER_BODY).await;
    Mock::given(method("GET"))
        .and(path("/public"))
        .and(query_param("command", "returnChartData"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"[{"date":1700000000,"open":"80.0"}]"#)
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let started = Instant::now();
    let result = client(&server).get_symbol_price("NOPE_X").await;

    assert!(matches!(result, Err(ExchangeError::SymbolNotFound { .. })));
    assert!(
        started.elapsed() < Duration::from_millis(1500),
        "ticker error took {:?}",
        started.elapsed()
    );
}
