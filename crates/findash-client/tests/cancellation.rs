mod common;

use common::{capture_errors, client_for};
use findash_client::{CancelToken, Error};
use serde_json::json;
use std::time::{Duration, Instant};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_cancelled_before_send_makes_no_request() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
    .expect(0)
    .mount(&server)
    .await;
  let client = client_for(&server);

  let (handle, token) = CancelToken::new();
  handle.cancel();

  let (logs, _guard) = capture_errors();
  let err = client.company_with_cancel(token).ten_k("AAPL").await.unwrap_err();

  assert!(matches!(err, Error::Cancelled));
  assert!(logs.lines().is_empty());
  assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_cancel_in_flight_request() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/getIncomeStatement"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!([])).set_delay(Duration::from_secs(30)))
    .mount(&server)
    .await;
  let client = client_for(&server);

  let (handle, token) = CancelToken::new();
  let statements = client.statements_with_cancel(token);
  let started = Instant::now();

  let (result, ()) = tokio::join!(statements.income_statement("AAPL"), async {
    tokio::time::sleep(Duration::from_millis(100)).await;
    handle.cancel();
  });

  assert!(matches!(result, Err(Error::Cancelled)), "{:?}", result);
  assert!(started.elapsed() < Duration::from_secs(10));
}

#[tokio::test]
async fn test_unfired_token_does_not_interfere() {
  let server = MockServer::start().await;
  let body = json!({ "ip": "192.0.2.1", "city": "Sydney" });
  Mock::given(method("GET"))
    .and(path("/getIPInfo"))
    .respond_with(ResponseTemplate::new(200).set_body_json(&body))
    .expect(1)
    .mount(&server)
    .await;
  let client = client_for(&server);

  let (_handle, token) = CancelToken::new();
  let location = client.location_with_cancel(token).ip_info("192.0.2.1").await.unwrap();

  assert_eq!(location.city.as_deref(), Some("Sydney"));
}

#[tokio::test]
async fn test_one_handle_cancels_every_holder() {
  let server = MockServer::start().await;
  let client = client_for(&server);

  let (handle, token) = CancelToken::new();
  let second = handle.token();
  handle.cancel();

  let first = client.company_with_cancel(token).key_metrics("AAPL").await;
  let other = client.location_with_cancel(second).ip_info("10.0.0.1").await;

  assert!(matches!(first, Err(Error::Cancelled)));
  assert!(matches!(other, Err(Error::Cancelled)));
}
