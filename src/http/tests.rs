//! Tests for the HTTP transport module

use super::*;
use crate::config::ClientConfig;
use crate::context::Context;
use crate::error::Error;
use pretty_assertions::assert_eq;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn transport_for(server: &MockServer) -> HttpTransport {
    let config = ClientConfig::builder("test-token")
        .endpoint(server.uri())
        .build();
    HttpTransport::new(&config).unwrap()
}

#[test]
fn test_build_url_relative_and_absolute() {
    let config = ClientConfig::builder("t")
        .endpoint("https://api.example.com/v3")
        .build();
    let transport = HttpTransport::new(&config).unwrap();

    assert_eq!(
        transport.build_url("/checks/123").unwrap().as_str(),
        "https://api.example.com/v3/checks/123"
    );
    assert_eq!(
        transport.build_url("checks?applicant_id=a1").unwrap().as_str(),
        "https://api.example.com/v3/checks?applicant_id=a1"
    );
    assert_eq!(
        transport
            .build_url("https://other.example.com/v3/reports/9")
            .unwrap()
            .as_str(),
        "https://other.example.com/v3/reports/9"
    );
}

#[test]
fn test_build_url_trailing_slash_endpoint() {
    let config = ClientConfig::builder("t")
        .endpoint("https://api.example.com/v3/")
        .build();
    let transport = HttpTransport::new(&config).unwrap();

    assert_eq!(
        transport.build_url("/applicants").unwrap().as_str(),
        "https://api.example.com/v3/applicants"
    );
}

#[test]
fn test_request_builders() {
    let req = Request::post("/checks")
        .json(&serde_json::json!({"applicant_id": "a1"}))
        .unwrap();
    assert_eq!(req.method, reqwest::Method::POST);
    assert_eq!(req.body.as_ref().and_then(Body::content_type), Some(JSON_CONTENT_TYPE));

    let req = Request::get("https://api.example.com/v3/checks/1");
    assert!(req.body.is_none());

    let req = Request::put("/x").raw(vec![1u8, 2, 3], "application/octet-stream");
    let body = req.body.unwrap();
    assert_eq!(body.content_type(), Some("application/octet-stream"));
    assert_eq!(body.bytes().map(|b| b.len()), Some(3));
}

#[test]
fn test_raw_response_success_range() {
    assert!(RawResponse::new(200, "").is_success());
    assert!(RawResponse::new(204, "").is_success());
    assert!(!RawResponse::new(199, "").is_success());
    assert!(!RawResponse::new(300, "").is_success());
    assert!(!RawResponse::new(403, "").is_success());
}

#[tokio::test]
async fn test_send_adds_bearer_and_content_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/applicants"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(serde_json::json!({"first_name": "Jane"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"id": "a1"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let transport = transport_for(&mock_server);
    let request = Request::post("/applicants")
        .json(&serde_json::json!({"first_name": "Jane"}))
        .unwrap();

    let response = transport
        .send(&Context::background(), request)
        .await
        .unwrap();

    assert_eq!(response.status, 201);
    assert_eq!(&response.body[..], br#"{"id":"a1"}"#);
}

#[tokio::test]
async fn test_send_absolute_url_bypasses_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/reports/r1"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Endpoint points somewhere unreachable; the absolute URL must win.
    let config = ClientConfig::builder("test-token")
        .endpoint("http://127.0.0.1:1/unused")
        .build();
    let transport = HttpTransport::new(&config).unwrap();

    let href = format!("{}/v3/reports/r1", mock_server.uri());
    let response = transport
        .send(&Context::background(), Request::get(href))
        .await
        .unwrap();

    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_send_does_not_retry_server_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/checks/c1"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let transport = transport_for(&mock_server);
    let response = transport
        .send(&Context::background(), Request::get("/checks/c1"))
        .await
        .unwrap();

    assert_eq!(response.status, 503);
    assert_eq!(&response.body[..], b"unavailable");
}

#[tokio::test]
async fn test_send_connection_failure_is_transport_error() {
    let config = ClientConfig::builder("t")
        .endpoint("http://127.0.0.1:1")
        .build();
    let transport = HttpTransport::new(&config).unwrap();

    let err = transport
        .send(&Context::background(), Request::get("/checks"))
        .await
        .unwrap_err();

    assert!(err.is_transport());
}

#[tokio::test]
async fn test_send_already_cancelled() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let transport = transport_for(&mock_server);
    let ctx = Context::background();
    ctx.cancel();

    let err = transport
        .send(&ctx, Request::get("/checks"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Cancelled));
}

#[tokio::test]
async fn test_send_cancelled_in_flight() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(10)))
        .mount(&mock_server)
        .await;

    let transport = transport_for(&mock_server);
    let ctx = Context::background();
    let canceller = ctx.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        canceller.cancel();
    });

    let err = transport
        .send(&ctx, Request::get("/slow"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Cancelled));
}

#[tokio::test]
async fn test_send_context_deadline() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(10)))
        .mount(&mock_server)
        .await;

    let transport = transport_for(&mock_server);
    let ctx = Context::background().with_timeout(Duration::from_millis(50));

    let err = transport
        .send(&ctx, Request::get("/slow"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Timeout { .. }));
}

#[tokio::test]
async fn test_send_client_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(10)))
        .mount(&mock_server)
        .await;

    let config = ClientConfig::builder("t")
        .endpoint(mock_server.uri())
        .timeout(Duration::from_millis(50))
        .build();
    let transport = HttpTransport::new(&config).unwrap();

    let err = transport
        .send(&Context::background(), Request::get("/slow"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Timeout { timeout_ms: 50 }));
}
