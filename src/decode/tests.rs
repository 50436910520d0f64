//! Tests for the envelope decoder

use super::*;
use crate::error::Error;
use crate::http::RawResponse;
use pretty_assertions::assert_eq;
use serde::Deserialize;
use test_case::test_case;

#[derive(Debug, Deserialize, PartialEq)]
struct Thing {
    id: String,
    #[serde(default)]
    tags: Vec<String>,
}

#[test]
fn test_decode_json_success() {
    let response = RawResponse::new(200, r#"{"id": "t1", "tags": ["a"]}"#);
    let thing: Thing = decode_json(&response).unwrap();
    assert_eq!(
        thing,
        Thing {
            id: "t1".to_string(),
            tags: vec!["a".to_string()],
        }
    );
}

#[test]
fn test_decode_json_malformed_success_is_decode_error() {
    let response = RawResponse::new(200, r#"{"tags": "not-a-list"}"#);
    let err = decode_json::<Thing>(&response).unwrap_err();
    assert!(err.is_decode());
    assert_eq!(err.status(), Some(200));
}

#[test]
fn test_decode_json_empty_success_body_is_decode_error() {
    let response = RawResponse::new(201, "");
    let err = decode_json::<Thing>(&response).unwrap_err();
    assert!(matches!(err, Error::Decode { status: 201, .. }));
}

#[test]
fn test_decode_json_error_envelope() {
    let response = RawResponse::new(
        422,
        r#"{"error": {"type": "validation_error", "message": "bad", "fields": {"email": ["x"]}}}"#,
    );
    let err = decode_json::<Thing>(&response).unwrap_err();
    let api = err.api_error().unwrap();
    assert_eq!(api.status, 422);
    assert_eq!(api.error_type.as_deref(), Some("validation_error"));
    assert_eq!(api.message, "bad");
}

#[test]
fn test_decode_json_mismatched_error_body() {
    let response = RawResponse::new(403, r#"{"error":"things went bad"}"#);
    let err = decode_json::<Thing>(&response).unwrap_err();
    let api = err.api_error().unwrap();
    assert_eq!(api.status, 403);
    assert!(api.message.contains("things went bad"));
}

#[test_case(199 ; "below range")]
#[test_case(301 ; "redirect")]
#[test_case(404 ; "not found")]
#[test_case(500 ; "server error")]
fn test_non_success_statuses_are_api_errors(status: u16) {
    let response = RawResponse::new(status, "nope");
    let err = check_status(&response).unwrap_err();
    assert!(err.is_api());
    assert_eq!(err.status(), Some(status));
}

#[test]
fn test_decode_bytes_verbatim() {
    let response = RawResponse::new(200, vec![0x01u8, 0x02, 0x03]);
    let bytes = decode_bytes(response).unwrap();
    assert_eq!(&bytes[..], &[0x01, 0x02, 0x03]);
}

#[test]
fn test_decode_bytes_error_status() {
    let response = RawResponse::new(404, r#"{"error": {"type": "resource_not_found", "message": "gone"}}"#);
    let err = decode_bytes(response).unwrap_err();
    assert_eq!(err.api_error().unwrap().message, "gone");
}

#[test]
fn test_decode_empty() {
    assert!(decode_empty(&RawResponse::new(204, "")).is_ok());
    assert!(decode_empty(&RawResponse::new(409, "")).unwrap_err().is_api());
}
