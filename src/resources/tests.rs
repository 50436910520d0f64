//! Tests for resource records and accessors

use super::*;
use crate::client::Client;
use crate::context::Context;
use crate::error::{Error, Result};
use crate::http::{RawResponse, Request, Transport};
use async_trait::async_trait;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Answers by path and records the order requests arrived in
struct RoutedTransport {
    routes: HashMap<String, (u16, String)>,
    requested: Mutex<Vec<String>>,
}

impl RoutedTransport {
    fn new(routes: &[(&str, u16, serde_json::Value)]) -> Arc<Self> {
        Arc::new(Self {
            routes: routes
                .iter()
                .map(|(path, status, body)| ((*path).to_string(), (*status, body.to_string())))
                .collect(),
            requested: Mutex::new(Vec::new()),
        })
    }

    fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RoutedTransport {
    async fn send(&self, _ctx: &Context, request: Request) -> Result<RawResponse> {
        self.requested.lock().unwrap().push(request.path.clone());
        match self.routes.get(&request.path) {
            Some((status, body)) => Ok(RawResponse::new(*status, body.clone())),
            None => Ok(RawResponse::new(404, "not found")),
        }
    }
}

fn report_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": "document",
        "status": "complete",
        "result": "clear",
        "sub_result": "clear",
        "check_id": "chk-1"
    })
}

// ============================================================================
// Records
// ============================================================================

#[test]
fn test_check_request_omits_unset_flags() {
    let request = CheckRequest {
        applicant_id: "app-1".to_string(),
        report_names: vec![ReportName::Document, ReportName::FacialSimilarityPhoto],
        ..Default::default()
    };

    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "applicant_id": "app-1",
            "report_names": ["document", "facial_similarity_photo"],
            "applicant_provides_data": false
        })
    );
}

#[test]
fn test_check_request_serializes_set_flags() {
    let request = CheckRequest {
        applicant_id: "app-1".to_string(),
        report_names: vec![ReportName::Document],
        tags: vec!["vip".to_string()],
        suppress_form_emails: true,
        asynchronous: true,
        consider: vec![ReportName::Document],
        ..Default::default()
    };

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["suppress_form_emails"], true);
    assert_eq!(value["asynchronous"], true);
    assert_eq!(value["tags"], json!(["vip"]));
    assert_eq!(value["consider"], json!(["document"]));
    assert!(value.get("charge_applicant_for_check").is_none());
}

#[test]
fn test_unknown_enum_values_decode() {
    let report: Report = serde_json::from_value(json!({
        "id": "r1",
        "name": "brand_new_report",
        "status": "some_future_status",
        "result": "clear"
    }))
    .unwrap();

    assert_eq!(report.name, ReportName::Other);
    assert_eq!(report.status, Some(ReportStatus::Unknown));
    assert_eq!(report.result, Some(ReportResult::Clear));
}

#[test]
fn test_check_retrieved_decodes_report_ids() {
    let check: CheckRetrieved = serde_json::from_value(json!({
        "id": "chk-1",
        "created_at": "2024-01-02T03:04:05Z",
        "type": "standard",
        "status": "in_progress",
        "report_ids": ["r1", "r2"],
        "applicant_provides_data": false
    }))
    .unwrap();

    assert_eq!(check.report_ids, vec!["r1".to_string(), "r2".to_string()]);
    assert_eq!(check.check_type, Some(CheckType::Standard));
    assert_eq!(check.status, Some(CheckStatus::InProgress));
    assert!(check.created_at.is_some());
}

#[test]
fn test_applicant_request_partial_update() {
    let request = ApplicantRequest {
        email: Some("jane@example.com".to_string()),
        ..Default::default()
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({ "email": "jane@example.com" })
    );
}

// ============================================================================
// Check expansion
// ============================================================================

#[tokio::test]
async fn test_get_check_expanded_fetches_reports_in_order() {
    let transport = RoutedTransport::new(&[
        (
            "/checks/chk-1",
            200,
            json!({ "id": "chk-1", "status": "complete", "result": "clear", "report_ids": ["r1", "r2"] }),
        ),
        ("/reports/r1", 200, report_json("r1")),
        ("/reports/r2", 200, report_json("r2")),
    ]);
    let client = Client::with_transport(transport.clone());

    let check = client
        .get_check_expanded(&Context::background(), "chk-1")
        .await
        .unwrap();

    assert_eq!(check.id, "chk-1");
    assert_eq!(check.status, Some(CheckStatus::Complete));
    let ids: Vec<_> = check.reports.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["r1", "r2"]);
    assert_eq!(
        transport.requested(),
        vec!["/checks/chk-1", "/reports/r1", "/reports/r2"]
    );
}

#[tokio::test]
async fn test_get_check_expanded_no_reports() {
    let transport = RoutedTransport::new(&[(
        "/checks/chk-1",
        200,
        json!({ "id": "chk-1", "report_ids": [] }),
    )]);
    let client = Client::with_transport(transport.clone());

    let check = client
        .get_check_expanded(&Context::background(), "chk-1")
        .await
        .unwrap();

    assert!(check.reports.is_empty());
    assert_eq!(transport.requested().len(), 1);
}

#[tokio::test]
async fn test_get_check_expanded_is_all_or_nothing() {
    let transport = RoutedTransport::new(&[
        (
            "/checks/chk-1",
            200,
            json!({ "id": "chk-1", "report_ids": ["r1", "r2", "r3"] }),
        ),
        ("/reports/r1", 200, report_json("r1")),
        ("/reports/r2", 403, json!({ "error": "things went bad" })),
        ("/reports/r3", 200, report_json("r3")),
    ]);
    let client = Client::with_transport(transport.clone());

    let err = client
        .get_check_expanded(&Context::background(), "chk-1")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Api(ref api) if api.status == 403));
    // Stops at the first failure.
    assert_eq!(
        transport.requested(),
        vec!["/checks/chk-1", "/reports/r1", "/reports/r2"]
    );
}

#[tokio::test]
async fn test_get_check_expanded_summary_failure() {
    let transport = RoutedTransport::new(&[]);
    let client = Client::with_transport(transport.clone());

    let err = client
        .get_check_expanded(&Context::background(), "missing")
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(transport.requested(), vec!["/checks/missing"]);
}

#[tokio::test]
async fn test_accessor_paths_are_encoded() {
    let transport = RoutedTransport::new(&[]);
    let client = Client::with_transport(transport.clone());

    let _ = client
        .get_applicant(&Context::background(), "a/b c")
        .await;
    let mut iter = client.list_checks("x&y=z");
    assert!(!iter.advance(&Context::background()).await);

    assert_eq!(
        transport.requested(),
        vec!["/applicants/a%2Fb%20c", "/checks?applicant_id=x%26y%3Dz"]
    );
}
