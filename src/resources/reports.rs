//! Reports

use crate::client::{encode_path, encode_query, Client};
use crate::context::Context;
use crate::error::Result;
use crate::http::Request;
use crate::pagination::ResourceIter;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind of report run as part of a check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportName {
    /// Identity document check
    Document,
    /// Selfie compared with the document photo
    FacialSimilarityPhoto,
    /// Video selfie compared with the document photo
    FacialSimilarityVideo,
    /// Identity record check
    IdentityEnhanced,
    /// Sanctions and PEP screening
    WatchlistStandard,
    /// Extended watchlist screening
    WatchlistEnhanced,
    /// Proof of address document check
    ProofOfAddress,
    /// Right to work check
    RightToWork,
    /// Match against previously seen faces
    KnownFaces,
    /// Any report name this client does not know about
    #[serde(other)]
    Other,
}

/// Lifecycle state of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    /// Waiting on data from the applicant
    AwaitingData,
    /// Waiting on manual approval
    AwaitingApproval,
    /// Finished
    Complete,
    /// Withdrawn before completion
    Withdrawn,
    /// Paused
    Paused,
    /// Cancelled
    Cancelled,
    /// Any value this client does not know about
    #[serde(other)]
    Unknown,
}

/// Overall outcome of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportResult {
    /// No issues found
    Clear,
    /// Needs review
    Consider,
    /// Applicant could not be identified
    Unidentified,
    /// Any value this client does not know about
    #[serde(other)]
    Unknown,
}

/// Finer-grained outcome of a document report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportSubResult {
    /// No issues found
    Clear,
    /// Document rejected
    Rejected,
    /// Document suspected fraudulent
    Suspected,
    /// Document needs a closer look
    Caution,
    /// Any value this client does not know about
    #[serde(other)]
    Unknown,
}

/// A report belonging to a check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Unique identifier
    pub id: String,
    /// Kind of report
    pub name: ReportName,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Processing state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ReportStatus>,
    /// Overall outcome, once complete
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<ReportResult>,
    /// Finer-grained outcome of a document report
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_result: Option<ReportSubResult>,
    /// API path of this record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Check this report belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_id: Option<String>,
    /// Per-aspect results, shape varies by report kind
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<Value>,
    /// Data extracted by the report, shape varies by report kind
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Value>,
}

impl Client {
    /// Retrieve a single report
    pub async fn get_report(&self, ctx: &Context, id: &str) -> Result<Report> {
        self.execute(ctx, Request::get(format!("/reports/{}", encode_path(id))))
            .await
    }

    /// List the reports of a check
    pub fn list_reports(&self, check_id: &str) -> ResourceIter<Report> {
        self.list(format!("/reports?check_id={}", encode_query(check_id)), "reports")
    }

    /// Resume a paused report
    pub async fn resume_report(&self, ctx: &Context, id: &str) -> Result<()> {
        self.execute_empty(ctx, Request::post(format!("/reports/{}/resume", encode_path(id))))
            .await
    }

    /// Cancel a paused report
    pub async fn cancel_report(&self, ctx: &Context, id: &str) -> Result<()> {
        self.execute_empty(ctx, Request::post(format!("/reports/{}/cancel", encode_path(id))))
            .await
    }
}
