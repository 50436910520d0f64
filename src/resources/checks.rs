//! Checks

use super::reports::{Report, ReportName};
use crate::client::{encode_path, encode_query, Client};
use crate::context::Context;
use crate::error::Result;
use crate::http::Request;
use crate::pagination::ResourceIter;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Check type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckType {
    /// Express check, no applicant form
    Express,
    /// Standard check
    Standard,
    /// Any value this client does not know about
    #[serde(other)]
    Unknown,
}

/// Lifecycle state of a check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// Reports are running
    InProgress,
    /// Waiting on the applicant form
    AwaitingApplicant,
    /// Finished
    Complete,
    /// Withdrawn before completion
    Withdrawn,
    /// Paused
    Paused,
    /// Reopened after completion
    Reopened,
    /// Any value this client does not know about
    #[serde(other)]
    Unknown,
}

/// Overall outcome of a check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckResult {
    /// No issues found
    Clear,
    /// Needs review
    Consider,
    /// Any value this client does not know about
    #[serde(other)]
    Unknown,
}

/// Body of a create-check call
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CheckRequest {
    /// Applicant this record belongs to
    pub applicant_id: String,
    /// Reports to run
    pub report_names: Vec<ReportName>,
    /// Where the applicant is sent after completing the applicant form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,
    /// Free-form labels
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Do not email the applicant form link
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub suppress_form_emails: bool,
    /// Return before the reports finish
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub asynchronous: bool,
    /// Charge the applicant instead of the account
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub charge_applicant_for_check: bool,
    /// Sandbox only: reports that should come back as `consider`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub consider: Vec<ReportName>,
    /// Collect data from the applicant through a form
    pub applicant_provides_data: bool,
}

/// A check with its reports fully populated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Check {
    /// Unique identifier
    pub id: String,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// API path of this record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Check type, for accounts that still use typed checks
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub check_type: Option<CheckType>,
    /// Processing state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CheckStatus>,
    /// Overall outcome, once complete
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<CheckResult>,
    /// Dashboard URL of the PDF report
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_uri: Option<String>,
    /// URL of the applicant form, if one was requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_uri: Option<String>,
    /// Where the applicant is sent after completing the applicant form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,
    /// Dashboard URL of the results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results_uri: Option<String>,
    /// Reports of the check, fetched in id order
    #[serde(default)]
    pub reports: Vec<Report>,
    /// Free-form labels
    #[serde(default)]
    pub tags: Vec<String>,
    /// Applicant this record belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applicant_id: Option<String>,
    /// Collect data from the applicant through a form
    #[serde(default)]
    pub applicant_provides_data: bool,
}

/// A check as returned by the retrieve endpoint: reports are ids only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckRetrieved {
    /// Unique identifier
    pub id: String,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// API path of this record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Check type, for accounts that still use typed checks
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub check_type: Option<CheckType>,
    /// Processing state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CheckStatus>,
    /// Overall outcome, once complete
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<CheckResult>,
    /// Dashboard URL of the PDF report
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_uri: Option<String>,
    /// URL of the applicant form, if one was requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_uri: Option<String>,
    /// Where the applicant is sent after completing the applicant form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,
    /// Dashboard URL of the results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results_uri: Option<String>,
    /// Ids of the reports of the check
    #[serde(default)]
    pub report_ids: Vec<String>,
    /// Free-form labels
    #[serde(default)]
    pub tags: Vec<String>,
    /// Applicant this record belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applicant_id: Option<String>,
    /// Collect data from the applicant through a form
    #[serde(default)]
    pub applicant_provides_data: bool,
}

impl CheckRetrieved {
    /// Combine with the fetched reports into a fully populated check
    fn expand(self, reports: Vec<Report>) -> Check {
        Check {
            id: self.id,
            created_at: self.created_at,
            href: self.href,
            check_type: self.check_type,
            status: self.status,
            result: self.result,
            download_uri: self.download_uri,
            form_uri: self.form_uri,
            redirect_uri: self.redirect_uri,
            results_uri: self.results_uri,
            reports,
            tags: self.tags,
            applicant_id: self.applicant_id,
            applicant_provides_data: self.applicant_provides_data,
        }
    }
}

impl Client {
    /// Create a check for an applicant
    pub async fn create_check(&self, ctx: &Context, check: &CheckRequest) -> Result<Check> {
        self.execute(ctx, Request::post("/checks").json(check)?).await
    }

    /// Retrieve a check; its reports are returned as ids
    pub async fn get_check(&self, ctx: &Context, id: &str) -> Result<CheckRetrieved> {
        self.execute(ctx, Request::get(format!("/checks/{}", encode_path(id))))
            .await
    }

    /// Retrieve a check and fetch each of its reports.
    ///
    /// Reports are fetched one at a time in id order. Any failure fails the
    /// whole call; reports fetched before it are dropped.
    pub async fn get_check_expanded(&self, ctx: &Context, id: &str) -> Result<Check> {
        let retrieved = self.get_check(ctx, id).await?;
        debug!(
            "Expanding check {} with {} reports",
            retrieved.id,
            retrieved.report_ids.len()
        );

        let mut reports = Vec::with_capacity(retrieved.report_ids.len());
        for report_id in &retrieved.report_ids {
            reports.push(self.get_report(ctx, report_id).await?);
        }

        Ok(retrieved.expand(reports))
    }

    /// Resume a paused check
    pub async fn resume_check(&self, ctx: &Context, id: &str) -> Result<Check> {
        self.execute(ctx, Request::post(format!("/checks/{}/resume", encode_path(id))))
            .await
    }

    /// List the checks of an applicant
    pub fn list_checks(&self, applicant_id: &str) -> ResourceIter<Check> {
        self.list(
            format!("/checks?applicant_id={}", encode_query(applicant_id)),
            "checks",
        )
    }
}
