//! Applicants

use crate::client::{encode_path, Client};
use crate::context::Context;
use crate::error::Result;
use crate::http::Request;
use crate::pagination::ResourceIter;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Postal address of an applicant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    /// Flat number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flat_number: Option<String>,
    /// Building number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_number: Option<String>,
    /// Building name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_name: Option<String>,
    /// Street
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    /// Second address line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_street: Option<String>,
    /// Town or city
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub town: Option<String>,
    /// State, for US addresses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Postal code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    /// ISO 3166-1 alpha-3 country code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// An applicant as stored by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Applicant {
    /// Unique identifier
    pub id: String,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Set once the applicant is scheduled for deletion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_at: Option<DateTime<Utc>>,
    /// API path of this record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Given name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Family name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Date of birth
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<NaiveDate>,
    /// Phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Current address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// Body of a create- or update-applicant call
///
/// Unset fields are omitted, so an update only touches what is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ApplicantRequest {
    /// Given name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Family name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Date of birth
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<NaiveDate>,
    /// Phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Current address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

impl Client {
    /// Create an applicant
    pub async fn create_applicant(
        &self,
        ctx: &Context,
        applicant: &ApplicantRequest,
    ) -> Result<Applicant> {
        self.execute(ctx, Request::post("/applicants").json(applicant)?)
            .await
    }

    /// Retrieve an applicant
    pub async fn get_applicant(&self, ctx: &Context, id: &str) -> Result<Applicant> {
        self.execute(ctx, Request::get(format!("/applicants/{}", encode_path(id))))
            .await
    }

    /// Update the set fields of an applicant
    pub async fn update_applicant(
        &self,
        ctx: &Context,
        id: &str,
        applicant: &ApplicantRequest,
    ) -> Result<Applicant> {
        let request = Request::put(format!("/applicants/{}", encode_path(id))).json(applicant)?;
        self.execute(ctx, request).await
    }

    /// Schedule an applicant for deletion
    pub async fn delete_applicant(&self, ctx: &Context, id: &str) -> Result<()> {
        self.execute_empty(ctx, Request::delete(format!("/applicants/{}", encode_path(id))))
            .await
    }

    /// Restore an applicant scheduled for deletion
    pub async fn restore_applicant(&self, ctx: &Context, id: &str) -> Result<()> {
        let request = Request::post(format!("/applicants/{}/restore", encode_path(id)));
        self.execute_empty(ctx, request).await
    }

    /// List all applicants
    pub fn list_applicants(&self) -> ResourceIter<Applicant> {
        self.list("/applicants".to_string(), "applicants")
    }
}
