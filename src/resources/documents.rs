//! Identity documents

use crate::client::{encode_path, encode_query, Client};
use crate::context::Context;
use crate::error::{Error, Result};
use crate::http::Request;
use crate::pagination::ResourceIter;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

/// Side of a two-sided document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentSide {
    /// Front side
    Front,
    /// Back side
    Back,
}

impl DocumentSide {
    fn as_str(self) -> &'static str {
        match self {
            DocumentSide::Front => "front",
            DocumentSide::Back => "back",
        }
    }
}

/// Uploaded document metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Unique identifier
    pub id: String,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// API path of this record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// API path of the binary content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_href: Option<String>,
    /// Original file name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// MIME type of the file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    /// File size in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    /// Document kind, e.g. `passport` or `driving_licence`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
    /// Which side of the document the image shows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<DocumentSide>,
    /// ISO 3166-1 alpha-3 code of the issuing country
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuing_country: Option<String>,
    /// Applicant this record belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applicant_id: Option<String>,
}

/// A document file to upload for an applicant
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentRequest {
    /// Applicant this record belongs to
    pub applicant_id: String,
    /// Document kind, e.g. `passport` or `driving_licence`
    pub document_type: String,
    /// Which side of the document the image shows
    pub side: Option<DocumentSide>,
    /// ISO 3166-1 alpha-3 code of the issuing country
    pub issuing_country: Option<String>,
    /// Original file name
    pub file_name: String,
    /// MIME type of `content`, e.g. `image/png`
    pub content_type: String,
    /// File bytes
    pub content: Vec<u8>,
}

impl DocumentRequest {
    fn into_form(self) -> Result<Form> {
        let file = Part::bytes(self.content)
            .file_name(self.file_name)
            .mime_str(&self.content_type)
            .map_err(|e| Error::invalid_request(format!("invalid content type: {e}")))?;

        let mut form = Form::new()
            .text("applicant_id", self.applicant_id)
            .text("type", self.document_type);
        if let Some(side) = self.side {
            form = form.text("side", side.as_str());
        }
        if let Some(country) = self.issuing_country {
            form = form.text("issuing_country", country);
        }
        Ok(form.part("file", file))
    }
}

/// Binary content of a document
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentDownload {
    /// Raw bytes as returned by the API
    pub data: Bytes,
}

impl Client {
    /// Upload a document as multipart form data
    pub async fn upload_document(
        &self,
        ctx: &Context,
        document: DocumentRequest,
    ) -> Result<Document> {
        let request = Request::post("/documents").multipart(document.into_form()?);
        self.execute(ctx, request).await
    }

    /// Retrieve document metadata
    pub async fn get_document(&self, ctx: &Context, id: &str) -> Result<Document> {
        self.execute(ctx, Request::get(format!("/documents/{}", encode_path(id))))
            .await
    }

    /// List the documents of an applicant
    pub fn list_documents(&self, applicant_id: &str) -> ResourceIter<Document> {
        self.list(
            format!("/documents?applicant_id={}", encode_query(applicant_id)),
            "documents",
        )
    }

    /// Download the binary content of a document
    pub async fn download_document(&self, ctx: &Context, id: &str) -> Result<DocumentDownload> {
        let request = Request::get(format!("/documents/{}/download", encode_path(id)));
        let data = self.execute_bytes(ctx, request).await?;
        Ok(DocumentDownload { data })
    }
}
