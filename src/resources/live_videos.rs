//! Live videos

use crate::client::{encode_path, encode_query, Client};
use crate::context::Context;
use crate::error::Result;
use crate::http::Request;
use crate::pagination::ResourceIter;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A live video recorded by an applicant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveVideo {
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
}

/// Binary content of a live video
#[derive(Debug, Clone, PartialEq)]
pub struct LiveVideoDownload {
    /// Raw bytes as returned by the API
    pub data: Bytes,
}

impl Client {
    /// Retrieve live video metadata
    pub async fn get_live_video(&self, ctx: &Context, id: &str) -> Result<LiveVideo> {
        self.execute(ctx, Request::get(format!("/live_videos/{}", encode_path(id))))
            .await
    }

    /// List the live videos of an applicant
    pub fn list_live_videos(&self, applicant_id: &str) -> ResourceIter<LiveVideo> {
        self.list(
            format!("/live_videos?applicant_id={}", encode_query(applicant_id)),
            "live_videos",
        )
    }

    /// Download the binary content of a live video
    pub async fn download_live_video(&self, ctx: &Context, id: &str) -> Result<LiveVideoDownload> {
        let request = Request::get(format!("/live_videos/{}/download", encode_path(id)));
        let data = self.execute_bytes(ctx, request).await?;
        Ok(LiveVideoDownload { data })
    }
}
