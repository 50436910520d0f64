//! Fetching resources by `href`
//!
//! Records carry an `href` pointing back at themselves. These accessors
//! fetch it as-is: absolute hrefs bypass the configured endpoint, relative
//! ones are resolved against it.

use super::{Check, Document, Report};
use crate::client::Client;
use crate::context::Context;
use crate::error::Result;
use crate::http::Request;

impl Client {
    /// Fetch a check from its href
    pub async fn get_check_from_href(&self, ctx: &Context, href: &str) -> Result<Check> {
        self.execute(ctx, Request::get(href)).await
    }

    /// Fetch a report from its href
    pub async fn get_report_from_href(&self, ctx: &Context, href: &str) -> Result<Report> {
        self.execute(ctx, Request::get(href)).await
    }

    /// Fetch a document from its href
    pub async fn get_document_from_href(&self, ctx: &Context, href: &str) -> Result<Document> {
        self.execute(ctx, Request::get(href)).await
    }
}
