//! API client
//!
//! [`Client`] is a thin composition over a [`Transport`]: accessors build a
//! [`Request`], send it, and hand the response to the envelope decoder.

use crate::config::ClientConfig;
use crate::context::Context;
use crate::decode::{decode_bytes, decode_empty, decode_json};
use crate::error::Result;
use crate::http::{HttpTransport, Request, Transport};
use crate::pagination::{collection_decoder, ResourceIter};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Client for the identity-verification API
///
/// Cheap to clone; clones share the underlying transport.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Create a client against the production endpoint
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(token))
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Create a client from `ONFIDO_TOKEN` / `ONFIDO_ENDPOINT`
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    /// Create a client over an arbitrary transport
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Send a request and decode a JSON success body into `T`
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        ctx: &Context,
        request: Request,
    ) -> Result<T> {
        let response = self.transport.send(ctx, request).await?;
        decode_json(&response)
    }

    /// Send a request whose success body is ignored
    pub(crate) async fn execute_empty(&self, ctx: &Context, request: Request) -> Result<()> {
        let response = self.transport.send(ctx, request).await?;
        decode_empty(&response)
    }

    /// Send a request and return the success body verbatim
    pub(crate) async fn execute_bytes(&self, ctx: &Context, request: Request) -> Result<Bytes> {
        let response = self.transport.send(ctx, request).await?;
        decode_bytes(response)
    }

    /// Iterator over a `{ "<field>": [...] }` collection starting at `path`
    pub(crate) fn list<T>(&self, path: String, field: &'static str) -> ResourceIter<T>
    where
        T: DeserializeOwned + 'static,
    {
        ResourceIter::new(self.transport.clone(), path, collection_decoder(field))
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}

/// Percent-encode a value for use in a query string
pub(crate) fn encode_query(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Percent-encode a value as a single path segment.
///
/// Spaces become `%20` (a `+` in a path is a literal plus) and the dot
/// segments `.` and `..` are escaped so they are not collapsed on resolution.
pub(crate) fn encode_path(value: &str) -> String {
    if value == "." || value == ".." {
        return value.replace('.', "%2E");
    }
    // Literal `+` is already escaped as `%2B`, so any `+` left stands for a space.
    encode_query(value).replace('+', "%20")
}
