//! HTTP transport
//!
//! Builds authenticated requests against the configured endpoint, performs a
//! single round trip and hands back the raw outcome. Classification of the
//! status code is left to the envelope decoder; this layer only fails for
//! network problems, cancellation, timeouts and malformed requests.

use super::request::{is_absolute_url, Body, RawResponse, Request};
use crate::config::ClientConfig;
use crate::context::Context;
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Something that can perform one request/response round trip
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `request` and return the raw response.
    ///
    /// A non-2xx status is not an error at this level.
    async fn send(&self, ctx: &Context, request: Request) -> Result<RawResponse>;
}

/// Transport backed by a `reqwest` client
///
/// Holds only immutable configuration, so one instance can serve any number
/// of concurrent callers.
pub struct HttpTransport {
    client: Client,
    base_url: Url,
    token: String,
    timeout: Duration,
}

impl HttpTransport {
    /// Create a transport from client configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: Url::parse(&config.endpoint)?,
            token: config.token.clone(),
            timeout: config.timeout,
        })
    }

    /// Resolve a request path to the URL that will be fetched.
    ///
    /// Absolute URLs are used verbatim; anything else is appended to the
    /// base endpoint, keeping the endpoint's own path prefix.
    pub fn build_url(&self, path: &str) -> Result<Url> {
        if is_absolute_url(path) {
            return Ok(Url::parse(path)?);
        }

        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }

    fn timeout_error(&self) -> Error {
        Error::Timeout {
            timeout_ms: self.timeout.as_millis() as u64,
        }
    }

    async fn round_trip(&self, request: Request) -> Result<RawResponse> {
        let url = self.build_url(&request.path)?;
        let method = request.method;

        let mut req = self
            .client
            .request(method.clone(), url.clone())
            .bearer_auth(&self.token);

        match request.body {
            Some(Body::Multipart(form)) => {
                req = req.multipart(form);
            }
            Some(body) => {
                if let Some(content_type) = body.content_type() {
                    let value = HeaderValue::from_str(content_type).map_err(|e| {
                        Error::invalid_request(format!("invalid content type: {e}"))
                    })?;
                    req = req.header(CONTENT_TYPE, value);
                }
                if let Some(data) = body.bytes() {
                    req = req.body(data.clone());
                }
            }
            None => {}
        }

        debug!("Sending request: {} {}", method, url);

        let response = req.send().await.map_err(|e| {
            if e.is_timeout() {
                self.timeout_error()
            } else {
                Error::Http(e)
            }
        })?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                self.timeout_error()
            } else {
                Error::Http(e)
            }
        })?;

        if (200..300).contains(&status) {
            debug!("Request succeeded: {} {} -> {}", method, url, status);
        } else {
            warn!("Request failed: {} {} -> {}", method, url, status);
        }

        Ok(RawResponse::with_headers(status, headers, body))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, ctx: &Context, request: Request) -> Result<RawResponse> {
        if ctx.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let method = request.method.clone();
        let path = request.path.clone();
        let started = tokio::time::Instant::now();
        let deadline = ctx.deadline();
        let expired = async {
            match deadline {
                Some(at) => tokio::time::sleep_until(at).await,
                None => std::future::pending().await,
            }
        };

        // Dropping the losing branch aborts the in-flight request.
        tokio::select! {
            biased;
            () = ctx.token().cancelled() => {
                debug!("Request cancelled: {} {}", method, path);
                Err(Error::Cancelled)
            }
            () = expired => {
                warn!("Request deadline exceeded: {} {}", method, path);
                Err(Error::Timeout {
                    timeout_ms: started.elapsed().as_millis() as u64,
                })
            }
            result = self.round_trip(request) => result,
        }
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
