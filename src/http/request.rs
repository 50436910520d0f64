//! Request and response values exchanged with a [`Transport`](super::Transport)

use crate::error::{Error, Result};
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::multipart::Form;
use reqwest::Method;
use serde::Serialize;

/// Content type used for JSON bodies
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Body of an outgoing request
pub enum Body {
    /// UTF-8 JSON, sent as `application/json`
    Json(Bytes),
    /// Arbitrary bytes with an explicit content type
    Raw {
        /// Body bytes
        data: Bytes,
        /// Content type header value
        content_type: String,
    },
    /// Multipart form, content type set by the form boundary
    Multipart(Form),
}

impl Body {
    /// Content type sent with this body, if fixed ahead of time
    pub fn content_type(&self) -> Option<&str> {
        match self {
            Body::Json(_) => Some(JSON_CONTENT_TYPE),
            Body::Raw { content_type, .. } => Some(content_type),
            Body::Multipart(_) => None,
        }
    }

    /// Body bytes, unless the body is a streamed multipart form
    pub fn bytes(&self) -> Option<&Bytes> {
        match self {
            Body::Json(data) | Body::Raw { data, .. } => Some(data),
            Body::Multipart(_) => None,
        }
    }
}

impl std::fmt::Debug for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Body::Json(data) => f.debug_tuple("Json").field(&data.len()).finish(),
            Body::Raw { data, content_type } => f
                .debug_struct("Raw")
                .field("len", &data.len())
                .field("content_type", content_type)
                .finish(),
            Body::Multipart(_) => f.write_str("Multipart"),
        }
    }
}

/// A single API request
///
/// `path` is either relative to the configured endpoint (`/checks/123`) or a
/// fully-qualified URL used verbatim.
#[derive(Debug)]
pub struct Request {
    /// HTTP method
    pub method: Method,
    /// Relative path or absolute URL
    pub path: String,
    /// Optional body
    pub body: Option<Body>,
}

impl Request {
    /// Create a request without a body
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    /// GET request
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// POST request
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// PUT request
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// DELETE request
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Serialize `value` as the JSON body
    pub fn json<T: Serialize + ?Sized>(mut self, value: &T) -> Result<Self> {
        let data = serde_json::to_vec(value)
            .map_err(|e| Error::invalid_request(format!("failed to serialize body: {e}")))?;
        self.body = Some(Body::Json(Bytes::from(data)));
        Ok(self)
    }

    /// Set a raw body with an explicit content type
    #[must_use]
    pub fn raw(mut self, data: impl Into<Bytes>, content_type: impl Into<String>) -> Self {
        self.body = Some(Body::Raw {
            data: data.into(),
            content_type: content_type.into(),
        });
        self
    }

    /// Set a multipart form body
    #[must_use]
    pub fn multipart(mut self, form: Form) -> Self {
        self.body = Some(Body::Multipart(form));
        self
    }
}

pub(crate) fn is_absolute_url(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

/// Status, headers and body of a completed round trip
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Full response body
    pub body: Bytes,
}

impl RawResponse {
    /// Create a response with no headers
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Create a response with headers
    pub fn with_headers(status: u16, headers: HeaderMap, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Header value as a string, if present and valid UTF-8
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
