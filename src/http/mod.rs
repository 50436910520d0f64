//! HTTP transport module
//!
//! Provides the request/response types and the [`Transport`] seam every
//! accessor and iterator sends through.
//!
//! # Features
//!
//! - **Dual path resolution**: relative paths join the configured endpoint,
//!   absolute `href` URLs are fetched verbatim
//! - **Bearer authentication** on every request
//! - **Cooperative cancellation** via [`Context`](crate::context::Context)
//! - **No retries**: exactly one round trip per call

mod request;
mod transport;

pub use request::{Body, RawResponse, Request, JSON_CONTENT_TYPE};
pub use transport::{HttpTransport, Transport};

#[cfg(test)]
mod tests;
