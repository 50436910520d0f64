// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]

//! # Onfido Client
//!
//! An async client for the Onfido identity-verification REST API.
//!
//! ## Features
//!
//! - **Typed records**: checks, reports, applicants, documents, live videos
//! - **Structured errors**: transport, API and decode failures kept apart
//! - **Lazy pagination**: one page fetched per buffer refill, via the `Link` header
//! - **Cancellation**: every call takes a [`Context`] with a token and optional deadline
//! - **No hidden retries**: each call is exactly one round trip
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use onfido_client::{Client, Context, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::from_env()?;
//!     let ctx = Context::background();
//!
//!     let check = client.get_check_expanded(&ctx, "check-id").await?;
//!     println!("{:?} with {} reports", check.status, check.reports.len());
//!
//!     let mut checks = client.list_checks("applicant-id");
//!     while checks.advance(&ctx).await {
//!         println!("{}", checks.current().unwrap().id);
//!     }
//!     if let Some(err) = checks.err() {
//!         eprintln!("listing failed: {err}");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                    Resource Accessors                     │
//! │  checks  reports  applicants  documents  live videos href │
//! └───────────────┬───────────────────────────┬───────────────┘
//!                 │                           │
//!                 │                   ┌───────┴────────┐
//!                 │                   │ ResourceIter<T>│
//!                 │                   └───────┬────────┘
//! ┌───────────────┴───────────────────────────┴───────────────┐
//! │              Transport (build + send, no retry)           │
//! └─────────────────────────────┬─────────────────────────────┘
//! ┌─────────────────────────────┴─────────────────────────────┐
//! │        Envelope decoder (typed value / ApiError)          │
//! └───────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Client configuration
pub mod config;

/// Cancellation context
pub mod context;

/// HTTP transport
pub mod http;

/// Response envelope decoding
pub mod decode;

/// Lazy pagination
pub mod pagination;

/// API client
pub mod client;

/// Typed resources and their accessors
pub mod resources;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::Client;
pub use config::ClientConfig;
pub use context::Context;
pub use error::{ApiError, Error, Result};
pub use pagination::ResourceIter;
pub use resources::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
