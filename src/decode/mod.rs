//! Response envelope decoder
//!
//! Turns a [`RawResponse`](crate::http::RawResponse) into either a typed
//! value or a typed error, based on the status code.
//!
//! # Overview
//!
//! - 2xx + JSON target: the body is deserialized into the target type; a body
//!   that does not match is a [`Error::Decode`](crate::Error::Decode)
//! - 2xx + raw target: the body is returned verbatim, no JSON parsing
//! - anything else: the body is decoded as an API error envelope, falling back
//!   to a synthesized [`ApiError`](crate::ApiError) carrying the raw text

mod envelope;

pub use envelope::{check_status, decode_bytes, decode_empty, decode_json};

#[cfg(test)]
mod tests;
