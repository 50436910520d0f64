//! Status classification and body decoding

use crate::error::{ApiError, Error, Result};
use crate::http::RawResponse;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Fail with an API error unless the status is in the 2xx range
pub fn check_status(response: &RawResponse) -> Result<()> {
    if response.is_success() {
        return Ok(());
    }

    let err = ApiError::from_response(response.status, &response.body);
    debug!(
        "API error: status={} type={:?} message={}",
        err.status, err.error_type, err.message
    );
    Err(Error::Api(err))
}

/// Decode a success body into `T`
pub fn decode_json<T: DeserializeOwned>(response: &RawResponse) -> Result<T> {
    check_status(response)?;
    serde_json::from_slice(&response.body)
        .map_err(|e| Error::decode(response.status, format!("Failed to parse JSON: {e}")))
}

/// Return a success body verbatim
pub fn decode_bytes(response: RawResponse) -> Result<Bytes> {
    check_status(&response)?;
    Ok(response.body)
}

/// Accept a success response and discard its body
pub fn decode_empty(response: &RawResponse) -> Result<()> {
    check_status(response)
}
