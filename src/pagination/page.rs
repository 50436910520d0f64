//! Page envelopes and page decoders

use crate::decode::check_status;
use crate::error::{Error, Result};
use crate::http::RawResponse;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::sync::Arc;

/// One page of a collection
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items in server order
    pub items: Vec<T>,
    /// Absolute URL of the next page, `None` on the last page
    pub next_url: Option<String>,
}

impl<T> Page<T> {
    /// Create a page
    pub fn new(items: Vec<T>, next_url: Option<String>) -> Self {
        Self { items, next_url }
    }

    /// A final page
    pub fn last(items: Vec<T>) -> Self {
        Self::new(items, None)
    }
}

/// Decodes a fetched response into a page of `T`
pub type PageDecoder<T> = Arc<dyn Fn(&RawResponse) -> Result<Page<T>> + Send + Sync>;

/// Decoder for `{ "<field>": [...] }` collection envelopes.
///
/// A missing or `null` field decodes as an empty page. The continuation is
/// taken from the `Link` header (`rel="next"`), falling back to a `next` URL
/// field in the body.
pub fn collection_decoder<T>(field: &'static str) -> PageDecoder<T>
where
    T: DeserializeOwned + 'static,
{
    Arc::new(move |response: &RawResponse| {
        check_status(response)?;

        let mut envelope: Map<String, Value> = serde_json::from_slice(&response.body)
            .map_err(|e| {
                Error::decode(response.status, format!("Failed to parse page: {e}"))
            })?;

        let items = match envelope.remove(field) {
            None | Some(Value::Null) => Vec::new(),
            Some(value) => serde_json::from_value(value).map_err(|e| {
                Error::decode(
                    response.status,
                    format!("Failed to decode '{field}' collection: {e}"),
                )
            })?,
        };

        let next_url = response
            .header("link")
            .and_then(|link| parse_link_header(link, "next"))
            .or_else(|| match envelope.get("next") {
                Some(Value::String(url)) if !url.is_empty() => Some(url.clone()),
                _ => None,
            });

        Ok(Page::new(items, next_url))
    })
}

/// Parse a Link header and extract the URL for the given rel
///
/// Format: `<https://api.example.com/checks?page=2>; rel="next", <...>; rel="last"`
pub fn parse_link_header(header: &str, target_rel: &str) -> Option<String> {
    for part in header.split(',') {
        let mut url = None;
        let mut rel = None;

        for segment in part.trim().split(';') {
            let segment = segment.trim();
            if let Some(inner) = segment.strip_prefix('<').and_then(|s| s.strip_suffix('>')) {
                url = Some(inner);
            } else if let Some(stripped) = segment.strip_prefix("rel=") {
                rel = Some(stripped.trim_matches('"').trim_matches('\''));
            }
        }

        if let (Some(u), Some(r)) = (url, rel) {
            if r.split_whitespace().any(|r| r == target_rel) && !u.is_empty() {
                return Some(u.to_string());
            }
        }
    }

    None
}
