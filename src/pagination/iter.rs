//! Lazy iterator over a paginated collection

use super::page::{Page, PageDecoder};
use crate::context::Context;
use crate::error::{Error, Result};
use crate::http::{Request, Transport};
use futures::stream::{self, Stream};
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::debug;

/// Pull-based, forward-only iterator over a paginated collection
///
/// Not restartable. `advance` mutates the page buffer, so concurrent use
/// requires external synchronization.
///
/// ```rust,ignore
/// let mut checks = client.list_checks("applicant-id");
/// while checks.advance(&ctx).await {
///     let check = checks.current().unwrap();
///     println!("{}", check.id);
/// }
/// if let Some(err) = checks.err() {
///     eprintln!("listing failed: {err}");
/// }
/// ```
pub struct ResourceIter<T> {
    transport: Arc<dyn Transport>,
    decoder: PageDecoder<T>,
    /// Unconsumed items of the buffered page
    buffer: VecDeque<T>,
    current: Option<T>,
    /// Next page to fetch, `None` once the last page has been buffered
    next_url: Option<String>,
    /// Sticky failure
    err: Option<Error>,
    pages_fetched: usize,
}

impl<T> ResourceIter<T> {
    /// Create an iterator whose first page is fetched from `start`
    pub fn new(
        transport: Arc<dyn Transport>,
        start: impl Into<String>,
        decoder: PageDecoder<T>,
    ) -> Self {
        Self {
            transport,
            decoder,
            buffer: VecDeque::new(),
            current: None,
            next_url: Some(start.into()),
            err: None,
            pages_fetched: 0,
        }
    }

    /// Move to the next item.
    ///
    /// Returns `false` when the collection is exhausted or a page fetch
    /// failed; [`err`](Self::err) tells the two apart. Both outcomes are
    /// final: later calls return `false` without touching the network.
    pub async fn advance(&mut self, ctx: &Context) -> bool {
        if self.err.is_some() {
            return false;
        }

        loop {
            if let Some(item) = self.buffer.pop_front() {
                self.current = Some(item);
                return true;
            }
            self.current = None;

            // Empty pages with a continuation are skipped over.
            let Some(url) = self.next_url.take() else {
                return false;
            };

            match self.fetch(ctx, url).await {
                Ok(page) => {
                    self.buffer = page.items.into();
                    self.next_url = page.next_url;
                }
                Err(e) => {
                    debug!("Page fetch failed after {} pages: {}", self.pages_fetched, e);
                    self.err = Some(e);
                    return false;
                }
            }
        }
    }

    async fn fetch(&mut self, ctx: &Context, url: String) -> Result<Page<T>> {
        debug!("Fetching page {}: {}", self.pages_fetched + 1, url);
        let response = self.transport.send(ctx, Request::get(url)).await?;
        let page = (self.decoder)(&response)?;
        self.pages_fetched += 1;
        debug!(
            "Page {} decoded: {} items, more={}",
            self.pages_fetched,
            page.items.len(),
            page.next_url.is_some()
        );
        Ok(page)
    }

    /// Item at the cursor set by the last successful [`advance`](Self::advance).
    ///
    /// `None` before the first successful advance and once the iterator has
    /// finished or failed.
    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    /// Move the current item out of the iterator
    pub fn take_current(&mut self) -> Option<T> {
        self.current.take()
    }

    /// The failure that stopped iteration, if any
    pub fn err(&self) -> Option<&Error> {
        self.err.as_ref()
    }

    /// Number of pages fetched so far
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Drain the remaining items, failing if any page fetch fails
    pub async fn collect_all(mut self, ctx: &Context) -> Result<Vec<T>> {
        let mut items = Vec::new();
        while self.advance(ctx).await {
            items.extend(self.current.take());
        }
        match self.err.take() {
            Some(e) => Err(e),
            None => Ok(items),
        }
    }

    /// Convert into a stream yielding each item, then at most one error
    pub fn into_stream(self, ctx: Context) -> impl Stream<Item = Result<T>> {
        stream::unfold(Some((self, ctx)), |state| async move {
            let (mut iter, ctx) = state?;
            if iter.advance(&ctx).await {
                let item = iter.current.take()?;
                return Some((Ok(item), Some((iter, ctx))));
            }
            iter.err.take().map(|e| (Err(e), None))
        })
    }
}

impl<T> std::fmt::Debug for ResourceIter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceIter")
            .field("buffered", &self.buffer.len())
            .field("next_url", &self.next_url)
            .field("pages_fetched", &self.pages_fetched)
            .field("failed", &self.err.is_some())
            .finish_non_exhaustive()
    }
}
