//! Pagination module
//!
//! Lazy iteration over paginated collection endpoints.
//!
//! # Overview
//!
//! A [`ResourceIter`] walks a collection one page at a time. Items from the
//! buffered page are handed out without I/O; only when the buffer runs dry
//! does the iterator fetch the stored continuation URL. Each page is decoded
//! by a [`PageDecoder`] supplied at construction, so one iterator serves
//! every resource kind.

mod iter;
mod page;

pub use iter::ResourceIter;
pub use page::{collection_decoder, parse_link_header, Page, PageDecoder};
