//! Resource accessors
//!
//! Typed records and the per-entity operations on [`Client`](crate::Client).
//! Every accessor composes the same three steps: build a request, send it
//! through the transport, decode the envelope. List accessors return a
//! [`ResourceIter`](crate::pagination::ResourceIter) bound to the collection
//! path and its array field.

mod applicants;
mod checks;
mod documents;
mod href;
mod live_videos;
mod reports;

pub use applicants::{Address, Applicant, ApplicantRequest};
pub use checks::{Check, CheckRequest, CheckResult, CheckRetrieved, CheckStatus, CheckType};
pub use documents::{Document, DocumentDownload, DocumentRequest, DocumentSide};
pub use live_videos::{LiveVideo, LiveVideoDownload};
pub use reports::{Report, ReportName, ReportResult, ReportStatus, ReportSubResult};

#[cfg(test)]
mod tests;
