//! Image review page
//!
//! Reads the capture `id` and `title` from the page query string, renders
//! the capture for review and takes a single accept/reject decision before
//! sending the reviewer back to the gallery.

mod controller;
mod record;

pub use controller::{LogSink, Navigator, SubmissionSink, ValidationController, ValidationSurface};
pub use record::{
    parse_query, placeholder_url, Decision, MessageTone, ValidationRecord, ValidationSubmission,
    DEFAULT_ID, DEFAULT_TITLE,
};
