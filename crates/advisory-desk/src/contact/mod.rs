//! Contact-form intake: validation plus a pluggable submission sink.

mod domain;
mod router;
mod sink;

pub use domain::{ContactInquiry, ContactValidationError};
pub use router::contact_router;
pub use sink::{InMemoryInquirySink, InquiryReceipt, InquirySink, InquirySinkError};
