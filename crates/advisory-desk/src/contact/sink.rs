use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use super::domain::ContactInquiry;

/// Trait describing the outbound submission hook (hosted table insert or
/// form relay) so routes and tests can assert the boundary.
pub trait InquirySink: Send + Sync {
    fn submit(&self, inquiry: ContactInquiry) -> Result<InquiryReceipt, InquirySinkError>;
}

/// Acknowledgement returned to the submitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryReceipt {
    pub reference: String,
}

/// Sink dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum InquirySinkError {
    #[error("inquiry transport unavailable: {0}")]
    Transport(String),
}

/// In-memory sink used by tests and the server default.
#[derive(Default)]
pub struct InMemoryInquirySink {
    entries: Mutex<Vec<ContactInquiry>>,
    sequence: AtomicU64,
}

impl InMemoryInquirySink {
    pub fn entries(&self) -> Vec<ContactInquiry> {
        self.entries
            .lock()
            .expect("inquiry sink mutex poisoned")
            .clone()
    }
}

impl InquirySink for InMemoryInquirySink {
    fn submit(&self, inquiry: ContactInquiry) -> Result<InquiryReceipt, InquirySinkError> {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        self.entries
            .lock()
            .expect("inquiry sink mutex poisoned")
            .push(inquiry);
        Ok(InquiryReceipt {
            reference: format!("inq-{id:06}"),
        })
    }
}
