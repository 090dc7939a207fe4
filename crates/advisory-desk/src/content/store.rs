use std::sync::{Arc, Mutex};

use super::domain::Notice;

/// Storage abstraction over the hosted notices table so the feed can be
/// exercised without the hosted backend.
pub trait NoticeStore: Send + Sync {
    fn fetch_all(&self) -> Result<Vec<Notice>, NoticeStoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum NoticeStoreError {
    #[error("notice store unavailable: {0}")]
    Unavailable(String),
}

/// In-memory store used by tests and as the server default until a hosted
/// backend is wired in.
#[derive(Default, Clone)]
pub struct InMemoryNoticeStore {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl InMemoryNoticeStore {
    pub fn seeded(notices: Vec<Notice>) -> Self {
        Self {
            notices: Arc::new(Mutex::new(notices)),
        }
    }

    pub fn publish(&self, notice: Notice) {
        self.notices
            .lock()
            .expect("notice store mutex poisoned")
            .push(notice);
    }
}

impl NoticeStore for InMemoryNoticeStore {
    fn fetch_all(&self) -> Result<Vec<Notice>, NoticeStoreError> {
        Ok(self
            .notices
            .lock()
            .expect("notice store mutex poisoned")
            .clone())
    }
}
