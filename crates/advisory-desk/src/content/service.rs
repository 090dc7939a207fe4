use std::sync::Arc;

use tracing::debug;

use super::domain::Notice;
use super::store::{NoticeStore, NoticeStoreError};

/// Read side of the notice feed: fetch everything, newest first.
pub struct NoticeFeedService<S> {
    store: Arc<S>,
}

impl<S> NoticeFeedService<S>
where
    S: NoticeStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// All published notices ordered by publication date descending.
    /// Same-day notices tie-break by descending id so the feed is stable.
    pub fn latest(&self) -> Result<Vec<Notice>, NoticeStoreError> {
        let mut notices = self.store.fetch_all()?;
        notices.sort_by(|a, b| {
            b.published_on
                .cmp(&a.published_on)
                .then_with(|| b.id.cmp(&a.id))
        });
        debug!(count = notices.len(), "notice feed assembled");
        Ok(notices)
    }
}
