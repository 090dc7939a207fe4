//! Published-notice feed: the firm's regulatory updates, fetched from a
//! hosted store and served newest-first.

mod domain;
mod importer;
mod router;
mod service;
mod store;

pub use domain::Notice;
pub use importer::{NoticeCsvImporter, NoticeImportError};
pub use router::notice_router;
pub use service::NoticeFeedService;
pub use store::{InMemoryNoticeStore, NoticeStore, NoticeStoreError};
