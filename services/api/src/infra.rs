use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use advisory_desk::config::ContentConfig;
use advisory_desk::content::{InMemoryNoticeStore, NoticeCsvImporter};
use advisory_desk::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Build the notice store the server runs with: seeded from the configured
/// CSV export when one is set, otherwise empty until notices are published.
pub(crate) fn notice_store(config: &ContentConfig) -> Result<InMemoryNoticeStore, AppError> {
    match &config.notices_csv {
        Some(path) => {
            let notices = NoticeCsvImporter::from_path(path)?;
            info!(count = notices.len(), path = %path.display(), "notice store seeded");
            Ok(InMemoryNoticeStore::seeded(notices))
        }
        None => Ok(InMemoryNoticeStore::default()),
    }
}
