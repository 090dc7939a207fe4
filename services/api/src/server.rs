use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use advisory_desk::config::AppConfig;
use advisory_desk::contact::InMemoryInquirySink;
use advisory_desk::content::NoticeFeedService;
use advisory_desk::error::AppError;
use advisory_desk::session::InMemorySessionGateway;
use advisory_desk::telemetry;
use axum_prometheus::PrometheusMetricLayer;
use tracing::info;

use crate::cli::ServeArgs;
use crate::infra::{notice_store, AppState};
use crate::routes::portal_router;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let notices = Arc::new(NoticeFeedService::new(Arc::new(notice_store(
        &config.content,
    )?)));
    let inquiries = Arc::new(InMemoryInquirySink::default());
    let sessions = Arc::new(InMemorySessionGateway::default());

    let app = portal_router(state, notices, inquiries, sessions).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "advisory desk portal ready");

    axum::serve(listener, app).await?;
    Ok(())
}
