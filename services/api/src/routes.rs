use std::sync::atomic::Ordering;
use std::sync::Arc;

use advisory_desk::calculators::calculator_router;
use advisory_desk::contact::{contact_router, InquirySink};
use advisory_desk::content::{notice_router, NoticeFeedService, NoticeStore};
use advisory_desk::session::{session_router, SessionGateway};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde_json::json;

use crate::infra::AppState;

/// Assemble the portal surface: operational endpoints plus the domain
/// routers from the library crate.
pub(crate) fn portal_router<S, Q, G>(
    state: AppState,
    notices: Arc<NoticeFeedService<S>>,
    inquiries: Arc<Q>,
    sessions: Arc<G>,
) -> Router
where
    S: NoticeStore + 'static,
    Q: InquirySink + 'static,
    G: SessionGateway + 'static,
{
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .merge(calculator_router())
        .merge(notice_router(notices))
        .merge(contact_router(inquiries))
        .merge(session_router(sessions))
        .layer(Extension(state))
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisory_desk::contact::InMemoryInquirySink;
    use advisory_desk::content::InMemoryNoticeStore;
    use advisory_desk::session::InMemorySessionGateway;
    use axum::body::Body;
    use axum::http::Request;
    use axum_prometheus::PrometheusMetricLayer;
    use std::sync::atomic::AtomicBool;
    use tower::util::ServiceExt;

    #[tokio::test]
    async fn portal_surface_serves_operational_and_domain_routes() {
        let (_layer, handle) = PrometheusMetricLayer::pair();
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(true)),
            metrics: Arc::new(handle),
        };
        let router = portal_router(
            state,
            Arc::new(NoticeFeedService::new(Arc::new(
                InMemoryNoticeStore::default(),
            ))),
            Arc::new(InMemoryInquirySink::default()),
            Arc::new(InMemorySessionGateway::default()),
        );

        let health = router
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(health.status(), StatusCode::OK);

        let ready = router
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/ready")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(ready.status(), StatusCode::OK);

        let notices = router
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/notices")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(notices.status(), StatusCode::OK);

        let assessment = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/calculators/itc")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        json!({ "category": "raw_materials", "purpose": "business" }).to_string(),
                    ))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(assessment.status(), StatusCode::OK);
    }
}
