use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tracing::warn;

use super::service::NoticeFeedService;
use super::store::NoticeStore;

/// Router exposing the published-notice feed.
pub fn notice_router<S>(service: Arc<NoticeFeedService<S>>) -> Router
where
    S: NoticeStore + 'static,
{
    Router::new()
        .route("/api/v1/notices", get(list_handler::<S>))
        .with_state(service)
}

pub(crate) async fn list_handler<S>(
    State(service): State<Arc<NoticeFeedService<S>>>,
) -> Response
where
    S: NoticeStore + 'static,
{
    match service.latest() {
        Ok(notices) => (StatusCode::OK, Json(notices)).into_response(),
        Err(error) => {
            warn!(%error, "notice feed fetch failed");
            let payload = json!({
                "error": "Failed to load legal updates. Please try again later.",
            });
            (StatusCode::BAD_GATEWAY, Json(payload)).into_response()
        }
    }
}
