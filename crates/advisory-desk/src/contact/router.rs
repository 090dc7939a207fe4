use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;
use tracing::{info, warn};

use super::domain::ContactInquiry;
use super::sink::InquirySink;

/// Router exposing contact-form intake.
pub fn contact_router<S>(sink: Arc<S>) -> Router
where
    S: InquirySink + 'static,
{
    Router::new()
        .route("/api/v1/contact", post(submit_handler::<S>))
        .with_state(sink)
}

pub(crate) async fn submit_handler<S>(
    State(sink): State<Arc<S>>,
    Json(inquiry): Json<ContactInquiry>,
) -> Response
where
    S: InquirySink + 'static,
{
    let inquiry = match inquiry.validated() {
        Ok(inquiry) => inquiry,
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
        }
    };

    match sink.submit(inquiry) {
        Ok(receipt) => {
            info!(reference = %receipt.reference, "contact inquiry accepted");
            (StatusCode::ACCEPTED, Json(receipt)).into_response()
        }
        Err(error) => {
            warn!(%error, "contact inquiry submission failed");
            let payload = json!({ "error": error.to_string() });
            (StatusCode::BAD_GATEWAY, Json(payload)).into_response()
        }
    }
}
