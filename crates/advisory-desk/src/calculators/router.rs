use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use tracing::debug;

use super::gst::{self, GstRequest};
use super::itc::{self, ItcRequest};
use super::tds::{self, TdsRequest};

/// Router exposing the three calculators. Assessments are always `200 OK`;
/// input problems come back inside the assessment payload, not as HTTP
/// errors.
pub fn calculator_router() -> Router {
    Router::new()
        .route("/api/v1/calculators/tds", post(tds_handler))
        .route("/api/v1/calculators/gst", post(gst_handler))
        .route("/api/v1/calculators/itc", post(itc_handler))
}

pub(crate) async fn tds_handler(Json(request): Json<TdsRequest>) -> Response {
    let assessment = tds::assess(&request);
    debug!(
        category = ?request.category,
        applicable = assessment.applicable,
        "tds assessment served"
    );
    (StatusCode::OK, Json(assessment)).into_response()
}

pub(crate) async fn gst_handler(Json(request): Json<GstRequest>) -> Response {
    let assessment = gst::assess(&request);
    debug!(
        location = ?request.location,
        applicable = assessment.applicable,
        "gst assessment served"
    );
    (StatusCode::OK, Json(assessment)).into_response()
}

pub(crate) async fn itc_handler(Json(request): Json<ItcRequest>) -> Response {
    let assessment = itc::assess(&request);
    debug!(
        category = ?request.category,
        eligible = assessment.eligible,
        "itc assessment served"
    );
    (StatusCode::OK, Json(assessment)).into_response()
}
