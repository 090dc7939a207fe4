use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tracing::info;

use super::gateway::{Credentials, SessionError, SessionGateway};

/// Router exposing the session capability.
pub fn session_router<G>(gateway: Arc<G>) -> Router
where
    G: SessionGateway + 'static,
{
    Router::new()
        .route("/api/v1/session/sign-up", post(sign_up_handler::<G>))
        .route("/api/v1/session/sign-in", post(sign_in_handler::<G>))
        .route(
            "/api/v1/session",
            get(current_handler::<G>).delete(sign_out_handler::<G>),
        )
        .with_state(gateway)
}

pub(crate) async fn sign_up_handler<G>(
    State(gateway): State<Arc<G>>,
    Json(credentials): Json<Credentials>,
) -> Response
where
    G: SessionGateway + 'static,
{
    match gateway.sign_up(credentials) {
        Ok(session) => {
            info!(email = %session.email, "client account created");
            (StatusCode::CREATED, Json(session)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn sign_in_handler<G>(
    State(gateway): State<Arc<G>>,
    Json(credentials): Json<Credentials>,
) -> Response
where
    G: SessionGateway + 'static,
{
    match gateway.sign_in(credentials) {
        Ok(session) => (StatusCode::OK, Json(session)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn sign_out_handler<G>(State(gateway): State<Arc<G>>) -> Response
where
    G: SessionGateway + 'static,
{
    match gateway.sign_out() {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn current_handler<G>(State(gateway): State<Arc<G>>) -> Response
where
    G: SessionGateway + 'static,
{
    match gateway.current_session() {
        Ok(session) => (StatusCode::OK, Json(session)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: SessionError) -> Response {
    let status = match error {
        SessionError::InvalidCredentials | SessionError::NotSignedIn => StatusCode::UNAUTHORIZED,
        SessionError::DuplicateAccount => StatusCode::CONFLICT,
        SessionError::WeakPassword { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        SessionError::Unavailable(_) => StatusCode::BAD_GATEWAY,
    };
    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}
