use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::AppState;
use crate::client::UpstreamError;
use crate::models::{ErrorResponse, StatusResponse, UpdateRequest, UpdateResponse};

pub async fn get_status(State(state): State<AppState>) -> Response {

    match state.settings_client.fetch_settings().await {
        Ok(settings) => {
            let status = settings.status_text();
            (StatusCode::OK, Json(StatusResponse { status })).into_response()
        }
        Err(err) => {
            // upstream detail stays in the log, callers get a generic error
            error!("GET /status failed: {err}");
            let body = ErrorResponse { error: "Failed to fetch status" };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }

}

pub async fn post_update(State(state): State<AppState>, body: Bytes) -> Response {

    // typed parse: a missing or non-string new_status is a failure here,
    // it is never forwarded upstream as a null-like value
    let request: UpdateRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(err) => {
            error!("POST /update rejected inbound body: {err}");
            return update_failed(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    match state.settings_client.update_custom_status(&request.new_status).await {
        Ok(()) => {
            (StatusCode::OK, Json(UpdateResponse { success: true })).into_response()
        }
        Err(UpstreamError::Rejected { status, body }) => {
            error!("POST /update rejected upstream ({status}): {body}");
            // forward the upstream status code, but not its body
            let status = StatusCode::from_u16(status)
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            update_failed(status)
        }
        Err(err @ UpstreamError::Transport(_)) => {
            error!("POST /update failed: {err}");
            update_failed(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }

}

pub async fn not_found() -> Response {

    (StatusCode::NOT_FOUND, "Not Found").into_response()

}

fn update_failed(status: StatusCode) -> Response {

    (status, Json(UpdateResponse { success: false })).into_response()

}
