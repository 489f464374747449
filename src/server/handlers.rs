use axum::{
    extract::{rejection::JsonRejection, State},
    http::{Method, Request, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::constants::{INVALID_ADDRESS_MESSAGE, SERVICE_NAME};
use crate::observability::metrics;
use crate::server::error_response::ErrorResponse;
use crate::server::state::AppState;

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// POST /validate-address
///
/// The body must carry a non-blank string `address`; anything else is a
/// 400 and never reaches the provider. Validation itself always answers 200.
pub async fn validate_address(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let Json(body) = match payload {
        Ok(body) => body,
        Err(rejection) => {
            warn!("Rejected validate-address body: {}", rejection.body_text());
            return ErrorResponse::invalid_request(rejection.body_text()).into_response();
        }
    };

    let address = match body.get("address").and_then(Value::as_str) {
        Some(address) if !address.trim().is_empty() => address,
        _ => return ErrorResponse::invalid_request(INVALID_ADDRESS_MESSAGE).into_response(),
    };

    let request_id = Uuid::new_v4();
    let result = state
        .service
        .validate(address)
        .instrument(info_span!("validate_address", %request_id))
        .await;

    Json(result).into_response()
}

/// Prometheus text exposition.
pub async fn metrics_endpoint(State(state): State<AppState>) -> Response {
    match state.metrics {
        Some(handle) => handle.render().into_response(),
        None => ErrorResponse::not_found("Metrics are not enabled").into_response(),
    }
}

pub async fn not_found(method: Method, uri: Uri) -> ErrorResponse {
    ErrorResponse::not_found(format!("Route {} {} not found", method, uri.path()))
}

/// Logs `<METHOD> <path>` for every request and counts responses.
pub async fn log_request<B>(req: Request<B>, next: Next<B>) -> Response {
    let method = req.method().clone();
    info!("{} {}", method, req.uri().path());

    let response = next.run(req).await;
    metrics::http::request_received(method.as_str(), response.status().as_u16());
    response
}
