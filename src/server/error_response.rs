use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// JSON error body shared by every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl ErrorResponse {
    pub fn new(error: &str, message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
            status_code: status.as_u16(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new("Invalid request", message, StatusCode::BAD_REQUEST)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("Not found", message, StatusCode::NOT_FOUND)
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_status() {
        assert_eq!(ErrorResponse::invalid_request("x").status_code, 400);
        assert_eq!(ErrorResponse::not_found("x").status_code, 404);
        assert_eq!(ErrorResponse::not_found("x").status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_serializes_status_code_in_camel_case() {
        let value = serde_json::to_value(ErrorResponse::not_found("Route GET /nope not found")).unwrap();
        assert_eq!(value["error"], "Not found");
        assert_eq!(value["message"], "Route GET /nope not found");
        assert_eq!(value["statusCode"], 404);
    }
}
