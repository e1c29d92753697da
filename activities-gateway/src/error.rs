//! Error types for the gateway crate.

use activities_core::RegistryError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Errors that can occur during gateway request handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// A rejected registry operation.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The `email` query parameter was absent.
    #[error("email query parameter is required")]
    MissingEmail,
}

impl GatewayError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::Registry(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            GatewayError::Registry(_) => StatusCode::BAD_REQUEST,
            GatewayError::MissingEmail => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({"detail": self.to_string()}))).into_response()
    }
}
