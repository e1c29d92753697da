//! Axum route handlers for the activity registry API.

use std::sync::Arc;

use activities_core::{Confirmation, Registry};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{info, warn};

use crate::{config::GatewayConfig, error::GatewayError};

// ── Shared state ─────────────────────────────────────────────────────────────

type Shared = Arc<Registry>;

// ── Request / response types ──────────────────────────────────────────────────

/// Raw `key=value` pairs of the signup and unregister query strings.
///
/// Kept as a list so a repeated `email` does not fail extraction.
pub type QueryPairs = Vec<(String, String)>;

/// The `email` parameter; the last occurrence wins when it repeats.
///
/// # Errors
/// Returns [`GatewayError::MissingEmail`] if no `email` pair is present.
pub fn require_email(pairs: QueryPairs) -> Result<String, GatewayError> {
    pairs
        .into_iter()
        .rev()
        .find_map(|(key, value)| (key == "email").then_some(value))
        .ok_or(GatewayError::MissingEmail)
}

/// Body returned by successful signup and unregister calls.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl From<Confirmation> for MessageResponse {
    fn from(confirmation: Confirmation) -> Self {
        Self { message: confirmation.message() }
    }
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Front-end entry point that `/` redirects to.
pub const INDEX_PATH: &str = "/static/index.html";

/// Build the application router over the given registry.
pub fn create_router(registry: Shared, config: &GatewayConfig) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/activities", get(list_activities))
        .route("/activities/{activity_name}/signup", post(signup))
        .route("/activities/{activity_name}/unregister", delete(unregister))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .with_state(registry)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /`: temporary redirect to the front end.
pub async fn root() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}

/// `GET /health`: liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `GET /activities`: every activity with its current roster.
pub async fn list_activities(State(registry): State<Shared>) -> impl IntoResponse {
    Json(registry.list_activities())
}

/// `POST /activities/{activity_name}/signup?email=`: enroll a student.
///
/// # Errors
/// Returns 404 for an unknown activity, 400 if the student is already
/// signed up, 422 if `email` is missing.
pub async fn signup(
    State(registry): State<Shared>,
    Path(activity_name): Path<String>,
    Query(query): Query<QueryPairs>,
) -> Result<Json<MessageResponse>, GatewayError> {
    let email = require_email(query)?;
    let confirmation = registry.enroll(&activity_name, &email).inspect_err(|e| {
        warn!(activity = %activity_name, email = %email, error = %e, "signup rejected");
    })?;
    info!(activity = %activity_name, email = %email, "student signed up");
    Ok(Json(confirmation.into()))
}

/// `DELETE /activities/{activity_name}/unregister?email=`: withdraw a student.
///
/// # Errors
/// Returns 404 for an unknown activity, 400 if the student is not
/// registered, 422 if `email` is missing.
pub async fn unregister(
    State(registry): State<Shared>,
    Path(activity_name): Path<String>,
    Query(query): Query<QueryPairs>,
) -> Result<Json<MessageResponse>, GatewayError> {
    let email = require_email(query)?;
    let confirmation = registry.withdraw(&activity_name, &email).inspect_err(|e| {
        warn!(activity = %activity_name, email = %email, error = %e, "unregister rejected");
    })?;
    info!(activity = %activity_name, email = %email, "student unregistered");
    Ok(Json(confirmation.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header::LOCATION, Method, Request, StatusCode},
    };
    use tower::ServiceExt;

    fn test_app() -> Router {
        let registry = match Registry::seeded() {
            Ok(r) => r,
            Err(e) => panic!("seed catalog rejected: {e}"),
        };
        create_router(Arc::new(registry), &GatewayConfig::default())
    }

    async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, serde_json::Value) {
        let req = match Request::builder().method(method).uri(uri).body(Body::empty()) {
            Ok(r) => r,
            Err(e) => panic!("failed to build request: {e}"),
        };
        let resp = match app.oneshot(req).await {
            Ok(r) => r,
            Err(e) => panic!("handler error: {e}"),
        };
        let status = resp.status();
        let bytes = match axum::body::to_bytes(resp.into_body(), 64 * 1024).await {
            Ok(b) => b,
            Err(e) => panic!("failed to read body: {e}"),
        };
        let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn health_check_reports_ok_while_registry_is_served() {
        let (status, body) = send(test_app(), Method::GET, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn root_redirects_to_static_index() {
        let req = match Request::builder().uri("/").body(Body::empty()) {
            Ok(r) => r,
            Err(e) => panic!("failed to build request: {e}"),
        };
        let resp = match test_app().oneshot(req).await {
            Ok(r) => r,
            Err(e) => panic!("handler error: {e}"),
        };
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
        let location = resp.headers().get(LOCATION).and_then(|v| v.to_str().ok());
        assert_eq!(location, Some(INDEX_PATH));
    }

    #[tokio::test]
    async fn signup_reports_email_and_activity() {
        let (status, body) = send(
            test_app(),
            Method::POST,
            "/activities/Basketball/signup?email=t@mergington.edu",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Signed up t@mergington.edu for Basketball");
    }

    #[tokio::test]
    async fn signup_without_email_is_unprocessable() {
        let (status, body) = send(test_app(), Method::POST, "/activities/Basketball/signup").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].as_str().is_some_and(|d| d.contains("email")));
    }

    #[tokio::test]
    async fn unregister_decodes_spaces_in_activity_name() {
        let (status, body) = send(
            test_app(),
            Method::DELETE,
            "/activities/Chess%20Club/unregister?email=daniel@mergington.edu",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Unregistered daniel@mergington.edu from Chess Club");
    }

    #[tokio::test]
    async fn repeated_email_parameter_uses_last_value() {
        let app = test_app();
        let (status, body) = send(
            app.clone(),
            Method::POST,
            "/activities/Basketball/signup?email=a@x&email=b@x",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Signed up b@x for Basketball");

        let (status, body) = send(app, Method::GET, "/activities").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["Basketball"]["participants"], serde_json::json!(["b@x"]));
    }

    #[test]
    fn require_email_ignores_other_keys_and_reports_absence() {
        let pairs = vec![
            ("email".to_owned(), "first@x".to_owned()),
            ("ref".to_owned(), "newsletter".to_owned()),
            ("email".to_owned(), "last@x".to_owned()),
        ];
        assert!(require_email(pairs).is_ok_and(|e| e == "last@x"));

        let none = vec![("ref".to_owned(), "x".to_owned())];
        assert!(matches!(require_email(none), Err(GatewayError::MissingEmail)));
    }

    #[test]
    fn message_response_serializes_message_field() {
        let resp = MessageResponse { message: "hello".to_owned() };
        let json = match serde_json::to_string(&resp) {
            Ok(s) => s,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(json, r#"{"message":"hello"}"#);
    }
}
