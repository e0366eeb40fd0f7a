//! Bearer-token authentication for the generation route.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

#[derive(Clone)]
pub struct AuthState {
    pub service_token: Arc<str>,
}

pub async fn auth_middleware(
    State(state): State<AuthState>,
    req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    match extract_bearer(req.headers()) {
        Some(token) if token == state.service_token.as_ref() => next.run(req).await,
        _ => invalid_token(),
    }
}

fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(axum::http::header::AUTHORIZATION)?;

    let header = header.to_str().ok()?;

    let token = header.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }

    Some(token)
}

fn invalid_token() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({ "detail": "Invalid token" })),
    )
        .into_response()
}
