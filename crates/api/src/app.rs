use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

use viewsmith_ai::{CodeModel, STARTER_FRAGMENT, build_messages, extract_code_block};
use viewsmith_core::{GenerateRequest, GenerateResponse, UserId};

use crate::middleware::AuthState;
use crate::store::ComponentStore;

#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn CodeModel>,
    pub store: Arc<ComponentStore>,
}

pub fn build_app(state: AppState, service_token: String) -> Router {
    let auth_state = AuthState {
        service_token: service_token.into(),
    };

    // Only generation needs the service token; artifacts are read back by
    // the shell without credentials, like the static assets they replace.
    let protected = Router::new()
        .route("/generate_jsx", post(generate_jsx))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            crate::middleware::auth_middleware,
        ));

    Router::new()
        .route("/health", get(health))
        .route("/components/:user_id", get(get_component))
        .merge(protected)
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn generate_jsx(
    State(state): State<AppState>,
    Json(body): Json<GenerateRequest>,
) -> Response {
    if let Err(e) = body.validate() {
        return json_error(StatusCode::BAD_REQUEST, e.to_string());
    }

    tracing::info!(
        user_id = %body.user_id,
        model = %body.model,
        modify_existing = body.modify_existing,
        has_image = body.image.is_some(),
        "generation requested"
    );

    let existing = if body.modify_existing {
        match state.store.load(body.user_id).await {
            Ok(Some(markup)) => Some(markup),
            Ok(None) => Some(STARTER_FRAGMENT.to_string()),
            Err(e) => return json_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        }
    } else {
        None
    };

    let messages = build_messages(&body.prompt, body.image.as_deref(), existing.as_deref());

    let reply = match state.model.complete(&body.model, messages).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::error!(user_id = %body.user_id, "model call failed: {e}");
            return json_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
        }
    };

    let Some(code) = extract_code_block(&reply) else {
        tracing::warn!(user_id = %body.user_id, "model reply carried no code block");
        return json_error(
            StatusCode::NOT_FOUND,
            "No JSX code block found in the response",
        );
    };

    if let Err(e) = state.store.save(body.user_id, &code).await {
        tracing::error!(user_id = %body.user_id, "artifact write failed: {e}");
        return json_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
    }

    (
        StatusCode::OK,
        Json(GenerateResponse {
            success: true,
            message: Some("generated successfully".to_string()),
        }),
    )
        .into_response()
}

async fn get_component(State(state): State<AppState>, Path(user_id): Path<String>) -> Response {
    let user_id: UserId = match user_id.parse() {
        Ok(v) => v,
        Err(_) => return json_error(StatusCode::BAD_REQUEST, "invalid user id"),
    };

    match state.store.load(user_id).await {
        Ok(Some(markup)) => (
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            markup,
        )
            .into_response(),
        Ok(None) => json_error(StatusCode::NOT_FOUND, "no generated component for this user"),
        Err(e) => {
            tracing::error!(%user_id, "artifact read failed: {e}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

fn json_error(status: StatusCode, detail: impl Into<String>) -> Response {
    (
        status,
        Json(serde_json::json!({ "detail": detail.into() })),
    )
        .into_response()
}
