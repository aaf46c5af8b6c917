//! Bearer-token gate for `/api`. Tokens are only checked for shape, not verified.

use axum::{
    Form, Json,
    extract::Request,
    http::{StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

pub async fn require_bearer(request: Request, next: Next) -> Response {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    let Some(token) = header.strip_prefix("Bearer ") else {
        return unauthorized("Unauthorized");
    };
    if token.is_empty() {
        return unauthorized("Invalid token");
    }

    next.run(request).await
}

fn unauthorized(reason: &str) -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({ "error": reason }))).into_response()
}

#[derive(Deserialize)]
pub struct AuthCallbackForm {
    #[serde(default)]
    token: String,
}

pub async fn auth_callback(Form(form): Form<AuthCallbackForm>) -> Response {
    if form.token.is_empty() {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "Missing token" }))).into_response();
    }
    Json(json!({ "message": "Auth callback successful", "token": form.token })).into_response()
}

pub async fn profile() -> Json<serde_json::Value> {
    Json(json!({
        "user": "John Doe",
        "email": "john.doe@example.com",
    }))
}
