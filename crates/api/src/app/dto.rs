use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `{ "items": [...] }` listing envelope.
pub fn items_response<T: Serialize>(items: Vec<T>) -> axum::response::Response {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "items": items })),
    )
        .into_response()
}

pub fn json_ok<T: Serialize>(value: T) -> axum::response::Response {
    (StatusCode::OK, axum::Json(value)).into_response()
}

pub fn json_created<T: Serialize>(value: T) -> axum::response::Response {
    (StatusCode::CREATED, axum::Json(value)).into_response()
}
