use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use crate::context::CurrentUser;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn whoami(Extension(current): Extension<CurrentUser>) -> impl IntoResponse {
    Json(serde_json::json!({
        "user_id": current.id().to_string(),
        "email": current.user().email,
        "is_admin": current.is_admin(),
    }))
}
