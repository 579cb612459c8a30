use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::Utc;

use quotehub_budgeting::users;
use quotehub_core::{Signup, UserId, UserPatch};

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::CurrentUser;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_users))
        .route("/me", get(me))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

// Public: mounted outside the auth middleware.
pub async fn signup(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<Signup>,
) -> axum::response::Response {
    match users::signup(services.store(), body) {
        Ok(user) => dto::json_created(user),
        Err(e) => errors::domain_error_to_response(e),
    }
}

// Public: mounted outside the auth middleware.
pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::LoginRequest>,
) -> axum::response::Response {
    match users::login(
        services.store(),
        services.tokens(),
        &body.email,
        &body.password,
        Utc::now(),
    ) {
        Ok(issued) => dto::json_ok(issued),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn me(Extension(current): Extension<CurrentUser>) -> axum::response::Response {
    dto::json_ok(current.user().clone())
}

pub async fn list_users(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(current): Extension<CurrentUser>,
) -> axum::response::Response {
    match users::list(services.store(), current.user()) {
        Ok(items) => dto::items_response(items),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_user(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: UserId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match users::get(services.store(), current.user(), id) {
        Ok(user) => dto::json_ok(user),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_user(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(body): Json<UserPatch>,
) -> axum::response::Response {
    let id: UserId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match users::update(services.store(), current.user(), id, body) {
        Ok(user) => dto::json_ok(user),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_user(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: UserId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match users::delete(services.store(), current.user(), id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
