use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use quotehub_budgeting::responses;
use quotehub_core::{NewQuoteResponse, ProductId, QuoteResponsePatch, ResponseId};

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::CurrentUser;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_response))
        .route("/product/:product_id", get(list_for_product))
        .route(
            "/:id",
            get(get_response)
                .put(update_response)
                .delete(delete_response),
        )
}

pub async fn create_response(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(current): Extension<CurrentUser>,
    Json(body): Json<NewQuoteResponse>,
) -> axum::response::Response {
    match responses::create(services.store(), current.user(), body) {
        Ok(response) => dto::json_created(response),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_for_product(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(current): Extension<CurrentUser>,
    Path(product_id): Path<String>,
) -> axum::response::Response {
    let product_id: ProductId = match product_id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match responses::list_for_product(services.store(), current.user(), product_id) {
        Ok(items) => dto::items_response(items),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_response(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ResponseId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match responses::get(services.store(), current.user(), id) {
        Ok(response) => dto::json_ok(response),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_response(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(body): Json<QuoteResponsePatch>,
) -> axum::response::Response {
    let id: ResponseId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match responses::update(services.store(), current.user(), id, body) {
        Ok(response) => dto::json_ok(response),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_response(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ResponseId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match responses::delete(services.store(), current.user(), id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
