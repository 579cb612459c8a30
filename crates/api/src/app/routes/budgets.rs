use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use quotehub_budgeting::budgets;
use quotehub_core::{BudgetId, BudgetPatch, NewBudget};

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::CurrentUser;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_budget).get(list_budgets))
        .route(
            "/:id",
            get(get_budget).put(update_budget).delete(delete_budget),
        )
}

pub async fn create_budget(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(current): Extension<CurrentUser>,
    Json(body): Json<NewBudget>,
) -> axum::response::Response {
    match budgets::create(services.store(), current.user(), body) {
        Ok(budget) => dto::json_created(budget),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_budgets(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(current): Extension<CurrentUser>,
) -> axum::response::Response {
    dto::items_response(budgets::list(services.store(), current.user()))
}

pub async fn get_budget(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: BudgetId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match budgets::get(services.store(), current.user(), id) {
        Ok(budget) => dto::json_ok(budget),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_budget(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(body): Json<BudgetPatch>,
) -> axum::response::Response {
    let id: BudgetId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match budgets::update(services.store(), current.user(), id, body) {
        Ok(budget) => dto::json_ok(budget),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_budget(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: BudgetId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match budgets::delete(services.store(), current.user(), id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
