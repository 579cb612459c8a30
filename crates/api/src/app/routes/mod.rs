use axum::{Router, routing::get};

pub mod budgets;
pub mod products;
pub mod responses;
pub mod suppliers;
pub mod system;
pub mod users;

/// Router for all authenticated endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .nest("/budgets", budgets::router())
        .nest("/products", products::router())
        .nest("/suppliers", suppliers::router())
        .nest("/responses", responses::router())
        .nest("/users", users::router())
}
