//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: shared state (store + token service)
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get, routing::post};
use chrono::Duration;
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub jwt_secret: String,
    pub token_ttl_minutes: i64,
    pub bind_addr: String,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set; using insecure dev default");
            "dev-secret".to_string()
        });
        let token_ttl_minutes = std::env::var("TOKEN_TTL_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        Self {
            jwt_secret,
            token_ttl_minutes,
            bind_addr,
        }
    }
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: ApiConfig) -> Router {
    let services = Arc::new(services::AppServices::new(
        config.jwt_secret.as_bytes(),
        Duration::minutes(config.token_ttl_minutes),
    ));
    let auth_state = middleware::AuthState {
        services: Arc::clone(&services),
    };

    // Protected routes: require a valid token resolving to a live user.
    let protected = routes::router().layer(axum::middleware::from_fn_with_state(
        auth_state,
        middleware::auth_middleware,
    ));

    Router::new()
        .route("/health", get(routes::system::health))
        .route("/users/signup", post(routes::users::signup))
        .route("/users/login", post(routes::users::login))
        .merge(protected)
        .layer(Extension(services))
        .layer(ServiceBuilder::new())
}
