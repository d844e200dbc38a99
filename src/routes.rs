//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`                - Health check: database, session store (public)
//! - `POST /api/pricing/lookup`    - Offer estimate (public, rate limited)
//! - `POST /api/admin/login`       - Admin login (strict rate limit)
//! - `/api/admin/*`                - Admin API (Bearer session required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket
//! - **Authentication** - Bearer session id for admin routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::rate_limit::{self, Limit};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the `/api` router without rate limiting.
///
/// Used directly by tests, which run without peer address information.
pub fn api_router(state: AppState) -> Router<AppState> {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state, auth::layer));

    Router::new()
        .merge(api::routes::public_routes())
        .merge(api::routes::login_routes())
        .merge(protected)
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state
/// - `behind_proxy` - when `true`, rate limiting reads the client IP from
///   forwarding headers instead of the socket peer address
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let protected = rate_limit::apply(
        api::routes::protected_routes()
            .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer)),
        Limit::Secure,
        behind_proxy,
    );

    let login = rate_limit::apply(api::routes::login_routes(), Limit::Secure, behind_proxy);
    let public = rate_limit::apply(api::routes::public_routes(), Limit::Public, behind_proxy);

    let api_router = Router::new().merge(public).merge(login).merge(protected);

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Test-friendly router: same routes as [`app_router`] minus rate limiting
/// and path normalization.
pub fn test_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router(state.clone()))
        .with_state(state)
}
