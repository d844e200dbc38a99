//! API route configuration.

use crate::api::handlers::{
    get_settings_handler, login_handler, logout_handler, pricing_lookup_handler,
    sales_count_handler, update_settings_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public pricing routes.
///
/// # Endpoints
///
/// - `POST /pricing/lookup` - Estimate an offer for a VIN and year
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/pricing/lookup", post(pricing_lookup_handler))
}

/// Admin login, open to anyone holding the password.
///
/// # Endpoints
///
/// - `POST /admin/login` - Exchange the admin password for a session id
pub fn login_routes() -> Router<AppState> {
    Router::new().route("/admin/login", post(login_handler))
}

/// Admin routes, protected by Bearer session authentication.
///
/// # Endpoints
///
/// - `POST /admin/logout`       - End the current session
/// - `GET  /admin/settings`     - Current margin and service charge
/// - `PUT  /admin/settings`     - Replace margin and service charge
/// - `GET  /admin/sales/count`  - Number of loaded sale records
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/logout", post(logout_handler))
        .route(
            "/admin/settings",
            get(get_settings_handler).put(update_settings_handler),
        )
        .route("/admin/sales/count", get(sales_count_handler))
}
