//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (database ping)
//!
//! # Offerings
//! GET  /offerings              - Offering listing
//! GET  /offerings/{id}         - Offering detail
//!
//! # Checkout
//! GET  /checkout               - Checkout form (offering + quantity in query)
//! POST /checkout               - Validate, insert the order, redirect
//! GET  /order-success          - Confirmation page
//!
//! # Auth
//! GET  /auth                   - Login page
//! POST /auth/login             - Login action
//! POST /auth/logout            - Logout action
//!
//! # Customer (requires auth)
//! GET  /customer               - Customer dashboard shell
//! GET  /customer/orders        - Order history, newest first
//!
//! # Supplier (requires auth)
//! GET  /supplier               - Supplier dashboard shell
//! GET  /supplier/products      - Supplier listings shell
//! GET  /supplier/orders        - Supplier orders shell
//!
//! # Admin (requires auth + admin role)
//! GET  /admin                  - Admin dashboard shell
//! GET  /admin/users            - Admin users shell
//! GET  /admin/products         - Admin approval shell
//! GET  /admin/orders           - Admin orders shell
//! ```

pub mod auth;
pub mod checkout;
pub mod dashboard;
pub mod home;
pub mod offerings;
pub mod orders;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(auth::login_page))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Create the offering routes router.
pub fn offering_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(offerings::index))
        .route("/{id}", get(offerings::show))
}

/// Create the customer routes router.
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::customer))
        .route("/orders", get(orders::index))
}

/// Create the supplier routes router.
pub fn supplier_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::supplier))
        .route("/products", get(dashboard::supplier_products))
        .route("/orders", get(dashboard::supplier_orders))
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::admin))
        .route("/users", get(dashboard::admin_users))
        .route("/products", get(dashboard::admin_products))
        .route("/orders", get(dashboard::admin_orders))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Offering routes
        .nest("/offerings", offering_routes())
        // Checkout pipeline
        .route(
            "/checkout",
            get(checkout::checkout_page).post(checkout::submit),
        )
        .route("/order-success", get(checkout::order_success))
        // Customer routes
        .nest("/customer", customer_routes())
        // Dashboard shells
        .nest("/supplier", supplier_routes())
        .nest("/admin", admin_routes())
        // Auth routes
        .nest("/auth", auth_routes())
}
