//! Integration tests for Mâm Cúng Việt.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and apply schema + demo data
//! cargo run -p mam-cung-cli -- migrate
//! cargo run -p mam-cung-cli -- seed
//!
//! # Start the storefront
//! cargo run -p mam-cung-storefront
//!
//! # Run the ignored integration tests
//! cargo test -p mam-cung-integration-tests -- --ignored
//! ```
//!
//! The tests in `tests/` talk to a running storefront over HTTP and are
//! marked `#[ignore]` so a plain `cargo test` stays hermetic.

#![cfg_attr(not(test), forbid(unsafe_code))]

use reqwest::Client;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Base URL for the storefront (configurable via environment).
#[must_use]
pub fn storefront_base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Create an HTTP client with a cookie store and no redirect following.
///
/// Redirects are not followed so tests can assert on the redirect
/// responses the checkout pipeline produces.
#[must_use]
pub fn http_client() -> Client {
    Client::builder()
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}

/// Connect to the database the storefront under test is using.
///
/// Lets tests assert on rows directly, e.g. that a rejected checkout
/// submission wrote nothing.
///
/// # Panics
///
/// Panics if no database URL is configured or the connection fails.
pub async fn database_pool() -> PgPool {
    let url = std::env::var("STOREFRONT_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .expect("STOREFRONT_DATABASE_URL or DATABASE_URL must be set");

    PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("Failed to connect to test database")
}
