//! Database operations for the storefront `PostgreSQL`.
//!
//! # Tables
//!
//! - `categories` - Offering categories (read-only here)
//! - `profiles` - Contact profiles keyed by the principal id
//! - `user_roles` - Advisory role per principal
//! - `offerings` - Supplier listings (read-only here)
//! - `orders` - The one entity the storefront writes (checkout insert)
//! - `reviews` - Review rows (aggregates are denormalized onto offerings)
//! - `sessions` - tower-sessions storage
//!
//! All queries use the runtime-checked `query_as` API so the workspace
//! builds without a live database.
//!
//! # Migrations
//!
//! Migrations live in `crates/storefront/migrations/` and run via:
//! ```bash
//! cargo run -p mam-cung-cli -- migrate
//! ```

pub mod categories;
pub mod offerings;
pub mod orders;
pub mod profiles;
pub mod roles;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use offerings::OfferingRepository;
pub use orders::{NewOrder, OrderRepository};
pub use profiles::ProfileRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
