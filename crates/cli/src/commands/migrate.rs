//! Database migration command.
//!
//! Applies the SQL migrations in `crates/storefront/migrations/` to the
//! database named by `STOREFRONT_DATABASE_URL` (or `DATABASE_URL`).
//! Migrations are embedded at compile time, so the binary is
//! self-contained.

use sqlx::PgPool;
use tracing::info;

use super::database_url;

/// Run storefront database migrations.
///
/// # Errors
///
/// Returns an error if the database URL is missing, the connection fails,
/// or a migration cannot be applied.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let database_url = database_url()?;

    info!("Connecting to storefront database...");
    let pool = PgPool::connect(&database_url).await?;

    info!("Running storefront migrations...");
    sqlx::migrate!("../storefront/migrations").run(&pool).await?;

    info!("Storefront migrations complete!");
    Ok(())
}
