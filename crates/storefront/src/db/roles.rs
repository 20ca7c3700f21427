//! Role lookup.
//!
//! Roles gate dashboard routing only. The lookup mirrors the store-side
//! `has_role` check; real authorization stays with the database layer.

use sqlx::PgPool;

use mam_cung_core::{AppRole, UserId};

use super::RepositoryError;

/// Get the role recorded for a principal, defaulting to `Customer` when no
/// row exists.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn get_role(pool: &PgPool, user_id: UserId) -> Result<AppRole, RepositoryError> {
    let role = sqlx::query_scalar::<_, AppRole>(
        "SELECT role FROM user_roles WHERE user_id = $1 LIMIT 1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(role.unwrap_or_default())
}
