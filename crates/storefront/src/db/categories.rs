//! Category repository.

use sqlx::PgPool;

use super::RepositoryError;
use crate::models::Category;

/// List all categories in name order (for the homepage services section).
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn list_all(pool: &PgPool) -> Result<Vec<Category>, RepositoryError> {
    let categories = sqlx::query_as::<_, Category>(
        "SELECT id, name, description, icon, created_at FROM categories ORDER BY name",
    )
    .fetch_all(pool)
    .await?;

    Ok(categories)
}
