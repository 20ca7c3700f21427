//! Offering repository.
//!
//! The storefront only ever reads offerings: one by id for the detail and
//! checkout views, and approved listings for the catalog and homepage.

use sqlx::PgPool;

use mam_cung_core::OfferingId;

use super::RepositoryError;
use crate::models::Offering;

const OFFERING_COLUMNS: &str = "id, supplier_id, category_id, name, description, \
     short_description, price, original_price, image_url, images, items, rating, \
     review_count, sold_count, is_approved, is_featured, status, created_at, updated_at";

/// Repository for offering reads.
pub struct OfferingRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OfferingRepository<'a> {
    /// Create a new offering repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get one offering by id, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: OfferingId) -> Result<Option<Offering>, RepositoryError> {
        let offering = sqlx::query_as::<_, Offering>(&format!(
            "SELECT {OFFERING_COLUMNS} FROM offerings WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(offering)
    }

    /// List approved offerings, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_approved(&self) -> Result<Vec<Offering>, RepositoryError> {
        let offerings = sqlx::query_as::<_, Offering>(&format!(
            "SELECT {OFFERING_COLUMNS} FROM offerings \
             WHERE is_approved ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(offerings)
    }

    /// List approved, featured offerings for the homepage, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_featured(&self, limit: i64) -> Result<Vec<Offering>, RepositoryError> {
        let offerings = sqlx::query_as::<_, Offering>(&format!(
            "SELECT {OFFERING_COLUMNS} FROM offerings \
             WHERE is_approved AND is_featured \
             ORDER BY created_at DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(offerings)
    }
}
