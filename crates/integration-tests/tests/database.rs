//! Database-level integration tests.
//!
//! These tests require a `PostgreSQL` database with migrations applied
//! (cargo run -p mam-cung-cli -- migrate).
//!
//! Run with: cargo test -p mam-cung-integration-tests -- --ignored

use uuid::Uuid;

use mam_cung_integration_tests::database_pool;

/// Reviews may be scoped to an order, an offering, both, or neither.
/// A customer review written against a delivered order has no offering
/// requirement, so both foreign keys are nullable.
#[tokio::test]
#[ignore = "Requires migrated database"]
async fn test_review_row_accepts_null_offering_and_order() {
    let pool = database_pool().await;

    let id: Uuid = sqlx::query_scalar(
        "INSERT INTO reviews (offering_id, order_id, rating, comment)
         VALUES (NULL, NULL, 5, 'Mâm cúng đẹp, giao đúng giờ')
         RETURNING id",
    )
    .fetch_one(&pool)
    .await
    .expect("review insert failed");

    sqlx::query("DELETE FROM reviews WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await
        .expect("review cleanup failed");
}
