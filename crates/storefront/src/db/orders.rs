//! Order repository.
//!
//! The checkout pipeline performs exactly one insert per order. The insert
//! carries a client-generated idempotency key with a unique index, so a
//! resubmission after a transient failure lands on the already-created row
//! instead of duplicating it.

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use mam_cung_core::{DeliverySlot, OfferingId, OrderId, PaymentMethod, UserId, Vnd};

use super::RepositoryError;
use crate::models::Order;

const ORDER_COLUMNS: &str = "id, customer_id, supplier_id, offering_id, offering_name, \
     quantity, unit_price, total_price, customer_name, customer_phone, customer_email, \
     delivery_address, delivery_date, delivery_time, special_notes, payment_method, \
     order_status, payment_status, created_at, updated_at";

/// Parameters for creating an order.
///
/// `offering_name` and `unit_price` are snapshots of the offering at
/// submission time; `total_price` must equal `unit_price * quantity`.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_id: Option<UserId>,
    pub supplier_id: UserId,
    pub offering_id: OfferingId,
    pub offering_name: String,
    pub quantity: u32,
    pub unit_price: Vnd,
    pub total_price: Vnd,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: Option<String>,
    pub delivery_address: String,
    pub delivery_date: NaiveDate,
    pub delivery_time: DeliverySlot,
    pub special_notes: Option<String>,
    pub payment_method: PaymentMethod,
    pub idempotency_key: Uuid,
}

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert one order and return the persisted row.
    ///
    /// If an order with the same idempotency key already exists (the form
    /// was submitted twice), returns that existing order instead of
    /// inserting a second row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails, or
    /// `RepositoryError::DataCorruption` if the conflict row cannot be
    /// fetched back.
    pub async fn create(&self, order: NewOrder) -> Result<Order, RepositoryError> {
        let quantity = i32::try_from(order.quantity).map_err(|_| {
            RepositoryError::DataCorruption(format!("quantity out of range: {}", order.quantity))
        })?;

        let inserted = sqlx::query_as::<_, Order>(&format!(
            "INSERT INTO orders (
                customer_id, supplier_id, offering_id, offering_name, quantity,
                unit_price, total_price, customer_name, customer_phone, customer_email,
                delivery_address, delivery_date, delivery_time, special_notes,
                payment_method, idempotency_key
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            ON CONFLICT (idempotency_key) DO NOTHING
            RETURNING {ORDER_COLUMNS}"
        ))
        .bind(order.customer_id)
        .bind(order.supplier_id)
        .bind(order.offering_id)
        .bind(&order.offering_name)
        .bind(quantity)
        .bind(order.unit_price)
        .bind(order.total_price)
        .bind(&order.customer_name)
        .bind(&order.customer_phone)
        .bind(&order.customer_email)
        .bind(&order.delivery_address)
        .bind(order.delivery_date)
        .bind(order.delivery_time.as_str())
        .bind(&order.special_notes)
        .bind(order.payment_method)
        .bind(order.idempotency_key)
        .fetch_optional(self.pool)
        .await?;

        if let Some(row) = inserted {
            return Ok(row);
        }

        // The key already existed: this submission is a replay of an insert
        // that succeeded server-side. Hand back the original order.
        let existing = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE idempotency_key = $1"
        ))
        .bind(order.idempotency_key)
        .fetch_optional(self.pool)
        .await?;

        existing.ok_or_else(|| {
            RepositoryError::DataCorruption(format!(
                "order with idempotency key {} vanished after conflict",
                order.idempotency_key
            ))
        })
    }

    /// Fetch one order by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        let order = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(order)
    }

    /// List a principal's orders, newest first. No pagination.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_customer(
        &self,
        customer_id: UserId,
    ) -> Result<Vec<Order>, RepositoryError> {
        let orders = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders \
             WHERE customer_id = $1 ORDER BY created_at DESC"
        ))
        .bind(customer_id)
        .fetch_all(self.pool)
        .await?;

        Ok(orders)
    }
}
