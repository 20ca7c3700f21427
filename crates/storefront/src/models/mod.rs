//! Domain models for the storefront.
//!
//! These mirror the `PostgreSQL` rows one-to-one. Nullable columns are
//! `Option` fields; denormalized order fields (`offering_name`,
//! `unit_price`) are snapshots taken at checkout and never re-derived from
//! the live offering.

pub mod session;

pub use session::CurrentUser;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use mam_cung_core::{
    CategoryId, OfferingId, OrderId, OrderStatus, PaymentMethod, PaymentStatus, UserId, Vnd,
};

/// A product category. Immutable from the storefront's perspective.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A purchasable ritual-basket offering listed by a supplier.
///
/// Read-only from the storefront; created and edited by supplier tooling.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Offering {
    pub id: OfferingId,
    pub supplier_id: UserId,
    pub category_id: Option<CategoryId>,
    pub name: String,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub price: Vnd,
    pub original_price: Option<Vnd>,
    pub image_url: Option<String>,
    pub images: Vec<String>,
    pub items: Vec<String>,
    pub rating: Decimal,
    pub review_count: i32,
    pub sold_count: i32,
    pub is_approved: bool,
    pub is_featured: bool,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Offering {
    /// Discount percentage against the original price,
    /// `round((1 - price/original_price) * 100)`. `None` unless positive.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?.amount();
        if original <= Decimal::ZERO {
            return None;
        }
        let pct = ((Decimal::ONE - self.price.amount() / original) * Decimal::from(100)).round();
        match pct.to_i64() {
            Some(p) if p > 0 => u32::try_from(p).ok(),
            _ => None,
        }
    }

    /// Image gallery with fallback chain: `images`, then `image_url`, then
    /// a placeholder.
    #[must_use]
    pub fn gallery(&self) -> Vec<String> {
        if !self.images.is_empty() {
            return self.images.clone();
        }
        if let Some(url) = &self.image_url {
            return vec![url.clone()];
        }
        vec!["/static/placeholder.svg".to_string()]
    }
}

/// A customer's request to purchase one offering at a snapshotted price.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Order {
    pub id: OrderId,
    /// Nullable: guest checkout is permitted.
    pub customer_id: Option<UserId>,
    pub supplier_id: Option<UserId>,
    pub offering_id: Option<OfferingId>,
    /// Offering name snapshotted at order time.
    pub offering_name: String,
    pub quantity: i32,
    /// Unit price snapshotted at order time.
    pub unit_price: Vnd,
    pub total_price: Vnd,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: Option<String>,
    pub delivery_address: String,
    pub delivery_date: NaiveDate,
    pub delivery_time: Option<String>,
    pub special_notes: Option<String>,
    pub payment_method: Option<PaymentMethod>,
    pub order_status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A profile row shared with the identity provider's principal id.
///
/// Read by checkout to prefill fields; never mutated by the storefront.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Profile {
    pub id: UserId,
    pub email: String,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn offering(price: i64, original: Option<i64>) -> Offering {
        Offering {
            id: OfferingId::new(Uuid::nil()),
            supplier_id: UserId::new(Uuid::nil()),
            category_id: None,
            name: "Mâm cúng khai trương".to_string(),
            description: None,
            short_description: None,
            price: Vnd::from_dong(price),
            original_price: original.map(Vnd::from_dong),
            image_url: None,
            images: Vec::new(),
            items: Vec::new(),
            rating: Decimal::ZERO,
            review_count: 0,
            sold_count: 0,
            is_approved: true,
            is_featured: false,
            status: "active".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_discount_percent_twenty() {
        let o = offering(800_000, Some(1_000_000));
        assert_eq!(o.discount_percent(), Some(20));
    }

    #[test]
    fn test_discount_percent_absent_without_original_price() {
        let o = offering(800_000, None);
        assert_eq!(o.discount_percent(), None);
    }

    #[test]
    fn test_discount_percent_hidden_when_not_positive() {
        // Price equal to original: 0%, no badge
        let o = offering(1_000_000, Some(1_000_000));
        assert_eq!(o.discount_percent(), None);
        // Price above original: negative, no badge
        let o = offering(1_200_000, Some(1_000_000));
        assert_eq!(o.discount_percent(), None);
    }

    #[test]
    fn test_discount_percent_rounds() {
        // 1 - 666667/1000000 = 0.333333 -> 33%
        let o = offering(666_667, Some(1_000_000));
        assert_eq!(o.discount_percent(), Some(33));
    }

    #[test]
    fn test_gallery_fallback_chain() {
        let mut o = offering(800_000, None);
        assert_eq!(o.gallery(), vec!["/static/placeholder.svg".to_string()]);

        o.image_url = Some("/img/a.jpg".to_string());
        assert_eq!(o.gallery(), vec!["/img/a.jpg".to_string()]);

        o.images = vec!["/img/b.jpg".to_string(), "/img/c.jpg".to_string()];
        assert_eq!(o.gallery().len(), 2);
    }
}
