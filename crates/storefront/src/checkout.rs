//! Checkout pipeline: validated form input to exactly one order insert.
//!
//! The pipeline is synchronous up to the write: parse the submitted fields,
//! validate them against the schema below, snapshot the offering's name and
//! price into a [`NewOrder`], and hand it to the order repository. On
//! validation failure the caller re-renders the form with the per-field
//! messages and no write is attempted.
//!
//! # Validation schema
//!
//! - name: minimum 2 characters
//! - phone: exactly 10-11 digits, nothing else
//! - email: optional; must parse when non-empty
//! - address: minimum 10 characters
//! - delivery date: required, a concrete `YYYY-MM-DD` date
//! - delivery time: required, one of the six fixed slots
//! - payment method: required, one of the fixed enumeration

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use mam_cung_core::{DeliverySlot, Email, OfferingId, PaymentMethod, UserId};

use crate::db::NewOrder;
use crate::models::Offering;

/// Raw checkout form submission, as posted by the browser.
///
/// Free-text fields default to empty so that a partially filled form
/// produces field errors instead of a deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutForm {
    pub offering_id: Uuid,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Client-generated key making the insert idempotent across resubmits.
    pub idempotency_key: Uuid,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: String,
    #[serde(default)]
    pub customer_email: String,
    #[serde(default)]
    pub delivery_address: String,
    #[serde(default)]
    pub delivery_date: String,
    #[serde(default)]
    pub delivery_time: String,
    #[serde(default)]
    pub special_notes: String,
    #[serde(default)]
    pub payment_method: String,
}

const fn default_quantity() -> u32 {
    1
}

/// Mapping from field name to a human-readable message.
pub type FieldErrors = BTreeMap<&'static str, String>;

/// A checkout submission that passed validation.
#[derive(Debug, Clone)]
pub struct ValidCheckout {
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: Option<Email>,
    pub delivery_address: String,
    pub delivery_date: NaiveDate,
    pub delivery_time: DeliverySlot,
    pub special_notes: Option<String>,
    pub payment_method: PaymentMethod,
}

/// Clamp a requested quantity to the minimum of 1.
///
/// Decrementing never goes below 1; incrementing is unbounded.
#[must_use]
pub const fn clamp_quantity(quantity: u32) -> u32 {
    if quantity == 0 { 1 } else { quantity }
}

/// Whether a phone string is exactly 10-11 digits and nothing else.
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    (10..=11).contains(&phone.len()) && phone.bytes().all(|b| b.is_ascii_digit())
}

/// Validate a checkout submission.
///
/// # Errors
///
/// Returns the full field-to-message map when any field fails; no write
/// may be attempted in that case.
pub fn validate(form: &CheckoutForm) -> Result<ValidCheckout, FieldErrors> {
    let mut errors = FieldErrors::new();

    let customer_name = form.customer_name.trim();
    if customer_name.chars().count() < 2 {
        errors.insert(
            "customer_name",
            "Họ tên phải có ít nhất 2 ký tự".to_string(),
        );
    }

    let customer_phone = form.customer_phone.trim();
    if !is_valid_phone(customer_phone) {
        errors.insert("customer_phone", "Số điện thoại không hợp lệ".to_string());
    }

    // Empty email means "not provided"; only a non-empty value must parse.
    let customer_email = match form.customer_email.trim() {
        "" => None,
        raw => match Email::parse(raw) {
            Ok(email) => Some(email),
            Err(_) => {
                errors.insert("customer_email", "Email không hợp lệ".to_string());
                None
            }
        },
    };

    let delivery_address = form.delivery_address.trim();
    if delivery_address.chars().count() < 10 {
        errors.insert(
            "delivery_address",
            "Địa chỉ phải có ít nhất 10 ký tự".to_string(),
        );
    }

    let delivery_date = NaiveDate::parse_from_str(form.delivery_date.trim(), "%Y-%m-%d").ok();
    if delivery_date.is_none() {
        errors.insert(
            "delivery_date",
            "Vui lòng chọn ngày giao hàng".to_string(),
        );
    }

    let delivery_time = form.delivery_time.parse::<DeliverySlot>().ok();
    if delivery_time.is_none() {
        errors.insert("delivery_time", "Vui lòng chọn giờ giao hàng".to_string());
    }

    let payment_method = form.payment_method.parse::<PaymentMethod>().ok();
    if payment_method.is_none() {
        errors.insert(
            "payment_method",
            "Vui lòng chọn phương thức thanh toán".to_string(),
        );
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    // All three are Some here; the guards above inserted an error otherwise.
    let (Some(delivery_date), Some(delivery_time), Some(payment_method)) =
        (delivery_date, delivery_time, payment_method)
    else {
        return Err(errors);
    };

    let special_notes = match form.special_notes.trim() {
        "" => None,
        notes => Some(notes.to_string()),
    };

    Ok(ValidCheckout {
        customer_name: customer_name.to_string(),
        customer_phone: customer_phone.to_string(),
        customer_email,
        delivery_address: delivery_address.to_string(),
        delivery_date,
        delivery_time,
        special_notes,
        payment_method,
    })
}

/// Build the order insert from a validated submission and the referenced
/// offering.
///
/// The offering's name and current price are snapshotted here and never
/// re-derived afterwards; `total_price` is `unit_price * quantity`.
#[must_use]
pub fn build_order(
    offering: &Offering,
    quantity: u32,
    checkout: ValidCheckout,
    customer_id: Option<UserId>,
    idempotency_key: Uuid,
) -> NewOrder {
    let quantity = clamp_quantity(quantity);
    NewOrder {
        customer_id,
        supplier_id: offering.supplier_id,
        offering_id: offering.id,
        offering_name: offering.name.clone(),
        quantity,
        unit_price: offering.price,
        total_price: offering.price.times(quantity),
        customer_name: checkout.customer_name,
        customer_phone: checkout.customer_phone,
        customer_email: checkout.customer_email.map(Email::into_inner),
        delivery_address: checkout.delivery_address,
        delivery_date: checkout.delivery_date,
        delivery_time: checkout.delivery_time,
        special_notes: checkout.special_notes,
        payment_method: checkout.payment_method,
        idempotency_key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mam_cung_core::{CategoryId, Vnd};
    use rust_decimal::Decimal;

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            offering_id: Uuid::new_v4(),
            quantity: 2,
            idempotency_key: Uuid::new_v4(),
            customer_name: "Nguyễn Văn A".to_string(),
            customer_phone: "0912345678".to_string(),
            customer_email: String::new(),
            delivery_address: "12 Lê Lợi, Phường Bến Nghé, Quận 1, TP.HCM".to_string(),
            delivery_date: "2026-09-15".to_string(),
            delivery_time: "06:00 - 08:00".to_string(),
            special_notes: String::new(),
            payment_method: "bank_transfer".to_string(),
        }
    }

    fn offering(price: i64) -> Offering {
        Offering {
            id: OfferingId::new(Uuid::new_v4()),
            supplier_id: UserId::new(Uuid::new_v4()),
            category_id: Some(CategoryId::new(Uuid::new_v4())),
            name: "Mâm cúng đầy tháng".to_string(),
            description: None,
            short_description: None,
            price: Vnd::from_dong(price),
            original_price: None,
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
    fn test_valid_form_passes() {
        let checkout = validate(&valid_form()).unwrap();
        assert_eq!(checkout.customer_name, "Nguyễn Văn A");
        assert_eq!(checkout.delivery_time, DeliverySlot::Morning6To8);
        assert_eq!(checkout.payment_method, PaymentMethod::BankTransfer);
        assert!(checkout.customer_email.is_none());
        assert!(checkout.special_notes.is_none());
    }

    #[test]
    fn test_short_name_rejected() {
        let mut form = valid_form();
        form.customer_name = "A".to_string();
        let errors = validate(&form).unwrap_err();
        assert_eq!(
            errors.get("customer_name").unwrap(),
            "Họ tên phải có ít nhất 2 ký tự"
        );
    }

    #[test]
    fn test_name_length_counts_characters_not_bytes() {
        // Two multi-byte characters are still two characters.
        let mut form = valid_form();
        form.customer_name = "Ân".to_string();
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn test_phone_validation() {
        assert!(is_valid_phone("0912345678"));
        assert!(is_valid_phone("09123456789"));
        assert!(!is_valid_phone("091234567")); // 9 digits
        assert!(!is_valid_phone("091234567890")); // 12 digits
        assert!(!is_valid_phone("09-1234-567"));
        assert!(!is_valid_phone("+84912345678"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn test_bad_phone_produces_field_error() {
        let mut form = valid_form();
        form.customer_phone = "12345".to_string();
        let errors = validate(&form).unwrap_err();
        assert_eq!(
            errors.get("customer_phone").unwrap(),
            "Số điện thoại không hợp lệ"
        );
    }

    #[test]
    fn test_email_optional_but_validated_when_present() {
        let mut form = valid_form();
        form.customer_email = String::new();
        assert!(validate(&form).is_ok());

        form.customer_email = "not-an-email".to_string();
        let errors = validate(&form).unwrap_err();
        assert!(errors.contains_key("customer_email"));

        form.customer_email = "a@b.vn".to_string();
        let checkout = validate(&form).unwrap();
        assert_eq!(checkout.customer_email.unwrap().as_str(), "a@b.vn");
    }

    #[test]
    fn test_short_address_rejected() {
        let mut form = valid_form();
        form.delivery_address = "Quận 1".to_string();
        let errors = validate(&form).unwrap_err();
        assert!(errors.contains_key("delivery_address"));
    }

    #[test]
    fn test_missing_date_and_slot_rejected() {
        let mut form = valid_form();
        form.delivery_date = String::new();
        form.delivery_time = "12:00 - 14:00".to_string();
        let errors = validate(&form).unwrap_err();
        assert_eq!(
            errors.get("delivery_date").unwrap(),
            "Vui lòng chọn ngày giao hàng"
        );
        assert_eq!(
            errors.get("delivery_time").unwrap(),
            "Vui lòng chọn giờ giao hàng"
        );
    }

    #[test]
    fn test_unknown_payment_method_rejected() {
        let mut form = valid_form();
        form.payment_method = "cash".to_string();
        let errors = validate(&form).unwrap_err();
        assert!(errors.contains_key("payment_method"));
    }

    #[test]
    fn test_all_errors_reported_at_once() {
        let form = CheckoutForm {
            offering_id: Uuid::new_v4(),
            quantity: 1,
            idempotency_key: Uuid::new_v4(),
            customer_name: String::new(),
            customer_phone: String::new(),
            customer_email: "bad".to_string(),
            delivery_address: String::new(),
            delivery_date: String::new(),
            delivery_time: String::new(),
            special_notes: String::new(),
            payment_method: String::new(),
        };
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.len(), 6);
    }

    #[test]
    fn test_clamp_quantity() {
        assert_eq!(clamp_quantity(0), 1);
        assert_eq!(clamp_quantity(1), 1);
        assert_eq!(clamp_quantity(250), 250);
    }

    #[test]
    fn test_build_order_snapshots_price_and_computes_total() {
        let offering = offering(500_000);
        let checkout = validate(&valid_form()).unwrap();
        let key = Uuid::new_v4();
        let order = build_order(&offering, 2, checkout, None, key);

        assert_eq!(order.offering_name, offering.name);
        assert_eq!(order.unit_price, Vnd::from_dong(500_000));
        assert_eq!(order.total_price, Vnd::from_dong(1_000_000));
        assert_eq!(order.quantity, 2);
        assert_eq!(order.idempotency_key, key);
        assert!(order.customer_id.is_none());
    }

    #[test]
    fn test_build_order_clamps_zero_quantity() {
        let offering = offering(800_000);
        let checkout = validate(&valid_form()).unwrap();
        let order = build_order(&offering, 0, checkout, None, Uuid::new_v4());
        assert_eq!(order.quantity, 1);
        assert_eq!(order.total_price, Vnd::from_dong(800_000));
    }
}
