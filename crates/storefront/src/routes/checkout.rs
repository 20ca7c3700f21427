//! Checkout route handlers.
//!
//! `GET /checkout` renders the form for one offering; `POST /checkout` runs
//! the validation pipeline and performs the single idempotent order insert.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use uuid::Uuid;

use mam_cung_core::{DeliverySlot, OfferingId, OrderId, PaymentMethod};

use crate::checkout::{CheckoutForm, FieldErrors, build_order, clamp_quantity, validate};
use crate::db::{OfferingRepository, OrderRepository, ProfileRepository};
use crate::error::AppError;
use crate::filters;
use crate::middleware::OptionalAuth;
use crate::models::{CurrentUser, Offering, Profile};
use crate::routes::offerings::OfferingNotFoundTemplate;
use crate::state::AppState;

/// Query parameters for the checkout page.
#[derive(Debug, Deserialize)]
pub struct CheckoutQuery {
    pub offering: Uuid,
    pub quantity: Option<u32>,
}

/// Query parameters for the confirmation page.
#[derive(Debug, Deserialize)]
pub struct SuccessQuery {
    pub id: Uuid,
}

/// A selectable delivery slot for the form.
#[derive(Clone)]
pub struct SlotOption {
    pub value: &'static str,
    pub selected: bool,
}

/// A selectable payment method for the form.
#[derive(Clone)]
pub struct PaymentOption {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub selected: bool,
}

/// Order summary block shown beside the form.
#[derive(Clone)]
pub struct OrderSummaryView {
    pub offering_id: String,
    pub offering_name: String,
    pub image: String,
    pub quantity: u32,
    pub unit_price: String,
    pub total_price: String,
}

impl OrderSummaryView {
    fn new(offering: &Offering, quantity: u32) -> Self {
        Self {
            offering_id: offering.id.to_string(),
            offering_name: offering.name.clone(),
            image: offering
                .gallery()
                .into_iter()
                .next()
                .unwrap_or_else(|| "/static/placeholder.svg".to_string()),
            quantity,
            unit_price: format!("{}đ", offering.price),
            total_price: format!("{}đ", offering.price.times(quantity)),
        }
    }
}

/// Current field values, echoed back on validation failure.
#[derive(Clone, Default)]
pub struct FormValues {
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub delivery_address: String,
    pub delivery_date: String,
    pub special_notes: String,
}

impl FormValues {
    fn prefill(profile: Option<&Profile>) -> Self {
        profile.map_or_else(Self::default, |p| Self {
            customer_name: p.full_name.clone().unwrap_or_default(),
            customer_phone: p.phone.clone().unwrap_or_default(),
            customer_email: p.email.clone(),
            delivery_address: p.address.clone().unwrap_or_default(),
            ..Self::default()
        })
    }

    fn from_form(form: &CheckoutForm) -> Self {
        Self {
            customer_name: form.customer_name.clone(),
            customer_phone: form.customer_phone.clone(),
            customer_email: form.customer_email.clone(),
            delivery_address: form.delivery_address.clone(),
            delivery_date: form.delivery_date.clone(),
            special_notes: form.special_notes.clone(),
        }
    }
}

/// Checkout form page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/form.html")]
pub struct CheckoutTemplate {
    pub current_user: Option<CurrentUser>,
    pub summary: OrderSummaryView,
    pub values: FormValues,
    pub slots: Vec<SlotOption>,
    pub payments: Vec<PaymentOption>,
    pub errors: FieldErrors,
    /// Non-field banner shown when the insert itself failed.
    pub store_error: Option<String>,
    pub idempotency_key: String,
}

/// Order confirmation page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/success.html")]
pub struct OrderSuccessTemplate {
    pub current_user: Option<CurrentUser>,
    pub order_code: String,
    pub offering_name: String,
    pub quantity: i32,
    pub total_price: String,
    pub delivery_address: String,
    pub delivery_date: String,
    pub delivery_time: String,
    pub payment_label: String,
}

fn slot_options(selected: Option<&str>) -> Vec<SlotOption> {
    DeliverySlot::ALL
        .iter()
        .map(|slot| SlotOption {
            value: slot.as_str(),
            selected: selected == Some(slot.as_str()),
        })
        .collect()
}

fn payment_options(selected: Option<&str>) -> Vec<PaymentOption> {
    PaymentMethod::ALL
        .iter()
        .map(|method| PaymentOption {
            value: method.as_str(),
            label: method.label(),
            description: method.description(),
            selected: selected == Some(method.as_str()),
        })
        .collect()
}

/// Display the checkout form for one offering.
///
/// Contact fields are prefilled from the logged-in user's profile. A fresh
/// idempotency key is minted here and travels with the form.
pub async fn checkout_page(
    State(state): State<AppState>,
    OptionalAuth(current_user): OptionalAuth,
    Query(query): Query<CheckoutQuery>,
) -> Result<Response, AppError> {
    let offering = OfferingRepository::new(state.pool())
        .get_by_id(OfferingId::new(query.offering))
        .await?;

    let Some(offering) = offering.filter(|o| o.is_approved) else {
        return Ok((
            StatusCode::NOT_FOUND,
            OfferingNotFoundTemplate { current_user },
        )
            .into_response());
    };

    let profile = match &current_user {
        Some(user) => ProfileRepository::new(state.pool()).get_by_id(user.id).await?,
        None => None,
    };

    let quantity = clamp_quantity(query.quantity.unwrap_or(1));

    Ok(CheckoutTemplate {
        current_user,
        summary: OrderSummaryView::new(&offering, quantity),
        values: FormValues::prefill(profile.as_ref()),
        slots: slot_options(None),
        payments: payment_options(None),
        errors: FieldErrors::new(),
        store_error: None,
        idempotency_key: Uuid::new_v4().to_string(),
    }
    .into_response())
}

/// Handle checkout form submission.
///
/// Validation failure re-renders the form with all field messages and a 422
/// status; nothing is written in that case. On success exactly one order row
/// is inserted and the client is redirected to the confirmation page.
pub async fn submit(
    State(state): State<AppState>,
    OptionalAuth(current_user): OptionalAuth,
    Form(form): Form<CheckoutForm>,
) -> Result<Response, AppError> {
    let offering = OfferingRepository::new(state.pool())
        .get_by_id(OfferingId::new(form.offering_id))
        .await?;

    let Some(offering) = offering.filter(|o| o.is_approved) else {
        return Ok((
            StatusCode::NOT_FOUND,
            OfferingNotFoundTemplate { current_user },
        )
            .into_response());
    };

    let quantity = clamp_quantity(form.quantity);

    let checkout = match validate(&form) {
        Ok(checkout) => checkout,
        Err(errors) => {
            return Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                CheckoutTemplate {
                    current_user,
                    summary: OrderSummaryView::new(&offering, quantity),
                    values: FormValues::from_form(&form),
                    slots: slot_options(Some(form.delivery_time.as_str())),
                    payments: payment_options(Some(form.payment_method.as_str())),
                    errors,
                    store_error: None,
                    idempotency_key: form.idempotency_key.to_string(),
                },
            )
                .into_response());
        }
    };

    let customer_id = current_user.as_ref().map(|user| user.id);
    let new_order = build_order(
        &offering,
        quantity,
        checkout,
        customer_id,
        form.idempotency_key,
    );

    match OrderRepository::new(state.pool()).create(new_order).await {
        Ok(order) => Ok(Redirect::to(&format!("/order-success?id={}", order.id)).into_response()),
        Err(err) => {
            // Keep the filled-in form on screen; the same key makes a
            // resubmit safe.
            tracing::error!("order insert failed: {}", err);
            Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                CheckoutTemplate {
                    current_user,
                    summary: OrderSummaryView::new(&offering, quantity),
                    values: FormValues::from_form(&form),
                    slots: slot_options(Some(form.delivery_time.as_str())),
                    payments: payment_options(Some(form.payment_method.as_str())),
                    errors: FieldErrors::new(),
                    store_error: Some(
                        "Không thể tạo đơn hàng. Vui lòng thử lại.".to_string(),
                    ),
                    idempotency_key: form.idempotency_key.to_string(),
                },
            )
                .into_response())
        }
    }
}

/// Display the order confirmation page.
pub async fn order_success(
    State(state): State<AppState>,
    OptionalAuth(current_user): OptionalAuth,
    Query(query): Query<SuccessQuery>,
) -> Result<Response, AppError> {
    let order = OrderRepository::new(state.pool())
        .get_by_id(OrderId::new(query.id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {}", query.id)))?;

    Ok(OrderSuccessTemplate {
        current_user,
        order_code: order.id.short_code(),
        offering_name: order.offering_name.clone(),
        quantity: order.quantity,
        total_price: format!("{}đ", order.total_price),
        delivery_address: order.delivery_address.clone(),
        delivery_date: order.delivery_date.format("%d/%m/%Y").to_string(),
        delivery_time: order.delivery_time.clone().unwrap_or_default(),
        payment_label: order
            .payment_method
            .map(|m| m.label().to_string())
            .unwrap_or_default(),
    }
    .into_response())
}
