//! Customer order history route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::db::OrderRepository;
use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::{CurrentUser, Order};
use crate::state::AppState;

/// Order display data for the history list.
#[derive(Clone)]
pub struct OrderRowView {
    pub code: String,
    pub offering_name: String,
    pub quantity: i32,
    pub total_price: String,
    pub delivery_date: String,
    pub delivery_time: String,
    pub status_label: &'static str,
    pub status_badge: &'static str,
    pub payment_label: String,
}

impl OrderRowView {
    fn from_order(order: &Order) -> Self {
        Self {
            code: order.id.short_code(),
            offering_name: order.offering_name.clone(),
            quantity: order.quantity,
            total_price: format!("{}đ", order.total_price),
            delivery_date: order.delivery_date.to_string(),
            delivery_time: order.delivery_time.clone().unwrap_or_default(),
            status_label: order.order_status.label(),
            status_badge: order.order_status.badge_class(),
            payment_label: order
                .payment_method
                .map(|m| m.label().to_string())
                .unwrap_or_default(),
        }
    }
}

/// Order history page template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/index.html")]
pub struct OrdersIndexTemplate {
    pub current_user: Option<CurrentUser>,
    pub orders: Vec<OrderRowView>,
}

/// Display the logged-in customer's orders, newest first.
pub async fn index(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, AppError> {
    let orders = OrderRepository::new(state.pool())
        .list_for_customer(user.id)
        .await?;

    Ok(OrdersIndexTemplate {
        orders: orders.iter().map(OrderRowView::from_order).collect(),
        current_user: Some(user),
    })
}
