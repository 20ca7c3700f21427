//! Offering route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use mam_cung_core::OfferingId;
use uuid::Uuid;

use crate::checkout::clamp_quantity;
use crate::db::OfferingRepository;
use crate::error::AppError;
use crate::filters;
use crate::middleware::OptionalAuth;
use crate::models::{CurrentUser, Offering};
use crate::state::AppState;

/// Offering display data for card grids.
#[derive(Clone)]
pub struct OfferingCardView {
    pub id: String,
    pub name: String,
    pub short_description: Option<String>,
    pub price: String,
    pub original_price: Option<String>,
    pub discount_percent: Option<u32>,
    pub image: String,
    pub rating: String,
    pub review_count: i32,
    pub sold_count: i32,
}

impl OfferingCardView {
    #[must_use]
    pub fn from_offering(offering: &Offering) -> Self {
        Self {
            id: offering.id.to_string(),
            name: offering.name.clone(),
            short_description: offering.short_description.clone(),
            price: format!("{}đ", offering.price),
            original_price: offering.original_price.map(|p| format!("{p}đ")),
            discount_percent: offering.discount_percent(),
            image: offering
                .gallery()
                .into_iter()
                .next()
                .unwrap_or_else(|| "/static/placeholder.svg".to_string()),
            rating: offering.rating.round_dp(1).to_string(),
            review_count: offering.review_count,
            sold_count: offering.sold_count,
        }
    }
}

/// Offering display data for the detail page.
#[derive(Clone)]
pub struct OfferingDetailView {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: String,
    pub original_price: Option<String>,
    pub discount_percent: Option<u32>,
    pub gallery: Vec<String>,
    pub items: Vec<String>,
    pub rating: String,
    pub review_count: i32,
    pub sold_count: i32,
}

impl OfferingDetailView {
    #[must_use]
    pub fn from_offering(offering: &Offering) -> Self {
        Self {
            id: offering.id.to_string(),
            name: offering.name.clone(),
            description: offering.description.clone(),
            price: format!("{}đ", offering.price),
            original_price: offering.original_price.map(|p| format!("{p}đ")),
            discount_percent: offering.discount_percent(),
            gallery: offering.gallery(),
            items: offering.items.clone(),
            rating: offering.rating.round_dp(1).to_string(),
            review_count: offering.review_count,
            sold_count: offering.sold_count,
        }
    }
}

/// Query parameters for the detail page.
#[derive(Debug, Deserialize)]
pub struct DetailQuery {
    pub quantity: Option<u32>,
}

/// Offering listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "offerings/index.html")]
pub struct OfferingsIndexTemplate {
    pub current_user: Option<CurrentUser>,
    pub offerings: Vec<OfferingCardView>,
}

/// Offering detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "offerings/show.html")]
pub struct OfferingShowTemplate {
    pub current_user: Option<CurrentUser>,
    pub offering: OfferingDetailView,
    pub quantity: u32,
}

/// Not-found page template for missing or unapproved offerings.
#[derive(Template, WebTemplate)]
#[template(path = "offerings/not_found.html")]
pub struct OfferingNotFoundTemplate {
    pub current_user: Option<CurrentUser>,
}

/// Display the offering listing page.
pub async fn index(
    State(state): State<AppState>,
    OptionalAuth(current_user): OptionalAuth,
) -> Result<impl IntoResponse, AppError> {
    let offerings = OfferingRepository::new(state.pool()).list_approved().await?;

    Ok(OfferingsIndexTemplate {
        current_user,
        offerings: offerings.iter().map(OfferingCardView::from_offering).collect(),
    })
}

/// Display the offering detail page.
///
/// Unknown ids and unapproved offerings render the not-found page with 404
/// instead of an error.
pub async fn show(
    State(state): State<AppState>,
    OptionalAuth(current_user): OptionalAuth,
    Path(id): Path<Uuid>,
    Query(query): Query<DetailQuery>,
) -> Result<Response, AppError> {
    let offering = OfferingRepository::new(state.pool())
        .get_by_id(OfferingId::new(id))
        .await?;

    let Some(offering) = offering.filter(|o| o.is_approved) else {
        return Ok((
            StatusCode::NOT_FOUND,
            OfferingNotFoundTemplate { current_user },
        )
            .into_response());
    };

    Ok(OfferingShowTemplate {
        current_user,
        offering: OfferingDetailView::from_offering(&offering),
        quantity: clamp_quantity(query.quantity.unwrap_or(1)),
    }
    .into_response())
}
