//! Dashboard shell route handlers.
//!
//! The customer and supplier dashboards are navigation shells; the admin
//! shell additionally checks the advisory role and sends non-admins home.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};

use crate::db::roles;
use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::CurrentUser;
use crate::state::AppState;

/// Customer dashboard shell template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/customer.html")]
pub struct CustomerDashboardTemplate {
    pub current_user: Option<CurrentUser>,
}

/// Supplier dashboard shell template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/supplier.html")]
pub struct SupplierDashboardTemplate {
    pub current_user: Option<CurrentUser>,
}

/// Admin dashboard shell template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/admin.html")]
pub struct AdminDashboardTemplate {
    pub current_user: Option<CurrentUser>,
}

/// Generic sub-section shell template. The supplier and admin sub-pages
/// are navigation shells only; their tooling lives outside this binary.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/section.html")]
pub struct SectionShellTemplate {
    pub current_user: Option<CurrentUser>,
    pub title: &'static str,
    pub description: &'static str,
    pub back_href: &'static str,
}

/// Display the customer dashboard shell.
pub async fn customer(RequireAuth(user): RequireAuth) -> impl IntoResponse {
    CustomerDashboardTemplate {
        current_user: Some(user),
    }
}

/// Display the supplier dashboard shell.
pub async fn supplier(RequireAuth(user): RequireAuth) -> impl IntoResponse {
    SupplierDashboardTemplate {
        current_user: Some(user),
    }
}

/// Display a supplier sub-section shell.
pub async fn supplier_products(RequireAuth(user): RequireAuth) -> impl IntoResponse {
    SectionShellTemplate {
        current_user: Some(user),
        title: "Gói mâm cúng của tôi",
        description: "Danh sách gói đang bán và chờ duyệt. Quản lý gói qua công cụ nhà cung cấp.",
        back_href: "/supplier",
    }
}

/// Display a supplier sub-section shell.
pub async fn supplier_orders(RequireAuth(user): RequireAuth) -> impl IntoResponse {
    SectionShellTemplate {
        current_user: Some(user),
        title: "Đơn hàng của khách",
        description: "Các đơn khách đã đặt cho gói của bạn. Xử lý đơn qua công cụ nhà cung cấp.",
        back_href: "/supplier",
    }
}

async fn admin_section(
    state: &AppState,
    user: CurrentUser,
    title: &'static str,
    description: &'static str,
) -> Result<Response, AppError> {
    let role = roles::get_role(state.pool(), user.id).await?;
    if !role.is_admin() {
        return Ok(Redirect::to("/").into_response());
    }

    Ok(SectionShellTemplate {
        current_user: Some(user),
        title,
        description,
        back_href: "/admin",
    }
    .into_response())
}

/// Display the admin users sub-section shell.
pub async fn admin_users(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Response, AppError> {
    admin_section(
        &state,
        user,
        "Người dùng",
        "Khách hàng, nhà cung cấp và phân quyền trên nền tảng.",
    )
    .await
}

/// Display the admin products sub-section shell.
pub async fn admin_products(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Response, AppError> {
    admin_section(
        &state,
        user,
        "Duyệt gói mâm cúng",
        "Gói mới từ nhà cung cấp chờ phê duyệt.",
    )
    .await
}

/// Display the admin orders sub-section shell.
pub async fn admin_orders(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Response, AppError> {
    admin_section(
        &state,
        user,
        "Đơn hàng",
        "Toàn bộ đơn hàng trên nền tảng.",
    )
    .await
}

/// Display the admin dashboard shell.
///
/// The role is re-read from the database on every hit; non-admins are
/// redirected home.
pub async fn admin(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Response, AppError> {
    let role = roles::get_role(state.pool(), user.id).await?;
    if !role.is_admin() {
        return Ok(Redirect::to("/").into_response());
    }

    Ok(AdminDashboardTemplate {
        current_user: Some(user),
    }
    .into_response())
}
