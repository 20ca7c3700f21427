//! Authentication route handlers.
//!
//! Identity is established by binding the session to an existing profile
//! row; credential verification lives with the external identity provider
//! and is not re-implemented here. Login looks the profile up by email,
//! reads the advisory role, and stores both in the session.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use mam_cung_core::AppRole;

use crate::db::{ProfileRepository, roles};
use crate::filters;
use crate::middleware::{clear_current_user, set_current_user};
use crate::models::CurrentUser;
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
}

// =============================================================================
// Query Types
// =============================================================================

/// Query parameters for error display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub current_user: Option<CurrentUser>,
    pub error: Option<String>,
}

// =============================================================================
// Routes
// =============================================================================

/// Display the login page.
pub async fn login_page(Query(query): Query<MessageQuery>) -> impl IntoResponse {
    let error = query.error.map(|code| match code.as_str() {
        "unknown" => "Không tìm thấy tài khoản với email này.".to_string(),
        "session" => "Không thể tạo phiên đăng nhập. Vui lòng thử lại.".to_string(),
        other => other.to_string(),
    });

    LoginTemplate {
        current_user: None,
        error,
    }
}

/// Handle login form submission.
///
/// Binds the session to the profile matching the submitted email and
/// redirects by role.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    let email = form.email.trim().to_lowercase();

    let profile = match ProfileRepository::new(state.pool()).get_by_email(&email).await {
        Ok(Some(profile)) => profile,
        Ok(None) => {
            tracing::warn!("login attempt for unknown email");
            return Redirect::to("/auth?error=unknown").into_response();
        }
        Err(e) => {
            tracing::error!("profile lookup failed: {}", e);
            return Redirect::to("/auth?error=session").into_response();
        }
    };

    let role = match roles::get_role(state.pool(), profile.id).await {
        Ok(role) => role,
        Err(e) => {
            tracing::error!("role lookup failed: {}", e);
            AppRole::default()
        }
    };

    let current_user = CurrentUser {
        id: profile.id,
        full_name: profile.full_name,
        role,
    };

    if let Err(e) = set_current_user(&session, &current_user).await {
        tracing::error!("failed to set session: {}", e);
        return Redirect::to("/auth?error=session").into_response();
    }

    let destination = match role {
        AppRole::Admin => "/admin",
        AppRole::Supplier => "/supplier",
        AppRole::Customer | AppRole::Guest => "/customer",
    };
    Redirect::to(destination).into_response()
}

/// Handle logout.
pub async fn logout(session: Session) -> Response {
    if let Err(e) = clear_current_user(&session).await {
        tracing::error!("failed to clear session: {}", e);
    }
    // Drop the whole session record, not just the user key
    if let Err(e) = session.flush().await {
        tracing::error!("failed to flush session: {}", e);
    }

    Redirect::to("/").into_response()
}
