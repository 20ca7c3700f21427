//! Session-related types.
//!
//! The identity provider itself is outside this system; the session only
//! carries the principal established at login and is destroyed at logout.

use serde::{Deserialize, Serialize};

use mam_cung_core::{AppRole, UserId};

/// Session-stored principal.
///
/// Minimal data stored in the session to identify the logged-in user. The
/// role here gates dashboard routing only; it is not a security boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Principal's profile id.
    pub id: UserId,
    /// Display name for dashboard greetings.
    pub full_name: Option<String>,
    /// Role read from `user_roles` at login.
    pub role: AppRole,
}

/// Session keys for authentication data.
pub mod keys {
    /// Key for storing the current logged-in principal.
    pub const CURRENT_USER: &str = "current_user";
}
