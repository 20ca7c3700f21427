//! Fixed enumerations exposed at the storefront boundary.
//!
//! These mirror the Postgres enum types created by the storefront
//! migrations (`payment_method`, `order_status`, `payment_status`,
//! `app_role`). Display labels are the Vietnamese strings shown in the UI.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an enum from its wire string fails.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown {kind} value: {value}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

impl ParseEnumError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}

/// How the buyer intends to pay. Recorded on the order only; no payment
/// processing happens in this system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "payment_method", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    BankTransfer,
    Momo,
    Vnpay,
}

impl PaymentMethod {
    /// All methods, in display order.
    pub const ALL: [Self; 3] = [Self::BankTransfer, Self::Momo, Self::Vnpay];

    /// Wire value stored in the database and submitted by the form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BankTransfer => "bank_transfer",
            Self::Momo => "momo",
            Self::Vnpay => "vnpay",
        }
    }

    /// Vietnamese display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::BankTransfer => "Chuyển khoản ngân hàng",
            Self::Momo => "Ví MoMo",
            Self::Vnpay => "VNPay",
        }
    }

    /// Short description shown under the label in the payment picker.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::BankTransfer => "Thanh toán qua tài khoản ngân hàng",
            Self::Momo => "Thanh toán qua ví điện tử MoMo",
            Self::Vnpay => "Thanh toán qua VNPay (ATM, Visa, Mastercard)",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bank_transfer" => Ok(Self::BankTransfer),
            "momo" => Ok(Self::Momo),
            "vnpay" => Ok(Self::Vnpay),
            other => Err(ParseEnumError::new("payment_method", other)),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle of an order. Only `Pending` is ever written by the storefront;
/// the later transitions belong to supplier/admin tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "order_status", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Preparing,
    Delivering,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Vietnamese display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Chờ xác nhận",
            Self::Confirmed => "Đã xác nhận",
            Self::Preparing => "Đang chuẩn bị",
            Self::Delivering => "Đang giao",
            Self::Completed => "Hoàn thành",
            Self::Cancelled => "Đã hủy",
        }
    }

    /// CSS badge classes for the status pill in order listings.
    #[must_use]
    pub const fn badge_class(&self) -> &'static str {
        match self {
            Self::Pending => "badge-yellow",
            Self::Confirmed => "badge-blue",
            Self::Preparing => "badge-purple",
            Self::Delivering => "badge-orange",
            Self::Completed => "badge-green",
            Self::Cancelled => "badge-red",
        }
    }
}

/// Whether the order has been paid. Written as `Unpaid` at checkout and
/// updated by supplier/admin tooling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "payment_status", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    Paid,
    Refunded,
}

/// Role of a principal. Used only for dashboard routing in the storefront;
/// real authorization is enforced at the database layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "app_role", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum AppRole {
    Admin,
    #[default]
    Customer,
    Supplier,
    Guest,
}

impl AppRole {
    /// Whether this role may see the admin dashboard shells.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_method_round_trip() {
        for method in PaymentMethod::ALL {
            assert_eq!(method.as_str().parse::<PaymentMethod>().unwrap(), method);
        }
    }

    #[test]
    fn test_payment_method_rejects_unknown() {
        assert!("cash".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_order_status_labels() {
        assert_eq!(OrderStatus::Pending.label(), "Chờ xác nhận");
        assert_eq!(OrderStatus::Cancelled.label(), "Đã hủy");
        assert_eq!(OrderStatus::Completed.badge_class(), "badge-green");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
        assert_eq!(PaymentStatus::default(), PaymentStatus::Unpaid);
        assert_eq!(AppRole::default(), AppRole::Customer);
    }

    #[test]
    fn test_serde_wire_format() {
        let json = serde_json::to_string(&PaymentMethod::BankTransfer).unwrap();
        assert_eq!(json, "\"bank_transfer\"");
        let status: OrderStatus = serde_json::from_str("\"delivering\"").unwrap();
        assert_eq!(status, OrderStatus::Delivering);
    }
}
