//! Vietnamese đồng amounts.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An amount in Vietnamese đồng.
///
/// VND has no fractional unit in practice; amounts are whole numbers like
/// 800 000. Display formatting follows the vi-VN convention of `.` as the
/// thousands separator (`800.000`). The currency suffix `đ` is left to the
/// caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Vnd(Decimal);

impl Vnd {
    /// Create a new amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create an amount from a whole number of đồng.
    #[must_use]
    pub fn from_dong(dong: i64) -> Self {
        Self(Decimal::from(dong))
    }

    /// Get the underlying decimal value.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Multiply by a quantity (used for order totals).
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl fmt::Display for Vnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.0.round();
        let digits = rounded.abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        let offset = digits.len() % 3;
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (i + 3 - offset) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }
        if rounded.is_sign_negative() {
            write!(f, "-{grouped}")
        } else {
            write!(f, "{grouped}")
        }
    }
}

impl From<Decimal> for Vnd {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl From<Vnd> for Decimal {
    fn from(vnd: Vnd) -> Self {
        vnd.0
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for Vnd {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <Decimal as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <Decimal as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Vnd {
    fn decode(
        value: sqlx::postgres::PgValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let amount = <Decimal as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(Self(amount))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for Vnd {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <Decimal as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Vnd::from_dong(0).to_string(), "0");
        assert_eq!(Vnd::from_dong(800).to_string(), "800");
        assert_eq!(Vnd::from_dong(800_000).to_string(), "800.000");
        assert_eq!(Vnd::from_dong(1_500_000).to_string(), "1.500.000");
        assert_eq!(Vnd::from_dong(12_345_678).to_string(), "12.345.678");
    }

    #[test]
    fn test_display_negative() {
        assert_eq!(Vnd::from_dong(-1_000).to_string(), "-1.000");
    }

    #[test]
    fn test_times() {
        let unit = Vnd::from_dong(500_000);
        assert_eq!(unit.times(2), Vnd::from_dong(1_000_000));
        assert_eq!(unit.times(1), unit);
    }
}
