//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use chrono::NaiveDate;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Formats an ISO date (`YYYY-MM-DD`) as `dd/MM/yyyy` for display.
///
/// Values that do not parse are passed through unchanged.
///
/// Usage in templates: `{{ order.delivery_date|format_date }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn format_date(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(reformat_iso_date(value.to_string()))
}

fn reformat_iso_date(raw: String) -> String {
    NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .map_or(raw, |date| date.format("%d/%m/%Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_iso_to_vietnamese_order() {
        assert_eq!(reformat_iso_date("2026-09-15".to_string()), "15/09/2026");
    }

    #[test]
    fn test_format_date_passes_through_unparseable_input() {
        assert_eq!(reformat_iso_date("soon".to_string()), "soon");
    }
}
