//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Renders an em dash for empty values, used by optional table cells.
///
/// Usage in templates: `{{ user.last_order_at|dash_if_empty }}`
#[askama::filter_fn]
pub fn dash_if_empty(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let rendered = value.to_string();
    if rendered.is_empty() {
        Ok("—".to_string())
    } else {
        Ok(rendered)
    }
}
