//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Characters kept by the [`excerpt`] filter.
const EXCERPT_LENGTH: usize = 90;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Shortens a product description for card layouts.
///
/// Usage in templates: `{{ product.description|excerpt }}`
#[askama::filter_fn]
pub fn excerpt(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let text = value.to_string();
    if text.chars().count() <= EXCERPT_LENGTH {
        return Ok(text);
    }

    let cut: String = text.chars().take(EXCERPT_LENGTH).collect();
    Ok(format!("{}…", cut.trim_end()))
}
