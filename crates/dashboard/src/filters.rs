//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year, for the page footer.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Formats a contact count with the right noun ("1 contact", "3 contacts").
///
/// Usage in templates: `{{ rows.len()|contact_count }}`
#[askama::filter_fn]
pub fn contact_count(count: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_contact_count(&count.to_string()))
}

fn format_contact_count(count: &str) -> String {
    if count == "1" {
        "1 contact".to_string()
    } else {
        format!("{count} contacts")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_contact_count() {
        assert_eq!(format_contact_count("0"), "0 contacts");
        assert_eq!(format_contact_count("1"), "1 contact");
        assert_eq!(format_contact_count("12"), "12 contacts");
    }
}
