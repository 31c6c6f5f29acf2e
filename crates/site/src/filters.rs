//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Percent-encodes a value for use in a query string.
///
/// Usage in templates: `{{ search|query_encode }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn query_encode(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(urlencoding::encode(&value.to_string()).into_owned())
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_query_encode_spaces_and_reserved() {
        assert_eq!(urlencoding::encode("drill bits").into_owned(), "drill%20bits");
        assert_eq!(urlencoding::encode("a&b=c").into_owned(), "a%26b%3Dc");
    }
}
