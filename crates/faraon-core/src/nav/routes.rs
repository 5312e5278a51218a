//! Catalog route builders.
//!
//! Category and subcategory names come straight from the feed and may
//! contain anything; both are percent-escaped independently before they
//! are composed into a query string.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

/// Unfiltered catalog browse path
pub fn catalog_path() -> &'static str {
    "/catalog"
}

/// Catalog browse path filtered by category name
pub fn category_path(category: &str) -> String {
    format!("/catalog?category={}", escape(category))
}

/// Catalog browse path filtered by category and subcategory name
pub fn subcategory_path(category: &str, subcategory: &str) -> String {
    format!(
        "/catalog?category={}&subcategory={}",
        escape(category),
        escape(subcategory)
    )
}

fn escape(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_pass_through() {
        assert_eq!(category_path("Electronics"), "/catalog?category=Electronics");
        assert_eq!(
            subcategory_path("Electronics", "Phones"),
            "/catalog?category=Electronics&subcategory=Phones"
        );
    }

    #[test]
    fn reserved_characters_are_escaped() {
        let path = category_path("Home & Garden");
        assert_eq!(path, "/catalog?category=Home%20%26%20Garden");
        // No raw '&' survives inside a single-parameter path.
        assert_eq!(path.matches('&').count(), 0);
    }

    #[test]
    fn both_names_escape_independently() {
        let path = subcategory_path("A=B", "C&D");
        assert_eq!(path, "/catalog?category=A%3DB&subcategory=C%26D");
    }

    #[test]
    fn non_ascii_names_are_escaped() {
        let path = subcategory_path("Bebés", "Ropa 0–3");
        assert!(!path.contains('é'));
        assert!(!path.contains(' '));
        assert!(path.starts_with("/catalog?category="));
        assert!(path.contains("&subcategory="));
    }
}
