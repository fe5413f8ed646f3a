//! Slug validation.

use crate::error::CatalogError;

/// Check that `slug` can name a catalog entity in a URL.
///
/// Slugs must be non-empty and free of whitespace and control characters.
/// Anything else, including uppercase and `_`, is accepted and left to the
/// caller to percent-encode.
pub fn validate_slug(slug: &str) -> Result<(), CatalogError> {
    let reason = if slug.is_empty() {
        Some("empty")
    } else if slug.chars().any(char::is_whitespace) {
        Some("contains whitespace")
    } else if slug.chars().any(char::is_control) {
        Some("contains control characters")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(CatalogError::InvalidSlug {
            slug: slug.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_slugs() {
        for slug in ["acme", "brake-pads-2", "Acme_Parts", "caf\u{e9}"] {
            assert!(validate_slug(slug).is_ok(), "{slug:?} should be accepted");
        }
    }

    #[test]
    fn test_invalid_slugs() {
        for slug in ["", "a me", "acme\n", "tab\tbed"] {
            assert!(validate_slug(slug).is_err(), "{slug:?} should be rejected");
        }
    }
}
