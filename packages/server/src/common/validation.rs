//! Input validation predicates shared by the HTTP layer and domain services.
//!
//! All checks are pure and total: they never panic and treat absent values as
//! invalid rather than as errors.

use uuid::Uuid;

/// Returns `true` when a value is present and contains at least one
/// non-whitespace character.
pub fn non_empty_string(value: Option<&str>) -> bool {
    matches!(value, Some(v) if !v.trim().is_empty())
}

/// Returns `true` when the string parses as a UUID.
pub fn valid_uuid(value: &str) -> bool {
    Uuid::parse_str(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_string_accepts_regular_text() {
        assert!(non_empty_string(Some("Book Club")));
    }

    #[test]
    fn non_empty_string_rejects_missing_value() {
        assert!(!non_empty_string(None));
    }

    #[test]
    fn non_empty_string_rejects_empty_value() {
        assert!(!non_empty_string(Some("")));
    }

    #[test]
    fn non_empty_string_rejects_whitespace_only() {
        assert!(!non_empty_string(Some("   \t\n")));
    }

    #[test]
    fn valid_uuid_accepts_canonical_form() {
        assert!(valid_uuid("67e55044-10b1-426f-9247-bb680e5fe0c8"));
    }

    #[test]
    fn valid_uuid_rejects_garbage() {
        assert!(!valid_uuid("not-a-uuid"));
        assert!(!valid_uuid(""));
        assert!(!valid_uuid("67e55044-10b1-426f-9247"));
    }
}
