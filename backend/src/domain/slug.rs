//! Shared slug validation predicates for marketplace identifiers.
//!
//! Slugs are non-empty identifiers composed of lowercase ASCII letters,
//! digits, and hyphens.

/// Return `true` when `value` is a valid domain slug.
pub(crate) fn is_valid_slug(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
}
