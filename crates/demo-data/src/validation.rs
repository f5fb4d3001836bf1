//! Identifier and value checks applied while loading the dataset.
//!
//! Identifiers are slugs: non-empty, free of surrounding whitespace, and made
//! of lowercase ASCII letters, digits, and hyphens. The backend applies the
//! same rule to its domain identifiers.

/// Highest rating a member may carry.
pub const RATING_MAX: f32 = 5.0;

/// Returns `true` when `value` is a valid record identifier.
///
/// # Examples
///
/// ```
/// use demo_data::is_valid_record_id;
///
/// assert!(is_valid_record_id("req-1"));
/// assert!(!is_valid_record_id("Req 1"));
/// assert!(!is_valid_record_id(""));
/// ```
#[must_use]
pub fn is_valid_record_id(value: &str) -> bool {
    !value.is_empty() && value.chars().all(is_valid_id_char)
}

const fn is_valid_id_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'
}

/// Returns `true` when `rating` lies within `0..=RATING_MAX`.
#[must_use]
pub(crate) fn is_valid_rating(rating: f32) -> bool {
    (0.0..=RATING_MAX).contains(&rating)
}
