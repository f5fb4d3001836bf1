//! Validation helpers shared by marketplace entities.

use super::MarketplaceValidationError;

pub(super) const RATING_MAX: f32 = 5.0;

pub(super) fn validate_non_empty_field(
    value: String,
    field: &'static str,
) -> Result<String, MarketplaceValidationError> {
    if value.trim().is_empty() {
        return Err(MarketplaceValidationError::EmptyField { field });
    }
    Ok(value)
}

pub(super) fn ensure_positive(
    value: u32,
    field: &'static str,
) -> Result<u32, MarketplaceValidationError> {
    if value == 0 {
        return Err(MarketplaceValidationError::ZeroValue { field });
    }
    Ok(value)
}

pub(super) fn ensure_valid_rating(
    rating: f32,
    field: &'static str,
) -> Result<f32, MarketplaceValidationError> {
    if !(0.0..=RATING_MAX).contains(&rating) {
        return Err(MarketplaceValidationError::InvalidRating { field, rating });
    }
    Ok(rating)
}
