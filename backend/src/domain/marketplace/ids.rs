//! Slug identifiers for marketplace entities.

use std::fmt;

use serde::Serialize;

use super::MarketplaceValidationError;
use crate::domain::slug::is_valid_slug;

macro_rules! slug_identifier {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Validate and wrap a slug identifier.
            pub fn new(value: impl Into<String>) -> Result<Self, MarketplaceValidationError> {
                let value = value.into();
                if !is_valid_slug(&value) {
                    return Err(MarketplaceValidationError::InvalidSlug { field: $field });
                }
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }
    };
}

slug_identifier!(
    /// Member identifier, e.g. `andrei`.
    UserId,
    "user.id"
);
slug_identifier!(
    /// Offer identifier, e.g. `svc-guitar`.
    ServiceId,
    "service.id"
);
slug_identifier!(
    /// Request identifier, e.g. `req-1`.
    RequestId,
    "request.id"
);
slug_identifier!(
    /// Lifecycle step identifier, e.g. `accepted`.
    StepId,
    "status_step.id"
);
