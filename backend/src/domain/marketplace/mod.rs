//! Marketplace domain types.
//!
//! Members, the offers they list, requests between them, and the ordered
//! request lifecycle. Every entity is validated on construction and the
//! [`MarketplaceSnapshot`] guarantees that all cross references resolve.

mod ids;
mod service_offer;
mod service_request;
mod snapshot;
mod status_step;
mod user;
mod validation;

#[cfg(test)]
mod tests;

pub use ids::{RequestId, ServiceId, StepId, UserId};
pub use service_offer::{CreditRate, ServiceOffer, ServiceOfferDraft, Tag};
pub use service_request::{ServiceRequest, ServiceRequestDraft};
pub use snapshot::{MarketplaceSnapshot, MarketplaceSnapshotDraft};
pub use status_step::{StatusStep, StatusStepDraft};
pub use user::{User, UserDraft};

/// Validation errors returned by marketplace constructors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MarketplaceValidationError {
    /// An identifier is not a lowercase slug.
    #[error("{field} must contain lowercase ASCII letters, digits, and hyphens")]
    InvalidSlug { field: &'static str },
    /// A required text field is blank.
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },
    /// A quantity that must be positive is zero.
    #[error("{field} must be greater than zero")]
    ZeroValue { field: &'static str },
    /// A rating falls outside the accepted scale.
    #[error("{field} must be between 0.0 and 5.0 (got {rating})")]
    InvalidRating { field: &'static str, rating: f32 },
    /// Two entities of the same kind share an identifier.
    #[error("duplicate {field} '{id}'")]
    DuplicateId { field: &'static str, id: String },
    /// A reference names an entity that does not exist.
    #[error("{field} '{id}' does not resolve")]
    DanglingReference { field: &'static str, id: String },
    /// The lifecycle has no steps.
    #[error("status step order must not be empty")]
    EmptyStatusSteps,
}
