//! Service offer entity and its value types.

use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use super::validation::validate_non_empty_field;
use super::{MarketplaceValidationError, ServiceId, UserId};

/// Time credits charged per unit of service. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CreditRate(NonZeroU32);

impl CreditRate {
    /// Validate a raw credit rate.
    ///
    /// # Examples
    /// ```
    /// use timebank_backend::domain::marketplace::CreditRate;
    ///
    /// assert_eq!(CreditRate::new(2).map(CreditRate::get), Ok(2));
    /// assert!(CreditRate::new(0).is_err());
    /// ```
    pub fn new(value: u32) -> Result<Self, MarketplaceValidationError> {
        NonZeroU32::new(value)
            .map(Self)
            .ok_or(MarketplaceValidationError::ZeroValue {
                field: "service.rate",
            })
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for CreditRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Free-form category label attached to an offer, e.g. `music`.
///
/// Tags are compared exactly, so `Music` and `music` are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    /// Validate a tag. Blank tags are rejected.
    pub fn new(value: impl Into<String>) -> Result<Self, MarketplaceValidationError> {
        validate_non_empty_field(value.into(), "service.tags").map(Self)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Input payload for [`ServiceOffer::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOfferDraft {
    pub id: String,
    pub provider_id: String,
    pub title: String,
    pub summary: String,
    pub rate: u32,
    pub unit: String,
    pub tags: Vec<String>,
    pub availability: String,
}

/// A unit of work a provider lists for a stated credit rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOffer {
    id: ServiceId,
    provider_id: UserId,
    title: String,
    summary: String,
    rate: CreditRate,
    unit: String,
    tags: Vec<Tag>,
    availability: String,
}

impl ServiceOffer {
    /// Validate and construct an offer.
    ///
    /// Repeated tags are collapsed, keeping the first occurrence.
    pub fn new(draft: ServiceOfferDraft) -> Result<Self, MarketplaceValidationError> {
        Self::try_from(draft)
    }

    pub fn id(&self) -> &ServiceId {
        &self.id
    }
    pub fn provider_id(&self) -> &UserId {
        &self.provider_id
    }
    pub fn title(&self) -> &str {
        self.title.as_str()
    }
    pub fn summary(&self) -> &str {
        self.summary.as_str()
    }
    pub fn rate(&self) -> CreditRate {
        self.rate
    }
    pub fn unit(&self) -> &str {
        self.unit.as_str()
    }
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }
    pub fn availability(&self) -> &str {
        self.availability.as_str()
    }

    /// Whether the offer carries `tag`, compared exactly.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate.as_str() == tag)
    }
}

impl TryFrom<ServiceOfferDraft> for ServiceOffer {
    type Error = MarketplaceValidationError;

    fn try_from(draft: ServiceOfferDraft) -> Result<Self, Self::Error> {
        let mut tags: Vec<Tag> = Vec::with_capacity(draft.tags.len());
        for raw in draft.tags {
            let tag = Tag::new(raw)?;
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        Ok(Self {
            id: ServiceId::new(draft.id)?,
            provider_id: UserId::new(draft.provider_id)?,
            title: validate_non_empty_field(draft.title, "service.title")?,
            summary: draft.summary,
            rate: CreditRate::new(draft.rate)?,
            unit: draft.unit,
            tags,
            availability: draft.availability,
        })
    }
}
