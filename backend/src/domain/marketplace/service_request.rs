//! Service request entity.

use serde::{Deserialize, Serialize};

use super::validation::ensure_positive;
use super::{MarketplaceValidationError, RequestId, ServiceId, UserId};

/// Input payload for [`ServiceRequest::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequestDraft {
    pub id: String,
    pub service_id: String,
    pub requester_id: String,
    pub provider_id: String,
    pub hours: u32,
    pub status: String,
    pub created_at: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A requester engaging a provider's offer.
///
/// `status` is kept verbatim. It normally names a status step, but a value
/// outside the lifecycle is tolerated and rendered with no progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequest {
    id: RequestId,
    service_id: ServiceId,
    requester_id: UserId,
    provider_id: UserId,
    hours: u32,
    status: String,
    created_at: String,
    notes: Option<String>,
}

impl ServiceRequest {
    /// Validate and construct a request.
    pub fn new(draft: ServiceRequestDraft) -> Result<Self, MarketplaceValidationError> {
        Self::try_from(draft)
    }

    pub fn id(&self) -> &RequestId {
        &self.id
    }
    pub fn service_id(&self) -> &ServiceId {
        &self.service_id
    }
    pub fn requester_id(&self) -> &UserId {
        &self.requester_id
    }
    pub fn provider_id(&self) -> &UserId {
        &self.provider_id
    }
    pub fn hours(&self) -> u32 {
        self.hours
    }
    pub fn status(&self) -> &str {
        self.status.as_str()
    }
    pub fn created_at(&self) -> &str {
        self.created_at.as_str()
    }
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Whether `user` takes part in the request on either side.
    pub fn involves(&self, user: &UserId) -> bool {
        &self.requester_id == user || &self.provider_id == user
    }
}

impl TryFrom<ServiceRequestDraft> for ServiceRequest {
    type Error = MarketplaceValidationError;

    fn try_from(draft: ServiceRequestDraft) -> Result<Self, Self::Error> {
        Ok(Self {
            id: RequestId::new(draft.id)?,
            service_id: ServiceId::new(draft.service_id)?,
            requester_id: UserId::new(draft.requester_id)?,
            provider_id: UserId::new(draft.provider_id)?,
            hours: ensure_positive(draft.hours, "request.hours")?,
            status: draft.status,
            created_at: draft.created_at,
            notes: draft.notes.filter(|notes| !notes.trim().is_empty()),
        })
    }
}
