//! Marketplace domain service.
//!
//! Answers the [`MarketplaceQuery`] port from an immutable snapshot shared
//! across every worker.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, warn};

use crate::domain::Error;
use crate::domain::catalogue_filter::ServiceFilter;
use crate::domain::marketplace::{MarketplaceSnapshot, RequestId, ServiceId, User, UserId};
use crate::domain::ports::MarketplaceQuery;
use crate::domain::views::{OfferListing, Overview, ProfileDetail, RequestDetail, ServiceDetail};

/// Marketplace service implementing the driving port.
#[derive(Debug, Clone)]
pub struct MarketplaceService {
    snapshot: Arc<MarketplaceSnapshot>,
}

impl MarketplaceService {
    /// Create a service over a loaded snapshot.
    pub fn new(snapshot: Arc<MarketplaceSnapshot>) -> Self {
        Self { snapshot }
    }

    fn not_found(kind: &str, id: &str) -> Error {
        Error::not_found(format!("{kind} not found")).with_details(json!({
            "id": id,
            "code": format!("{kind}_not_found"),
        }))
    }
}

#[async_trait]
impl MarketplaceQuery for MarketplaceService {
    async fn overview(&self) -> Result<Overview, Error> {
        Ok(Overview::from_snapshot(&self.snapshot))
    }

    async fn search_offers(&self, filter: &ServiceFilter) -> Result<OfferListing, Error> {
        let listing = OfferListing::search(&self.snapshot, filter);
        debug!(
            query = filter.query(),
            matched = listing.total,
            "catalogue search evaluated"
        );
        Ok(listing)
    }

    async fn service_detail(&self, id: &ServiceId) -> Result<ServiceDetail, Error> {
        ServiceDetail::assemble(&self.snapshot, id)
            .ok_or_else(|| Self::not_found("service", id.as_str()))
    }

    async fn request_detail(&self, id: &RequestId) -> Result<RequestDetail, Error> {
        let detail = RequestDetail::assemble(&self.snapshot, id)
            .ok_or_else(|| Self::not_found("request", id.as_str()))?;
        if !detail.timeline.iter().any(|entry| entry.is_active) {
            warn!(
                request_id = %id,
                status = detail.request.status(),
                "request status is outside the lifecycle"
            );
        }
        Ok(detail)
    }

    async fn list_profiles(&self) -> Result<Vec<User>, Error> {
        Ok(self.snapshot.users().to_vec())
    }

    async fn profile_detail(&self, id: &UserId) -> Result<ProfileDetail, Error> {
        ProfileDetail::assemble(&self.snapshot, id)
            .ok_or_else(|| Self::not_found("profile", id.as_str()))
    }
}
