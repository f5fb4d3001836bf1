//! Driving port for marketplace read models.
//!
//! Inbound adapters (HTTP handlers) use this port to fetch the marketplace
//! views without knowing where the dataset came from. Lookups that miss
//! return [`Error::not_found`].

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::catalogue_filter::ServiceFilter;
use crate::domain::marketplace::{RequestId, ServiceId, User, UserId};
use crate::domain::views::{OfferListing, Overview, ProfileDetail, RequestDetail, ServiceDetail};

/// Domain use-case port for browsing the marketplace.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketplaceQuery: Send + Sync {
    /// Registration bonus, lifecycle, and member balances.
    async fn overview(&self) -> Result<Overview, Error>;

    /// Offers matching `filter`, with catalogue facets.
    async fn search_offers(&self, filter: &ServiceFilter) -> Result<OfferListing, Error>;

    /// One offer with its provider and requests.
    async fn service_detail(&self, id: &ServiceId) -> Result<ServiceDetail, Error>;

    /// One request with its parties, cost, and timeline.
    async fn request_detail(&self, id: &RequestId) -> Result<RequestDetail, Error>;

    /// Every member, in listing order.
    async fn list_profiles(&self) -> Result<Vec<User>, Error>;

    /// One member with balance, offers, and activity.
    async fn profile_detail(&self, id: &UserId) -> Result<ProfileDetail, Error>;
}
