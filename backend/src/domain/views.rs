//! Read models assembled from the marketplace snapshot.
//!
//! Each view gathers what one screen of the marketplace needs so adapters can
//! render it without walking the snapshot themselves.

use super::catalogue_filter::{
    ProviderDirectory, ServiceFilter, available_rates, available_tags, filter_services,
};
use super::marketplace::{
    CreditRate, MarketplaceSnapshot, RequestId, ServiceId, ServiceOffer, ServiceRequest,
    StatusStep, Tag, User, UserId,
};
use super::timeline::{TimelineEntry, classify_steps, is_final_step};

/// A lifecycle step with its 1-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedStep {
    pub number: usize,
    pub step: StatusStep,
}

/// A member alongside their recorded balance.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberBalance {
    pub user: User,
    pub balance: Option<u32>,
}

/// Landing page summary.
#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    pub registration_bonus: u32,
    pub steps: Vec<NumberedStep>,
    /// Every member, in listing order.
    pub balances: Vec<MemberBalance>,
    pub member_count: usize,
    pub offer_count: usize,
}

impl Overview {
    pub fn from_snapshot(snapshot: &MarketplaceSnapshot) -> Self {
        Self {
            registration_bonus: snapshot.registration_bonus(),
            steps: snapshot
                .status_steps()
                .iter()
                .enumerate()
                .map(|(index, step)| NumberedStep {
                    number: index + 1,
                    step: step.clone(),
                })
                .collect(),
            balances: snapshot
                .users()
                .iter()
                .map(|user| MemberBalance {
                    user: user.clone(),
                    balance: snapshot.balance(user.id()),
                })
                .collect(),
            member_count: snapshot.users().len(),
            offer_count: snapshot.services().len(),
        }
    }
}

/// An offer ready for a listing card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferCard {
    pub offer: ServiceOffer,
    pub provider_name: String,
}

/// Filtered offers plus the facet options for the whole catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferListing {
    pub offers: Vec<OfferCard>,
    /// Number of offers matching the filter.
    pub total: usize,
    pub tags: Vec<Tag>,
    pub rates: Vec<CreditRate>,
}

impl OfferListing {
    pub fn search(snapshot: &MarketplaceSnapshot, filter: &ServiceFilter) -> Self {
        let offers: Vec<OfferCard> = filter_services(snapshot.services(), snapshot, filter)
            .into_iter()
            .map(|offer| OfferCard {
                provider_name: snapshot
                    .provider_name(offer.provider_id())
                    .unwrap_or_default()
                    .to_owned(),
                offer: offer.clone(),
            })
            .collect();
        Self {
            total: offers.len(),
            offers,
            tags: available_tags(snapshot.services()),
            rates: available_rates(snapshot.services()),
        }
    }
}

/// One offer with its provider and the requests made against it.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceDetail {
    pub offer: ServiceOffer,
    pub provider: User,
    pub request_ids: Vec<RequestId>,
}

impl ServiceDetail {
    /// `None` when `id` names no offer.
    pub fn assemble(snapshot: &MarketplaceSnapshot, id: &ServiceId) -> Option<Self> {
        let offer = snapshot.service(id)?;
        let provider = snapshot.user(offer.provider_id())?;
        Some(Self {
            offer: offer.clone(),
            provider: provider.clone(),
            request_ids: snapshot
                .requests_for_service(id)
                .map(|request| request.id().clone())
                .collect(),
        })
    }
}

/// One request with its parties, cost, and lifecycle progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDetail {
    pub request: ServiceRequest,
    pub service_title: String,
    pub requester_name: String,
    pub provider_name: String,
    /// Offer rate multiplied by the hours requested.
    pub total_credits: u64,
    /// The status is the final lifecycle step.
    pub completed: bool,
    pub timeline: Vec<TimelineEntry>,
}

impl RequestDetail {
    /// `None` when `id` names no request.
    pub fn assemble(snapshot: &MarketplaceSnapshot, id: &RequestId) -> Option<Self> {
        let request = snapshot.request(id)?;
        let service = snapshot.service(request.service_id())?;
        let requester = snapshot.user(request.requester_id())?;
        let provider = snapshot.user(request.provider_id())?;
        let steps = snapshot.status_steps();
        Some(Self {
            service_title: service.title().to_owned(),
            requester_name: requester.name().to_owned(),
            provider_name: provider.name().to_owned(),
            total_credits: u64::from(service.rate().get()) * u64::from(request.hours()),
            completed: is_final_step(steps, request.status()),
            timeline: classify_steps(steps, request.status()),
            request: request.clone(),
        })
    }
}

/// Which side of a request a member is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityRole {
    Requester,
    Provider,
}

/// A request as it appears in a member's activity feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub request_id: RequestId,
    pub service_title: String,
    pub created_at: String,
    pub status: String,
    pub role: ActivityRole,
}

/// A member's profile page.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDetail {
    pub user: User,
    pub balance: Option<u32>,
    pub offers: Vec<ServiceOffer>,
    pub activity: Vec<ActivityEntry>,
}

impl ProfileDetail {
    /// `None` when `id` names no member.
    pub fn assemble(snapshot: &MarketplaceSnapshot, id: &UserId) -> Option<Self> {
        let user = snapshot.user(id)?;
        let activity = snapshot
            .requests_involving(id)
            .map(|request| {
                let service_title = snapshot
                    .service(request.service_id())
                    .map(|service| service.title().to_owned())?;
                let role = if request.requester_id() == id {
                    ActivityRole::Requester
                } else {
                    ActivityRole::Provider
                };
                Some(ActivityEntry {
                    request_id: request.id().clone(),
                    service_title,
                    created_at: request.created_at().to_owned(),
                    status: request.status().to_owned(),
                    role,
                })
            })
            .collect::<Option<Vec<_>>>()?;

        Some(Self {
            user: user.clone(),
            balance: snapshot.balance(id),
            offers: snapshot.services_provided_by(id).cloned().collect(),
            activity,
        })
    }
}

#[cfg(test)]
mod tests;
