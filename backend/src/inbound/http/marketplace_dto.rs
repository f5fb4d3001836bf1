//! Response payloads for the marketplace endpoints.
//!
//! Each DTO flattens a domain view into plain JSON fields and carries the
//! OpenAPI schema, so domain types stay free of transport concerns.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::marketplace::{ServiceOffer, User};
use crate::domain::timeline::TimelineEntry;
use crate::domain::views::{
    ActivityEntry, ActivityRole, MemberBalance, NumberedStep, OfferCard, OfferListing, Overview,
    ProfileDetail, RequestDetail, ServiceDetail,
};

/// A lifecycle step with its 1-based position.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NumberedStepResponse {
    #[schema(example = 1)]
    pub number: usize,
    #[schema(example = "requested")]
    pub id: String,
    #[schema(example = "Request sent")]
    pub title: String,
    pub description: String,
}

impl From<NumberedStep> for NumberedStepResponse {
    fn from(value: NumberedStep) -> Self {
        Self {
            number: value.number,
            id: value.step.id().to_string(),
            title: value.step.title().to_owned(),
            description: value.step.description().to_owned(),
        }
    }
}

/// A member's credit balance. `balance` is absent when none is recorded.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberBalanceResponse {
    #[schema(example = "andrei")]
    pub user_id: String,
    #[schema(example = "Andrei Popescu")]
    pub name: String,
    #[schema(example = 3)]
    pub balance: Option<u32>,
}

impl From<MemberBalance> for MemberBalanceResponse {
    fn from(value: MemberBalance) -> Self {
        Self {
            user_id: value.user.id().to_string(),
            name: value.user.name().to_owned(),
            balance: value.balance,
        }
    }
}

/// Landing page summary.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OverviewResponse {
    /// Credits granted to every new member.
    #[schema(example = 3)]
    pub registration_bonus: u32,
    pub steps: Vec<NumberedStepResponse>,
    pub balances: Vec<MemberBalanceResponse>,
    #[schema(example = 5)]
    pub member_count: usize,
    #[schema(example = 6)]
    pub offer_count: usize,
}

impl From<Overview> for OverviewResponse {
    fn from(value: Overview) -> Self {
        Self {
            registration_bonus: value.registration_bonus,
            steps: value.steps.into_iter().map(Into::into).collect(),
            balances: value.balances.into_iter().map(Into::into).collect(),
            member_count: value.member_count,
            offer_count: value.offer_count,
        }
    }
}

/// A service offer.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OfferResponse {
    #[schema(example = "svc-guitar")]
    pub id: String,
    #[schema(example = "andrei")]
    pub provider_id: String,
    #[schema(example = "Guitar lessons for beginners")]
    pub title: String,
    pub summary: String,
    /// Credits per unit.
    #[schema(example = 1)]
    pub rate: u32,
    #[schema(example = "hour")]
    pub unit: String,
    #[schema(example = json!(["music", "beginner"]))]
    pub tags: Vec<String>,
    #[schema(example = "Weekday evenings")]
    pub availability: String,
}

impl From<&ServiceOffer> for OfferResponse {
    fn from(value: &ServiceOffer) -> Self {
        Self {
            id: value.id().to_string(),
            provider_id: value.provider_id().to_string(),
            title: value.title().to_owned(),
            summary: value.summary().to_owned(),
            rate: value.rate().get(),
            unit: value.unit().to_owned(),
            tags: value.tags().iter().map(ToString::to_string).collect(),
            availability: value.availability().to_owned(),
        }
    }
}

/// An offer as shown on a listing card.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OfferCardResponse {
    #[serde(flatten)]
    pub offer: OfferResponse,
    #[schema(example = "Andrei Popescu")]
    pub provider_name: String,
}

impl From<OfferCard> for OfferCardResponse {
    fn from(value: OfferCard) -> Self {
        Self {
            offer: OfferResponse::from(&value.offer),
            provider_name: value.provider_name,
        }
    }
}

/// Matching offers plus facet options for the whole catalogue.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OfferListingResponse {
    pub offers: Vec<OfferCardResponse>,
    /// Number of matching offers.
    #[schema(example = 2)]
    pub total: usize,
    /// Distinct tags in order of first appearance.
    #[schema(example = json!(["music", "beginner", "creative"]))]
    pub tags: Vec<String>,
    /// Distinct rates, ascending.
    #[schema(example = json!([1, 2]))]
    pub rates: Vec<u32>,
}

impl From<OfferListing> for OfferListingResponse {
    fn from(value: OfferListing) -> Self {
        Self {
            offers: value.offers.into_iter().map(Into::into).collect(),
            total: value.total,
            tags: value.tags.iter().map(ToString::to_string).collect(),
            rates: value.rates.into_iter().map(|rate| rate.get()).collect(),
        }
    }
}

/// The member providing an offer.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSummaryResponse {
    #[schema(example = "andrei")]
    pub id: String,
    #[schema(example = "Andrei Popescu")]
    pub name: String,
    #[schema(example = "Acoustic guitar")]
    pub skill: String,
}

/// One offer with its provider and the requests made against it.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDetailResponse {
    pub offer: OfferResponse,
    pub provider: ProviderSummaryResponse,
    #[schema(example = json!(["req-1"]))]
    pub request_ids: Vec<String>,
}

impl From<ServiceDetail> for ServiceDetailResponse {
    fn from(value: ServiceDetail) -> Self {
        Self {
            offer: OfferResponse::from(&value.offer),
            provider: ProviderSummaryResponse {
                id: value.provider.id().to_string(),
                name: value.provider.name().to_owned(),
                skill: value.provider.skill().to_owned(),
            },
            request_ids: value.request_ids.iter().map(ToString::to_string).collect(),
        }
    }
}

/// A lifecycle step annotated with a request's progress.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntryResponse {
    #[schema(example = "accepted")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub is_past: bool,
    pub is_active: bool,
}

impl From<TimelineEntry> for TimelineEntryResponse {
    fn from(value: TimelineEntry) -> Self {
        Self {
            id: value.step.id().to_string(),
            title: value.step.title().to_owned(),
            description: value.step.description().to_owned(),
            is_past: value.is_past,
            is_active: value.is_active,
        }
    }
}

/// One request with its parties, cost, and lifecycle progress.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestDetailResponse {
    #[schema(example = "req-1")]
    pub id: String,
    pub service_id: String,
    #[schema(example = "Guitar lessons for beginners")]
    pub service_title: String,
    pub requester_id: String,
    pub requester_name: String,
    pub provider_id: String,
    pub provider_name: String,
    #[schema(example = 1)]
    pub hours: u32,
    #[schema(example = "accepted")]
    pub status: String,
    #[schema(example = "2026-02-03")]
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Offer rate multiplied by hours.
    #[schema(example = 1)]
    pub total_credits: u64,
    /// The request reached the final lifecycle step.
    pub completed: bool,
    pub timeline: Vec<TimelineEntryResponse>,
}

impl From<RequestDetail> for RequestDetailResponse {
    fn from(value: RequestDetail) -> Self {
        let RequestDetail {
            request,
            service_title,
            requester_name,
            provider_name,
            total_credits,
            completed,
            timeline,
        } = value;
        Self {
            id: request.id().to_string(),
            service_id: request.service_id().to_string(),
            service_title,
            requester_id: request.requester_id().to_string(),
            requester_name,
            provider_id: request.provider_id().to_string(),
            provider_name,
            hours: request.hours(),
            status: request.status().to_owned(),
            created_at: request.created_at().to_owned(),
            notes: request.notes().map(str::to_owned),
            total_credits,
            completed,
            timeline: timeline.into_iter().map(Into::into).collect(),
        }
    }
}

/// A member as listed in the directory.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummaryResponse {
    #[schema(example = "maria")]
    pub id: String,
    #[schema(example = "Maria Dumitrescu")]
    pub name: String,
    #[schema(example = "@maria.codes")]
    pub handle: String,
    pub city: String,
    pub skill: String,
    #[schema(example = 4.7)]
    pub rating: f32,
}

impl From<&User> for ProfileSummaryResponse {
    fn from(value: &User) -> Self {
        Self {
            id: value.id().to_string(),
            name: value.name().to_owned(),
            handle: value.handle().to_owned(),
            city: value.city().to_owned(),
            skill: value.skill().to_owned(),
            rating: value.rating(),
        }
    }
}

/// A member with biography and join date.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub summary: ProfileSummaryResponse,
    pub bio: String,
    #[schema(example = "November 2025")]
    pub joined: String,
}

/// Which side of a request the member is on.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActivityRoleResponse {
    Requester,
    Provider,
}

impl From<ActivityRole> for ActivityRoleResponse {
    fn from(value: ActivityRole) -> Self {
        match value {
            ActivityRole::Requester => Self::Requester,
            ActivityRole::Provider => Self::Provider,
        }
    }
}

/// A request in a member's activity feed.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntryResponse {
    #[schema(example = "req-2")]
    pub request_id: String,
    pub service_title: String,
    pub created_at: String,
    pub status: String,
    pub role: ActivityRoleResponse,
}

impl From<ActivityEntry> for ActivityEntryResponse {
    fn from(value: ActivityEntry) -> Self {
        Self {
            request_id: value.request_id.to_string(),
            service_title: value.service_title,
            created_at: value.created_at,
            status: value.status,
            role: value.role.into(),
        }
    }
}

/// A member's profile page.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDetailResponse {
    pub profile: ProfileResponse,
    pub balance: Option<u32>,
    pub offers: Vec<OfferResponse>,
    pub activity: Vec<ActivityEntryResponse>,
}

impl From<ProfileDetail> for ProfileDetailResponse {
    fn from(value: ProfileDetail) -> Self {
        Self {
            profile: ProfileResponse {
                summary: ProfileSummaryResponse::from(&value.user),
                bio: value.user.bio().to_owned(),
                joined: value.user.joined().to_owned(),
            },
            balance: value.balance,
            offers: value.offers.iter().map(OfferResponse::from).collect(),
            activity: value.activity.into_iter().map(Into::into).collect(),
        }
    }
}
