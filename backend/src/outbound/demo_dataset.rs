//! Adapter translating the fixture records into the domain snapshot.
//!
//! The `demo-data` crate guarantees structural soundness of the file; this
//! mapping re-validates every record as a domain entity so the snapshot's
//! invariants never depend on the loader.

use std::collections::BTreeMap;

use demo_data::{DemoDataset, RequestRecord, ServiceRecord, StatusStepRecord, UserRecord};

use crate::domain::marketplace::{
    MarketplaceSnapshot, MarketplaceSnapshotDraft, MarketplaceValidationError, ServiceOffer,
    ServiceOfferDraft, ServiceRequest, ServiceRequestDraft, StatusStep, StatusStepDraft, User,
    UserDraft, UserId,
};

fn map_user(record: &UserRecord) -> Result<User, MarketplaceValidationError> {
    User::new(UserDraft {
        id: record.id.clone(),
        name: record.name.clone(),
        handle: record.handle.clone(),
        city: record.city.clone(),
        skill: record.skill.clone(),
        bio: record.bio.clone(),
        rating: record.rating,
        joined: record.joined.clone(),
    })
}

fn map_service(record: &ServiceRecord) -> Result<ServiceOffer, MarketplaceValidationError> {
    ServiceOffer::new(ServiceOfferDraft {
        id: record.id.clone(),
        provider_id: record.provider_id.clone(),
        title: record.title.clone(),
        summary: record.summary.clone(),
        rate: record.rate,
        unit: record.unit.clone(),
        tags: record.tags.clone(),
        availability: record.availability.clone(),
    })
}

fn map_request(record: &RequestRecord) -> Result<ServiceRequest, MarketplaceValidationError> {
    ServiceRequest::new(ServiceRequestDraft {
        id: record.id.clone(),
        service_id: record.service_id.clone(),
        requester_id: record.requester_id.clone(),
        provider_id: record.provider_id.clone(),
        hours: record.hours,
        status: record.status.clone(),
        created_at: record.created_at.clone(),
        notes: record.notes.clone(),
    })
}

fn map_step(record: &StatusStepRecord) -> Result<StatusStep, MarketplaceValidationError> {
    StatusStep::new(StatusStepDraft {
        id: record.id.clone(),
        title: record.title.clone(),
        description: record.description.clone(),
    })
}

/// Build the domain snapshot from a loaded dataset.
pub fn snapshot_from_dataset(
    dataset: &DemoDataset,
) -> Result<MarketplaceSnapshot, MarketplaceValidationError> {
    let balances = dataset
        .balances()
        .iter()
        .map(|(user, credits)| Ok((UserId::new(user.as_str())?, *credits)))
        .collect::<Result<BTreeMap<_, _>, MarketplaceValidationError>>()?;

    MarketplaceSnapshot::new(MarketplaceSnapshotDraft {
        registration_bonus: dataset.registration_bonus(),
        users: dataset.users().iter().map(map_user).collect::<Result<_, _>>()?,
        services: dataset
            .services()
            .iter()
            .map(map_service)
            .collect::<Result<_, _>>()?,
        requests: dataset
            .requests()
            .iter()
            .map(map_request)
            .collect::<Result<_, _>>()?,
        balances,
        status_steps: dataset
            .status_steps()
            .iter()
            .map(map_step)
            .collect::<Result<_, _>>()?,
    })
}
