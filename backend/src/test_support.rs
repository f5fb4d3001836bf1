//! Test utilities for the backend crate.
//!
//! Builders for a small, fully linked marketplace used by unit tests across
//! the domain and HTTP layers. Only compiled when running tests.

use std::collections::BTreeMap;

use crate::domain::marketplace::{
    MarketplaceSnapshot, MarketplaceSnapshotDraft, ServiceOffer, ServiceOfferDraft,
    ServiceRequest, ServiceRequestDraft, StatusStep, StatusStepDraft, User, UserDraft, UserId,
};

pub(crate) fn user(id: &str, name: &str, skill: &str) -> User {
    User::new(UserDraft {
        id: id.to_owned(),
        name: name.to_owned(),
        handle: format!("@{id}"),
        city: "Cluj-Napoca".to_owned(),
        skill: skill.to_owned(),
        bio: format!("{name} trades time."),
        rating: 4.8,
        joined: "2025-09".to_owned(),
    })
    .expect("valid user")
}

pub(crate) fn offer(
    id: &str,
    provider: &str,
    title: &str,
    summary: &str,
    rate: u32,
    tags: &[&str],
) -> ServiceOffer {
    ServiceOffer::new(ServiceOfferDraft {
        id: id.to_owned(),
        provider_id: provider.to_owned(),
        title: title.to_owned(),
        summary: summary.to_owned(),
        rate,
        unit: "hour".to_owned(),
        tags: tags.iter().map(|tag| (*tag).to_owned()).collect(),
        availability: "Evenings".to_owned(),
    })
    .expect("valid offer")
}

pub(crate) fn request(
    id: &str,
    service: &str,
    requester: &str,
    provider: &str,
    hours: u32,
    status: &str,
) -> ServiceRequest {
    ServiceRequest::new(ServiceRequestDraft {
        id: id.to_owned(),
        service_id: service.to_owned(),
        requester_id: requester.to_owned(),
        provider_id: provider.to_owned(),
        hours,
        status: status.to_owned(),
        created_at: "2026-02-03".to_owned(),
        notes: None,
    })
    .expect("valid request")
}

pub(crate) fn step(id: &str, title: &str) -> StatusStep {
    StatusStep::new(StatusStepDraft {
        id: id.to_owned(),
        title: title.to_owned(),
        description: format!("{title}."),
    })
    .expect("valid status step")
}

pub(crate) fn lifecycle() -> Vec<StatusStep> {
    vec![
        step("requested", "Requested"),
        step("accepted", "Accepted"),
        step("completed", "Completed"),
    ]
}

pub(crate) fn user_id(id: &str) -> UserId {
    UserId::new(id).expect("valid user id")
}

/// Three members, three offers, and three requests.
///
/// `req-3` carries a status outside the lifecycle and `maria` has no
/// recorded balance.
pub(crate) fn sample_draft() -> MarketplaceSnapshotDraft {
    let mut balances = BTreeMap::new();
    balances.insert(user_id("ioana"), 4);
    balances.insert(user_id("andrei"), 3);

    MarketplaceSnapshotDraft {
        registration_bonus: 3,
        users: vec![
            user("ioana", "Ioana Ionescu", "Illustration"),
            user("andrei", "Andrei Popescu", "Guitar"),
            user("maria", "Maria Dumitrescu", "Web development"),
        ],
        services: vec![
            offer(
                "svc-guitar",
                "andrei",
                "Guitar Lessons",
                "Learn your first chords.",
                1,
                &["music", "beginner"],
            ),
            offer(
                "svc-logo",
                "ioana",
                "Logo Design",
                "Sketch a brand mark.",
                2,
                &["design"],
            ),
            offer(
                "svc-songwriting",
                "andrei",
                "Songwriting",
                "Write a chorus together.",
                2,
                &["music"],
            ),
        ],
        requests: vec![
            request("req-1", "svc-guitar", "ioana", "andrei", 3, "accepted"),
            request("req-2", "svc-logo", "maria", "ioana", 1, "completed"),
            request("req-3", "svc-guitar", "maria", "andrei", 1, "cancelled"),
        ],
        balances,
        status_steps: lifecycle(),
    }
}

pub(crate) fn sample_snapshot() -> MarketplaceSnapshot {
    MarketplaceSnapshot::new(sample_draft()).expect("sample snapshot is consistent")
}
