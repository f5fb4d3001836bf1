//! Unit tests for marketplace entity construction and snapshot linking.

use rstest::{fixture, rstest};

use super::*;
use crate::test_support::{
    offer, request, sample_draft, sample_snapshot, step, user, user_id,
};

fn user_draft() -> UserDraft {
    UserDraft {
        id: "elena".to_owned(),
        name: "Elena Stan".to_owned(),
        handle: "@elena".to_owned(),
        city: "Cluj-Napoca".to_owned(),
        skill: "English".to_owned(),
        bio: "Tutor.".to_owned(),
        rating: 5.0,
        joined: "2026-02".to_owned(),
    }
}

fn offer_draft() -> ServiceOfferDraft {
    ServiceOfferDraft {
        id: "svc-conversation".to_owned(),
        provider_id: "elena".to_owned(),
        title: "Conversation practice".to_owned(),
        summary: "Speaking.".to_owned(),
        rate: 1,
        unit: "hour".to_owned(),
        tags: vec!["language".to_owned()],
        availability: "Lunch".to_owned(),
    }
}

#[fixture]
fn draft() -> MarketplaceSnapshotDraft {
    sample_draft()
}

#[rstest]
fn user_accepts_valid_draft() {
    let user = User::new(user_draft()).expect("valid user");
    assert_eq!(user.id().as_str(), "elena");
    assert_eq!(user.rating(), 5.0);
}

#[rstest]
#[case::uppercase_id(UserDraft { id: "Elena".to_owned(), ..user_draft() },
    MarketplaceValidationError::InvalidSlug { field: "user.id" })]
#[case::blank_name(UserDraft { name: "  ".to_owned(), ..user_draft() },
    MarketplaceValidationError::EmptyField { field: "user.name" })]
#[case::rating_above_scale(UserDraft { rating: 5.5, ..user_draft() },
    MarketplaceValidationError::InvalidRating { field: "user.rating", rating: 5.5 })]
fn user_rejects_invalid_drafts(
    #[case] draft: UserDraft,
    #[case] expected: MarketplaceValidationError,
) {
    assert_eq!(User::new(draft), Err(expected));
}

#[rstest]
fn user_rejects_nan_rating() {
    let result = User::new(UserDraft {
        rating: f32::NAN,
        ..user_draft()
    });
    assert!(matches!(
        result,
        Err(MarketplaceValidationError::InvalidRating { .. })
    ));
}

#[rstest]
#[case::zero_rate(ServiceOfferDraft { rate: 0, ..offer_draft() },
    MarketplaceValidationError::ZeroValue { field: "service.rate" })]
#[case::blank_tag(ServiceOfferDraft { tags: vec![" ".to_owned()], ..offer_draft() },
    MarketplaceValidationError::EmptyField { field: "service.tags" })]
#[case::bad_provider(ServiceOfferDraft { provider_id: "el ena".to_owned(), ..offer_draft() },
    MarketplaceValidationError::InvalidSlug { field: "user.id" })]
#[case::blank_title(ServiceOfferDraft { title: String::new(), ..offer_draft() },
    MarketplaceValidationError::EmptyField { field: "service.title" })]
fn offer_rejects_invalid_drafts(
    #[case] draft: ServiceOfferDraft,
    #[case] expected: MarketplaceValidationError,
) {
    assert_eq!(ServiceOffer::new(draft), Err(expected));
}

#[rstest]
fn offer_collapses_repeated_tags() {
    let offer = ServiceOffer::new(ServiceOfferDraft {
        tags: vec!["language".to_owned(), "beginner".to_owned(), "language".to_owned()],
        ..offer_draft()
    })
    .expect("valid offer");

    let tags: Vec<&str> = offer.tags().iter().map(Tag::as_str).collect();
    assert_eq!(tags, ["language", "beginner"]);
    assert!(offer.has_tag("beginner"));
    assert!(!offer.has_tag("Beginner"));
}

#[rstest]
fn request_rejects_zero_hours() {
    let result = ServiceRequest::new(ServiceRequestDraft {
        id: "req-9".to_owned(),
        service_id: "svc-guitar".to_owned(),
        requester_id: "ioana".to_owned(),
        provider_id: "andrei".to_owned(),
        hours: 0,
        status: "requested".to_owned(),
        created_at: "2026-02-03".to_owned(),
        notes: None,
    });
    assert_eq!(
        result,
        Err(MarketplaceValidationError::ZeroValue {
            field: "request.hours"
        })
    );
}

#[rstest]
fn request_keeps_unknown_status_verbatim() {
    let request = request("req-9", "svc-guitar", "ioana", "andrei", 1, "On Hold");
    assert_eq!(request.status(), "On Hold");
}

#[rstest]
fn snapshot_indexes_entities() {
    let snapshot = sample_snapshot();

    let andrei = user_id("andrei");
    assert_eq!(
        snapshot.user(&andrei).map(User::name),
        Some("Andrei Popescu")
    );
    assert_eq!(snapshot.balance(&andrei), Some(3));
    assert_eq!(snapshot.balance(&user_id("maria")), None);
    assert_eq!(snapshot.services_provided_by(&andrei).count(), 2);
    assert_eq!(snapshot.requests_involving(&user_id("maria")).count(), 2);
}

#[rstest]
fn snapshot_lookups_miss_for_unknown_ids() {
    let snapshot = sample_snapshot();
    let missing = ServiceId::new("svc-piano").expect("valid id");
    assert!(snapshot.service(&missing).is_none());
    assert!(snapshot.user(&user_id("nobody")).is_none());
}

#[rstest]
fn snapshot_rejects_empty_lifecycle(mut draft: MarketplaceSnapshotDraft) {
    draft.status_steps.clear();
    assert_eq!(
        MarketplaceSnapshot::new(draft),
        Err(MarketplaceValidationError::EmptyStatusSteps)
    );
}

#[rstest]
fn snapshot_rejects_duplicate_users(mut draft: MarketplaceSnapshotDraft) {
    draft.users.push(user("ioana", "Another Ioana", "Painting"));
    assert_eq!(
        MarketplaceSnapshot::new(draft),
        Err(MarketplaceValidationError::DuplicateId {
            field: "user.id",
            id: "ioana".to_owned(),
        })
    );
}

#[rstest]
fn snapshot_rejects_duplicate_steps(mut draft: MarketplaceSnapshotDraft) {
    draft.status_steps.push(step("accepted", "Accepted again"));
    assert!(matches!(
        MarketplaceSnapshot::new(draft),
        Err(MarketplaceValidationError::DuplicateId {
            field: "status_step.id",
            ..
        })
    ));
}

#[rstest]
fn snapshot_rejects_unknown_provider(mut draft: MarketplaceSnapshotDraft) {
    draft
        .services
        .push(offer("svc-piano", "nobody", "Piano", "Scales.", 1, &["music"]));
    assert_eq!(
        MarketplaceSnapshot::new(draft),
        Err(MarketplaceValidationError::DanglingReference {
            field: "service.providerId",
            id: "nobody".to_owned(),
        })
    );
}

#[rstest]
#[case::service(request("req-9", "svc-piano", "ioana", "andrei", 1, "requested"), "request.serviceId")]
#[case::requester(request("req-9", "svc-guitar", "nobody", "andrei", 1, "requested"), "request.requesterId")]
#[case::provider(request("req-9", "svc-guitar", "ioana", "nobody", 1, "requested"), "request.providerId")]
fn snapshot_rejects_dangling_request_references(
    mut draft: MarketplaceSnapshotDraft,
    #[case] dangling: ServiceRequest,
    #[case] field: &'static str,
) {
    draft.requests.push(dangling);
    assert!(matches!(
        MarketplaceSnapshot::new(draft),
        Err(MarketplaceValidationError::DanglingReference { field: actual, .. }) if actual == field
    ));
}

#[rstest]
fn snapshot_rejects_balance_for_unknown_member(mut draft: MarketplaceSnapshotDraft) {
    draft.balances.insert(user_id("ghost"), 1);
    assert!(matches!(
        MarketplaceSnapshot::new(draft),
        Err(MarketplaceValidationError::DanglingReference {
            field: "balances",
            ..
        })
    ));
}
