//! Read model assembly over the sample marketplace.

use rstest::{fixture, rstest};

use super::*;
use crate::domain::catalogue_filter::{RateFilter, TagFilter};
use crate::test_support::{sample_snapshot, user_id};

#[fixture]
fn snapshot() -> MarketplaceSnapshot {
    sample_snapshot()
}

fn request_id(id: &str) -> RequestId {
    RequestId::new(id).expect("valid request id")
}

#[rstest]
fn overview_numbers_steps_and_lists_every_member(snapshot: MarketplaceSnapshot) {
    let overview = Overview::from_snapshot(&snapshot);

    assert_eq!(overview.registration_bonus, 3);
    let numbers: Vec<usize> = overview.steps.iter().map(|s| s.number).collect();
    assert_eq!(numbers, [1, 2, 3]);
    let balances: Vec<(&str, Option<u32>)> = overview
        .balances
        .iter()
        .map(|entry| (entry.user.id().as_str(), entry.balance))
        .collect();
    assert_eq!(
        balances,
        [("ioana", Some(4)), ("andrei", Some(3)), ("maria", None)]
    );
    assert_eq!(overview.member_count, 3);
    assert_eq!(overview.offer_count, 3);
}

#[rstest]
fn listing_attaches_provider_names_and_catalogue_facets(snapshot: MarketplaceSnapshot) {
    let filter = ServiceFilter::new("", RateFilter::All, TagFilter::Only("design".to_owned()));
    let listing = OfferListing::search(&snapshot, &filter);

    assert_eq!(listing.total, 1);
    let card = listing.offers.first().expect("one card");
    assert_eq!(card.offer.id().as_str(), "svc-logo");
    assert_eq!(card.provider_name, "Ioana Ionescu");
    assert_eq!(listing.tags.len(), 3);
    assert_eq!(listing.rates.len(), 2);
}

#[rstest]
fn empty_listing_still_reports_facets(snapshot: MarketplaceSnapshot) {
    let filter = ServiceFilter::new("zzz", RateFilter::All, TagFilter::All);
    let listing = OfferListing::search(&snapshot, &filter);

    assert_eq!(listing.total, 0);
    assert!(listing.offers.is_empty());
    assert!(!listing.tags.is_empty());
}

#[rstest]
fn service_detail_links_provider_and_requests(snapshot: MarketplaceSnapshot) {
    let id = ServiceId::new("svc-guitar").expect("valid id");
    let detail = ServiceDetail::assemble(&snapshot, &id).expect("known service");

    assert_eq!(detail.provider.name(), "Andrei Popescu");
    assert_eq!(detail.request_ids, [request_id("req-1"), request_id("req-3")]);
}

#[rstest]
fn service_detail_misses_unknown_offer(snapshot: MarketplaceSnapshot) {
    let id = ServiceId::new("svc-piano").expect("valid id");
    assert!(ServiceDetail::assemble(&snapshot, &id).is_none());
}

#[rstest]
fn request_detail_multiplies_rate_by_hours(snapshot: MarketplaceSnapshot) {
    let detail = RequestDetail::assemble(&snapshot, &request_id("req-1")).expect("known request");

    assert_eq!(detail.service_title, "Guitar Lessons");
    assert_eq!(detail.requester_name, "Ioana Ionescu");
    assert_eq!(detail.provider_name, "Andrei Popescu");
    assert_eq!(detail.total_credits, 3);
    assert!(!detail.completed);
    let active: Vec<&str> = detail
        .timeline
        .iter()
        .filter(|entry| entry.is_active)
        .map(|entry| entry.step.id().as_str())
        .collect();
    assert_eq!(active, ["accepted"]);
}

#[rstest]
#[case("req-2", true, 3)]
#[case("req-3", false, 0)]
fn request_detail_reports_completion_and_progress(
    snapshot: MarketplaceSnapshot,
    #[case] id: &str,
    #[case] completed: bool,
    #[case] past_steps: usize,
) {
    let detail = RequestDetail::assemble(&snapshot, &request_id(id)).expect("known request");

    assert_eq!(detail.completed, completed);
    assert_eq!(
        detail.timeline.iter().filter(|entry| entry.is_past).count(),
        past_steps
    );
}

#[rstest]
fn profile_detail_collects_offers_and_activity(snapshot: MarketplaceSnapshot) {
    let detail = ProfileDetail::assemble(&snapshot, &user_id("ioana")).expect("known member");

    assert_eq!(detail.balance, Some(4));
    let offers: Vec<&str> = detail.offers.iter().map(|o| o.id().as_str()).collect();
    assert_eq!(offers, ["svc-logo"]);
    let activity: Vec<(&str, &str, ActivityRole)> = detail
        .activity
        .iter()
        .map(|entry| {
            (
                entry.request_id.as_str(),
                entry.service_title.as_str(),
                entry.role,
            )
        })
        .collect();
    assert_eq!(
        activity,
        [
            ("req-1", "Guitar Lessons", ActivityRole::Requester),
            ("req-2", "Logo Design", ActivityRole::Provider),
        ]
    );
}

#[rstest]
fn profile_detail_tolerates_missing_balance(snapshot: MarketplaceSnapshot) {
    let detail = ProfileDetail::assemble(&snapshot, &user_id("maria")).expect("known member");

    assert_eq!(detail.balance, None);
    assert!(detail.offers.is_empty());
    assert_eq!(detail.activity.len(), 2);
}

#[rstest]
fn profile_detail_misses_unknown_member(snapshot: MarketplaceSnapshot) {
    assert!(ProfileDetail::assemble(&snapshot, &user_id("nobody")).is_none());
}
