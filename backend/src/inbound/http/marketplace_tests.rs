//! Tests for marketplace HTTP handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::App;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::Value;

use super::*;
use crate::domain::catalogue_filter::TagFilter;
use crate::domain::ports::{MarketplaceQuery, MockMarketplaceQuery};
use crate::domain::views::OfferListing;
use crate::domain::{ErrorCode, MarketplaceService};
use crate::test_support::sample_snapshot;

fn sample_state() -> HttpState {
    HttpState::new(Arc::new(MarketplaceService::new(Arc::new(sample_snapshot()))))
}

async fn get_json(marketplace: Arc<dyn MarketplaceQuery>, uri: &str) -> (StatusCode, Value) {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(HttpState::new(marketplace)))
            .service(
                web::scope("/api/v1")
                    .service(get_overview)
                    .service(search_services)
                    .service(get_service)
                    .service(get_request)
                    .service(list_profiles)
                    .service(get_profile),
            ),
    )
    .await;
    let response = actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await;
    let status = response.status();
    let body: Value = actix_test::read_body_json(response).await;
    (status, body)
}

async fn get_sample(uri: &str) -> (StatusCode, Value) {
    get_json(sample_state().marketplace, uri).await
}

#[rstest]
fn malformed_path_id_maps_to_not_found() {
    let err = parse_path_id("Svc Guitar", "service", |raw| ServiceId::new(raw))
        .expect_err("id is malformed");

    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(
        err.details()
            .and_then(|details| details.get("code"))
            .and_then(Value::as_str),
        Some("service_not_found")
    );
}

#[rstest]
#[actix_web::test]
async fn overview_lists_steps_and_balances() {
    let (status, body) = get_sample("/api/v1/overview").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["registrationBonus"], 3);
    assert_eq!(body["steps"][1]["number"], 2);
    assert_eq!(body["steps"][1]["id"], "accepted");
    assert_eq!(body["balances"][2]["userId"], "maria");
    assert!(body["balances"][2]["balance"].is_null());
    assert_eq!(body["memberCount"], 3);
}

#[rstest]
#[actix_web::test]
async fn search_filters_and_reports_facets() {
    let (status, body) = get_sample("/api/v1/services?q=andrei&rate=2&tag=music").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["offers"][0]["id"], "svc-songwriting");
    assert_eq!(body["offers"][0]["providerName"], "Andrei Popescu");
    assert_eq!(body["tags"], serde_json::json!(["music", "beginner", "design"]));
    assert_eq!(body["rates"], serde_json::json!([1, 2]));
}

#[rstest]
#[actix_web::test]
async fn search_without_parameters_returns_everything() {
    let (status, body) = get_sample("/api/v1/services?rate=all&tag=all").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
}

#[rstest]
#[case("lots")]
#[case("0")]
#[case("ALL")]
#[case("02")]
#[actix_web::test]
async fn search_with_unmatched_rate_is_empty(#[case] raw_rate: &str) {
    let (status, body) = get_sample(&format!("/api/v1/services?rate={raw_rate}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
    assert_eq!(body["offers"], serde_json::json!([]));
    assert_eq!(body["rates"], serde_json::json!([1, 2]));
}

#[rstest]
#[actix_web::test]
async fn search_passes_parsed_filter_to_port() {
    let mut mock = MockMarketplaceQuery::new();
    mock.expect_search_offers()
        .withf(|filter| filter.query() == "guitar" && filter.tag() == &TagFilter::All)
        .times(1)
        .returning(|_| {
            Ok(OfferListing {
                offers: Vec::new(),
                total: 0,
                tags: Vec::new(),
                rates: Vec::new(),
            })
        });

    let (status, body) = get_json(Arc::new(mock), "/api/v1/services?q=%20Guitar%20").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
}

#[rstest]
#[actix_web::test]
async fn service_detail_includes_provider_and_requests() {
    let (status, body) = get_sample("/api/v1/services/svc-guitar").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["offer"]["title"], "Guitar Lessons");
    assert_eq!(body["provider"]["skill"], "Guitar");
    assert_eq!(body["requestIds"], serde_json::json!(["req-1", "req-3"]));
}

#[rstest]
#[actix_web::test]
async fn request_detail_includes_timeline() {
    let (status, body) = get_sample("/api/v1/requests/req-1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalCredits"], 3);
    assert_eq!(body["completed"], false);
    assert_eq!(body["requesterName"], "Ioana Ionescu");
    assert_eq!(body["timeline"][1]["isActive"], true);
    assert_eq!(body["timeline"][2]["isPast"], false);
    assert!(body.get("notes").is_none());
}

#[rstest]
#[actix_web::test]
async fn profiles_are_listed_in_order() {
    let (status, body) = get_sample("/api/v1/profiles").await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body
        .as_array()
        .expect("array body")
        .iter()
        .filter_map(|profile| profile["id"].as_str())
        .collect();
    assert_eq!(ids, ["ioana", "andrei", "maria"]);
}

#[rstest]
#[actix_web::test]
async fn profile_detail_includes_activity() {
    let (status, body) = get_sample("/api/v1/profiles/ioana").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profile"]["name"], "Ioana Ionescu");
    assert_eq!(body["balance"], 4);
    assert_eq!(body["offers"][0]["id"], "svc-logo");
    assert_eq!(body["activity"][0]["role"], "requester");
    assert_eq!(body["activity"][1]["role"], "provider");
}

#[rstest]
#[case("/api/v1/services/svc-piano")]
#[case("/api/v1/services/SVC-GUITAR")]
#[case("/api/v1/requests/req-404")]
#[case("/api/v1/profiles/nobody")]
#[case("/api/v1/profiles/Ioana")]
#[actix_web::test]
async fn unknown_or_malformed_ids_are_not_found(#[case] uri: &str) {
    let (status, body) = get_sample(uri).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
}

#[rstest]
#[actix_web::test]
async fn internal_port_failures_are_redacted() {
    let mut mock = MockMarketplaceQuery::new();
    mock.expect_overview()
        .returning(|| Err(Error::internal("snapshot poisoned")));

    let (status, body) = get_json(Arc::new(mock), "/api/v1/overview").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "internal_error");
    assert_eq!(body["message"], "Internal server error");
}
