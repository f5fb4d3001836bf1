//! Marketplace read endpoints.
//!
//! ```text
//! GET /api/v1/overview
//! GET /api/v1/services?q=guitar&rate=1&tag=music
//! GET /api/v1/services/{id}
//! GET /api/v1/requests/{id}
//! GET /api/v1/profiles
//! GET /api/v1/profiles/{id}
//! ```

use actix_web::{HttpResponse, get, web};
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;

use crate::domain::Error;
use crate::domain::catalogue_filter::ServiceFilter;
use crate::domain::marketplace::{MarketplaceValidationError, RequestId, ServiceId, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::marketplace_dto::{
    OfferListingResponse, OverviewResponse, ProfileDetailResponse, ProfileSummaryResponse,
    RequestDetailResponse, ServiceDetailResponse,
};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Query string accepted by [`search_services`].
///
/// Absent values, empty values, and `all` place no constraint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OfferSearchQuery {
    /// Case-insensitive text matched against title, summary, and provider name.
    #[param(example = "guitar")]
    pub q: Option<String>,
    /// `all` or an exact credit rate.
    #[param(example = "1")]
    pub rate: Option<String>,
    /// `all` or an exact tag.
    #[param(example = "music")]
    pub tag: Option<String>,
}

/// Malformed identifiers cannot name anything, so they read as not found.
fn parse_path_id<T>(
    raw: &str,
    kind: &str,
    parse: impl FnOnce(&str) -> Result<T, MarketplaceValidationError>,
) -> Result<T, Error> {
    parse(raw).map_err(|_| {
        Error::not_found(format!("{kind} not found")).with_details(json!({
            "id": raw,
            "code": format!("{kind}_not_found"),
        }))
    })
}

/// Registration bonus, lifecycle, and every member's balance.
#[utoipa::path(
    get,
    path = "/api/v1/overview",
    responses(
        (status = 200, description = "Marketplace overview", body = OverviewResponse),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["marketplace"],
    operation_id = "getOverview"
)]
#[get("/overview")]
pub async fn get_overview(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let overview = state.marketplace.overview().await?;
    Ok(HttpResponse::Ok().json(OverviewResponse::from(overview)))
}

/// Search the offer catalogue.
#[utoipa::path(
    get,
    path = "/api/v1/services",
    params(OfferSearchQuery),
    responses(
        (status = 200, description = "Matching offers and facets", body = OfferListingResponse),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["marketplace"],
    operation_id = "searchServices"
)]
#[get("/services")]
pub async fn search_services(
    state: web::Data<HttpState>,
    query: web::Query<OfferSearchQuery>,
) -> ApiResult<HttpResponse> {
    let OfferSearchQuery { q, rate, tag } = query.into_inner();
    let filter = ServiceFilter::parse(q.as_deref(), rate.as_deref(), tag.as_deref());
    let listing = state.marketplace.search_offers(&filter).await?;
    Ok(HttpResponse::Ok().json(OfferListingResponse::from(listing)))
}

/// Fetch one offer with its provider and requests.
#[utoipa::path(
    get,
    path = "/api/v1/services/{id}",
    params(("id" = String, Path, description = "Service identifier", example = "svc-guitar")),
    responses(
        (status = 200, description = "Service detail", body = ServiceDetailResponse),
        (status = 404, description = "Unknown service", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["marketplace"],
    operation_id = "getService"
)]
#[get("/services/{id}")]
pub async fn get_service(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_path_id(&path, "service", |raw| ServiceId::new(raw))?;
    let detail = state.marketplace.service_detail(&id).await?;
    Ok(HttpResponse::Ok().json(ServiceDetailResponse::from(detail)))
}

/// Fetch one request with its timeline.
#[utoipa::path(
    get,
    path = "/api/v1/requests/{id}",
    params(("id" = String, Path, description = "Request identifier", example = "req-1")),
    responses(
        (status = 200, description = "Request detail", body = RequestDetailResponse),
        (status = 404, description = "Unknown request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["marketplace"],
    operation_id = "getRequest"
)]
#[get("/requests/{id}")]
pub async fn get_request(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_path_id(&path, "request", |raw| RequestId::new(raw))?;
    let detail = state.marketplace.request_detail(&id).await?;
    Ok(HttpResponse::Ok().json(RequestDetailResponse::from(detail)))
}

/// List every member.
#[utoipa::path(
    get,
    path = "/api/v1/profiles",
    responses(
        (status = 200, description = "Members in listing order", body = [ProfileSummaryResponse]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["marketplace"],
    operation_id = "listProfiles"
)]
#[get("/profiles")]
pub async fn list_profiles(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let users = state.marketplace.list_profiles().await?;
    let body: Vec<ProfileSummaryResponse> = users.iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// Fetch one member's profile.
#[utoipa::path(
    get,
    path = "/api/v1/profiles/{id}",
    params(("id" = String, Path, description = "Member identifier", example = "maria")),
    responses(
        (status = 200, description = "Profile detail", body = ProfileDetailResponse),
        (status = 404, description = "Unknown member", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["marketplace"],
    operation_id = "getProfile"
)]
#[get("/profiles/{id}")]
pub async fn get_profile(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_path_id(&path, "profile", |raw| UserId::new(raw))?;
    let detail = state.marketplace.profile_detail(&id).await?;
    Ok(HttpResponse::Ok().json(ProfileDetailResponse::from(detail)))
}

#[cfg(test)]
#[path = "marketplace_tests.rs"]
mod tests;
