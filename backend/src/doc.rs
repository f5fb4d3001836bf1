//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: every HTTP endpoint from the inbound layer (marketplace,
//!   banner, health)
//! - **Schemas**: the response DTOs plus domain error wrappers
//!   ([`ErrorSchema`], [`ErrorCodeSchema`]) that provide OpenAPI definitions
//!   without coupling domain types to utoipa
//!
//! The generated specification is served by Swagger UI in debug builds.

use crate::inbound::http::marketplace_dto::{
    ActivityEntryResponse, ActivityRoleResponse, MemberBalanceResponse, NumberedStepResponse,
    OfferCardResponse, OfferListingResponse, OfferResponse, OverviewResponse,
    ProfileDetailResponse, ProfileResponse, ProfileSummaryResponse, ProviderSummaryResponse,
    RequestDetailResponse, ServiceDetailResponse, TimelineEntryResponse,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "TimeBank demo API",
        description = "Read-only access to a time-banking marketplace: offers, requests, members, and balances."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::marketplace::get_overview,
        crate::inbound::http::marketplace::search_services,
        crate::inbound::http::marketplace::get_service,
        crate::inbound::http::marketplace::get_request,
        crate::inbound::http::marketplace::list_profiles,
        crate::inbound::http::marketplace::get_profile,
        crate::inbound::http::root::index,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        OverviewResponse,
        NumberedStepResponse,
        MemberBalanceResponse,
        OfferResponse,
        OfferCardResponse,
        OfferListingResponse,
        ProviderSummaryResponse,
        ServiceDetailResponse,
        TimelineEntryResponse,
        RequestDetailResponse,
        ProfileSummaryResponse,
        ProfileResponse,
        ActivityRoleResponse,
        ActivityEntryResponse,
        ProfileDetailResponse,
    )),
    tags(
        (name = "marketplace", description = "Offers, requests, and member profiles"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated OpenAPI document.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    fn openapi_error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "message");
        assert_object_schema_has_field(error_schema, "traceId");
    }

    #[rstest]
    #[case("/api/v1/overview")]
    #[case("/api/v1/services")]
    #[case("/api/v1/services/{id}")]
    #[case("/api/v1/requests/{id}")]
    #[case("/api/v1/profiles")]
    #[case("/api/v1/profiles/{id}")]
    #[case("/health/ready")]
    #[case("/")]
    fn openapi_documents_every_route(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[rstest]
    fn openapi_registers_response_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        for name in ["OfferListingResponse", "RequestDetailResponse", "ProfileDetailResponse"] {
            assert!(schemas.contains_key(name), "missing schema {name}");
        }
    }
}
