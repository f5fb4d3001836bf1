//! Plain-text banner served at the site root.
//!
//! ```text
//! GET /
//! ```

use actix_web::{HttpResponse, get, http::header::ContentType};

/// Banner returned by [`index`].
pub const BANNER: &str = "TimeBank API is running";

/// Confirm the API is up.
#[utoipa::path(
    get,
    path = "/",
    tags = ["health"],
    responses((status = 200, description = "API banner", body = String, content_type = "text/plain"))
)]
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(BANNER)
}
