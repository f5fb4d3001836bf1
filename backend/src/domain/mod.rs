//! Domain primitives, aggregates, and services.
//!
//! Purpose: hold the marketplace model and the pure logic that reads it:
//! catalogue filtering, lifecycle progress, and the read models served to
//! clients.
//!
//! Public surface:
//! - Error (alias to `error::Error`) and `ErrorCode` for transport-agnostic
//!   failures.
//! - `TraceId` for request correlation.
//! - `marketplace` entities and the validated `MarketplaceSnapshot`.
//! - `catalogue_filter`, `timeline`, and `views` over that snapshot.
//! - `MarketplaceService`, the domain implementation of
//!   `ports::MarketplaceQuery`.

pub mod catalogue_filter;
pub mod error;
pub mod marketplace;
pub mod marketplace_service;
pub mod ports;
mod slug;
pub mod timeline;
pub mod trace_id;
pub mod views;

pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::marketplace_service::MarketplaceService;
pub use self::trace_id::TraceId;
