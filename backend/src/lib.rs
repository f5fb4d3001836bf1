//! TimeBank demo marketplace backend.
//!
//! Serves a read-only view of a static time-banking dataset: members, the
//! services they offer, requests between them, and credit balances. The
//! dataset is validated once at startup and shared immutably with every
//! request handler.

pub mod dataset;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(test)]
mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
