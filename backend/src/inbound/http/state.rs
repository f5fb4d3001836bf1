//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::MarketplaceQuery;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub marketplace: Arc<dyn MarketplaceQuery>,
}

impl HttpState {
    /// Construct state from the marketplace port.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use timebank_backend::domain::MarketplaceService;
    /// use timebank_backend::domain::marketplace::{
    ///     MarketplaceSnapshot, MarketplaceSnapshotDraft, StatusStep, StatusStepDraft,
    /// };
    /// use timebank_backend::inbound::http::state::HttpState;
    ///
    /// let step = StatusStep::new(StatusStepDraft {
    ///     id: "requested".to_owned(),
    ///     title: "Requested".to_owned(),
    ///     description: "Sent.".to_owned(),
    /// })
    /// .expect("valid step");
    /// let snapshot = MarketplaceSnapshot::new(MarketplaceSnapshotDraft {
    ///     status_steps: vec![step],
    ///     ..MarketplaceSnapshotDraft::default()
    /// })
    /// .expect("valid snapshot");
    /// let state = HttpState::new(Arc::new(MarketplaceService::new(Arc::new(snapshot))));
    /// let _marketplace = state.marketplace.clone();
    /// ```
    pub fn new(marketplace: Arc<dyn MarketplaceQuery>) -> Self {
        Self { marketplace }
    }
}
