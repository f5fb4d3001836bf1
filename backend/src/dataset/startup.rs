//! Startup loading orchestration.

use std::path::PathBuf;
use std::sync::Arc;

use camino::Utf8PathBuf;
use demo_data::{DatasetError, DemoDataset};
use thiserror::Error;
use tracing::info;

use crate::dataset::config::DemoDataSettings;
use crate::domain::marketplace::{MarketplaceSnapshot, MarketplaceValidationError};
use crate::outbound::demo_dataset::snapshot_from_dataset;

/// Errors returned while loading the marketplace at startup.
#[derive(Debug, Error)]
pub enum StartupLoadError {
    /// The configured path is not valid UTF-8.
    #[error("dataset path is not valid UTF-8: {}", path.display())]
    NonUtf8Path {
        /// Offending path.
        path: PathBuf,
    },
    /// The fixture could not be read or failed structural validation.
    #[error("dataset load error: {0}")]
    Dataset(#[from] DatasetError),
    /// The fixture parsed but breaks a domain invariant.
    #[error("dataset violates marketplace rules: {0}")]
    Domain(#[from] MarketplaceValidationError),
}

/// Load and validate the marketplace snapshot named by `settings`.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::PathBuf;
///
/// use timebank_backend::dataset::{DemoDataSettings, load_marketplace_on_startup};
///
/// # fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = DemoDataSettings {
///     path: PathBuf::from("backend/fixtures/demo-data/timebank.json"),
/// };
/// let snapshot = load_marketplace_on_startup(&settings)?;
/// assert!(!snapshot.status_steps().is_empty());
/// # Ok(())
/// # }
/// ```
pub fn load_marketplace_on_startup(
    settings: &DemoDataSettings,
) -> Result<Arc<MarketplaceSnapshot>, StartupLoadError> {
    let path = Utf8PathBuf::from_path_buf(settings.path.clone())
        .map_err(|path| StartupLoadError::NonUtf8Path { path })?;

    let dataset = DemoDataset::from_file(&path)?;
    let snapshot = snapshot_from_dataset(&dataset)?;

    info!(
        path = %path,
        version = dataset.version(),
        member_count = snapshot.users().len(),
        offer_count = snapshot.services().len(),
        request_count = snapshot.requests().len(),
        "marketplace dataset loaded"
    );

    Ok(Arc::new(snapshot))
}
