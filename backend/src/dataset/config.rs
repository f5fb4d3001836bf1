//! Dataset location loaded via OrthoConfig.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Fixture shipped with the crate.
pub(crate) fn bundled_dataset_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("demo-data")
        .join("timebank.json")
}

/// Configuration values controlling which fixture seeds the marketplace.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DEMO_DATA")]
pub struct DemoDataSettings {
    /// Fixture to load (`DEMO_DATA_PATH`).
    #[ortho_config(default = bundled_dataset_path())]
    pub path: PathBuf,
}

impl Default for DemoDataSettings {
    fn default() -> Self {
        Self {
            path: bundled_dataset_path(),
        }
    }
}
