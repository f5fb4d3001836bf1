//! HTTP server configuration object and helpers.

use std::sync::Arc;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use timebank_backend::domain::marketplace::MarketplaceSnapshot;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Listener settings loaded via OrthoConfig (`TIMEBANK_HOST`, `TIMEBANK_PORT`).
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TIMEBANK")]
pub struct ServerSettings {
    /// Interface to bind.
    #[ortho_config(default = DEFAULT_HOST.to_owned())]
    pub host: String,
    /// TCP port to bind.
    #[ortho_config(default = DEFAULT_PORT)]
    pub port: u16,
}

impl ServerSettings {
    /// Return the address the server should listen on.
    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

/// Everything [`super::create_server`] needs to start listening.
pub struct ServerConfig {
    pub(crate) bind_addr: (String, u16),
    pub(crate) snapshot: Arc<MarketplaceSnapshot>,
}

impl ServerConfig {
    /// Bundle the listener address with the loaded marketplace.
    #[must_use]
    pub fn new(bind_addr: (String, u16), snapshot: Arc<MarketplaceSnapshot>) -> Self {
        Self {
            bind_addr,
            snapshot,
        }
    }
}
