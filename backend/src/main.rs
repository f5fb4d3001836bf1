//! Backend entry-point: loads the demo marketplace, then serves the REST API
//! and OpenAPI docs.

mod server;

use std::ffi::OsString;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, ServerSettings, create_server};
use timebank_backend::dataset::{DemoDataSettings, load_marketplace_on_startup};
use timebank_backend::inbound::http::health::HealthState;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    // Settings come from the environment and config files only; command-line
    // flags are not part of the surface.
    let args = [OsString::from("timebank-backend")];
    let dataset_settings = DemoDataSettings::load_from_iter(args.clone())
        .map_err(|e| std::io::Error::other(format!("dataset settings: {e}")))?;
    let server_settings = ServerSettings::load_from_iter(args)
        .map_err(|e| std::io::Error::other(format!("server settings: {e}")))?;

    let snapshot = load_marketplace_on_startup(&dataset_settings).map_err(|e| {
        error!(error = %e, "failed to load marketplace dataset");
        std::io::Error::other(e)
    })?;

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(server_settings.bind_addr(), snapshot);
    create_server(health_state, config)?.await
}
