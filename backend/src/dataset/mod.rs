//! Startup wiring for the marketplace dataset.

mod config;
mod startup;

pub use config::DemoDataSettings;
pub use startup::{StartupLoadError, load_marketplace_on_startup};
