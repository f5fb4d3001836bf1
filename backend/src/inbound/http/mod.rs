//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod marketplace;
pub mod marketplace_dto;
pub mod root;
pub mod schemas;
pub mod state;

pub use error::ApiResult;
