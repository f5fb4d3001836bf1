//! Static demo dataset for the TimeBank marketplace.
//!
//! This crate loads the fixture that seeds the demo: members, the service
//! offers they list, requests between them, a credit balance snapshot, and
//! the ordered request lifecycle. It is independent of backend domain types
//! to avoid circular dependencies.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Loading the dataset from a JSON file or string
//! - Rejecting malformed identifiers and duplicates
//! - Resolving every foreign key before the data is handed out
//!
//! # Example
//!
//! ```
//! use demo_data::DemoDataset;
//!
//! let json = r#"{
//!     "version": 1,
//!     "users": [],
//!     "services": [],
//!     "requests": [],
//!     "statusSteps": [{"id": "requested", "title": "Requested", "description": "Sent."}]
//! }"#;
//!
//! let dataset = DemoDataset::from_json(json).expect("valid dataset");
//! assert_eq!(dataset.status_steps().len(), 1);
//! assert!(dataset.balances().is_empty());
//! ```

mod dataset;
mod error;
mod records;
mod validation;

pub use dataset::{DEFAULT_REGISTRATION_BONUS, DemoDataset};
pub use error::{Collection, DatasetError};
pub use records::{RequestRecord, ServiceRecord, StatusStepRecord, UserRecord};
pub use validation::{RATING_MAX, is_valid_record_id};
