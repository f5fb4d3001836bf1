//! Error types for the demo-data crate.
//!
//! Every way a fixture can fail to load maps to one variant so callers can
//! report the exact record at fault.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Named record collection inside the dataset, used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    /// The `users` array.
    Users,
    /// The `services` array.
    Services,
    /// The `requests` array.
    Requests,
    /// The `statusSteps` array.
    StatusSteps,
    /// The `balances` object.
    Balances,
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Users => "users",
            Self::Services => "services",
            Self::Requests => "requests",
            Self::StatusSteps => "statusSteps",
            Self::Balances => "balances",
        };
        f.write_str(name)
    }
}

/// Errors raised while reading or validating a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("failed to read dataset file at '{path}': {message}")]
    IoError {
        /// Path to the dataset file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The dataset JSON is malformed or missing required fields.
    #[error("invalid dataset JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The dataset version is not supported.
    #[error("unsupported dataset version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the dataset.
        actual: u32,
    },

    /// A record identifier is not a valid slug.
    #[error("invalid {collection} identifier at index {index}: '{value}'")]
    InvalidId {
        /// Collection holding the record.
        collection: Collection,
        /// Index of the record.
        index: usize,
        /// The rejected identifier.
        value: String,
    },

    /// A key of the balances map is not a valid member slug.
    #[error("invalid balances key '{key}'")]
    InvalidBalanceKey {
        /// The rejected key.
        key: String,
    },

    /// Two records in one collection share an identifier.
    #[error("duplicate {collection} identifier '{id}'")]
    DuplicateId {
        /// Collection holding the records.
        collection: Collection,
        /// The repeated identifier.
        id: String,
    },

    /// A foreign key does not resolve within the dataset.
    #[error("{collection} record '{id}' references unknown {target} '{value}' via {field}")]
    DanglingReference {
        /// Collection holding the referencing record.
        collection: Collection,
        /// Identifier of the referencing record.
        id: String,
        /// Name of the referencing field.
        field: &'static str,
        /// Collection the field points into.
        target: Collection,
        /// The unresolved identifier.
        value: String,
    },

    /// A service offer charges zero credits.
    #[error("service '{id}' must charge at least one credit")]
    ZeroRate {
        /// Identifier of the service.
        id: String,
    },

    /// A request asks for zero hours.
    #[error("request '{id}' must cover at least one hour")]
    ZeroHours {
        /// Identifier of the request.
        id: String,
    },

    /// A member rating lies outside the accepted range.
    #[error("user '{id}' has a rating outside 0..=5")]
    InvalidRating {
        /// Identifier of the user.
        id: String,
    },

    /// The dataset defines no lifecycle steps.
    #[error("dataset contains no status steps")]
    EmptyStatusSteps,
}
