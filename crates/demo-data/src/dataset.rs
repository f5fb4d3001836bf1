//! Dataset document parsing and validation.
//!
//! The dataset is loaded from JSON once, checked for structural soundness
//! (version, identifier syntax, uniqueness, foreign keys), and then exposed
//! read-only.

use std::collections::{BTreeMap, HashSet};

use camino::Utf8Path;
use cap_std::{ambient_authority, fs::Dir};
use serde::Deserialize;

use crate::error::{Collection, DatasetError};
use crate::records::{RequestRecord, ServiceRecord, StatusStepRecord, UserRecord};
use crate::validation::{is_valid_rating, is_valid_record_id};

/// Current supported dataset version.
const SUPPORTED_VERSION: u32 = 1;

/// Credits granted on registration when the fixture does not say otherwise.
pub const DEFAULT_REGISTRATION_BONUS: u32 = 3;

/// A validated TimeBank demo dataset.
///
/// # Example
///
/// ```
/// use demo_data::DemoDataset;
///
/// let json = r#"{
///     "version": 1,
///     "users": [{"id": "andrei", "name": "Andrei Pop", "handle": "@andrei",
///                "city": "Cluj-Napoca", "skill": "Guitar", "bio": "Plays.",
///                "rating": 4.9, "joined": "2025-10"}],
///     "services": [{"id": "svc-guitar", "providerId": "andrei", "title": "Guitar lessons",
///                   "summary": "Chords.", "rate": 1, "unit": "hour",
///                   "tags": ["music"], "availability": "Evenings"}],
///     "requests": [],
///     "balances": {"andrei": 3},
///     "statusSteps": [{"id": "requested", "title": "Requested", "description": "Sent."}]
/// }"#;
///
/// let dataset = DemoDataset::from_json(json).expect("valid dataset");
/// assert_eq!(dataset.services().len(), 1);
/// assert_eq!(dataset.registration_bonus(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DemoDataset {
    version: u32,
    registration_bonus: u32,
    users: Vec<UserRecord>,
    services: Vec<ServiceRecord>,
    requests: Vec<RequestRecord>,
    balances: BTreeMap<String, u32>,
    status_steps: Vec<StatusStepRecord>,
}

impl DemoDataset {
    /// Parses and validates a dataset from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if:
    /// - The JSON is malformed or misses required fields
    /// - The version is unsupported
    /// - Any identifier is malformed or repeated
    /// - A foreign key does not resolve
    /// - A rate, hour count, or rating is out of range
    /// - The status step list is empty
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let raw: RawDataset = serde_json::from_str(json).map_err(|e| DatasetError::ParseError {
            message: e.to_string(),
        })?;

        Self::from_raw(raw)
    }

    /// Loads a dataset from a JSON file.
    ///
    /// The file is read through a capability handle on its parent directory.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::IoError`] if the file cannot be read, or any
    /// error from [`DemoDataset::from_json`].
    pub fn from_file(path: &Utf8Path) -> Result<Self, DatasetError> {
        let io_error = |message: String| DatasetError::IoError {
            path: path.to_path_buf(),
            message,
        };
        let file_name = path
            .file_name()
            .ok_or_else(|| io_error("dataset path must be a file".to_owned()))?;
        let parent = path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let dir = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(|e| io_error(e.to_string()))?;
        let contents = dir
            .read_to_string(file_name)
            .map_err(|e| io_error(e.to_string()))?;

        Self::from_json(&contents)
    }

    fn from_raw(raw: RawDataset) -> Result<Self, DatasetError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(DatasetError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        let user_ids = unique_ids(Collection::Users, raw.users.iter().map(|u| u.id.as_str()))?;
        let service_ids = unique_ids(
            Collection::Services,
            raw.services.iter().map(|s| s.id.as_str()),
        )?;
        unique_ids(
            Collection::Requests,
            raw.requests.iter().map(|r| r.id.as_str()),
        )?;
        unique_ids(
            Collection::StatusSteps,
            raw.status_steps.iter().map(|s| s.id.as_str()),
        )?;

        if raw.status_steps.is_empty() {
            return Err(DatasetError::EmptyStatusSteps);
        }

        if let Some(user) = raw.users.iter().find(|u| !is_valid_rating(u.rating)) {
            return Err(DatasetError::InvalidRating {
                id: user.id.clone(),
            });
        }

        for service in &raw.services {
            if service.rate == 0 {
                return Err(DatasetError::ZeroRate {
                    id: service.id.clone(),
                });
            }
            ensure_reference(
                &user_ids,
                Reference {
                    collection: Collection::Services,
                    id: &service.id,
                    field: "providerId",
                    target: Collection::Users,
                    value: &service.provider_id,
                },
            )?;
        }

        for request in &raw.requests {
            if request.hours == 0 {
                return Err(DatasetError::ZeroHours {
                    id: request.id.clone(),
                });
            }
            let references = [
                ("serviceId", Collection::Services, &request.service_id),
                ("requesterId", Collection::Users, &request.requester_id),
                ("providerId", Collection::Users, &request.provider_id),
            ];
            for (field, target, value) in references {
                let known = match target {
                    Collection::Services => &service_ids,
                    _ => &user_ids,
                };
                ensure_reference(
                    known,
                    Reference {
                        collection: Collection::Requests,
                        id: &request.id,
                        field,
                        target,
                        value,
                    },
                )?;
            }
        }

        for user_id in raw.balances.keys() {
            if !is_valid_record_id(user_id) {
                return Err(DatasetError::InvalidBalanceKey {
                    key: user_id.clone(),
                });
            }
            ensure_reference(
                &user_ids,
                Reference {
                    collection: Collection::Balances,
                    id: user_id,
                    field: "key",
                    target: Collection::Users,
                    value: user_id,
                },
            )?;
        }

        Ok(Self {
            version: raw.version,
            registration_bonus: raw.registration_bonus,
            users: raw.users,
            services: raw.services,
            requests: raw.requests,
            balances: raw.balances,
            status_steps: raw.status_steps,
        })
    }

    /// Returns the dataset version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns the credits granted to a newly registered member.
    #[must_use]
    pub const fn registration_bonus(&self) -> u32 {
        self.registration_bonus
    }

    /// Returns the members in fixture order.
    #[must_use]
    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    /// Returns the service offers in fixture order.
    #[must_use]
    pub fn services(&self) -> &[ServiceRecord] {
        &self.services
    }

    /// Returns the requests in fixture order.
    #[must_use]
    pub fn requests(&self) -> &[RequestRecord] {
        &self.requests
    }

    /// Returns the credit balance snapshot keyed by user identifier.
    #[must_use]
    pub const fn balances(&self) -> &BTreeMap<String, u32> {
        &self.balances
    }

    /// Returns the lifecycle steps in order.
    #[must_use]
    pub fn status_steps(&self) -> &[StatusStepRecord] {
        &self.status_steps
    }
}

/// Collects identifiers into a set, rejecting malformed or repeated ones.
fn unique_ids<'a>(
    collection: Collection,
    ids: impl Iterator<Item = &'a str>,
) -> Result<HashSet<&'a str>, DatasetError> {
    let mut seen = HashSet::new();
    for (index, id) in ids.enumerate() {
        if !is_valid_record_id(id) {
            return Err(DatasetError::InvalidId {
                collection,
                index,
                value: id.to_owned(),
            });
        }
        if !seen.insert(id) {
            return Err(DatasetError::DuplicateId {
                collection,
                id: id.to_owned(),
            });
        }
    }
    Ok(seen)
}

/// A single foreign key to resolve.
struct Reference<'a> {
    collection: Collection,
    id: &'a str,
    field: &'static str,
    target: Collection,
    value: &'a str,
}

fn ensure_reference(known: &HashSet<&str>, reference: Reference<'_>) -> Result<(), DatasetError> {
    if known.contains(reference.value) {
        return Ok(());
    }
    Err(DatasetError::DanglingReference {
        collection: reference.collection,
        id: reference.id.to_owned(),
        field: reference.field,
        target: reference.target,
        value: reference.value.to_owned(),
    })
}

const fn default_registration_bonus() -> u32 {
    DEFAULT_REGISTRATION_BONUS
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDataset {
    version: u32,
    #[serde(default = "default_registration_bonus")]
    registration_bonus: u32,
    users: Vec<UserRecord>,
    services: Vec<ServiceRecord>,
    requests: Vec<RequestRecord>,
    #[serde(default)]
    balances: BTreeMap<String, u32>,
    status_steps: Vec<StatusStepRecord>,
}
