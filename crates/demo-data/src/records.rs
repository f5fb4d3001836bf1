//! Raw dataset record types.
//!
//! These mirror the JSON fixture one-to-one and are independent of backend
//! domain types. The backend converts them into validated entities at the
//! point of use.

use serde::{Deserialize, Serialize};

/// A community member as stored in the fixture.
///
/// # Example
///
/// ```
/// use demo_data::UserRecord;
///
/// let user: UserRecord = serde_json::from_str(r#"{
///     "id": "ioana",
///     "name": "Ioana Ionescu",
///     "handle": "@ioana",
///     "city": "Cluj-Napoca",
///     "skill": "Illustration",
///     "bio": "Draws things.",
///     "rating": 4.8,
///     "joined": "2025-09"
/// }"#).expect("valid user record");
///
/// assert_eq!(user.name, "Ioana Ionescu");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Slug identifier, unique among users.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Public handle.
    pub handle: String,
    /// Home city.
    pub city: String,
    /// Primary skill.
    pub skill: String,
    /// Short biography.
    pub bio: String,
    /// Community rating between 0 and 5.
    pub rating: f32,
    /// Human-readable join date.
    pub joined: String,
}

/// A service offer listed by a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    /// Slug identifier, unique among services.
    pub id: String,
    /// Identifier of the providing user.
    pub provider_id: String,
    /// Offer title.
    pub title: String,
    /// One-line summary.
    pub summary: String,
    /// Credits charged per unit.
    pub rate: u32,
    /// Unit the rate applies to, usually `hour`.
    pub unit: String,
    /// Focus tags.
    pub tags: Vec<String>,
    /// Free-text availability.
    pub availability: String,
}

/// A requester engaging a provider's offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestRecord {
    /// Slug identifier, unique among requests.
    pub id: String,
    /// Identifier of the requested service.
    pub service_id: String,
    /// Identifier of the requesting user.
    pub requester_id: String,
    /// Identifier of the providing user.
    pub provider_id: String,
    /// Number of units requested.
    pub hours: u32,
    /// Current lifecycle step identifier.
    pub status: String,
    /// Human-readable creation date.
    pub created_at: String,
    /// Optional note from the requester.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One stage of the request lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusStepRecord {
    /// Slug identifier, unique among steps.
    pub id: String,
    /// Short title.
    pub title: String,
    /// Longer description.
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_record_notes_default_to_none() {
        let json = r#"{
            "id": "req-1",
            "serviceId": "svc-guitar",
            "requesterId": "ioana",
            "providerId": "andrei",
            "hours": 1,
            "status": "requested",
            "createdAt": "2026-02-03"
        }"#;
        let record: RequestRecord = serde_json::from_str(json).expect("deserialize");
        assert!(record.notes.is_none());
    }

    #[test]
    fn service_record_serializes_to_camel_case() {
        let record = ServiceRecord {
            id: "svc-guitar".to_owned(),
            provider_id: "andrei".to_owned(),
            title: "Guitar lessons".to_owned(),
            summary: "Chords and strumming.".to_owned(),
            rate: 1,
            unit: "hour".to_owned(),
            tags: vec!["music".to_owned()],
            availability: "Evenings".to_owned(),
        };
        let json = serde_json::to_string(&record).expect("serialize");
        assert!(json.contains("providerId"));
        assert!(!json.contains("provider_id"));
    }
}
