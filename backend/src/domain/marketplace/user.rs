//! Marketplace member entity.

use serde::{Deserialize, Serialize};

use super::MarketplaceValidationError;
use super::UserId;
use super::validation::{ensure_valid_rating, validate_non_empty_field};

/// Input payload for [`User::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    pub id: String,
    pub name: String,
    pub handle: String,
    pub city: String,
    pub skill: String,
    pub bio: String,
    pub rating: f32,
    pub joined: String,
}

/// A member who offers and requests services.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    name: String,
    handle: String,
    city: String,
    skill: String,
    bio: String,
    rating: f32,
    joined: String,
}

impl User {
    /// Validate and construct a member.
    pub fn new(draft: UserDraft) -> Result<Self, MarketplaceValidationError> {
        Self::try_from(draft)
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
    pub fn handle(&self) -> &str {
        self.handle.as_str()
    }
    pub fn city(&self) -> &str {
        self.city.as_str()
    }
    pub fn skill(&self) -> &str {
        self.skill.as_str()
    }
    pub fn bio(&self) -> &str {
        self.bio.as_str()
    }
    pub fn rating(&self) -> f32 {
        self.rating
    }
    pub fn joined(&self) -> &str {
        self.joined.as_str()
    }
}

impl TryFrom<UserDraft> for User {
    type Error = MarketplaceValidationError;

    fn try_from(draft: UserDraft) -> Result<Self, Self::Error> {
        Ok(Self {
            id: UserId::new(draft.id)?,
            name: validate_non_empty_field(draft.name, "user.name")?,
            handle: draft.handle,
            city: draft.city,
            skill: draft.skill,
            bio: draft.bio,
            rating: ensure_valid_rating(draft.rating, "user.rating")?,
            joined: draft.joined,
        })
    }
}
