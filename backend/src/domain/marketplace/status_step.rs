//! Request lifecycle step.

use serde::{Deserialize, Serialize};

use super::validation::validate_non_empty_field;
use super::{MarketplaceValidationError, StepId};

/// Input payload for [`StatusStep::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusStepDraft {
    pub id: String,
    pub title: String,
    pub description: String,
}

/// One stage of the ordered request lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusStep {
    id: StepId,
    title: String,
    description: String,
}

impl StatusStep {
    /// Validate and construct a lifecycle step.
    pub fn new(draft: StatusStepDraft) -> Result<Self, MarketplaceValidationError> {
        Self::try_from(draft)
    }

    pub fn id(&self) -> &StepId {
        &self.id
    }
    pub fn title(&self) -> &str {
        self.title.as_str()
    }
    pub fn description(&self) -> &str {
        self.description.as_str()
    }
}

impl TryFrom<StatusStepDraft> for StatusStep {
    type Error = MarketplaceValidationError;

    fn try_from(draft: StatusStepDraft) -> Result<Self, Self::Error> {
        Ok(Self {
            id: StepId::new(draft.id)?,
            title: validate_non_empty_field(draft.title, "status_step.title")?,
            description: draft.description,
        })
    }
}
