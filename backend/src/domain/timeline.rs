//! Request lifecycle progress.
//!
//! Given the ordered status steps and a request's current status, each step
//! is classified as past (reached) and/or active (the current one).

use serde::Serialize;

use super::marketplace::StatusStep;

/// A lifecycle step annotated with the request's progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub step: StatusStep,
    /// The step is at or before the current status.
    pub is_past: bool,
    /// The step is the current status.
    pub is_active: bool,
}

/// Classify `steps` against `current`.
///
/// When `current` names no step, nothing is past and nothing is active.
///
/// # Examples
/// ```
/// use timebank_backend::domain::marketplace::{StatusStep, StatusStepDraft};
/// use timebank_backend::domain::timeline::classify_steps;
///
/// let steps: Vec<StatusStep> = ["requested", "accepted", "completed"]
///     .into_iter()
///     .map(|id| {
///         StatusStep::new(StatusStepDraft {
///             id: id.to_owned(),
///             title: id.to_owned(),
///             description: String::new(),
///         })
///         .expect("valid step")
///     })
///     .collect();
///
/// let entries = classify_steps(&steps, "accepted");
/// let past: Vec<bool> = entries.iter().map(|e| e.is_past).collect();
/// assert_eq!(past, [true, true, false]);
/// assert!(entries[1].is_active);
/// ```
pub fn classify_steps(steps: &[StatusStep], current: &str) -> Vec<TimelineEntry> {
    let current_position = steps.iter().position(|step| step.id().as_str() == current);
    steps
        .iter()
        .enumerate()
        .map(|(position, step)| TimelineEntry {
            step: step.clone(),
            is_past: current_position.is_some_and(|current| position <= current),
            is_active: current_position == Some(position),
        })
        .collect()
}

/// Whether `status` names the final step of `steps`.
pub fn is_final_step(steps: &[StatusStep], status: &str) -> bool {
    steps
        .last()
        .is_some_and(|step| step.id().as_str() == status)
}
