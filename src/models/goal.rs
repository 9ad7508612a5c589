//! Savings goal model

use serde::{Deserialize, Serialize};

use super::ids::GoalId;

/// A savings goal with a target amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<GoalId>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_amount: Option<f64>,
}

impl Goal {
    /// Create a goal with a freshly assigned id
    pub fn new(description: impl Into<String>, target_amount: f64) -> Self {
        Self {
            id: Some(GoalId::new()),
            description: description.into(),
            target_amount: Some(target_amount),
        }
    }

    /// Description is non-blank and the target is strictly positive
    pub fn is_complete(&self) -> bool {
        !self.description.trim().is_empty() && self.target_amount.is_some_and(|t| t > 0.0)
    }

    /// Case-insensitive description comparison, ignoring surrounding whitespace
    pub fn has_description(&self, description: &str) -> bool {
        self.description
            .trim()
            .eq_ignore_ascii_case(description.trim())
    }

    /// Whether the reference is this goal's full or display id
    pub fn has_id(&self, reference: &str) -> bool {
        self.id.is_some_and(|id| id.matches(reference))
    }
}
