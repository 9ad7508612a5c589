//! Aggregate onboarding form state
//!
//! The form controller owns one `FormState`. The completion calculator only
//! reads it; mutation happens through the helpers below or the CLI.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::expense::ExpenseSelection;
use super::goal::Goal;
use super::income::IncomeSource;

/// The income section of the form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct IncomeSection {
    #[serde(default)]
    pub sources: Vec<IncomeSource>,
}

/// Everything the user has entered so far
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    #[serde(default)]
    pub income: IncomeSection,
    #[serde(default)]
    pub expenses: ExpenseSelection,
    #[serde(default)]
    pub goals: Vec<Goal>,
    /// When the draft was last written to disk
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the income source a user reference points at.
    ///
    /// Names win over ids: an id is only tried when no source has that name.
    pub fn find_income_source(&self, reference: &str) -> Option<usize> {
        let sources = &self.income.sources;
        sources
            .iter()
            .position(|s| s.has_name(reference))
            .or_else(|| sources.iter().position(|s| s.has_id(reference)))
    }

    /// Index of the goal a user reference points at, by description first
    pub fn find_goal(&self, reference: &str) -> Option<usize> {
        self.goals
            .iter()
            .position(|g| g.has_description(reference))
            .or_else(|| self.goals.iter().position(|g| g.has_id(reference)))
    }

    /// Sum of the yearly amounts of all complete income sources
    pub fn annual_income(&self) -> f64 {
        self.income
            .sources
            .iter()
            .filter(|s| s.is_complete())
            .filter_map(IncomeSource::annual_amount)
            .sum()
    }

    /// Sum of the targets of all complete goals
    pub fn total_goal_target(&self) -> f64 {
        self.goals
            .iter()
            .filter(|g| g.is_complete())
            .filter_map(|g| g.target_amount)
            .sum()
    }
}
