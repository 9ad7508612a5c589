//! Expense category selection
//!
//! The user picks from a fixed list of common categories and may add their
//! own. Both sets are ordered so output and exports are stable.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Categories offered during onboarding
pub const DEFAULT_EXPENSE_CATEGORIES: &[&str] = &[
    "Housing",
    "Utilities",
    "Groceries",
    "Transportation",
    "Fuel",
    "Insurance",
    "Healthcare",
    "Dining Out",
    "Entertainment",
    "Subscriptions",
    "Debt Repayment",
    "Education",
];

/// Find the canonical spelling of a default category, ignoring case
pub fn default_category(name: &str) -> Option<&'static str> {
    let name = name.trim();
    DEFAULT_EXPENSE_CATEGORIES
        .iter()
        .copied()
        .find(|c| c.eq_ignore_ascii_case(name))
}

/// Which expense categories the user tracks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseSelection {
    #[serde(default)]
    pub selected_categories: BTreeSet<String>,
    #[serde(default)]
    pub custom_categories: BTreeSet<String>,
}

impl ExpenseSelection {
    /// At least one category, default or custom, has been chosen
    pub fn is_complete(&self) -> bool {
        !self.selected_categories.is_empty() || !self.custom_categories.is_empty()
    }

    /// Total number of chosen categories
    pub fn len(&self) -> usize {
        self.selected_categories.len() + self.custom_categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every chosen category, defaults first
    pub fn all(&self) -> impl Iterator<Item = &str> {
        self.selected_categories
            .iter()
            .chain(self.custom_categories.iter())
            .map(String::as_str)
    }

    /// Check whether a category (either kind) is already chosen, ignoring case
    pub fn contains(&self, name: &str) -> bool {
        let name = name.trim();
        self.all().any(|c| c.eq_ignore_ascii_case(name))
    }
}
