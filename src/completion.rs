//! Onboarding completion calculator
//!
//! The form has three required groups (income, expenses, goals). Each group
//! is either satisfied or not; the completion score is the rounded share of
//! satisfied groups, so it only ever takes the values 0, 33, 67 and 100.

use std::fmt;

use crate::models::{FormState, Goal, IncomeSource};

/// One of the required sections of the onboarding form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompletionGroup {
    Income,
    Expenses,
    Goals,
}

impl CompletionGroup {
    pub const ALL: [CompletionGroup; 3] = [
        CompletionGroup::Income,
        CompletionGroup::Expenses,
        CompletionGroup::Goals,
    ];

    /// What the user must do to satisfy this group
    pub const fn requirement(self) -> &'static str {
        match self {
            Self::Income => "Add at least one income source with a name and a positive amount",
            Self::Expenses => "Choose at least one expense category",
            Self::Goals => "Add at least one savings goal with a description and a positive target",
        }
    }

    /// Whether this group is satisfied by the given form state
    pub fn is_satisfied(self, state: &FormState) -> bool {
        match self {
            Self::Income => state.income.sources.iter().any(income_counts),
            Self::Expenses => state.expenses.is_complete(),
            Self::Goals => state.goals.iter().any(goal_counts),
        }
    }
}

impl fmt::Display for CompletionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Income => "Income",
            Self::Expenses => "Expenses",
            Self::Goals => "Goals",
        };
        f.write_str(name)
    }
}

// Frequency is an enum in the typed model, so "a frequency is set" always holds.
fn income_counts(source: &IncomeSource) -> bool {
    source.is_complete()
}

fn goal_counts(goal: &Goal) -> bool {
    goal.is_complete()
}

/// Per-group view of how far the form has come
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionReport {
    pub income: bool,
    pub expenses: bool,
    pub goals: bool,
}

impl CompletionReport {
    pub fn from_state(state: &FormState) -> Self {
        Self {
            income: CompletionGroup::Income.is_satisfied(state),
            expenses: CompletionGroup::Expenses.is_satisfied(state),
            goals: CompletionGroup::Goals.is_satisfied(state),
        }
    }

    pub fn is_group_satisfied(&self, group: CompletionGroup) -> bool {
        match group {
            CompletionGroup::Income => self.income,
            CompletionGroup::Expenses => self.expenses,
            CompletionGroup::Goals => self.goals,
        }
    }

    pub fn satisfied_count(&self) -> usize {
        CompletionGroup::ALL
            .iter()
            .filter(|g| self.is_group_satisfied(**g))
            .count()
    }

    /// Groups still holding the form back, in form order
    pub fn missing(&self) -> Vec<CompletionGroup> {
        CompletionGroup::ALL
            .into_iter()
            .filter(|g| !self.is_group_satisfied(*g))
            .collect()
    }

    /// Completion score in 0..=100, rounded to the nearest integer
    pub fn percentage(&self) -> u8 {
        let total = CompletionGroup::ALL.len() as f64;
        let share = 100.0 * self.satisfied_count() as f64 / total;
        // f64::round rounds halves away from zero, which is "up" for non-negative values
        share.round() as u8
    }

    pub fn is_complete(&self) -> bool {
        self.satisfied_count() == CompletionGroup::ALL.len()
    }
}

/// Completion score of the whole form, in 0..=100
pub fn calculate_completion_percentage(state: &FormState) -> u8 {
    CompletionReport::from_state(state).percentage()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Frequency, IncomeSource};

    fn valid_income() -> IncomeSource {
        IncomeSource::new("Salary", 3200.0, Frequency::Monthly)
    }

    #[test]
    fn test_empty_form_is_zero() {
        assert_eq!(calculate_completion_percentage(&FormState::default()), 0);
    }

    #[test]
    fn test_one_group_is_33() {
        let mut state = FormState::default();
        state.income.sources.push(valid_income());
        assert_eq!(calculate_completion_percentage(&state), 33);
    }

    #[test]
    fn test_two_groups_is_67() {
        let mut state = FormState::default();
        state.income.sources.push(valid_income());
        state.expenses.selected_categories.insert("Groceries".into());
        assert_eq!(calculate_completion_percentage(&state), 67);
    }

    #[test]
    fn test_all_groups_is_100() {
        let mut state = FormState::default();
        state.income.sources.push(valid_income());
        state.expenses.custom_categories.insert("Pet Care".into());
        state.goals.push(Goal::new("Emergency fund", 1000.0));
        assert_eq!(calculate_completion_percentage(&state), 100);
        assert!(CompletionReport::from_state(&state).is_complete());
    }

    #[test]
    fn test_zero_amount_never_counts() {
        let mut state = FormState::default();
        state
            .income
            .sources
            .push(IncomeSource::new("Salary", 0.0, Frequency::Weekly));
        assert_eq!(calculate_completion_percentage(&state), 0);
    }

    #[test]
    fn test_unset_amount_never_counts() {
        let mut state = FormState::default();
        state.income.sources.push(IncomeSource {
            name: "Salary".into(),
            ..IncomeSource::default()
        });
        assert_eq!(calculate_completion_percentage(&state), 0);
    }

    #[test]
    fn test_whitespace_goal_never_counts() {
        let mut state = FormState::default();
        state.goals.push(Goal::new("   ", 5000.0));
        assert_eq!(calculate_completion_percentage(&state), 0);
    }

    #[test]
    fn test_any_index_satisfies_group() {
        let mut state = FormState::default();
        state
            .income
            .sources
            .push(IncomeSource::new("", 100.0, Frequency::Monthly));
        state.income.sources.push(valid_income());
        assert_eq!(calculate_completion_percentage(&state), 33);
    }

    #[test]
    fn test_multiple_items_count_once() {
        let mut state = FormState::default();
        state.income.sources.push(valid_income());
        state.income.sources.push(valid_income());
        state.income.sources.push(valid_income());
        assert_eq!(calculate_completion_percentage(&state), 33);
    }

    #[test]
    fn test_missing_groups() {
        let mut state = FormState::default();
        state.goals.push(Goal::new("Car", 9000.0));
        let report = CompletionReport::from_state(&state);
        assert_eq!(
            report.missing(),
            vec![CompletionGroup::Income, CompletionGroup::Expenses]
        );
        assert_eq!(report.percentage(), 33);
    }
}
