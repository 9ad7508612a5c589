//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the onboarding draft. The CLI plays the role
//! of the form controller: it owns the draft and decides policy such as
//! whether the last income source may be removed.

pub mod expense;
pub mod export;
pub mod goal;
pub mod income;
pub mod status;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportFormatArg};
pub use goal::{handle_goal_command, GoalCommands};
pub use income::{handle_income_command, IncomeCommands};
pub use status::handle_status_command;

use crate::binding::IncomeSourceInput;
use crate::completion::calculate_completion_percentage;
use crate::display::ProgressIndicator;
use crate::error::{SaveSmartError, SaveSmartResult};
use crate::models::FormState;

/// Print the one-line progress bar after an edit
pub(crate) fn print_progress(state: &FormState) {
    let percentage = calculate_completion_percentage(state);
    println!("Progress: {}", ProgressIndicator::new(percentage).render_text());
}

/// The form controller keeps at least one income source once one exists
pub(crate) fn ensure_removable(state: &FormState) -> SaveSmartResult<()> {
    if state.income.sources.len() == 1 {
        return Err(SaveSmartError::Validation(
            "Cannot remove the only income source. Add another one first".into(),
        ));
    }
    Ok(())
}

/// Turn the binding's visible errors into a single validation error
pub(crate) fn reject_invalid_income(input: &IncomeSourceInput) -> SaveSmartResult<()> {
    if input.is_valid() {
        return Ok(());
    }

    let messages: Vec<String> = input
        .messages()
        .iter()
        .filter_map(|m| m.render())
        .flat_map(|region| {
            region
                .messages()
                .into_iter()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect();

    Err(SaveSmartError::Validation(messages.join("; ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reject_invalid_income_joins_messages() {
        let mut input = IncomeSourceInput::new(None).show_validation(true);
        input.set_name(" ");
        input.set_amount("0");
        let err = reject_invalid_income(&input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: Income source name is required; Amount must be greater than zero"
        );
    }

    #[test]
    fn test_only_income_source_is_not_removable() {
        use crate::models::{Frequency, IncomeSource};

        let mut state = FormState::default();
        state
            .income
            .sources
            .push(IncomeSource::new("Salary", 100.0, Frequency::Monthly));
        assert!(ensure_removable(&state).unwrap_err().is_validation());

        state
            .income
            .sources
            .push(IncomeSource::new("Tutoring", 40.0, Frequency::Weekly));
        assert!(ensure_removable(&state).is_ok());
    }

    #[test]
    fn test_reject_invalid_income_accepts_valid_draft() {
        let mut input = IncomeSourceInput::new(None).show_validation(true);
        input.set_name("Salary");
        input.set_amount("10");
        assert!(reject_invalid_income(&input).is_ok());
    }
}
