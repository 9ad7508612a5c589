//! Expense categories setup step
//!
//! Lets the user pick from the default categories and add their own.

use std::io::{BufRead, Write};

use crate::completion::CompletionGroup;
use crate::display::format_expense_list;
use crate::error::SaveSmartResult;
use crate::message::ValidationMessage;
use crate::models::{FormState, DEFAULT_EXPENSE_CATEGORIES};
use crate::onboarding::prompt::Prompter;
use crate::validation::validate_custom_category;

/// Expense categories setup step
pub struct ExpensesSetupStep;

impl ExpensesSetupStep {
    /// Run the expenses step until at least one category is chosen
    pub fn run<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        state: &mut FormState,
    ) -> SaveSmartResult<()> {
        prompter.blank()?;
        prompter.say("Step 2: Expense Categories")?;
        prompter.say("==========================")?;
        prompter.blank()?;

        if !state.expenses.is_empty() {
            prompter.say("Currently tracking:")?;
            prompter.say(format_expense_list(&state.expenses))?;
        }

        loop {
            prompter.say("Which of these do you spend on?")?;
            for (i, category) in DEFAULT_EXPENSE_CATEGORIES.iter().enumerate() {
                prompter.say(format!("  {:>2}. {}", i + 1, category))?;
            }
            prompter.blank()?;

            let picks = prompter.ask("Select by number, comma-separated (blank to skip): ")?;
            Self::apply_picks(prompter, state, &picks)?;

            let custom = prompter.ask("Add your own categories, comma-separated (blank to skip): ")?;
            Self::apply_custom(prompter, state, &custom)?;

            if state.expenses.is_complete() {
                prompter.say(format!(
                    "Tracking {} expense categor{}.",
                    state.expenses.len(),
                    if state.expenses.len() == 1 { "y" } else { "ies" }
                ))?;
                return Ok(());
            }

            let message = ValidationMessage::new("expenses-error")
                .message(CompletionGroup::Expenses.requirement());
            prompter.alert(&message)?;
        }
    }

    fn apply_picks<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        state: &mut FormState,
        picks: &str,
    ) -> SaveSmartResult<()> {
        for token in picks.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let category = token
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| DEFAULT_EXPENSE_CATEGORIES.get(i));

            match category {
                Some(category) => {
                    state
                        .expenses
                        .selected_categories
                        .insert((*category).to_string());
                }
                None => prompter.say(format!("  ! Ignoring unknown selection '{}'", token))?,
            }
        }
        Ok(())
    }

    fn apply_custom<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        state: &mut FormState,
        custom: &str,
    ) -> SaveSmartResult<()> {
        if custom.trim().is_empty() {
            return Ok(());
        }

        let mut errors = Vec::new();
        for name in custom.split(',') {
            let result = validate_custom_category(name);
            if let Some(message) = result.message() {
                errors.push(message);
                continue;
            }

            let name = name.trim();
            if state.expenses.contains(name) {
                prompter.say(format!("  '{}' is already on your list.", name))?;
            } else {
                state.expenses.custom_categories.insert(name.to_string());
            }
        }

        if !errors.is_empty() {
            prompter.alert(&ValidationMessage::new("expenses-custom-error").messages(errors))?;
        }
        Ok(())
    }
}
