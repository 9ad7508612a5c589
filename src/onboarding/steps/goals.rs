//! Savings goals setup step

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::display::format_goal_list;
use crate::error::SaveSmartResult;
use crate::message::ValidationMessage;
use crate::models::{FormState, Goal};
use crate::onboarding::prompt::Prompter;
use crate::validation::{parse_number, validate_goal_description, validate_goal_target};

/// Savings goals setup step
pub struct GoalsSetupStep;

impl GoalsSetupStep {
    /// Run the goals step, appending goals to the form
    pub fn run<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        state: &mut FormState,
        settings: &Settings,
    ) -> SaveSmartResult<()> {
        prompter.blank()?;
        prompter.say("Step 3: Savings Goals")?;
        prompter.say("=====================")?;
        prompter.blank()?;

        if !state.goals.is_empty() {
            prompter.say(format_goal_list(&state.goals, settings))?;
            if state.goals.iter().any(Goal::is_complete)
                && !prompter.confirm("Add another goal? (yes/no) [no]: ", false)?
            {
                return Ok(());
            }
        }

        loop {
            let goal = Self::prompt_goal(prompter, settings)?;
            prompter.say(format!(
                "Added goal '{}' with a target of {}.",
                goal.description,
                settings.format_amount(goal.target_amount.unwrap_or_default())
            ))?;
            state.goals.push(goal);

            if !prompter.confirm("Add another goal? (yes/no) [no]: ", false)? {
                return Ok(());
            }
        }
    }

    fn prompt_goal<R: BufRead, W: Write>(
        prompter: &mut Prompter<R, W>,
        settings: &Settings,
    ) -> SaveSmartResult<Goal> {
        let description = loop {
            let description = prompter.ask("What are you saving for? ")?;
            let result = validate_goal_description(&description);
            if result.is_valid {
                break description;
            }
            let message = ValidationMessage::new("goal-new-description-error")
                .maybe_message(result.message())
                .visible(settings.show_validation);
            prompter.alert(&message)?;
        };

        let target = loop {
            let target = parse_number(&prompter.ask("Target amount: ")?);
            let result = validate_goal_target(target);
            if result.is_valid {
                break target;
            }
            let message = ValidationMessage::new("goal-new-target-error")
                .maybe_message(result.message())
                .visible(settings.show_validation);
            prompter.alert(&message)?;
        };

        Ok(Goal::new(description.trim(), target))
    }
}
