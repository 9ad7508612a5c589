//! Savings goal CLI commands

use clap::Subcommand;

use super::print_progress;
use crate::config::Settings;
use crate::display::format_goal_list;
use crate::error::{SaveSmartError, SaveSmartResult};
use crate::message::ValidationMessage;
use crate::models::Goal;
use crate::storage::DraftStore;
use crate::validation::{parse_number, validate_goal_description, validate_goal_target};

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Add a savings goal
    Add {
        /// What you are saving for
        description: String,

        /// Target amount (e.g., "5000")
        #[arg(allow_hyphen_values = true)]
        target: String,
    },

    /// Remove a savings goal
    Remove {
        /// Goal description or ID
        goal: String,
    },

    /// List savings goals
    List,
}

/// Handle a goal command
pub fn handle_goal_command(
    store: &DraftStore,
    settings: &Settings,
    cmd: GoalCommands,
) -> SaveSmartResult<()> {
    let mut state = store.load()?;

    match cmd {
        GoalCommands::Add {
            description,
            target,
        } => {
            let target = parse_number(&target);
            let errors = [
                validate_goal_description(&description).message(),
                validate_goal_target(target).message(),
            ];
            if let Some(region) = ValidationMessage::new("goal-error")
                .messages(errors.into_iter().flatten())
                .render()
            {
                return Err(SaveSmartError::Validation(region.messages().join("; ")));
            }

            if state.goals.iter().any(|g| g.has_description(&description)) {
                return Err(SaveSmartError::Duplicate {
                    entity_type: "Goal",
                    identifier: description.trim().to_string(),
                });
            }

            let goal = Goal::new(description.trim(), target);
            println!(
                "Added goal '{}' ({}) with a target of {}",
                goal.description,
                goal.id.map(|id| id.to_string()).unwrap_or_default(),
                settings.format_amount(target)
            );
            state.goals.push(goal);
            store.save(&mut state)?;
            print_progress(&state);
        }

        GoalCommands::Remove { goal } => {
            let index = state
                .find_goal(&goal)
                .ok_or_else(|| SaveSmartError::goal_not_found(&goal))?;
            let removed = state.goals.remove(index);
            println!("Removed goal '{}'", removed.description);
            store.save(&mut state)?;
            print_progress(&state);
        }

        GoalCommands::List => {
            println!("{}", format_goal_list(&state.goals, settings));
        }
    }

    Ok(())
}
