//! Expense category CLI commands

use clap::Subcommand;

use super::print_progress;
use crate::display::format_expense_list;
use crate::error::{SaveSmartError, SaveSmartResult};
use crate::models::{default_category, DEFAULT_EXPENSE_CATEGORIES};
use crate::storage::DraftStore;
use crate::validation::validate_custom_category;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Track one or more of the default categories
    Select {
        /// Category names or numbers from `expense list`
        #[arg(required = true)]
        categories: Vec<String>,
    },

    /// Stop tracking default categories
    Deselect {
        /// Category names or numbers from `expense list`
        #[arg(required = true)]
        categories: Vec<String>,
    },

    /// Add a custom category
    Add {
        /// Category name
        name: String,
    },

    /// Remove a custom category
    Remove {
        /// Category name
        name: String,
    },

    /// Show default categories and what is being tracked
    List,
}

/// Resolve a default category by name or 1-based number
fn resolve_default(reference: &str) -> SaveSmartResult<&'static str> {
    let by_number = reference
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| DEFAULT_EXPENSE_CATEGORIES.get(i).copied());

    by_number
        .or_else(|| default_category(reference))
        .ok_or_else(|| SaveSmartError::category_not_found(reference))
}

/// Handle an expense command
pub fn handle_expense_command(store: &DraftStore, cmd: ExpenseCommands) -> SaveSmartResult<()> {
    let mut state = store.load()?;

    match cmd {
        ExpenseCommands::Select { categories } => {
            let resolved = categories
                .iter()
                .map(|c| resolve_default(c))
                .collect::<SaveSmartResult<Vec<_>>>()?;
            for category in resolved {
                if state.expenses.selected_categories.insert(category.to_string()) {
                    println!("Tracking '{}'", category);
                }
            }
            store.save(&mut state)?;
            print_progress(&state);
        }

        ExpenseCommands::Deselect { categories } => {
            let resolved = categories
                .iter()
                .map(|c| resolve_default(c))
                .collect::<SaveSmartResult<Vec<_>>>()?;
            for category in resolved {
                if state.expenses.selected_categories.remove(category) {
                    println!("No longer tracking '{}'", category);
                }
            }
            store.save(&mut state)?;
            print_progress(&state);
        }

        ExpenseCommands::Add { name } => {
            validate_custom_category(&name).into_result()?;
            let name = name.trim();
            if state.expenses.contains(name) || default_category(name).is_some() {
                return Err(SaveSmartError::Duplicate {
                    entity_type: "Expense category",
                    identifier: name.to_string(),
                });
            }
            state.expenses.custom_categories.insert(name.to_string());
            println!("Added custom category '{}'", name);
            store.save(&mut state)?;
            print_progress(&state);
        }

        ExpenseCommands::Remove { name } => {
            let existing = state
                .expenses
                .custom_categories
                .iter()
                .find(|c| c.eq_ignore_ascii_case(name.trim()))
                .cloned()
                .ok_or_else(|| SaveSmartError::category_not_found(&name))?;
            state.expenses.custom_categories.remove(&existing);
            println!("Removed custom category '{}'", existing);
            store.save(&mut state)?;
            print_progress(&state);
        }

        ExpenseCommands::List => {
            println!("Default categories:");
            for (i, category) in DEFAULT_EXPENSE_CATEGORIES.iter().enumerate() {
                let mark = if state.expenses.selected_categories.contains(*category) {
                    "x"
                } else {
                    " "
                };
                println!("  [{}] {:>2}. {}", mark, i + 1, category);
            }
            println!();
            println!("Tracking:");
            println!("{}", format_expense_list(&state.expenses));
        }
    }

    Ok(())
}
