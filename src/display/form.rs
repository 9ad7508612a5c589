//! Form display formatting
//!
//! Formats income sources, expense categories and goals for terminal output.

use crate::config::Settings;
use crate::models::{ExpenseSelection, FormState, Goal, IncomeSource};

fn amount_text(settings: &Settings, amount: Option<f64>) -> String {
    amount
        .map(|a| settings.format_amount(a))
        .unwrap_or_else(|| "-".to_string())
}

fn id_text<T: ToString>(id: Option<T>) -> String {
    id.map(|id| id.to_string()).unwrap_or_else(|| "(new)".to_string())
}

/// Format income sources as a table
pub fn format_income_list(sources: &[IncomeSource], settings: &Settings) -> String {
    if sources.is_empty() {
        return "No income sources yet.".to_string();
    }

    let name_width = sources
        .iter()
        .map(|s| s.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<13}  {:<name_width$}  {:>12}  {:<9}  {:>12}\n",
        "ID",
        "Name",
        "Amount",
        "Frequency",
        "Per Year",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<13}  {:-<name_width$}  {:->12}  {:-<9}  {:->12}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for source in sources {
        output.push_str(&format!(
            "{:<13}  {:<name_width$}  {:>12}  {:<9}  {:>12}\n",
            id_text(source.id),
            source.name,
            amount_text(settings, source.amount),
            source.frequency.as_str(),
            amount_text(settings, source.annual_amount()),
            name_width = name_width,
        ));
    }

    output
}

/// Format goals as a table
pub fn format_goal_list(goals: &[Goal], settings: &Settings) -> String {
    if goals.is_empty() {
        return "No savings goals yet.".to_string();
    }

    let desc_width = goals
        .iter()
        .map(|g| g.description.len())
        .max()
        .unwrap_or(11)
        .max(11);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<13}  {:<desc_width$}  {:>12}\n",
        "ID",
        "Description",
        "Target",
        desc_width = desc_width,
    ));
    output.push_str(&format!(
        "{:-<13}  {:-<desc_width$}  {:->12}\n",
        "",
        "",
        "",
        desc_width = desc_width,
    ));

    for goal in goals {
        output.push_str(&format!(
            "{:<13}  {:<desc_width$}  {:>12}\n",
            id_text(goal.id),
            goal.description,
            amount_text(settings, goal.target_amount),
            desc_width = desc_width,
        ));
    }

    output
}

/// Format chosen expense categories
pub fn format_expense_list(expenses: &ExpenseSelection) -> String {
    if expenses.is_empty() {
        return "No expense categories chosen yet.".to_string();
    }

    let mut output = String::new();
    for category in &expenses.selected_categories {
        output.push_str(&format!("  - {}\n", category));
    }
    for category in &expenses.custom_categories {
        output.push_str(&format!("  - {} (custom)\n", category));
    }
    output
}

/// One-screen summary of the whole form
pub fn format_summary(state: &FormState, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str("Income\n");
    output.push_str(&format_income_list(&state.income.sources, settings));
    output.push_str(&format!(
        "\nEstimated annual income: {}\n\n",
        settings.format_amount(state.annual_income())
    ));

    output.push_str("Expense categories\n");
    output.push_str(&format_expense_list(&state.expenses));
    output.push('\n');

    output.push_str("Savings goals\n");
    output.push_str(&format_goal_list(&state.goals, settings));
    output.push_str(&format!(
        "\nTotal goal target: {}\n",
        settings.format_amount(state.total_goal_target())
    ));

    output
}
