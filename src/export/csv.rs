//! CSV export of the onboarding draft
//!
//! One row per record, spreadsheet-friendly:
//! `Kind,ID,Name,Amount,Frequency`.

use std::io::Write;

use crate::error::{SaveSmartError, SaveSmartResult};
use crate::models::FormState;

fn export_err(e: csv::Error) -> SaveSmartError {
    SaveSmartError::Export(e.to_string())
}

fn amount_cell(amount: Option<f64>) -> String {
    amount.map(|a| format!("{:.2}", a)).unwrap_or_default()
}

/// Write income sources, expense categories and goals as CSV rows
pub fn export_csv<W: Write>(state: &FormState, writer: W) -> SaveSmartResult<()> {
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record(["Kind", "ID", "Name", "Amount", "Frequency"])
        .map_err(export_err)?;

    for source in &state.income.sources {
        let id = source.id.map(|id| id.to_string()).unwrap_or_default();
        let amount = amount_cell(source.amount);
        csv.write_record([
            "income",
            id.as_str(),
            source.name.as_str(),
            amount.as_str(),
            source.frequency.as_str(),
        ])
        .map_err(export_err)?;
    }

    for category in &state.expenses.selected_categories {
        csv.write_record(["expense", "", category.as_str(), "", ""])
            .map_err(export_err)?;
    }

    for category in &state.expenses.custom_categories {
        csv.write_record(["custom-expense", "", category.as_str(), "", ""])
            .map_err(export_err)?;
    }

    for goal in &state.goals {
        let id = goal.id.map(|id| id.to_string()).unwrap_or_default();
        let amount = amount_cell(goal.target_amount);
        csv.write_record(["goal", id.as_str(), goal.description.as_str(), amount.as_str(), ""])
            .map_err(export_err)?;
    }

    csv.flush()
        .map_err(|e| SaveSmartError::Export(e.to_string()))?;
    Ok(())
}
