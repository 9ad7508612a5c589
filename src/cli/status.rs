//! Status command: where the onboarding stands

use crate::completion::CompletionReport;
use crate::config::Settings;
use crate::display::{format_checklist, format_summary, ProgressIndicator};
use crate::error::SaveSmartResult;
use crate::storage::DraftStore;

/// Print the draft summary, progress bar and outstanding groups
pub fn handle_status_command(store: &DraftStore, settings: &Settings) -> SaveSmartResult<()> {
    let state = store.load()?;
    let report = CompletionReport::from_state(&state);

    println!("SaveSmart Onboarding");
    println!("====================");
    println!();
    print!("{}", format_summary(&state, settings));
    println!();
    println!(
        "Progress: {}",
        ProgressIndicator::from_report(&report).render_text()
    );
    println!("{}", format_checklist(&report));

    if let Some(updated_at) = state.updated_at {
        println!();
        println!("Last saved: {}", updated_at.format("%Y-%m-%d %H:%M UTC"));
    }

    if !report.is_complete() {
        println!();
        println!("Run 'savesmart onboard' to fill in the rest interactively.");
    }

    Ok(())
}
