//! Display formatting for terminal output
//!
//! Tables for the form's records and the onboarding progress indicator.

pub mod form;
pub mod progress;

pub use form::{format_expense_list, format_goal_list, format_income_list, format_summary};
pub use progress::{format_checklist, ProgressIndicator};
