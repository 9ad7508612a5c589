//! Onboarding steps
//!
//! Individual steps in the onboarding flow.

pub mod expenses;
pub mod goals;
pub mod income;

pub use expenses::ExpensesSetupStep;
pub use goals::GoalsSetupStep;
pub use income::IncomeSetupStep;
