//! Core data models for SaveSmart onboarding
//!
//! This module contains the records a user fills in during onboarding:
//! income sources, expense categories, savings goals and the aggregate
//! form state that ties them together.

pub mod expense;
pub mod form;
pub mod goal;
pub mod ids;
pub mod income;

pub use expense::{default_category, ExpenseSelection, DEFAULT_EXPENSE_CATEGORIES};
pub use form::{FormState, IncomeSection};
pub use goal::Goal;
pub use ids::{GoalId, IncomeSourceId};
pub use income::{Frequency, IncomeSource};
