//! Input bindings between raw field drafts and the form controller

pub mod income_source;

pub use income_source::{IncomeSourceInput, IncomeSourceUpdate};
