//! Export module for SaveSmart
//!
//! Writes the onboarding draft in one of three formats:
//! - JSON: machine-readable, with completion metadata
//! - YAML: human-readable
//! - CSV: one row per record for spreadsheets

pub mod csv;
pub mod json;
pub mod yaml;

use std::fmt;
use std::io::Write;

use crate::error::SaveSmartResult;
use crate::models::FormState;

pub use self::csv::export_csv;
pub use self::json::{export_json, OnboardingExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_yaml;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Yaml,
    Csv,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Csv => "csv",
        };
        f.write_str(name)
    }
}

/// Write the draft in the requested format
pub fn export<W: Write>(state: &FormState, format: ExportFormat, writer: &mut W) -> SaveSmartResult<()> {
    match format {
        ExportFormat::Json => export_json(state, writer),
        ExportFormat::Yaml => export_yaml(state, writer),
        ExportFormat::Csv => export_csv(state, writer),
    }
}
