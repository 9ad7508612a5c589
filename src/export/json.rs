//! JSON export of the onboarding draft

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::completion::CompletionReport;
use crate::error::{SaveSmartError, SaveSmartResult};
use crate::models::FormState;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Exported onboarding document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    pub completion_percentage: u8,
    pub annual_income: f64,
    pub form: FormState,
}

impl OnboardingExport {
    pub fn from_state(state: &FormState) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            completion_percentage: CompletionReport::from_state(state).percentage(),
            annual_income: state.annual_income(),
            form: state.clone(),
        }
    }
}

/// Write the draft as pretty-printed JSON
pub fn export_json<W: Write>(state: &FormState, writer: &mut W) -> SaveSmartResult<()> {
    let export = OnboardingExport::from_state(state);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| SaveSmartError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| SaveSmartError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Frequency, IncomeSource};

    #[test]
    fn test_export_json() {
        let mut state = FormState::default();
        state
            .income
            .sources
            .push(IncomeSource::new("Salary", 1000.0, Frequency::Monthly));

        let mut out = Vec::new();
        export_json(&state, &mut out).unwrap();

        let parsed: OnboardingExport = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.completion_percentage, 33);
        assert_eq!(parsed.annual_income, 12000.0);
        assert_eq!(parsed.form.income.sources, state.income.sources);
    }
}
