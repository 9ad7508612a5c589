//! YAML export of the onboarding draft

use std::io::Write;

use super::json::OnboardingExport;
use crate::error::{SaveSmartError, SaveSmartResult};
use crate::models::FormState;

/// Write the draft as YAML with a short header comment
pub fn export_yaml<W: Write>(state: &FormState, writer: &mut W) -> SaveSmartResult<()> {
    let export = OnboardingExport::from_state(state);

    writeln!(writer, "# SaveSmart onboarding export")
        .and_then(|_| writeln!(writer, "# Generated: {}", export.exported_at))
        .and_then(|_| writeln!(writer))
        .map_err(|e| SaveSmartError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| SaveSmartError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Goal;

    #[test]
    fn test_export_yaml() {
        let mut state = FormState::default();
        state.goals.push(Goal::new("New laptop", 1500.0));

        let mut out = Vec::new();
        export_yaml(&state, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("# SaveSmart onboarding export"));
        assert!(text.contains("description: New laptop"));

        let parsed: OnboardingExport = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed.form.goals, state.goals);
    }
}
