//! Onboarding draft persistence

use std::path::PathBuf;

use chrono::Utc;
use tracing::{debug, info};

use super::file_io::{read_json, write_json_atomic};
use crate::error::{SaveSmartError, SaveSmartResult};
use crate::models::FormState;

/// Reads and writes the onboarding draft file
#[derive(Debug, Clone)]
pub struct DraftStore {
    path: PathBuf,
}

impl DraftStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the draft, or an empty form if none has been saved
    pub fn load(&self) -> SaveSmartResult<FormState> {
        let state: FormState = read_json(&self.path)?;
        debug!(
            path = %self.path.display(),
            income_sources = state.income.sources.len(),
            goals = state.goals.len(),
            "loaded onboarding draft"
        );
        Ok(state)
    }

    /// Stamp and persist the draft
    pub fn save(&self, state: &mut FormState) -> SaveSmartResult<()> {
        state.updated_at = Some(Utc::now());
        write_json_atomic(&self.path, state)?;
        debug!(path = %self.path.display(), "saved onboarding draft");
        Ok(())
    }

    /// Delete the draft; a missing draft is not an error
    pub fn clear(&self) -> SaveSmartResult<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(&self.path).map_err(|e| {
            SaveSmartError::Storage(format!(
                "Failed to remove {}: {}",
                self.path.display(),
                e
            ))
        })?;
        info!(path = %self.path.display(), "cleared onboarding draft");
        Ok(true)
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}
