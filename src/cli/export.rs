//! CLI command for exporting the onboarding draft

use clap::ValueEnum;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::error::{SaveSmartError, SaveSmartResult};
use crate::export::{export, ExportFormat};
use crate::storage::DraftStore;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormatArg {
    /// JSON with completion metadata
    Json,
    /// YAML, human-readable
    Yaml,
    /// CSV, one row per record
    Csv,
}

impl From<ExportFormatArg> for ExportFormat {
    fn from(arg: ExportFormatArg) -> Self {
        match arg {
            ExportFormatArg::Json => Self::Json,
            ExportFormatArg::Yaml => Self::Yaml,
            ExportFormatArg::Csv => Self::Csv,
        }
    }
}

/// Export the draft to a file, or stdout when no path is given
pub fn handle_export_command(
    store: &DraftStore,
    format: ExportFormatArg,
    output: Option<PathBuf>,
) -> SaveSmartResult<()> {
    let state = store.load()?;
    let format = ExportFormat::from(format);

    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                SaveSmartError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            export(&state, format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| SaveSmartError::Export(e.to_string()))?;
            println!("Onboarding draft exported as {} to: {}", format, path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            export(&state, format, &mut writer)?;
            writer.flush()?;
        }
    }

    Ok(())
}
