//! Logging setup
//!
//! Log output goes to stderr so it never mixes with command output or
//! exports written to stdout.

use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::error::{SaveSmartError, SaveSmartResult};

/// Initialise the global subscriber.
///
/// `RUST_LOG` wins over the configured level when it is set and valid.
pub fn init(settings: &Settings) -> SaveSmartResult<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&settings.log_level).map_err(|e| {
            SaveSmartError::Telemetry(format!(
                "invalid log level/filter '{}': {}",
                settings.log_level, e
            ))
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| SaveSmartError::Telemetry(e.to_string()))
}
