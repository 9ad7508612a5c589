//! Configuration module for SaveSmart
//!
//! This module provides configuration management including:
//! - Base directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SaveSmartPaths;
pub use settings::Settings;
