//! Storage layer for SaveSmart
//!
//! The onboarding draft is a single JSON document written atomically.

pub mod draft;
pub mod file_io;

pub use draft::DraftStore;
pub use file_io::{read_json, write_json_atomic};
