#![deny(missing_docs)]
#![doc = "Model helper: simulator settings, model names and detector card filters for hidden-valley models."]

/// YAML model configuration.
pub mod config;
/// Canonical hashing of rendered settings.
pub mod hash;
/// Model helper.
pub mod helper;
/// Serde helpers for JSON artefacts.
#[path = "serde.rs"]
pub mod serde_io;
/// Detector card template substitution.
pub mod template;

pub use config::{load_model, ModelConfig};
pub use hash::hash_settings;
pub use helper::{ModelHelper, ModelSummary};
pub use template::safe_substitute;
