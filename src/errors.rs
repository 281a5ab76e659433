// src/errors.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TweakError {
    #[error("Tweak label must not be empty")]
    EmptyLabel,

    #[error("No tweakable value registered under label: {0}")]
    UnknownLabel(String),

    #[error("Invalid value for tweak '{label}': {value}")]
    InvalidValue { label: String, value: f32 },
}

/// Rejects labels that cannot key a registry entry.
pub fn validate_label(label: &str) -> Result<(), TweakError> {
    if label.is_empty() {
        return Err(TweakError::EmptyLabel);
    }
    Ok(())
}
