//! Background effect errors
//!
//! None of these reach the user. A failed setup only means the decorative
//! layer never appears.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EffectError {
    /// The particle engine is not loaded in this environment
    #[error("Particle engine unavailable: {0}")]
    Unavailable(String),

    /// The engine was found but its setup rejected
    #[error("Particle engine setup failed: {0}")]
    Setup(String),

    /// Options could not be handed to the engine
    #[error("Invalid particle options: {0}")]
    Options(String),
}

impl From<serde_json::Error> for EffectError {
    fn from(err: serde_json::Error) -> Self {
        EffectError::Options(err.to_string())
    }
}
