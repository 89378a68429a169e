//! Decorative particle background
//!
//! The renderer is external. This module only describes what to ask it for
//! and how its setup can fail.

mod error;
mod options;

pub use error::EffectError;
pub use options::{ColorOption, ColorValue, ParticlesOptions, DARK_PALETTE, LIGHT_COLOR};

/// DOM id of the particle layer
pub const EFFECT_MOUNT_ID: &str = "tsparticles";
