//! Strict-versus-lenient validation behavior.
//!
//! Adapters validate eagerly during development and degrade to silent
//! normalization in production. The mode is always an explicit parameter;
//! [`ValidationMode::from_env`] reads the environment fresh on every call
//! and caches nothing, so test harnesses can flip it between calls.

use std::env;

/// Name of the environment variable consulted by [`ValidationMode::from_env`].
pub const MODE_ENV_VAR: &str = "BRANDSHELL_ENV";

/// How the render service treats invalid input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Validate and fail with the aggregated error list (development).
    #[default]
    Strict,
    /// Skip validation and silently normalize (production).
    Lenient,
}

impl ValidationMode {
    /// Derive the mode from `BRANDSHELL_ENV`: `"production"` means lenient,
    /// anything else (including unset) means strict.
    pub fn from_env() -> Self {
        match env::var(MODE_ENV_VAR) {
            Ok(value) if value == "production" => Self::Lenient,
            _ => Self::Strict,
        }
    }

    pub const fn is_strict(&self) -> bool {
        matches!(self, Self::Strict)
    }
}
