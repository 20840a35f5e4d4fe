//! Layered configuration of every policy table, loaded with figment.
//!
//! Sources, highest priority first:
//! 1. Environment variables (`RESONANCE_*` prefix, `__` between sections)
//! 2. Project-level `.resonance/config.toml`
//! 3. User-level `~/.config/resonance/config.toml`
//! 4. Built-in defaults
//!
//! `RESONANCE_TIMING__WEAK_FLOOR=25` sets `timing.weak_floor`.
//!
//! ```no_run
//! use resonance_config::ResonanceConfig;
//!
//! let config = ResonanceConfig::load().expect("config");
//! assert_eq!(config.strength.base_power, 50.0);
//! ```

mod error;

pub use error::ConfigError;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use resonance_base::{AlignmentPolicy, StrengthPolicy};
use resonance_ephemeris::ResolverPolicy;
use resonance_timing::TimingPolicy;
use serde::{Deserialize, Serialize};

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "RESONANCE_";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ResonanceConfig {
    #[serde(default)]
    pub strength: StrengthPolicy,
    #[serde(default)]
    pub timing: TimingPolicy,
    #[serde(default)]
    pub alignment: AlignmentPolicy,
    #[serde(default)]
    pub ephemeris: ResolverPolicy,
}

impl ResonanceConfig {
    /// Load and validate configuration from all sources.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    /// Load defaults, then `path`, then the environment.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let figment = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));
        Self::from_figment(figment)
    }

    /// Extract from a caller-built figment and validate.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the provider chain.
    pub fn figment() -> Figment {
        Self::figment_with_global(Self::global_config_path().as_deref())
    }

    /// Provider chain with an explicit user-level file, or none.
    pub fn figment_with_global(global_path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = global_path {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".resonance/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check every policy table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.strength.validate().map_err(|e| invalid("strength", e))?;
        self.timing.validate().map_err(|e| invalid("timing", e))?;
        self.alignment.validate().map_err(|e| invalid("alignment", e))?;
        if self.ephemeris.max_interpolation_span_days == 0 {
            return Err(ConfigError::InvalidValue {
                field: "ephemeris.max_interpolation_span_days".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// `<config dir>/resonance/config.toml`, if the platform has a config dir.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("resonance").join("config.toml"))
    }
}

fn invalid(section: &str, error: impl std::fmt::Display) -> ConfigError {
    ConfigError::InvalidValue {
        field: section.to_string(),
        reason: error.to_string(),
    }
}
