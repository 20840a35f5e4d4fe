//! Unified error for the facade.

use resonance_base::ValidationError;
use resonance_config::ConfigError;
use resonance_timing::{HourError, TimingError};
use thiserror::Error;

/// Any error the engine can report.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ResonanceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Hour(#[from] HourError),

    #[error(transparent)]
    Timing(#[from] TimingError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
