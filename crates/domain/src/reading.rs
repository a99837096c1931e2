//! Reading — one sampled data point reported by the heating controller.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Pump relay state as reported by the controller (`0` = off, `1` = on).
///
/// Any other flag is rejected, which fails decoding of the whole payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum RelayState {
    #[default]
    Off,
    On,
}

impl RelayState {
    #[must_use]
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl TryFrom<u8> for RelayState {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Off),
            1 => Ok(Self::On),
            other => Err(ValidationError::InvalidRelayState(other)),
        }
    }
}

impl From<RelayState> for u8 {
    fn from(value: RelayState) -> Self {
        match value {
            RelayState::Off => 0,
            RelayState::On => 1,
        }
    }
}

impl std::fmt::Display for RelayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::On => f.write_str("on"),
            Self::Off => f.write_str("off"),
        }
    }
}

/// Temperatures (°C) and relay state sampled at one point in time.
///
/// Readings carry no identity: their position in the sequence returned by
/// the backend is their chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Reading {
    /// Tank temperature.
    pub pump: f64,
    /// Collector temperature.
    pub solar: f64,
    /// Safety sensor temperature.
    pub security: f64,
    pub rel: RelayState,
}

impl Reading {
    #[must_use]
    pub fn new(pump: f64, solar: f64, security: f64, rel: RelayState) -> Self {
        Self {
            pump,
            solar,
            security,
            rel,
        }
    }
}
