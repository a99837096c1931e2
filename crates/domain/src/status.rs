//! Controller status — the configured differential threshold and the time of
//! the backend's last update.

use serde::{Deserialize, Serialize, Serializer};

use crate::time::{Timestamp, from_epoch_millis};

/// Differential threshold (°C) controlling pump activation in the backend.
///
/// Always within [`Dif::MIN`]..=[`Dif::MAX`]: every constructor clamps, and
/// so does deserialisation.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(from = "f64")]
pub struct Dif(f64);

impl Dif {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 20.0;

    /// Clamp `value` into the accepted range. `NaN` maps to [`Dif::MIN`].
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(Self::MIN);
        }
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Dif {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Dif> for f64 {
    fn from(value: Dif) -> Self {
        value.0
    }
}

// Integral values go out as JSON integers so the backend sees `{"dif":15}`.
impl Serialize for Dif {
    #[allow(clippy::cast_possible_truncation)]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.fract() == 0.0 {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

impl std::fmt::Display for Dif {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Backend-held status singleton.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Status {
    pub dif: Dif,
    /// Epoch milliseconds of the backend's last update.
    pub time: i64,
}

impl Status {
    #[must_use]
    pub fn new(dif: Dif, time: i64) -> Self {
        Self { dif, time }
    }

    /// The backend's last update as a UTC timestamp.
    #[must_use]
    pub fn updated_at(&self) -> Option<Timestamp> {
        from_epoch_millis(self.time)
    }
}
