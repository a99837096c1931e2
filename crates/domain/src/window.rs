//! Time windows and the windowed view of the readings series used for charts.
//!
//! Windows are sample counts, not time ranges: they assume the backend records
//! one reading per minute. If the real cadence differs, a window no longer
//! matches the elapsed time its name suggests.

use serde::{Deserialize, Serialize};

use crate::reading::Reading;

const SAMPLES_PER_HOUR: usize = 60;
const SAMPLES_PER_MONTH: usize = SAMPLES_PER_HOUR * 30;
const SAMPLES_PER_YEAR: usize = SAMPLES_PER_MONTH * 12;

/// Which suffix of the readings series is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    #[default]
    Hour,
    Month,
    Year,
    /// The whole series, unchanged.
    #[serde(other)]
    All,
}

impl TimeWindow {
    /// Buttons offered by the dashboard, in display order.
    pub const SELECTABLE: [Self; 3] = [Self::Hour, Self::Month, Self::Year];

    /// Parse a window name. Unknown names select the full series.
    #[must_use]
    pub fn parse_lenient(value: &str) -> Self {
        match value {
            "hour" => Self::Hour,
            "month" => Self::Month,
            "year" => Self::Year,
            _ => Self::All,
        }
    }

    /// Maximum number of trailing readings shown, `None` meaning all of them.
    #[must_use]
    pub fn sample_limit(self) -> Option<usize> {
        match self {
            Self::Hour => Some(SAMPLES_PER_HOUR),
            Self::Month => Some(SAMPLES_PER_MONTH),
            Self::Year => Some(SAMPLES_PER_YEAR),
            Self::All => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hour => "hour",
            Self::Month => "month",
            Self::Year => "year",
            Self::All => "all",
        }
    }

    /// Label shown on the selector button.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Hour => "Stunde",
            Self::Month => "Monat",
            Self::Year => "Jahr",
            Self::All => "Alle",
        }
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reading paired with its position inside a windowed slice.
///
/// Serialises as the reading's fields plus `date`, the chart x-coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IndexedReading {
    #[serde(rename = "date")]
    pub index: usize,
    #[serde(flatten)]
    pub reading: Reading,
}

/// Trailing slice of `readings` selected by `window`.
#[must_use]
pub fn window_slice(readings: &[Reading], window: TimeWindow) -> &[Reading] {
    match window.sample_limit() {
        Some(limit) => &readings[readings.len().saturating_sub(limit)..],
        None => readings,
    }
}

/// Select the trailing readings for `window` and re-index them from 0.
#[must_use]
pub fn windowed_series(readings: &[Reading], window: TimeWindow) -> Vec<IndexedReading> {
    window_slice(readings, window)
        .iter()
        .enumerate()
        .map(|(index, reading)| IndexedReading {
            index,
            reading: *reading,
        })
        .collect()
}
