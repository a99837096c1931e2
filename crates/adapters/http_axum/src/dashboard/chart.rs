//! Inline SVG line chart of the windowed readings series.

use solarheat_domain::reading::Reading;
use solarheat_domain::window::IndexedReading;

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 300;

/// Series drawn on the chart: name, colour, value accessor.
const SERIES: [(&str, &str, fn(&Reading) -> f64); 3] = [
    ("solar", "#fab005", |r: &Reading| r.solar),
    ("pump", "#228be6", |r: &Reading| r.pump),
    ("security", "#fa5252", |r: &Reading| r.security),
];

/// One polyline of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLine {
    pub name: &'static str,
    pub color: &'static str,
    /// SVG `points` attribute value.
    pub points: String,
}

/// Everything the template needs to draw the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    pub width: u32,
    pub height: u32,
    pub lines: Vec<ChartLine>,
    /// Lowest value on the y axis, formatted.
    pub y_min: String,
    /// Highest value on the y axis, formatted.
    pub y_max: String,
    /// Number of plotted samples.
    pub samples: usize,
}

impl ChartView {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples == 0
    }
}

/// Scale `series` into the chart's viewport.
///
/// The x axis is the synthetic index, the y axis spans all three series.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn build(series: &[IndexedReading]) -> ChartView {
    let (mut low, mut high) = series
        .iter()
        .flat_map(|item| SERIES.iter().map(move |&(_, _, value)| value(&item.reading)))
        .filter(|value| value.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), value| {
            (lo.min(value), hi.max(value))
        });
    if low > high {
        low = 0.0;
        high = 0.0;
    }
    if (high - low).abs() < f64::EPSILON {
        low -= 1.0;
        high += 1.0;
    }

    let width = f64::from(WIDTH);
    let height = f64::from(HEIGHT);
    let x_step = width / series.len().saturating_sub(1).max(1) as f64;

    let lines = SERIES
        .iter()
        .map(|&(name, color, value)| {
            let points = series
                .iter()
                .map(|item| {
                    let x = item.index as f64 * x_step;
                    let y = height - (value(&item.reading) - low) / (high - low) * height;
                    format!("{x:.1},{y:.1}")
                })
                .collect::<Vec<_>>()
                .join(" ");
            ChartLine {
                name,
                color,
                points,
            }
        })
        .collect();

    ChartView {
        width: WIDTH,
        height: HEIGHT,
        lines,
        y_min: format!("{low:.1}"),
        y_max: format!("{high:.1}"),
        samples: series.len(),
    }
}
