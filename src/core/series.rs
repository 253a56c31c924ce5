use chrono::NaiveDate;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, ViewWindow};
use crate::error::{ChartError, ChartResult};

/// Ordered, immutable sequence of daily observations.
///
/// Dates are strictly ascending and every close price is finite and > 0.
/// The chart never reorders or patches a series; a new one replaces it.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Series {
    points: Vec<DataPoint>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SeriesPayload {
    Items { items: Vec<DataPoint> },
    Points(Vec<DataPoint>),
}

impl Series {
    pub fn new(points: Vec<DataPoint>) -> ChartResult<Self> {
        for (index, point) in points.iter().enumerate() {
            if !point.close_price.is_finite() || point.close_price <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "close price at index {index} must be finite and > 0"
                )));
            }
        }
        if let Some(index) = points
            .windows(2)
            .position(|pair| pair[0].date >= pair[1].date)
        {
            return Err(ChartError::InvalidData(format!(
                "series dates must be strictly ascending (index {})",
                index + 1
            )));
        }
        Ok(Self { points })
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses either a bare point array or a history response object with an
    /// `items` array.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let payload: SeriesPayload = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse series: {e}")))?;
        match payload {
            SeriesPayload::Items { items } => Self::new(items),
            SeriesPayload::Points(points) => Self::new(points),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&DataPoint> {
        self.points.get(index)
    }

    /// Returns the points covered by `window`, or an empty slice when the
    /// window does not fit this series.
    #[must_use]
    pub fn window_slice(&self, window: ViewWindow) -> &[DataPoint] {
        self.points.get(window.start..=window.end).unwrap_or(&[])
    }

    /// Full-range window, or `None` for an empty series.
    #[must_use]
    pub fn full_window(&self) -> Option<ViewWindow> {
        ViewWindow::full(self.len())
    }

    #[must_use]
    pub fn summary(&self, window: ViewWindow) -> Option<WindowSummary> {
        WindowSummary::from_points(self.window_slice(window))
    }
}

/// Min/max close over a set of points.
#[must_use]
pub fn close_range(points: &[DataPoint]) -> Option<(f64, f64)> {
    let min = points
        .iter()
        .map(|point| OrderedFloat(point.close_price))
        .min()?;
    let max = points
        .iter()
        .map(|point| OrderedFloat(point.close_price))
        .max()?;
    Some((min.into_inner(), max.into_inner()))
}

/// Header facts about the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSummary {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub count: usize,
    pub max_close: f64,
    pub min_close: f64,
}

impl WindowSummary {
    #[must_use]
    pub fn from_points(points: &[DataPoint]) -> Option<Self> {
        let first = points.first()?;
        let last = points.last()?;
        let (min_close, max_close) = close_range(points)?;
        Some(Self {
            start_date: first.date,
            end_date: last.date,
            count: points.len(),
            max_close,
            min_close,
        })
    }
}
