use chrono::NaiveDate;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{ProjectedWindow, parse_calendar_date};
use crate::error::{ChartError, ChartResult};

/// Externally supplied dates worth highlighting (for example backtest hits).
///
/// Markers are matched to points by date only; a date outside the current
/// window is simply not drawn.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventMarkers {
    dates: IndexSet<NaiveDate>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MarkerEntry {
    Text(String),
    Event {
        #[serde(alias = "trade_date")]
        date: Option<String>,
    },
}

impl EventMarkers {
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_dates(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    /// Builds markers from backend date strings, skipping entries that do not
    /// carry a calendar date.
    #[must_use]
    pub fn from_date_strings<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dates = IndexSet::new();
        for value in values {
            let text = value.as_ref();
            match parse_calendar_date(text) {
                Some(date) => {
                    dates.insert(date);
                }
                None => warn!(value = text, "skipping event marker without a calendar date"),
            }
        }
        Self { dates }
    }

    /// Parses a JSON array of date strings or event objects carrying a
    /// `trade_date` (or `date`) field.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let entries: Vec<MarkerEntry> = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse markers: {e}")))?;
        let texts = entries.into_iter().filter_map(|entry| match entry {
            MarkerEntry::Text(text) => Some(text),
            MarkerEntry::Event { date } => date,
        });
        Ok(Self::from_date_strings(texts))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }
}

/// Marker resolved against a visible point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedMarker {
    pub date: NaiveDate,
    pub absolute_index: usize,
    pub x: f64,
    pub y: f64,
}

/// Resolves markers to the visible points sharing their date, in window order.
#[must_use]
pub fn place_event_markers(markers: &EventMarkers, projected: &ProjectedWindow) -> Vec<PlacedMarker> {
    if markers.is_empty() {
        return Vec::new();
    }
    projected
        .points
        .iter()
        .filter(|projected| markers.contains(projected.point.date))
        .map(|projected| PlacedMarker {
            date: projected.point.date,
            absolute_index: projected.absolute_index,
            x: projected.x,
            y: projected.y,
        })
        .collect()
}
