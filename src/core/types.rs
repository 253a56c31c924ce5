use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::{ChartError, ChartResult};

/// Pixel size of the host rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    #[must_use]
    pub fn width_px(self) -> f64 {
        f64::from(self.width)
    }

    #[must_use]
    pub fn height_px(self) -> f64 {
        f64::from(self.height)
    }
}

/// Space reserved around the plot area for axis labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPadding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for PlotPadding {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 24.0,
            bottom: 32.0,
            left: 48.0,
        }
    }
}

impl PlotPadding {
    pub fn validate(self) -> ChartResult<Self> {
        for (name, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "padding `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Padding-adjusted plot rectangle in surface pixels.
///
/// Width and height never drop below one pixel so the mapping stays finite on
/// surfaces smaller than their padding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotRect {
    #[must_use]
    pub fn from_viewport(viewport: Viewport, padding: PlotPadding) -> Self {
        Self {
            left: padding.left,
            top: padding.top,
            width: (viewport.width_px() - padding.left - padding.right).max(1.0),
            height: (viewport.height_px() - padding.top - padding.bottom).max(1.0),
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn clamp_x(self, x: f64) -> f64 {
        x.clamp(self.left, self.right())
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }
}

/// One trading-day observation.
///
/// Only `close_price` drives layout; the optional metrics are shown in the
/// hover tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    #[serde(alias = "trade_date")]
    pub date: NaiveDate,
    pub close_price: f64,
    #[serde(default)]
    pub change_percent: Option<f64>,
    #[serde(default)]
    pub return_5d: Option<f64>,
    #[serde(default)]
    pub volume_ratio: Option<f64>,
    #[serde(default)]
    pub score: Option<f64>,
}

impl DataPoint {
    #[must_use]
    pub fn new(date: NaiveDate, close_price: f64) -> Self {
        Self {
            date,
            close_price,
            change_percent: None,
            return_5d: None,
            volume_ratio: None,
            score: None,
        }
    }

    pub fn from_decimal(date: NaiveDate, close_price: Decimal) -> ChartResult<Self> {
        Ok(Self::new(date, decimal_to_f64(close_price, "close_price")?))
    }

    #[must_use]
    pub fn with_change_percent(mut self, value: f64) -> Self {
        self.change_percent = Some(value);
        self
    }

    #[must_use]
    pub fn with_return_5d(mut self, value: f64) -> Self {
        self.return_5d = Some(value);
        self
    }

    #[must_use]
    pub fn with_volume_ratio(mut self, value: f64) -> Self {
        self.volume_ratio = Some(value);
        self
    }

    #[must_use]
    pub fn with_score(mut self, value: f64) -> Self {
        self.score = Some(value);
        self
    }
}
