use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::series::close_range;
use crate::core::{DataPoint, PlotPadding, PlotRect, Series, ViewWindow, Viewport};

/// Linear index/value to pixel transforms for one window on one surface.
///
/// - `to_x(i) = left + i * step` with `step = width / (n - 1)`; a single
///   point sits at the horizontal center.
/// - `to_y(v) = top + (1 - (v - min) / (max - min)) * height`; a flat window
///   is widened to a unit range centered on its value, so every point lands
///   on the vertical midline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    plot: PlotRect,
    count: usize,
    value_min: f64,
    value_max: f64,
}

impl CoordinateMapper {
    #[must_use]
    pub fn new(points: &[DataPoint], plot: PlotRect) -> Self {
        let (min, max) = close_range(points).unwrap_or((0.0, 0.0));
        Self::from_value_range(points.len(), min, max, plot)
    }

    #[must_use]
    pub fn from_value_range(count: usize, min: f64, max: f64, plot: PlotRect) -> Self {
        let (value_min, value_max) = if max > min {
            (min, max)
        } else {
            let center = if min.is_finite() { min } else { 0.0 };
            (center - 0.5, center + 0.5)
        };
        Self {
            plot,
            count,
            value_min,
            value_max,
        }
    }

    #[must_use]
    pub fn plot(&self) -> PlotRect {
        self.plot
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Value domain used for the y mapping (already widened when flat).
    #[must_use]
    pub fn value_range(&self) -> (f64, f64) {
        (self.value_min, self.value_max)
    }

    /// Pixel distance between consecutive points; `None` below two points.
    #[must_use]
    pub fn step(&self) -> Option<f64> {
        (self.count > 1).then(|| self.plot.width / (self.count - 1) as f64)
    }

    #[must_use]
    pub fn to_x(&self, local_index: usize) -> f64 {
        match self.step() {
            Some(step) => self.plot.left + local_index as f64 * step,
            None => self.plot.left + self.plot.width / 2.0,
        }
    }

    #[must_use]
    pub fn to_y(&self, value: f64) -> f64 {
        let range = self.value_max - self.value_min;
        let ratio = (value - self.value_min) / range;
        self.plot.top + (1.0 - ratio) * self.plot.height
    }

    /// Nearest window-local index under `pixel_x`, clamped to `[0, n - 1]`.
    #[must_use]
    pub fn to_index(&self, pixel_x: f64) -> usize {
        let Some(step) = self.step() else {
            return 0;
        };
        if pixel_x.is_nan() {
            return 0;
        }
        let plot_x = (pixel_x - self.plot.left).clamp(0.0, self.plot.width);
        let index = (plot_x / step).round() as usize;
        index.min(self.count - 1)
    }

    #[must_use]
    pub fn project(&self, window: ViewWindow, points: &[DataPoint]) -> Vec<ProjectedPoint> {
        // Large windows can be projected in parallel; output order and values
        // match the sequential path.
        #[cfg(feature = "parallel-projection")]
        {
            points
                .par_iter()
                .enumerate()
                .map(|(local_index, point)| self.project_single(window, local_index, *point))
                .collect()
        }

        #[cfg(not(feature = "parallel-projection"))]
        {
            points
                .iter()
                .enumerate()
                .map(|(local_index, point)| self.project_single(window, local_index, *point))
                .collect()
        }
    }

    fn project_single(
        &self,
        window: ViewWindow,
        local_index: usize,
        point: DataPoint,
    ) -> ProjectedPoint {
        ProjectedPoint {
            local_index,
            absolute_index: window.to_absolute(local_index),
            x: self.to_x(local_index),
            y: self.to_y(point.close_price),
            point,
        }
    }
}

/// One visible observation with its pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub local_index: usize,
    pub absolute_index: usize,
    pub x: f64,
    pub y: f64,
    pub point: DataPoint,
}

/// Ephemeral per-draw projection of the current window.
///
/// Recomputed from the window and surface size on every draw, never cached
/// across renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedWindow {
    pub window: ViewWindow,
    pub mapper: CoordinateMapper,
    pub points: Vec<ProjectedPoint>,
}

impl ProjectedWindow {
    /// Projects `window` of `series` onto a surface; `None` for an empty
    /// series or a window that does not fit it.
    #[must_use]
    pub fn build(
        series: &Series,
        window: ViewWindow,
        viewport: Viewport,
        padding: PlotPadding,
    ) -> Option<Self> {
        if !window.satisfies_invariant(series.len()) {
            return None;
        }
        let visible = series.window_slice(window);
        let mapper = CoordinateMapper::new(visible, PlotRect::from_viewport(viewport, padding));
        let points = mapper.project(window, visible);
        Some(Self {
            window,
            mapper,
            points,
        })
    }

    #[must_use]
    pub fn step(&self) -> Option<f64> {
        self.mapper.step()
    }

    #[must_use]
    pub fn plot(&self) -> PlotRect {
        self.mapper.plot()
    }

    /// Nearest visible point under `pixel_x`.
    #[must_use]
    pub fn nearest(&self, pixel_x: f64) -> Option<&ProjectedPoint> {
        self.points.get(self.mapper.to_index(pixel_x))
    }
}
