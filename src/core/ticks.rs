use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::CoordinateMapper;

/// Horizontal grid line with its value label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueTick {
    pub value: f64,
    pub y: f64,
}

/// Evenly spaced value ticks from the top of the plot (max) to the bottom
/// (min): `intervals + 1` ticks, or none when `intervals == 0`.
#[must_use]
pub fn value_ticks(mapper: &CoordinateMapper, intervals: usize) -> Vec<ValueTick> {
    if intervals == 0 {
        return Vec::new();
    }
    let plot = mapper.plot();
    let (min, max) = mapper.value_range();
    let value_step = (max - min) / intervals as f64;
    let pixel_step = plot.height / intervals as f64;
    (0..=intervals)
        .map(|i| ValueTick {
            value: max - value_step * i as f64,
            y: plot.top + pixel_step * i as f64,
        })
        .collect()
}

/// Window-local indices that carry a date label: first, middle and last,
/// with collisions removed for short windows.
#[must_use]
pub fn date_label_indices(count: usize) -> SmallVec<[usize; 3]> {
    let mut indices = SmallVec::new();
    if count == 0 {
        return indices;
    }
    for index in [0, (count - 1) / 2, count - 1] {
        if !indices.contains(&index) {
            indices.push(index);
        }
    }
    indices
}
