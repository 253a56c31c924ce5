use serde::{Deserialize, Serialize};

/// Contiguous, inclusive index range into the full series.
///
/// Invariant for a series of length `n > 0`: `start <= end <= n - 1`, and
/// `end - start >= 1` whenever `n >= 2`. Windows are replaced as a whole,
/// never patched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewWindow {
    pub start: usize,
    pub end: usize,
}

impl ViewWindow {
    /// Window covering a whole series of `full_len` points.
    #[must_use]
    pub fn full(full_len: usize) -> Option<Self> {
        (full_len > 0).then(|| Self {
            start: 0,
            end: full_len - 1,
        })
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start) + 1
    }

    #[must_use]
    pub fn is_full(self, full_len: usize) -> bool {
        Self::full(full_len) == Some(self)
    }

    #[must_use]
    pub fn contains(self, absolute_index: usize) -> bool {
        (self.start..=self.end).contains(&absolute_index)
    }

    /// Translates a window-local index into an absolute series index.
    #[must_use]
    pub fn to_absolute(self, local_index: usize) -> usize {
        self.start + local_index
    }

    #[must_use]
    pub fn satisfies_invariant(self, full_len: usize) -> bool {
        if full_len == 0 {
            return false;
        }
        let fits = self.start <= self.end && self.end < full_len;
        let wide_enough = full_len < 2 || self.end - self.start >= 1;
        fits && wide_enough
    }
}

fn last_index(full_len: usize) -> i64 {
    i64::try_from(full_len.saturating_sub(1)).unwrap_or(i64::MAX)
}

/// Clamps an arbitrary absolute range into a valid window.
///
/// Returns `None` when the series is empty, or when the clamped range spans
/// fewer than two points while the series has more than one.
#[must_use]
pub fn resolve_zoom_window(full_len: usize, abs_start: i64, abs_end: i64) -> Option<ViewWindow> {
    if full_len == 0 {
        return None;
    }
    let last = last_index(full_len);
    let lo = abs_start.min(abs_end).clamp(0, last);
    let hi = abs_start.max(abs_end).clamp(0, last);
    if full_len > 1 && hi - lo < 1 {
        return None;
    }
    Some(ViewWindow {
        start: lo as usize,
        end: hi as usize,
    })
}

/// Builds the window for one wheel step centered on `center_abs`.
///
/// The target length is `round(current_len * factor)` clamped to
/// `[min_len, full_len]`. A window that would overflow an edge is shifted
/// back inside so the requested length is kept.
#[must_use]
pub fn resolve_wheel_zoom_window(
    window: ViewWindow,
    full_len: usize,
    center_abs: usize,
    factor: f64,
    min_len: usize,
) -> Option<ViewWindow> {
    if full_len < 2 || !factor.is_finite() || factor <= 0.0 {
        return None;
    }
    let last = last_index(full_len);
    let floor = min_len.max(2).min(full_len);
    let requested = (window.len() as f64 * factor).round();
    let target_len = if requested.is_finite() && requested > 0.0 {
        (requested as usize).clamp(floor, full_len)
    } else {
        floor
    };

    let center = (center_abs.min(full_len - 1)) as i64;
    let target = target_len as i64;
    let half = target / 2;
    let mut start = center - half;
    let mut end = center + (target - half - 1);
    if start < 0 {
        end = (end - start).min(last);
        start = 0;
    }
    if end > last {
        let overflow = end - last;
        start = (start - overflow).max(0);
        end = last;
    }
    resolve_zoom_window(full_len, start, end)
}

/// Shifts the window by `delta` points, keeping its length.
///
/// Returns `None` when the shift is absorbed entirely by the series edges.
#[must_use]
pub fn resolve_pan_window(window: ViewWindow, full_len: usize, delta: i64) -> Option<ViewWindow> {
    if full_len < 2 || delta == 0 || !window.satisfies_invariant(full_len) {
        return None;
    }
    let span = (window.len() - 1) as i64;
    let max_start = last_index(full_len) - span;
    let start = (window.start as i64).saturating_add(delta).clamp(0, max_start);
    let next = ViewWindow {
        start: start as usize,
        end: (start + span) as usize,
    };
    (next != window).then_some(next)
}

#[cfg(test)]
mod tests {
    use super::{ViewWindow, resolve_pan_window, resolve_wheel_zoom_window, resolve_zoom_window};

    #[test]
    fn zoom_window_clamps_and_reorders() {
        assert_eq!(
            resolve_zoom_window(100, 120, -5),
            Some(ViewWindow { start: 0, end: 99 })
        );
        assert_eq!(
            resolve_zoom_window(100, 30, 10),
            Some(ViewWindow { start: 10, end: 30 })
        );
    }

    #[test]
    fn zoom_window_rejects_single_point_span() {
        assert_eq!(resolve_zoom_window(100, 7, 7), None);
        assert_eq!(resolve_zoom_window(100, 150, 200), None);
        assert_eq!(resolve_zoom_window(0, 0, 5), None);
    }

    #[test]
    fn zoom_window_allows_single_point_series() {
        assert_eq!(
            resolve_zoom_window(1, -3, 9),
            Some(ViewWindow { start: 0, end: 0 })
        );
    }

    #[test]
    fn wheel_zoom_out_grows_around_center() {
        let window = ViewWindow { start: 10, end: 30 };
        let next = resolve_wheel_zoom_window(window, 100, 20, 1.2, 2).expect("zoomed");
        assert_eq!(next.len(), 25);
        assert!(next.contains(20));
        assert_eq!(next, ViewWindow { start: 8, end: 32 });
    }

    #[test]
    fn wheel_zoom_shifts_instead_of_shrinking_at_edges() {
        let window = ViewWindow { start: 0, end: 20 };
        let next = resolve_wheel_zoom_window(window, 100, 1, 1.2, 2).expect("zoomed");
        assert_eq!(next, ViewWindow { start: 0, end: 24 });

        let window = ViewWindow { start: 79, end: 99 };
        let next = resolve_wheel_zoom_window(window, 100, 98, 1.2, 2).expect("zoomed");
        assert_eq!(next, ViewWindow { start: 75, end: 99 });
    }

    #[test]
    fn wheel_zoom_in_stops_at_two_points() {
        let window = ViewWindow { start: 4, end: 5 };
        let next = resolve_wheel_zoom_window(window, 100, 5, 0.8, 2).expect("zoomed");
        assert_eq!(next.len(), 2);
    }

    #[test]
    fn wheel_zoom_out_caps_at_full_length() {
        let window = ViewWindow { start: 0, end: 98 };
        let next = resolve_wheel_zoom_window(window, 100, 50, 1.2, 2).expect("zoomed");
        assert_eq!(next, ViewWindow { start: 0, end: 99 });
    }

    #[test]
    fn wheel_zoom_ignores_tiny_series() {
        let window = ViewWindow { start: 0, end: 0 };
        assert_eq!(resolve_wheel_zoom_window(window, 1, 0, 0.8, 2), None);
    }

    #[test]
    fn pan_keeps_length_and_clamps() {
        let window = ViewWindow { start: 10, end: 30 };
        assert_eq!(
            resolve_pan_window(window, 100, 5),
            Some(ViewWindow { start: 15, end: 35 })
        );
        assert_eq!(
            resolve_pan_window(window, 100, -50),
            Some(ViewWindow { start: 0, end: 20 })
        );
        assert_eq!(
            resolve_pan_window(window, 100, 1_000),
            Some(ViewWindow { start: 79, end: 99 })
        );
        assert_eq!(resolve_pan_window(ViewWindow { start: 0, end: 99 }, 100, 3), None);
    }
}
