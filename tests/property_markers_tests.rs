use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use trend_chart::api::{ChartEngine, ChartEngineConfig};
use trend_chart::core::{DataPoint, Series, Viewport};
use trend_chart::extensions::EventMarkers;
use trend_chart::render::{CanvasLayerKind, NullRenderer};

fn origin() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 2).expect("valid date")
}

/// Builds a series whose trading days skip `gap` calendar days between points.
fn gapped_series(gaps: &[u64], closes: &[f64]) -> Series {
    let mut date = origin();
    let points = gaps
        .iter()
        .zip(closes)
        .map(|(gap, close)| {
            date = date + Days::new(*gap);
            DataPoint::new(date, *close)
        })
        .collect();
    Series::new(points).expect("valid series")
}

fn series_inputs() -> impl Strategy<Value = (Vec<u64>, Vec<f64>)> {
    (1usize..120).prop_flat_map(|len| {
        (
            prop::collection::vec(1u64..4, len),
            prop::collection::vec(1.0f64..5_000.0, len),
        )
    })
}

proptest! {
    #[test]
    fn placed_markers_are_exactly_the_visible_marked_points(
        (gaps, closes) in series_inputs(),
        start in -20i64..150,
        end in -20i64..150,
        marker_offsets in prop::collection::vec(0u64..400, 0..40)
    ) {
        let series = gapped_series(&gaps, &closes);
        let marker_dates: BTreeSet<NaiveDate> = marker_offsets
            .iter()
            .map(|offset| origin() + Days::new(*offset))
            .collect();

        let config = ChartEngineConfig::new(Viewport::new(640, 320));
        let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
        engine
            .load(series, EventMarkers::from_dates(marker_dates.iter().copied()))
            .expect("load");
        engine.zoom_to_window(start, end).expect("zoom never fails");

        let projected = engine.projected_window().expect("projection");
        let placed = engine.visible_markers();
        let expected: Vec<_> = projected
            .points
            .iter()
            .filter(|point| marker_dates.contains(&point.point.date))
            .collect();

        prop_assert_eq!(placed.len(), expected.len());
        for (marker, point) in placed.iter().zip(&expected) {
            prop_assert_eq!(marker.date, point.point.date);
            prop_assert_eq!(marker.absolute_index, point.absolute_index);
            prop_assert_eq!(marker.x, point.x);
            prop_assert_eq!(marker.y, point.y);
        }

        let placed_dates: BTreeSet<NaiveDate> = placed.iter().map(|marker| marker.date).collect();
        prop_assert_eq!(placed_dates.len(), placed.len());
        for date in &marker_dates {
            let visible = projected.points.iter().any(|point| point.point.date == *date);
            prop_assert_eq!(placed_dates.contains(date), visible);
        }

        let frame = engine.build_render_frame().expect("frame");
        let circles = &frame.layer(CanvasLayerKind::Markers).expect("markers").circles;
        prop_assert_eq!(circles.len(), placed.len());
        for (circle, marker) in circles.iter().zip(&placed) {
            prop_assert_eq!((circle.cx, circle.cy), (marker.x, marker.y));
        }
    }
}
