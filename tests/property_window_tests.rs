use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use trend_chart::api::{ChartEngine, ChartEngineConfig};
use trend_chart::core::{
    CoordinateMapper, DataPoint, PlotPadding, PlotRect, Series, ViewWindow, Viewport,
    resolve_wheel_zoom_window, resolve_zoom_window,
};
use trend_chart::extensions::EventMarkers;
use trend_chart::render::NullRenderer;

fn daily_series(len: usize) -> Series {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
    Series::new(
        (0..len)
            .map(|i| DataPoint::new(start + Days::new(i as u64), 50.0 + (i % 7) as f64))
            .collect(),
    )
    .expect("valid series")
}

fn loaded_engine(len: usize) -> ChartEngine<NullRenderer> {
    let config = ChartEngineConfig::new(Viewport::new(640, 320));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .load(daily_series(len), EventMarkers::none())
        .expect("load");
    engine
}

proptest! {
    #[test]
    fn zoom_then_reset_round_trips_to_full_range(
        len in 1usize..300,
        start in -1_000i64..1_000,
        end in -1_000i64..1_000
    ) {
        let mut engine = loaded_engine(len);
        engine.zoom_to_window(start, end).expect("zoom never fails");
        engine.reset_zoom().expect("reset never fails");

        prop_assert_eq!(engine.window(), Some(ViewWindow { start: 0, end: len - 1 }));
        prop_assert!(!engine.reset_zoom_visible());
    }

    #[test]
    fn zoom_requests_always_satisfy_window_invariant(
        len in 1usize..500,
        start in any::<i64>(),
        end in any::<i64>()
    ) {
        let mut engine = loaded_engine(len);
        engine.zoom_to_window(start, end).expect("zoom never fails");
        let window = engine.window().expect("window");
        prop_assert!(window.satisfies_invariant(len));
        prop_assert_eq!(
            engine.reset_zoom_visible(),
            !window.is_full(len)
        );

        if let Some(resolved) = resolve_zoom_window(len, start, end) {
            prop_assert_eq!(window, resolved);
        }
    }

    #[test]
    fn to_index_is_monotonic_in_pixel_x(
        count in 1usize..400,
        width in 100u32..3_000,
        x1 in -500.0f64..3_500.0,
        dx in 0.0f64..3_000.0
    ) {
        let plot = PlotRect::from_viewport(Viewport::new(width, 400), PlotPadding::default());
        let mapper = CoordinateMapper::from_value_range(count, 1.0, 2.0, plot);
        let a = mapper.to_index(x1);
        let b = mapper.to_index(x1 + dx);

        prop_assert!(a <= b);
        prop_assert!(b < count);
    }

    #[test]
    fn wheel_zoom_keeps_requested_length_and_center(
        full_len in 2usize..400,
        start_seed in 0usize..400,
        len_seed in 0usize..400,
        center_seed in 0usize..400,
        zoom_out in any::<bool>()
    ) {
        let start = start_seed % (full_len - 1);
        let end = (start + 1 + len_seed % (full_len - start - 1)).min(full_len - 1);
        let window = ViewWindow { start, end };
        let center = start + center_seed % window.len();
        let factor = if zoom_out { 1.2 } else { 0.8 };

        let next = resolve_wheel_zoom_window(window, full_len, center, factor, 2)
            .expect("multi-point series always zooms");
        let expected_len = ((window.len() as f64 * factor).round() as usize).clamp(2, full_len);

        prop_assert!(next.satisfies_invariant(full_len));
        prop_assert_eq!(next.len(), expected_len);
        prop_assert!(next.contains(center));
    }

    #[test]
    fn sub_threshold_drag_never_changes_window(
        anchor in 48.0f64..616.0,
        dx in -5.99f64..5.99,
        y in 20.0f64..288.0
    ) {
        let mut engine = loaded_engine(100);
        engine.zoom_to_window(10, 60).expect("zoom");
        let before = engine.window();

        prop_assert!(engine.pointer_down(anchor, y).expect("pointer down"));
        engine.pointer_move(anchor + dx, y).expect("pointer move");
        let zoomed = engine.pointer_up(anchor + dx).expect("pointer up");

        prop_assert!(!zoomed);
        prop_assert_eq!(engine.window(), before);
    }
}
