use chrono::{Days, NaiveDate};
use trend_chart::api::{ChartEngine, ChartEngineConfig, WheelOutcome};
use trend_chart::core::{DataPoint, Series, ViewWindow, Viewport};
use trend_chart::extensions::EventMarkers;
use trend_chart::interaction::{InteractionMode, InteractionTuning};
use trend_chart::render::NullRenderer;

fn daily_series(len: usize) -> Series {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
    Series::new(
        (0..len)
            .map(|i| DataPoint::new(start + Days::new(i as u64), 100.0 + i as f64))
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

fn x_of_absolute(engine: &ChartEngine<NullRenderer>, absolute_index: usize) -> f64 {
    let projected = engine.projected_window().expect("projection");
    projected.mapper.to_x(absolute_index - projected.window.start)
}

#[test]
fn wheel_zoom_out_grows_window_around_cursor() {
    let mut engine = loaded_engine(100);
    engine.zoom_to_window(10, 30).expect("zoom");

    let x = x_of_absolute(&engine, 20);
    let outcome = engine.wheel(x, 120.0).expect("wheel");

    assert_eq!(
        outcome,
        WheelOutcome {
            prevent_default: true,
            zoomed: true
        }
    );
    let window = engine.window().expect("window");
    assert_eq!(window.len(), 25);
    assert!(window.contains(20));
    assert_eq!(window, ViewWindow { start: 8, end: 32 });
}

#[test]
fn wheel_zoom_in_shrinks_window() {
    let mut engine = loaded_engine(100);
    let x = x_of_absolute(&engine, 50);

    engine.wheel(x, -120.0).expect("wheel");
    let window = engine.window().expect("window");
    assert_eq!(window.len(), 80);
    assert!(window.contains(50));
    assert!(engine.reset_zoom_visible());
}

#[test]
fn wheel_zoom_near_edge_shifts_instead_of_shrinking() {
    let mut engine = loaded_engine(100);
    engine.zoom_to_window(0, 20).expect("zoom");

    let x = x_of_absolute(&engine, 1);
    engine.wheel(x, 120.0).expect("wheel");
    assert_eq!(engine.window(), Some(ViewWindow { start: 0, end: 24 }));

    engine.zoom_to_window(79, 99).expect("zoom");
    let x = x_of_absolute(&engine, 98);
    engine.wheel(x, 120.0).expect("wheel");
    assert_eq!(engine.window(), Some(ViewWindow { start: 75, end: 99 }));
}

#[test]
fn wheel_zoom_out_is_capped_at_full_series() {
    let mut engine = loaded_engine(100);
    engine.zoom_to_window(5, 94).expect("zoom");

    engine.wheel(320.0, 120.0).expect("wheel");
    assert_eq!(engine.window(), Some(ViewWindow { start: 0, end: 99 }));
    assert!(!engine.reset_zoom_visible());

    let outcome = engine.wheel(320.0, 120.0).expect("wheel at limit");
    assert!(outcome.prevent_default);
    assert!(!outcome.zoomed);
}

#[test]
fn wheel_zoom_in_never_goes_below_two_points() {
    let mut engine = loaded_engine(100);
    engine.zoom_to_window(40, 42).expect("zoom");

    for _ in 0..5 {
        engine.wheel(330.0, -120.0).expect("wheel");
    }
    let window = engine.window().expect("window");
    assert_eq!(window.len(), 2);
}

#[test]
fn zero_delta_prevents_scroll_without_zooming() {
    let mut engine = loaded_engine(100);
    let outcome = engine.wheel(300.0, 0.0).expect("wheel");
    assert!(outcome.prevent_default);
    assert!(!outcome.zoomed);
    assert_eq!(engine.window(), Some(ViewWindow { start: 0, end: 99 }));
}

#[test]
fn wheel_without_data_leaves_default_scroll() {
    let config = ChartEngineConfig::new(Viewport::new(640, 320));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    let outcome = engine.wheel(300.0, 120.0).expect("wheel");
    assert_eq!(outcome, WheelOutcome::default());
}

#[test]
fn wheel_is_ignored_while_dragging() {
    let mut engine = loaded_engine(100);
    assert!(engine.pointer_down(200.0, 150.0).expect("pointer down"));

    let outcome = engine.wheel(200.0, -120.0).expect("wheel");
    assert!(outcome.prevent_default);
    assert!(!outcome.zoomed);
    assert_eq!(engine.interaction_mode(), InteractionMode::Dragging);
    assert_eq!(engine.window(), Some(ViewWindow { start: 0, end: 99 }));
}

#[test]
fn wheel_zoom_clears_hover_focus() {
    let mut engine = loaded_engine(100);
    engine.pointer_move(300.0, 150.0).expect("hover");
    assert!(engine.hover().is_some());

    engine.wheel(300.0, -120.0).expect("wheel");
    assert!(engine.hover().is_none());
    assert_eq!(engine.interaction_mode(), InteractionMode::Idle);
}

#[test]
fn custom_tuning_changes_zoom_step() {
    let tuning = InteractionTuning {
        wheel_zoom_in_factor: 0.5,
        wheel_zoom_out_factor: 2.0,
        ..InteractionTuning::default()
    };
    let config = ChartEngineConfig::new(Viewport::new(640, 320)).with_interaction_tuning(tuning);
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .load(daily_series(100), EventMarkers::none())
        .expect("load");

    engine.wheel(332.0, -1.0).expect("wheel");
    assert_eq!(engine.window().expect("window").len(), 50);
}
