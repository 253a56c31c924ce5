use approx::assert_abs_diff_eq;
use chrono::{Days, NaiveDate};
use trend_chart::core::{
    CoordinateMapper, DataPoint, PlotPadding, PlotRect, ProjectedWindow, Series, ViewWindow,
    Viewport, date_label_indices, value_ticks,
};

fn series_from_closes(closes: &[f64]) -> Series {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
    Series::new(
        closes
            .iter()
            .enumerate()
            .map(|(i, close)| DataPoint::new(start + Days::new(i as u64), *close))
            .collect(),
    )
    .expect("valid series")
}

fn plot() -> PlotRect {
    PlotRect::from_viewport(Viewport::new(640, 320), PlotPadding::default())
}

#[test]
fn plot_rect_applies_default_padding() {
    let plot = plot();
    assert_eq!(plot.left, 48.0);
    assert_eq!(plot.top, 20.0);
    assert_eq!(plot.width, 568.0);
    assert_eq!(plot.height, 268.0);
    assert_eq!(plot.right(), 616.0);
    assert_eq!(plot.bottom(), 288.0);
}

#[test]
fn tiny_surface_keeps_plot_non_degenerate() {
    let plot = PlotRect::from_viewport(Viewport::new(10, 10), PlotPadding::default());
    assert_eq!(plot.width, 1.0);
    assert_eq!(plot.height, 1.0);
}

#[test]
fn x_mapping_spreads_points_across_plot_width() {
    let series = series_from_closes(&[10.0, 20.0, 15.0, 30.0, 25.0]);
    let mapper = CoordinateMapper::new(series.points(), plot());

    assert_abs_diff_eq!(mapper.step().expect("step"), 142.0);
    assert_abs_diff_eq!(mapper.to_x(0), 48.0);
    assert_abs_diff_eq!(mapper.to_x(2), 332.0);
    assert_abs_diff_eq!(mapper.to_x(4), 616.0);
}

#[test]
fn y_mapping_puts_max_on_top_and_min_on_bottom() {
    let series = series_from_closes(&[10.0, 20.0, 30.0]);
    let mapper = CoordinateMapper::new(series.points(), plot());

    assert_abs_diff_eq!(mapper.to_y(30.0), 20.0);
    assert_abs_diff_eq!(mapper.to_y(10.0), 288.0);
    assert_abs_diff_eq!(mapper.to_y(20.0), 154.0);
}

#[test]
fn flat_series_renders_on_midline() {
    let series = series_from_closes(&[42.0, 42.0, 42.0]);
    let projected = ProjectedWindow::build(
        &series,
        ViewWindow { start: 0, end: 2 },
        Viewport::new(640, 320),
        PlotPadding::default(),
    )
    .expect("projection");

    for point in &projected.points {
        assert!(point.y.is_finite());
        assert_abs_diff_eq!(point.y, 154.0);
    }
}

#[test]
fn single_point_is_centered_without_step() {
    let series = series_from_closes(&[5.0]);
    let mapper = CoordinateMapper::new(series.points(), plot());

    assert!(mapper.step().is_none());
    assert_abs_diff_eq!(mapper.to_x(0), 332.0);
    assert_abs_diff_eq!(mapper.to_y(5.0), 154.0);
    assert_eq!(mapper.to_index(0.0), 0);
    assert_eq!(mapper.to_index(639.0), 0);
}

#[test]
fn to_index_inverts_to_x_for_every_point() {
    let closes: Vec<f64> = (0..37).map(|i| 50.0 + f64::from(i) * 0.5).collect();
    let series = series_from_closes(&closes);
    let mapper = CoordinateMapper::new(series.points(), plot());

    for index in 0..closes.len() {
        assert_eq!(mapper.to_index(mapper.to_x(index)), index);
    }
    assert_eq!(mapper.to_index(-500.0), 0);
    assert_eq!(mapper.to_index(5_000.0), closes.len() - 1);
}

#[test]
fn projection_reports_absolute_indices_for_zoomed_window() {
    let closes: Vec<f64> = (0..100).map(|i| 100.0 + f64::from(i)).collect();
    let series = series_from_closes(&closes);
    let projected = ProjectedWindow::build(
        &series,
        ViewWindow { start: 10, end: 30 },
        Viewport::new(640, 320),
        PlotPadding::default(),
    )
    .expect("projection");

    assert_eq!(projected.points.len(), 21);
    assert_abs_diff_eq!(projected.step().expect("step"), 28.4);
    let first = projected.points.first().expect("first");
    let last = projected.points.last().expect("last");
    assert_eq!((first.local_index, first.absolute_index), (0, 10));
    assert_eq!((last.local_index, last.absolute_index), (20, 30));
    // Min and max are taken from the visible window only.
    assert_abs_diff_eq!(first.y, 288.0);
    assert_abs_diff_eq!(last.y, 20.0);
}

#[test]
fn projection_rejects_windows_outside_series() {
    let series = series_from_closes(&[1.0, 2.0, 3.0]);
    let viewport = Viewport::new(640, 320);
    let padding = PlotPadding::default();

    let build = |series: &Series, start, end| {
        ProjectedWindow::build(series, ViewWindow { start, end }, viewport, padding)
    };

    assert!(build(&series, 1, 5).is_none());
    assert!(build(&series, 1, 1).is_none());
    assert!(build(&Series::empty(), 0, 0).is_none());
}

#[test]
fn value_ticks_cover_range_in_four_intervals() {
    let series = series_from_closes(&[100.0, 140.0, 120.0]);
    let mapper = CoordinateMapper::new(series.points(), plot());
    let ticks = value_ticks(&mapper, 4);

    assert_eq!(ticks.len(), 5);
    let values: Vec<f64> = ticks.iter().map(|tick| tick.value).collect();
    assert_eq!(values, vec![140.0, 130.0, 120.0, 110.0, 100.0]);
    assert_abs_diff_eq!(ticks[0].y, 20.0);
    assert_abs_diff_eq!(ticks[4].y, 288.0);
    for tick in &ticks {
        assert_abs_diff_eq!(mapper.to_y(tick.value), tick.y, epsilon = 1e-9);
    }
}

#[test]
fn date_labels_use_first_middle_and_last_index() {
    assert_eq!(date_label_indices(21).as_slice(), &[0, 10, 20]);
    assert_eq!(date_label_indices(2).as_slice(), &[0, 1]);
    assert_eq!(date_label_indices(1).as_slice(), &[0]);
}
