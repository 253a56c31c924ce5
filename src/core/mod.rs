pub mod mapper;
pub mod primitives;
pub mod series;
pub mod ticks;
pub mod types;
pub mod window;

pub use mapper::{CoordinateMapper, ProjectedPoint, ProjectedWindow};
pub use primitives::parse_calendar_date;
pub use series::{Series, WindowSummary, close_range};
pub use ticks::{ValueTick, date_label_indices, value_ticks};
pub use types::{DataPoint, PlotPadding, PlotRect, Viewport};
pub use window::{ViewWindow, resolve_pan_window, resolve_wheel_zoom_window, resolve_zoom_window};
