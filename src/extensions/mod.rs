//! Marker overlays and host observer hooks.

pub mod markers;
pub mod plugins;

pub use markers::{EventMarkers, PlacedMarker, place_event_markers};
pub use plugins::{ChartPlugin, PluginContext, PluginEvent};
