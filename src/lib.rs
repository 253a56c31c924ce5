//! trend-chart: headless interactive time-series chart viewport.
//!
//! The crate models one price/score chart the way a trading console embeds
//! it: the host hands over an ordered daily series plus optional event dates,
//! and the engine owns the visible window, the pixel mapping, the pointer
//! state machine (hover, drag-select, wheel zoom) and a backend-agnostic
//! render frame that is rebuilt in full on every interaction.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
