mod data_controller;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_snapshot;
mod interaction_controller;
mod label_format;
mod plugin_dispatch;
mod plugin_registry;
mod render_frame_builder;
mod render_style;
mod snapshot_controller;
mod tooltip;
mod validation;

pub use engine::ChartEngine;
pub use engine_config::{ChartEngineConfig, TooltipConfig};
pub use engine_snapshot::EngineSnapshot;
pub use interaction_controller::WheelOutcome;
pub use label_format::MISSING_VALUE;
pub use render_style::RenderStyle;
pub use tooltip::{TooltipContent, TooltipRow, TooltipView};
