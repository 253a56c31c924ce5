use tracing::{debug, trace};

use crate::core::{Series, ViewWindow, Viewport};
use crate::error::ChartResult;
use crate::extensions::{ChartPlugin, EventMarkers, PluginEvent};
use crate::interaction::InteractionState;
use crate::render::Renderer;

use super::validation::{validate_config, validate_render_style};
use super::{ChartEngineConfig, RenderStyle};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the loaded series, the current view window, the
/// pointer state machine and the renderer. Every state change that affects
/// pixels ends in a full redraw.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartEngineConfig,
    /// Mounted surface size; `None` while the host has no surface.
    pub(super) surface: Option<Viewport>,
    pub(super) series: Series,
    pub(super) markers: EventMarkers,
    pub(super) window: Option<ViewWindow>,
    pub(super) reset_zoom_visible: bool,
    /// Set by `show_loading`, cleared by the next `load`.
    pub(super) loading: bool,
    pub(super) interaction: InteractionState,
    pub(super) plugins: Vec<Box<dyn ChartPlugin>>,
}

impl<R: Renderer> ChartEngine<R> {
    /// Creates an engine mounted at `config.viewport` with no series loaded.
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        validate_config(&config)?;
        let surface = config.effective_viewport(config.viewport);
        debug!(
            width = surface.width,
            height = surface.height,
            "chart engine created"
        );
        Ok(Self {
            renderer,
            config,
            surface: Some(surface),
            series: Series::empty(),
            markers: EventMarkers::none(),
            window: None,
            reset_zoom_visible: false,
            loading: false,
            interaction: InteractionState::default(),
            plugins: Vec::new(),
        })
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.config.style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> ChartResult<()> {
        validate_render_style(style)?;
        self.config.style = style;
        self.render()
    }

    /// Attaches the engine to a host surface and draws the current state.
    ///
    /// A zero-sized surface is replaced by the configured fallback size.
    pub fn mount_surface(&mut self, viewport: Viewport) -> ChartResult<()> {
        let surface = self.config.effective_viewport(viewport);
        self.surface = Some(surface);
        debug!(
            width = surface.width,
            height = surface.height,
            "surface mounted"
        );
        self.render()
    }

    /// Detaches from the host surface. Loaded data and the window survive;
    /// interaction state does not.
    pub fn unmount_surface(&mut self) {
        if self.surface.take().is_some() {
            self.interaction.reset();
            debug!("surface unmounted");
        }
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    /// Redraws at a new surface size, keeping the current window.
    pub fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        if self.surface.is_none() {
            trace!("resize ignored while unmounted");
            return Ok(());
        }
        let surface = self.config.effective_viewport(viewport);
        self.surface = Some(surface);
        self.emit_plugin_event(PluginEvent::Resized {
            width: surface.width,
            height: surface.height,
        });
        self.render()
    }

    /// Full redraw of the mounted surface; no-op while unmounted.
    pub fn render(&mut self) -> ChartResult<()> {
        let Some(frame) = self.build_render_frame() else {
            trace!("render skipped: no surface mounted");
            return Ok(());
        };
        self.renderer.render(&frame)?;
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }

    /// Renders the frame into an external cairo context.
    ///
    /// Host draw callbacks hand in their own context; nothing is drawn while
    /// the engine is unmounted.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let Some(frame) = self.build_render_frame() else {
            return Ok(());
        };
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
