use tracing::{debug, trace, warn};

use crate::core::{Field, Grid, SourcePoint, ViewAngles, Viewport};
use crate::error::{GreenError, GreenResult};
use crate::render::{RenderFrame, Renderer};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use super::surface_render_frame_builder::build_surface_frame;
use super::{PresentationState, Readout, SessionConfig, SurfaceScene, parse_source};

type ErrorNotifier = Box<dyn FnMut(&GreenError)>;

/// Presentation-layer facade driven by a UI event loop.
///
/// Owns the fixed sample grid, the mutable order/source record, and the
/// scene derived from them. Every successful mutation re-runs the evaluator
/// over the whole grid and replaces the scene and readout; rejected or
/// absorbed requests leave all three untouched.
pub struct GreenSession<R: Renderer> {
    renderer: R,
    config: SessionConfig,
    grid: Grid,
    state: PresentationState,
    scene: SurfaceScene,
    readout: Readout,
    generation: u64,
    error_notifier: Option<ErrorNotifier>,
}

impl<R: Renderer> GreenSession<R> {
    pub fn new(renderer: R, config: SessionConfig) -> GreenResult<Self> {
        config.validate()?;
        let grid = Grid::uniform(config.grid_resolution)?;
        let state = PresentationState::new(config.initial_order, config.initial_source);
        if !state.source.is_interior() {
            warn!(
                x0 = state.source.x,
                y0 = state.source.y,
                "initial source lies outside the open unit square"
            );
        }
        trace!(
            order = state.order.get(),
            x0 = state.source.x,
            y0 = state.source.y,
            "evaluating series over grid"
        );
        let scene = SurfaceScene::build(&grid, &state, &config.style);
        let readout = Readout::new(&state);
        debug!(
            rows = grid.shape().0,
            cols = grid.shape().1,
            order = state.order.get(),
            "session initialized"
        );

        Ok(Self {
            renderer,
            config,
            grid,
            state,
            scene,
            readout,
            generation: 1,
            error_notifier: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn state(&self) -> PresentationState {
        self.state
    }

    #[must_use]
    pub fn order(&self) -> u32 {
        self.state.order.get()
    }

    #[must_use]
    pub fn source(&self) -> SourcePoint {
        self.state.source
    }

    /// Field of the most recent evaluation.
    #[must_use]
    pub fn field(&self) -> &Field {
        &self.scene.field
    }

    #[must_use]
    pub fn scene(&self) -> &SurfaceScene {
        &self.scene
    }

    #[must_use]
    pub fn readout(&self) -> &Readout {
        &self.readout
    }

    /// Number of scene rebuilds so far, including the initial one.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    /// Resizes the drawing target. The field is not re-evaluated.
    pub fn set_viewport(&mut self, viewport: Viewport) -> GreenResult<()> {
        viewport.validate()?;
        self.config.viewport = viewport;
        Ok(())
    }

    #[must_use]
    pub fn view_angles(&self) -> ViewAngles {
        self.config.view_angles
    }

    /// Rotates the 3D view. The field is not re-evaluated.
    pub fn set_view_angles(&mut self, view_angles: ViewAngles) -> GreenResult<()> {
        view_angles.validate()?;
        self.config.view_angles = view_angles;
        trace!(
            elevation = view_angles.elevation_deg,
            azimuth = view_angles.azimuth_deg,
            "view angles changed"
        );
        Ok(())
    }

    /// Registers the hook invoked once per rejected coordinate entry.
    pub fn set_error_notifier(&mut self, notifier: impl FnMut(&GreenError) + 'static) {
        self.error_notifier = Some(Box::new(notifier));
    }

    /// Raises the order by one. Returns `false` at the upper bound.
    pub fn increment_order(&mut self) -> bool {
        if !self.state.order.increment() {
            trace!(order = self.order(), "order increment absorbed at upper bound");
            return false;
        }
        debug!(order = self.order(), "truncation order changed");
        self.refresh();
        true
    }

    /// Lowers the order by one. Returns `false` at the lower bound.
    pub fn decrement_order(&mut self) -> bool {
        if !self.state.order.decrement() {
            trace!(order = self.order(), "order decrement absorbed at lower bound");
            return false;
        }
        debug!(order = self.order(), "truncation order changed");
        self.refresh();
        true
    }

    /// Replaces the source point.
    ///
    /// Points outside the open unit square are accepted and only logged;
    /// the series then evaluates a periodic extension.
    pub fn set_source(&mut self, source: SourcePoint) -> GreenResult<()> {
        if !source.is_finite() {
            return Err(GreenError::InvalidData(
                "source coordinates must be finite".to_owned(),
            ));
        }
        if !source.is_interior() {
            warn!(
                x0 = source.x,
                y0 = source.y,
                "source lies outside the open unit square"
            );
        }

        self.state.source = source;
        debug!(x0 = source.x, y0 = source.y, "source point changed");
        self.refresh();
        Ok(())
    }

    /// Parses both entries and replaces the source point.
    ///
    /// On a parse failure the state, field and scene are unchanged, the error
    /// notifier fires once, and the error is returned.
    pub fn set_source_from_text(&mut self, x_text: &str, y_text: &str) -> GreenResult<()> {
        match parse_source(x_text, y_text) {
            Ok(source) => self.set_source(source),
            Err(err) => {
                warn!(error = %err, "rejected source coordinates");
                if let Some(notifier) = self.error_notifier.as_mut() {
                    notifier(&err);
                }
                Err(err)
            }
        }
    }

    pub fn build_render_frame(&self) -> GreenResult<RenderFrame> {
        build_surface_frame(
            &self.grid,
            &self.scene,
            self.config.viewport,
            self.config.view_angles,
            &self.config.style,
        )
    }

    pub fn render(&mut self) -> GreenResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    /// Renders into an external cairo context, e.g. from a GTK draw callback.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> GreenResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn refresh(&mut self) {
        trace!(
            order = self.order(),
            x0 = self.state.source.x,
            y0 = self.state.source.y,
            "evaluating series over grid"
        );
        self.scene = SurfaceScene::build(&self.grid, &self.state, &self.config.style);
        self.readout = Readout::new(&self.state);
        self.generation += 1;
        debug!(
            generation = self.generation,
            z_min = self.scene.z_range.min,
            z_max = self.scene.z_range.max,
            "scene refreshed"
        );
    }
}
