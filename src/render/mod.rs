mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, PolygonPrimitive, TextHAlign, TextPrimitive,
};

use crate::error::GreenResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully projected `RenderFrame`, so drawing code never
/// sees the series evaluator or session state.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> GreenResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
