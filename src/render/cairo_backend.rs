use std::f64::consts::TAU;
use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::error::{GreenError, GreenResult};
use crate::render::{Color, RenderFrame, Renderer, TextHAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub polygons_drawn: usize,
    pub lines_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderers that can draw into an external Cairo context, such as a GTK
/// `DrawingArea` callback.
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> GreenResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// `Renderer::render` paints into an owned image surface (see `write_png`);
/// `CairoContextRenderer` paints into a caller-owned context.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> GreenResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(GreenError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Writes the offscreen surface to `path` as PNG.
    pub fn write_png(&self, path: impl AsRef<Path>) -> GreenResult<()> {
        let path = path.as_ref();
        let mut file = File::create(path).map_err(|err| {
            GreenError::InvalidData(format!("failed to create {}: {err}", path.display()))
        })?;
        self.surface.write_to_png(&mut file).map_err(|err| {
            GreenError::InvalidData(format!("failed to write {}: {err}", path.display()))
        })
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> GreenResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for polygon in &frame.polygons {
            let mut vertices = polygon.points.iter();
            if let Some(&(x, y)) = vertices.next() {
                context.move_to(x, y);
            }
            for &(x, y) in vertices {
                context.line_to(x, y);
            }
            context.close_path();

            apply_color(context, polygon.fill_color);
            if polygon.stroke_width > 0.0 {
                context
                    .fill_preserve()
                    .map_err(|err| map_backend_error("failed to fill polygon", err))?;
                apply_color(context, polygon.stroke_color);
                context.set_line_width(polygon.stroke_width);
                context
                    .stroke()
                    .map_err(|err| map_backend_error("failed to stroke polygon", err))?;
            } else {
                context
                    .fill()
                    .map_err(|err| map_backend_error("failed to fill polygon", err))?;
            }
            stats.polygons_drawn += 1;
        }

        for line in &frame.lines {
            apply_color(context, line.color);
            context.set_line_width(line.stroke_width);
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
            stats.lines_drawn += 1;
        }

        for circle in &frame.circles {
            context.new_sub_path();
            context.arc(circle.x, circle.y, circle.radius, 0.0, TAU);
            apply_color(context, circle.color);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill marker", err))?;
            stats.circles_drawn += 1;
        }

        for text in &frame.texts {
            let layout = pangocairo::functions::create_layout(context);
            let font_description =
                FontDescription::from_string(&format!("Sans {}", text.font_size_px));
            layout.set_font_description(Some(&font_description));
            layout.set_text(&text.text);

            let (text_width, _text_height) = layout.pixel_size();
            let x = match text.h_align {
                TextHAlign::Left => text.x,
                TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
                TextHAlign::Right => text.x - f64::from(text_width),
            };

            apply_color(context, text.color);
            context.move_to(x, text.y);
            pangocairo::functions::show_layout(context, &layout);
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> GreenResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> GreenResult<()> {
        self.render_with_context(context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> GreenError {
    GreenError::InvalidData(format!("{prefix}: {err}"))
}
