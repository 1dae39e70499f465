use crate::error::GreenResult;
use crate::render::{RenderFrame, Renderer};

/// Headless renderer for tests and non-GUI sessions.
///
/// Frames are validated and counted but never drawn.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_polygon_count: usize,
    pub last_line_count: usize,
    pub last_circle_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> GreenResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_polygon_count = frame.polygons.len();
        self.last_line_count = frame.lines.len();
        self.last_circle_count = frame.circles.len();
        self.last_text_count = frame.texts.len();
        Ok(())
    }
}
