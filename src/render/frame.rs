use crate::core::Viewport;
use crate::error::{GreenError, GreenResult};
use crate::render::{CirclePrimitive, LinePrimitive, PolygonPrimitive, TextPrimitive};

/// Backend-agnostic scene for one surface draw pass.
///
/// Backends paint polygons first (in stored order), then lines, circles and
/// texts, so polygon order carries the depth sort.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub polygons: Vec<PolygonPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            polygons: Vec::new(),
            lines: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_polygon(mut self, polygon: PolygonPrimitive) -> Self {
        self.polygons.push(polygon);
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_circle(mut self, circle: CirclePrimitive) -> Self {
        self.circles.push(circle);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn validate(&self) -> GreenResult<()> {
        if !self.viewport.is_valid() {
            return Err(GreenError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for polygon in &self.polygons {
            polygon.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
            && self.lines.is_empty()
            && self.circles.is_empty()
            && self.texts.is_empty()
    }
}
