use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_GRID_RESOLUTION, SourcePoint, TruncationOrder, ViewAngles, Viewport};
use crate::error::{GreenError, GreenResult};
use crate::render::Color;

/// Colors and sizes used when turning a scene into draw primitives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceStyle {
    /// Surface color at the bottom of the z-range.
    pub surface_low_color: Color,
    /// Surface color at the top of the z-range.
    pub surface_high_color: Color,
    pub surface_edge_color: Color,
    pub surface_edge_width: f64,
    pub floor_color: Color,
    pub floor_edge_color: Color,
    pub overlay_color: Color,
    pub overlay_line_width: f64,
    /// Marker diameter in pixels.
    pub marker_size_px: f64,
    pub label_color: Color,
    pub label_font_size_px: f64,
    pub title_font_size_px: f64,
}

impl SurfaceStyle {
    pub fn validate(self) -> GreenResult<()> {
        for color in [
            self.surface_low_color,
            self.surface_high_color,
            self.surface_edge_color,
            self.floor_color,
            self.floor_edge_color,
            self.overlay_color,
            self.label_color,
        ] {
            color.validate()?;
        }
        for (name, value) in [
            ("overlay_line_width", self.overlay_line_width),
            ("marker_size_px", self.marker_size_px),
            ("label_font_size_px", self.label_font_size_px),
            ("title_font_size_px", self.title_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GreenError::InvalidData(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }
        if !self.surface_edge_width.is_finite() || self.surface_edge_width < 0.0 {
            return Err(GreenError::InvalidData(
                "style `surface_edge_width` must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for SurfaceStyle {
    fn default() -> Self {
        Self {
            surface_low_color: Color::rgb(0.07, 0.27, 0.45),
            surface_high_color: Color::rgb(0.55, 0.75, 0.93),
            surface_edge_color: Color::rgba(0.05, 0.15, 0.30, 0.35),
            surface_edge_width: 0.5,
            floor_color: Color::rgb(0.94, 0.94, 0.95),
            floor_edge_color: Color::rgb(0.70, 0.72, 0.76),
            overlay_color: Color::rgb(1.0, 0.0, 0.0),
            overlay_line_width: 1.0,
            marker_size_px: 8.0,
            label_color: Color::rgb(0.10, 0.12, 0.16),
            label_font_size_px: 10.0,
            title_font_size_px: 13.0,
        }
    }
}

/// Session bootstrap configuration.
///
/// Serializable so hosts can keep a viewer setup in JSON. Every field but the
/// viewport has a default matching the stock viewer: order 2, source
/// `(0.25, 0.5)`, 50x50 grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub viewport: Viewport,
    #[serde(default = "default_grid_resolution")]
    pub grid_resolution: usize,
    #[serde(default)]
    pub initial_order: TruncationOrder,
    #[serde(default)]
    pub initial_source: SourcePoint,
    #[serde(default)]
    pub view_angles: ViewAngles,
    #[serde(default)]
    pub style: SurfaceStyle,
}

impl SessionConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            grid_resolution: default_grid_resolution(),
            initial_order: TruncationOrder::default(),
            initial_source: SourcePoint::default(),
            view_angles: ViewAngles::default(),
            style: SurfaceStyle::default(),
        }
    }

    #[must_use]
    pub fn with_grid_resolution(mut self, resolution: usize) -> Self {
        self.grid_resolution = resolution;
        self
    }

    #[must_use]
    pub fn with_order(mut self, order: TruncationOrder) -> Self {
        self.initial_order = order;
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: SourcePoint) -> Self {
        self.initial_source = source;
        self
    }

    #[must_use]
    pub fn with_view_angles(mut self, view_angles: ViewAngles) -> Self {
        self.view_angles = view_angles;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: SurfaceStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(&self) -> GreenResult<()> {
        self.viewport.validate()?;
        if self.grid_resolution < 2 {
            return Err(GreenError::InvalidGrid(format!(
                "grid resolution must be >= 2, got {}",
                self.grid_resolution
            )));
        }
        if !self.initial_source.is_finite() {
            return Err(GreenError::InvalidData(
                "initial source must be finite".to_owned(),
            ));
        }
        self.view_angles.validate()?;
        self.style.validate()
    }

    pub fn from_json_str(json: &str) -> GreenResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| GreenError::InvalidData(format!("failed to parse session config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> GreenResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            GreenError::InvalidData(format!("failed to serialize session config: {e}"))
        })
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(Viewport::new(800, 600))
    }
}

fn default_grid_resolution() -> usize {
    DEFAULT_GRID_RESOLUTION
}
