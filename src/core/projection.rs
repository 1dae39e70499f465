use serde::{Deserialize, Serialize};

use super::scale::LinearScale;
use super::types::{Point3, Viewport, ZRange};
use crate::error::{GreenError, GreenResult};

/// Vertical box extent relative to the unit-square base.
const Z_ASPECT: f64 = 0.75;
/// Pixels reserved above the plot for the title.
pub const TITLE_BAND_PX: f64 = 36.0;
const FILL_RATIO: f64 = 0.9;

/// Orientation of the orthographic 3D view, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewAngles {
    pub elevation_deg: f64,
    pub azimuth_deg: f64,
}

impl ViewAngles {
    pub fn validate(self) -> GreenResult<()> {
        if !self.elevation_deg.is_finite() || !self.azimuth_deg.is_finite() {
            return Err(GreenError::InvalidData(
                "view angles must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for ViewAngles {
    fn default() -> Self {
        Self {
            elevation_deg: 30.0,
            azimuth_deg: -60.0,
        }
    }
}

/// Pixel position plus a depth key; larger depth is closer to the viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
}

/// Projects the `[0,1] x [0,1] x z_range` data box onto a viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    z_scale: LinearScale,
    right: [f64; 3],
    up: [f64; 3],
    toward_viewer: [f64; 3],
    center_x: f64,
    center_y: f64,
    pixels_per_unit: f64,
}

impl Camera {
    pub fn new(viewport: Viewport, view: ViewAngles, z_range: ZRange) -> GreenResult<Self> {
        viewport.validate()?;
        view.validate()?;
        let z_scale = LinearScale::new(z_range.min, z_range.max)?;

        let (sin_a, cos_a) = view.azimuth_deg.to_radians().sin_cos();
        let (sin_e, cos_e) = view.elevation_deg.to_radians().sin_cos();

        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        let plot_height = (height - TITLE_BAND_PX).max(1.0);
        let half_diagonal = (0.5f64.powi(2) * 2.0 + (0.5 * Z_ASPECT).powi(2)).sqrt();

        Ok(Self {
            z_scale,
            right: [-sin_a, cos_a, 0.0],
            up: [-sin_e * cos_a, -sin_e * sin_a, cos_e],
            toward_viewer: [cos_e * cos_a, cos_e * sin_a, sin_e],
            center_x: width / 2.0,
            center_y: TITLE_BAND_PX.min(height) + plot_height / 2.0,
            pixels_per_unit: FILL_RATIO * width.min(plot_height) / (2.0 * half_diagonal),
        })
    }

    #[must_use]
    pub fn project(&self, point: Point3) -> ProjectedPoint {
        let boxed = [
            point.x - 0.5,
            point.y - 0.5,
            (self.z_scale.normalize(point.z) - 0.5) * Z_ASPECT,
        ];
        let screen_x = dot(boxed, self.right);
        let screen_y = dot(boxed, self.up);

        ProjectedPoint {
            x: self.center_x + screen_x * self.pixels_per_unit,
            y: self.center_y - screen_y * self.pixels_per_unit,
            depth: dot(boxed, self.toward_viewer),
        }
    }
}

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn camera() -> Camera {
        Camera::new(
            Viewport::new(800, 636),
            ViewAngles::default(),
            ZRange { min: -1.0, max: 1.0 },
        )
        .expect("camera")
    }

    #[test]
    fn box_center_lands_on_plot_center() {
        let projected = camera().project(Point3::new(0.5, 0.5, 0.0));
        assert_relative_eq!(projected.x, 400.0, epsilon = 1e-9);
        assert_relative_eq!(projected.y, 36.0 + 300.0, epsilon = 1e-9);
        assert_relative_eq!(projected.depth, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn higher_z_projects_upwards() {
        let camera = camera();
        let low = camera.project(Point3::new(0.5, 0.5, -1.0));
        let high = camera.project(Point3::new(0.5, 0.5, 1.0));
        assert!(high.y < low.y);
    }

    #[test]
    fn projected_box_stays_inside_viewport() {
        let camera = camera();
        for &x in &[0.0, 1.0] {
            for &y in &[0.0, 1.0] {
                for &z in &[-1.0, 1.0] {
                    let p = camera.project(Point3::new(x, y, z));
                    assert!((0.0..=800.0).contains(&p.x));
                    assert!((0.0..=636.0).contains(&p.y));
                }
            }
        }
    }

    #[test]
    fn rejects_zero_viewport() {
        let err = Camera::new(
            Viewport::new(0, 10),
            ViewAngles::default(),
            ZRange { min: -1.0, max: 1.0 },
        )
        .expect_err("zero width");
        assert!(matches!(err, GreenError::InvalidViewport { .. }));
    }
}
