use ndarray::Array2;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{GreenError, GreenResult};

/// Sampled Green's-function values, shaped like the grid they came from.
pub type Field = Array2<f64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn validate(self) -> GreenResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(GreenError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Location of the point source.
///
/// Meaningful sources lie in the open unit square, but any finite pair is
/// accepted; outside the square the series is a periodic extension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SourcePoint {
    pub x: f64,
    pub y: f64,
}

impl SourcePoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// True when the source lies strictly inside `(0, 1) x (0, 1)`.
    #[must_use]
    pub fn is_interior(self) -> bool {
        self.x > 0.0 && self.x < 1.0 && self.y > 0.0 && self.y < 1.0
    }
}

impl Default for SourcePoint {
    fn default() -> Self {
        Self::new(0.25, 0.5)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Vertical extent of a rendered surface, always including the base plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZRange {
    pub min: f64,
    pub max: f64,
}

impl ZRange {
    /// Extent of `field` together with `z = 0`.
    ///
    /// A flat field (for example a source on the boundary) widens to `[-1, 1]`
    /// so the projection keeps a non-zero vertical span.
    #[must_use]
    pub fn of_field(field: &Field) -> Self {
        let finite = field.iter().copied().filter(|v| v.is_finite());
        let min = finite
            .clone()
            .map(OrderedFloat)
            .min()
            .map_or(0.0, |v| v.0)
            .min(0.0);
        let max = finite.map(OrderedFloat).max().map_or(0.0, |v| v.0).max(0.0);

        if max - min <= f64::EPSILON {
            return Self {
                min: -1.0,
                max: 1.0,
            };
        }
        Self { min, max }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn z_range_includes_base_plane() {
        let field = array![[-3.0, -1.0], [-2.0, -0.5]];
        let range = ZRange::of_field(&field);
        assert_eq!(range.min, -3.0);
        assert_eq!(range.max, 0.0);
    }

    #[test]
    fn flat_field_widens_to_unit_range() {
        let field = Field::zeros((4, 4));
        let range = ZRange::of_field(&field);
        assert_eq!(range, ZRange { min: -1.0, max: 1.0 });
    }

    #[test]
    fn interior_excludes_boundary() {
        assert!(SourcePoint::new(0.25, 0.5).is_interior());
        assert!(!SourcePoint::new(0.0, 0.5).is_interior());
        assert!(!SourcePoint::new(0.5, 1.0).is_interior());
        assert!(!SourcePoint::new(1.5, 0.5).is_interior());
    }
}
