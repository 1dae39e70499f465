use smallvec::{SmallVec, smallvec};

use crate::core::{Field, Grid, Point3, ZRange, evaluate};
use crate::render::Color;

use super::{PresentationState, Readout, SurfaceStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerShape {
    None,
    Circle,
}

/// Style attributes attached to one overlay polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    pub color: Color,
    pub line_width: f64,
    pub marker: MarkerShape,
    pub marker_size_px: f64,
}

/// 3D point sequence drawn over the surface in data coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayPolyline {
    pub points: SmallVec<[Point3; 2]>,
    pub style: OverlayStyle,
}

/// Everything the plotting side needs for one draw: the evaluated surface
/// over the session grid, source overlays, and axis/title text.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceScene {
    pub field: Field,
    pub z_range: ZRange,
    pub overlays: Vec<OverlayPolyline>,
    pub axis_labels: [String; 3],
    pub title: String,
}

impl SurfaceScene {
    /// Re-runs the evaluator over `grid` and rebuilds every overlay.
    ///
    /// Overlays anchored at a source coordinate outside `[0, 1]` fall outside
    /// the plot box and are left out.
    #[must_use]
    pub fn build(grid: &Grid, state: &PresentationState, style: &SurfaceStyle) -> Self {
        let source = state.source;
        let field = evaluate(grid, source.x, source.y, state.order.get());
        let z_range = ZRange::of_field(&field);

        let line = OverlayStyle {
            color: style.overlay_color,
            line_width: style.overlay_line_width,
            marker: MarkerShape::None,
            marker_size_px: style.marker_size_px,
        };
        let marker = OverlayStyle {
            marker: MarkerShape::Circle,
            ..line
        };

        let x_inside = within_base(source.x);
        let y_inside = within_base(source.y);
        let mut overlays = Vec::with_capacity(4);
        if x_inside && y_inside {
            overlays.push(OverlayPolyline {
                points: smallvec![Point3::new(source.x, source.y, 0.0)],
                style: marker,
            });
        }
        if x_inside {
            overlays.push(OverlayPolyline {
                points: smallvec![
                    Point3::new(source.x, 0.0, 0.0),
                    Point3::new(source.x, 1.0, 0.0)
                ],
                style: line,
            });
        }
        if y_inside {
            overlays.push(OverlayPolyline {
                points: smallvec![
                    Point3::new(0.0, source.y, 0.0),
                    Point3::new(1.0, source.y, 0.0)
                ],
                style: line,
            });
        }
        if x_inside && y_inside {
            overlays.push(OverlayPolyline {
                points: smallvec![
                    Point3::new(source.x, source.y, z_range.min),
                    Point3::new(source.x, source.y, z_range.max)
                ],
                style: line,
            });
        }

        Self {
            field,
            z_range,
            overlays,
            axis_labels: ["x".to_owned(), "y".to_owned(), "z".to_owned()],
            title: Readout::new(state).order,
        }
    }
}

fn within_base(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SourcePoint, TruncationOrder};

    #[test]
    fn overlays_track_source_and_z_range() {
        let grid = Grid::uniform(11).expect("grid");
        let state = PresentationState::new(
            TruncationOrder::new(5).expect("order"),
            SourcePoint::new(0.3, 0.6),
        );
        let scene = SurfaceScene::build(&grid, &state, &SurfaceStyle::default());

        assert_eq!(scene.overlays.len(), 4);
        assert_eq!(scene.overlays[0].style.marker, MarkerShape::Circle);
        assert_eq!(scene.overlays[0].points[0], Point3::new(0.3, 0.6, 0.0));

        let vertical = &scene.overlays[3];
        assert_eq!(vertical.points[0].z, scene.z_range.min);
        assert_eq!(vertical.points[1].z, scene.z_range.max);
        assert_eq!(scene.title, "N = 5");
    }

    #[test]
    fn overlays_outside_the_base_square_are_dropped() {
        let grid = Grid::uniform(6).expect("grid");
        let style = SurfaceStyle::default();

        let state = PresentationState::new(
            TruncationOrder::default(),
            SourcePoint::new(1e307, 0.5),
        );
        let scene = SurfaceScene::build(&grid, &state, &style);
        assert_eq!(scene.overlays.len(), 1);
        assert!(scene.overlays[0].points.iter().all(|p| p.x == 0.0 || p.x == 1.0));

        let state = PresentationState::new(
            TruncationOrder::default(),
            SourcePoint::new(3.0, -2.0),
        );
        let scene = SurfaceScene::build(&grid, &state, &style);
        assert!(scene.overlays.is_empty());
    }
}
