use ordered_float::OrderedFloat;

use crate::core::{Camera, Grid, Point3, ProjectedPoint, ViewAngles, Viewport};
use crate::core::projection::TITLE_BAND_PX;
use crate::error::{GreenError, GreenResult};
use crate::render::{
    CirclePrimitive, LinePrimitive, PolygonPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::{MarkerShape, SurfaceScene, SurfaceStyle};

const TICK_OFFSET: f64 = 0.08;
const AXIS_NAME_OFFSET: f64 = 0.2;
const Z_LABEL_GAP_PX: f64 = 8.0;

struct SurfaceCell {
    polygon: PolygonPrimitive,
    depth: f64,
}

/// Projects `scene` over `grid` into pixel-space primitives.
///
/// Surface cells are depth-sorted back to front so backends can paint them
/// in order; overlays go on top.
pub fn build_surface_frame(
    grid: &Grid,
    scene: &SurfaceScene,
    viewport: Viewport,
    view: ViewAngles,
    style: &SurfaceStyle,
) -> GreenResult<RenderFrame> {
    if scene.field.dim() != grid.shape() {
        return Err(GreenError::InvalidGrid(format!(
            "field shape {:?} does not match grid shape {:?}",
            scene.field.dim(),
            grid.shape()
        )));
    }

    let camera = Camera::new(viewport, view, scene.z_range)?;
    let z_min = scene.z_range.min;
    let mut frame = RenderFrame::new(viewport);

    let floor = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]
        .map(|(x, y)| camera.project(Point3::new(x, y, z_min)));
    frame.polygons.push(PolygonPrimitive::new(
        floor.iter().map(|p| (p.x, p.y)),
        style.floor_color,
        style.floor_edge_color,
        1.0,
    ));

    let mut cells = surface_cells(grid, scene, &camera, style);
    cells.sort_by_key(|cell| OrderedFloat(cell.depth));
    frame
        .polygons
        .extend(cells.into_iter().map(|cell| cell.polygon));

    for overlay in &scene.overlays {
        let projected: Vec<ProjectedPoint> = overlay
            .points
            .iter()
            .map(|point| camera.project(*point))
            .collect();
        for pair in projected.windows(2) {
            frame.lines.push(LinePrimitive::new(
                pair[0].x,
                pair[0].y,
                pair[1].x,
                pair[1].y,
                overlay.style.line_width,
                overlay.style.color,
            ));
        }
        if overlay.style.marker == MarkerShape::Circle {
            for point in &projected {
                frame.circles.push(CirclePrimitive::new(
                    point.x,
                    point.y,
                    overlay.style.marker_size_px / 2.0,
                    overlay.style.color,
                ));
            }
        }
    }

    append_axis_texts(&mut frame, scene, &camera, style);
    frame.texts.push(TextPrimitive::new(
        scene.title.clone(),
        f64::from(viewport.width) / 2.0,
        (TITLE_BAND_PX - style.title_font_size_px * 1.5).max(0.0),
        style.title_font_size_px,
        style.label_color,
        TextHAlign::Center,
    ));

    Ok(frame)
}

fn surface_cells(
    grid: &Grid,
    scene: &SurfaceScene,
    camera: &Camera,
    style: &SurfaceStyle,
) -> Vec<SurfaceCell> {
    let (rows, cols) = grid.shape();
    let z_range = scene.z_range;
    let nodes = ndarray::Zip::from(grid.x())
        .and(grid.y())
        .and(&scene.field)
        .map_collect(|&x, &y, &z| camera.project(Point3::new(x, y, z)));

    let mut cells = Vec::with_capacity(rows.saturating_sub(1) * cols.saturating_sub(1));
    for row in 0..rows.saturating_sub(1) {
        for col in 0..cols.saturating_sub(1) {
            let corners = [
                (row, col),
                (row, col + 1),
                (row + 1, col + 1),
                (row + 1, col),
            ];
            let depth = corners.iter().map(|&idx| nodes[idx].depth).sum::<f64>() / 4.0;
            let mean_z = corners.iter().map(|&idx| scene.field[idx]).sum::<f64>() / 4.0;
            let shade = (mean_z - z_range.min) / z_range.span();

            cells.push(SurfaceCell {
                polygon: PolygonPrimitive::new(
                    corners.iter().map(|&idx| (nodes[idx].x, nodes[idx].y)),
                    style.surface_low_color.lerp(style.surface_high_color, shade),
                    style.surface_edge_color,
                    style.surface_edge_width,
                ),
                depth,
            });
        }
    }
    cells
}

fn append_axis_texts(
    frame: &mut RenderFrame,
    scene: &SurfaceScene,
    camera: &Camera,
    style: &SurfaceStyle,
) {
    let z_min = scene.z_range.min;
    let z_max = scene.z_range.max;
    let size = style.label_font_size_px;
    let color = style.label_color;
    let mut label = |text: String, at: ProjectedPoint, dx: f64, h_align: TextHAlign| {
        frame.texts.push(TextPrimitive::new(
            text,
            at.x + dx,
            at.y - size / 2.0,
            size,
            color,
            h_align,
        ));
    };

    // x ticks run along the y = 0 edge, y ticks along the x = 1 edge.
    for x in [0.0, 1.0] {
        let at = camera.project(Point3::new(x, -TICK_OFFSET, z_min));
        label(format_tick(x), at, 0.0, TextHAlign::Center);
    }
    for y in [0.0, 1.0] {
        let at = camera.project(Point3::new(1.0 + TICK_OFFSET, y, z_min));
        label(format_tick(y), at, 0.0, TextHAlign::Center);
    }
    for z in [z_min, z_max] {
        let at = camera.project(Point3::new(0.0, 0.0, z));
        label(format!("{z:.3}"), at, -Z_LABEL_GAP_PX, TextHAlign::Right);
    }

    let [x_name, y_name, z_name] = &scene.axis_labels;
    let at = camera.project(Point3::new(0.5, -AXIS_NAME_OFFSET, z_min));
    label(x_name.clone(), at, 0.0, TextHAlign::Center);
    let at = camera.project(Point3::new(1.0 + AXIS_NAME_OFFSET, 0.5, z_min));
    label(y_name.clone(), at, 0.0, TextHAlign::Center);
    let at = camera.project(Point3::new(0.0, 0.0, (z_min + z_max) / 2.0));
    label(z_name.clone(), at, -6.0 * Z_LABEL_GAP_PX, TextHAlign::Right);
}

fn format_tick(value: f64) -> String {
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PresentationState;

    #[test]
    fn rejects_field_grid_mismatch() {
        let grid = Grid::uniform(6).expect("grid");
        let other = Grid::uniform(5).expect("grid");
        let style = SurfaceStyle::default();
        let scene = SurfaceScene::build(&other, &PresentationState::default(), &style);

        let err = build_surface_frame(
            &grid,
            &scene,
            Viewport::new(400, 300),
            ViewAngles::default(),
            &style,
        )
        .expect_err("shape mismatch");
        assert!(matches!(err, GreenError::InvalidGrid(_)));
    }

    #[test]
    fn cells_are_painted_back_to_front() {
        let grid = Grid::uniform(8).expect("grid");
        let style = SurfaceStyle::default();
        let scene = SurfaceScene::build(&grid, &PresentationState::default(), &style);
        let camera = Camera::new(Viewport::new(400, 300), ViewAngles::default(), scene.z_range)
            .expect("camera");

        let mut cells = surface_cells(&grid, &scene, &camera, &style);
        assert_eq!(cells.len(), 49);
        cells.sort_by_key(|cell| OrderedFloat(cell.depth));
        assert!(cells.windows(2).all(|w| w[0].depth <= w[1].depth));
    }
}
