use green_rs::api::{GreenSession, SessionConfig};
use green_rs::core::{SourcePoint, Viewport};
use green_rs::render::NullRenderer;

#[test]
fn default_session_frame_contains_surface_overlays_and_labels() {
    let mut session = GreenSession::new(NullRenderer::default(), SessionConfig::default())
        .expect("session init");
    session.render().expect("render");

    let renderer = session.renderer();
    assert_eq!(renderer.frames_rendered, 1);
    // Floor pane plus one quad per grid cell.
    assert_eq!(renderer.last_polygon_count, 1 + 49 * 49);
    // x = x0 line, y = y0 line, vertical line through the source.
    assert_eq!(renderer.last_line_count, 3);
    assert_eq!(renderer.last_circle_count, 1);
    // Six tick labels, three axis names, one title.
    assert_eq!(renderer.last_text_count, 10);
}

#[test]
fn frame_is_valid_and_titled_with_order() {
    let session = GreenSession::new(NullRenderer::default(), SessionConfig::default())
        .expect("session init");
    let frame = session.build_render_frame().expect("frame");

    frame.validate().expect("valid frame");
    assert_eq!(frame.viewport, Viewport::new(800, 600));
    assert!(frame.texts.iter().any(|text| text.text == "N = 2"));
    for axis in ["x", "y", "z"] {
        assert!(frame.texts.iter().any(|text| text.text == axis));
    }
}

#[test]
fn vertical_reference_line_spans_z_range() {
    let session = GreenSession::new(NullRenderer::default(), SessionConfig::default())
        .expect("session init");
    let scene = session.scene();
    let vertical = &scene.overlays[3];

    assert_eq!(vertical.points.len(), 2);
    assert_eq!(vertical.points[0].x, 0.25);
    assert_eq!(vertical.points[0].y, 0.5);
    assert_eq!(vertical.points[0].z, scene.z_range.min);
    assert_eq!(vertical.points[1].z, scene.z_range.max);
    assert!(scene.z_range.min < 0.0);
    assert!(scene.z_range.max >= 0.0);
}

#[test]
fn boundary_source_renders_flat_surface() {
    let config = SessionConfig::default()
        .with_grid_resolution(10)
        .with_source(SourcePoint::new(0.0, 0.5));
    let mut session = GreenSession::new(NullRenderer::default(), config).expect("session init");

    assert!(session.field().iter().all(|value| *value == 0.0));
    assert_eq!(session.scene().z_range.min, -1.0);
    assert_eq!(session.scene().z_range.max, 1.0);
    session.render().expect("flat field still renders");
}

#[test]
fn resizing_viewport_keeps_field() {
    let mut session = GreenSession::new(NullRenderer::default(), SessionConfig::default())
        .expect("session init");
    let generation = session.generation();

    session
        .set_viewport(Viewport::new(1024, 700))
        .expect("resize");
    let frame = session.build_render_frame().expect("frame");

    assert_eq!(frame.viewport, Viewport::new(1024, 700));
    assert_eq!(session.generation(), generation);
    assert!(session.set_viewport(Viewport::new(0, 700)).is_err());
}
